use crate::app::{action::Action, command::Command};
use crate::domain::admin::AdminFacade;
use crate::events::{BusEvent, EventBus};
use crate::notifications::NotificationLevel;
use crate::palette::Debouncer;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Everything a command needs to run outside the reducer.
#[derive(Clone)]
pub struct Effects {
    pub adapter: Arc<dyn AdminFacade>,
    pub tx: mpsc::Sender<Action>,
    pub bus: EventBus,
    pub search_debouncer: Debouncer<Action>,
}

pub fn handle_command(command: Command, effects: &Effects) {
    match command {
        Command::ScheduleSearch { seq, query } => {
            effects.search_debouncer.push(Action::RunSearch { seq, query });
        }
        Command::CancelSearch => effects.search_debouncer.cancel(),
        Command::Search { seq, query } => {
            let adapter = effects.adapter.clone();
            let tx = effects.tx.clone();
            tokio::spawn(async move {
                let outcome = adapter.search(query).await;
                let _ = tx.send(Action::SearchCompleted { seq, outcome }).await;
            });
        }
        Command::RunScheduler => {
            let adapter = effects.adapter.clone();
            let tx = effects.tx.clone();
            let bus = effects.bus.clone();
            tokio::spawn(async move {
                let _ = tx
                    .send(Action::OperationStarted("Running publish scheduler...".to_string()))
                    .await;
                let result = match adapter.run_scheduler().await {
                    Ok(report) => {
                        let summary = report.summary();
                        info!(published = report.published, "Scheduler run finished");
                        bus.publish(BusEvent::notify(
                            "Scheduler finished",
                            summary.clone(),
                            NotificationLevel::Success,
                        ));
                        Ok(summary)
                    }
                    Err(e) => {
                        warn!(error = %e, "Scheduler run failed");
                        bus.publish(BusEvent::notify(
                            "Scheduler failed",
                            e.to_string(),
                            NotificationLevel::Error,
                        ));
                        Err(format!("Scheduler failed: {e}"))
                    }
                };
                let _ = tx.send(Action::OperationCompleted(result)).await;
            });
        }
        Command::Publish(event) => effects.bus.publish(event),
    }
}
