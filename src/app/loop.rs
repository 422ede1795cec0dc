use crate::app::{
    action::Action,
    command::Command,
    features::admin::{self, Effects},
    input::map_event_to_action,
    reducer,
    state::AppState,
    ui,
};
use crate::domain::admin::AdminFacade;
use crate::events::{BusEvent, EventBus};
use crate::palette::{debounce::DEFAULT_SEARCH_DEBOUNCE, Debouncer};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::time::interval;
use tracing::{debug, info};

const TICK_RATE: Duration = Duration::from_millis(250);

/// Collaborators the loop needs beyond the state itself.
pub struct Runtime {
    pub adapter: Arc<dyn AdminFacade>,
    pub bus: EventBus,
    pub search_debounce: Duration,
    /// Published once the loop is listening, e.g. an `--search` flag.
    pub startup_events: Vec<BusEvent>,
}

impl Runtime {
    pub fn new(adapter: Arc<dyn AdminFacade>) -> Self {
        Self {
            adapter,
            bus: EventBus::default(),
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
            startup_events: Vec::new(),
        }
    }
}

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState,
    runtime: Runtime,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, runtime, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState,
    runtime: Runtime,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    let effects = Effects {
        adapter: runtime.adapter.clone(),
        tx: action_tx.clone(),
        bus: runtime.bus.clone(),
        search_debouncer: Debouncer::spawn(runtime.search_debounce, action_tx.clone()),
    };

    let mut bus_rx = runtime.bus.subscribe();
    for event in runtime.startup_events {
        runtime.bus.publish(event);
    }

    info!(api = %runtime.adapter.base_url(), "Event loop started");

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = match res {
                    Ok(e) => e,
                    Err(e) => return Err(e.into()),
                };
                map_event_to_action(event, &app_state)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),

            // Cross-component events
            res = bus_rx.recv() => match res {
                Ok(event) => Some(action_from_bus(event)),
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    debug!(skipped = n, "Event bus receiver lagged");
                    None
                }
                Err(broadcast::error::RecvError::Closed) => None,
            },
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if let Action::Quit = action {
                break;
            }

            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, &effects);
            }
        }
    }

    info!("Event loop finished");
    Ok(())
}

fn action_from_bus(event: BusEvent) -> Action {
    match event {
        BusEvent::OpenPalette { query, open } => Action::OpenPalette { query, open },
        BusEvent::Notify(n) => Action::NotificationReceived(n),
    }
}

pub(crate) fn handle_command(command: Command, effects: &Effects) {
    admin::handle_command(command, effects);
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
