use std::time::Duration;
use tokio::sync::mpsc;

pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(250);

/// Handle to a debouncing task. Each `push` replaces whatever is pending and
/// restarts the quiet period; only a value that survives a full quiet period
/// is forwarded to the output channel.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    inbox: mpsc::UnboundedSender<Option<T>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Spawns the task on the current tokio runtime. It exits once every
    /// handle is dropped or the output channel closes.
    pub fn spawn(delay: Duration, out: mpsc::Sender<T>) -> Self {
        // Unbounded so a push from the event loop never waits on this task
        let (inbox, mut rx) = mpsc::unbounded_channel::<Option<T>>();

        tokio::spawn(async move {
            let mut pending: Option<T> = None;

            loop {
                if let Some(value) = pending.take() {
                    tokio::select! {
                        msg = rx.recv() => match msg {
                            Some(next) => pending = next,
                            None => break,
                        },
                        () = tokio::time::sleep(delay) => {
                            if out.send(value).await.is_err() {
                                break;
                            }
                        }
                    }
                } else {
                    match rx.recv().await {
                        Some(next) => pending = next,
                        None => break,
                    }
                }
            }
        });

        Self { inbox }
    }

    pub fn push(&self, value: T) {
        let _ = self.inbox.send(Some(value));
    }

    /// Drops the pending value, if any.
    pub fn cancel(&self) {
        let _ = self.inbox.send(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_only_last_value_fires() {
        let (tx, mut rx) = mpsc::channel(8);
        let debouncer = Debouncer::spawn(Duration::from_millis(250), tx);

        debouncer.push("abc");
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.push("abcd");

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(rx.try_recv(), Ok("abcd"));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_values_each_fire() {
        let (tx, mut rx) = mpsc::channel(8);
        let debouncer = Debouncer::spawn(Duration::from_millis(250), tx);

        debouncer.push(1);
        tokio::time::sleep(Duration::from_millis(300)).await;
        debouncer.push(2);
        tokio::time::sleep(Duration::from_millis(300)).await;

        assert_eq!(rx.try_recv(), Ok(1));
        assert_eq!(rx.try_recv(), Ok(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending() {
        let (tx, mut rx) = mpsc::channel(8);
        let debouncer = Debouncer::spawn(Duration::from_millis(250), tx);

        debouncer.push(1);
        debouncer.cancel();
        tokio::time::sleep(Duration::from_millis(500)).await;

        assert!(rx.try_recv().is_err());
    }
}
