use crate::notifications::NotificationLevel;
use tokio::sync::broadcast;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    pub title: String,
    pub message: String,
    pub level: NotificationLevel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusEvent {
    /// Sets the palette's open state (it does not toggle). `query` seeds the
    /// input when opening.
    OpenPalette { query: Option<String>, open: bool },
    Notify(NotificationEvent),
}

impl BusEvent {
    #[must_use]
    pub fn open_palette(query: Option<String>) -> Self {
        BusEvent::OpenPalette { query, open: true }
    }

    #[must_use]
    pub fn notify(title: impl Into<String>, message: impl Into<String>, level: NotificationLevel) -> Self {
        BusEvent::Notify(NotificationEvent {
            title: title.into(),
            message: message.into(),
            level,
        })
    }
}

/// Cross-component signalling. Cloned into whoever needs to publish.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<BusEvent>,
}

impl EventBus {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn publish(&self, event: BusEvent) {
        // No subscribers is fine: the event is simply dropped.
        if self.tx.send(event).is_err() {
            debug!("Bus event published with no subscribers");
        }
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<BusEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscribers_receive_in_order() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        bus.publish(BusEvent::open_palette(Some(">".to_string())));
        bus.publish(BusEvent::notify("Done", "ok", NotificationLevel::Success));

        assert_eq!(
            rx.recv().await.unwrap(),
            BusEvent::OpenPalette {
                query: Some(">".to_string()),
                open: true
            }
        );
        assert!(matches!(rx.recv().await.unwrap(), BusEvent::Notify(n) if n.title == "Done"));
    }

    #[test]
    fn test_publish_without_subscribers_does_not_panic() {
        let bus = EventBus::new(4);
        bus.publish(BusEvent::open_palette(None));
    }
}
