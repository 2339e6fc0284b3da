use std::sync::{Mutex, PoisonError};

use tokio::sync::broadcast;

use crate::domain::TreeChanged;

/// Broadcast channel for tree-change notifications.
///
/// Disposing drops the sender: existing receivers see the channel close and
/// later subscribers get an already-closed receiver.
#[derive(Debug)]
pub struct ChangeNotifier {
    sender: Mutex<Option<broadcast::Sender<TreeChanged>>>,
}

impl ChangeNotifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender: Mutex::new(Some(sender)),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<TreeChanged> {
        let sender = self.sender.lock().unwrap_or_else(PoisonError::into_inner);
        match sender.as_ref() {
            Some(sender) => sender.subscribe(),
            None => {
                let (closed, receiver) = broadcast::channel(1);
                drop(closed);
                receiver
            }
        }
    }

    /// Send `event`. Returns how many receivers got it (0 once disposed).
    pub fn publish(&self, event: TreeChanged) -> usize {
        let sender = self.sender.lock().unwrap_or_else(PoisonError::into_inner);
        sender
            .as_ref()
            .and_then(|s| s.send(event).ok())
            .unwrap_or(0)
    }

    pub fn dispose(&self) {
        self.sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }

    pub fn is_disposed(&self) -> bool {
        self.sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new(16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast::error::{RecvError, TryRecvError};

    #[tokio::test]
    async fn every_subscriber_receives_event() {
        let notifier = ChangeNotifier::default();
        let mut rx1 = notifier.subscribe();
        let mut rx2 = notifier.subscribe();

        assert_eq!(notifier.publish(TreeChanged { generation: 1 }), 2);

        assert_eq!(rx1.recv().await.unwrap().generation, 1);
        assert_eq!(rx2.recv().await.unwrap().generation, 1);
    }

    #[test]
    fn publish_without_subscribers_is_not_an_error() {
        let notifier = ChangeNotifier::default();
        assert_eq!(notifier.publish(TreeChanged { generation: 1 }), 0);
    }

    #[tokio::test]
    async fn dispose_closes_receivers() {
        let notifier = ChangeNotifier::default();
        let mut rx = notifier.subscribe();

        notifier.dispose();

        assert!(notifier.is_disposed());
        assert!(matches!(rx.recv().await, Err(RecvError::Closed)));
        assert_eq!(notifier.publish(TreeChanged { generation: 2 }), 0);
        assert!(matches!(
            notifier.subscribe().try_recv(),
            Err(TryRecvError::Closed)
        ));
    }
}
