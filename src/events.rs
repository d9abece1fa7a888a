//! Outcome notification channel
//!
//! Replaces process-global notification with an injectable broadcast channel
//! the coordinator holds by reference, so consumers and tests subscribe to an
//! explicit object instead of hidden global state.

use tokio::sync::broadcast;

use crate::ceremony::AuthenticationOutcome;

/// Events published once per settled ceremony.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// A ceremony completed and the server accepted the credential.
    /// Carries the classified outcome for subscribers that care which of the
    /// three success shapes it was.
    UserSignedIn(AuthenticationOutcome),
    /// The user dismissed the modal authorization prompt mid-ceremony.
    ModalCeremonyCanceled,
}

const DEFAULT_CAPACITY: usize = 16;

/// Multi-subscriber, fire-and-forget event channel.
///
/// Delivery is at-most-once per ceremony per signal. Publishing with no
/// subscribers is not an error; there is no acknowledgement and no
/// backpressure. Cloning yields a handle onto the same channel.
#[derive(Clone)]
pub struct OutcomeNotifier {
    sender: broadcast::Sender<AuthEvent>,
}

impl OutcomeNotifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to ceremony outcome events. Subscribers only see events
    /// published after they subscribe.
    pub fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.sender.subscribe()
    }

    pub(crate) fn publish(&self, event: AuthEvent) {
        tracing::debug!("Publishing outcome event: {:?}", event);
        // A send error only means nobody is subscribed right now.
        let _ = self.sender.send(event);
    }
}

impl Default for OutcomeNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ceremony::AuthenticationOutcome;

    #[tokio::test]
    async fn test_publish_reaches_every_subscriber() {
        let notifier = OutcomeNotifier::default();
        let mut first = notifier.subscribe();
        let mut second = notifier.subscribe();

        notifier.publish(AuthEvent::ModalCeremonyCanceled);

        assert_eq!(first.recv().await.unwrap(), AuthEvent::ModalCeremonyCanceled);
        assert_eq!(
            second.recv().await.unwrap(),
            AuthEvent::ModalCeremonyCanceled
        );
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_fire_and_forget() {
        let notifier = OutcomeNotifier::default();
        // Must not panic or block.
        notifier.publish(AuthEvent::UserSignedIn(
            AuthenticationOutcome::PasswordVerified("alice".to_string()),
        ));
    }

    #[tokio::test]
    async fn test_subscriber_only_sees_events_after_subscribing() {
        let notifier = OutcomeNotifier::default();
        notifier.publish(AuthEvent::ModalCeremonyCanceled);

        let mut late = notifier.subscribe();
        notifier.publish(AuthEvent::UserSignedIn(
            AuthenticationOutcome::PasskeyAsserted("cred-1".to_string()),
        ));

        assert_eq!(
            late.recv().await.unwrap(),
            AuthEvent::UserSignedIn(AuthenticationOutcome::PasskeyAsserted("cred-1".to_string()))
        );
    }
}
