/// Which ceremony is being performed.
///
/// The kind determines which request descriptors are built and which result
/// variants are legal: sign-in may resolve to an assertion or a password,
/// sign-up only to a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CeremonyKind {
    SignInWithPasskeyOrPassword,
    SignUpWithPasskey,
}

/// Lifecycle of a ceremony.
///
/// `Idle -> InFlight -> {Completed, Failed, Canceled}`. Terminal states reset
/// to `Idle` immediately; they are observable through the notification
/// side-effect, not as a queryable coordinator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CeremonyState {
    Idle,
    InFlight,
    Completed,
    Failed,
    Canceled,
}

impl CeremonyState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Canceled)
    }
}

/// The classified result of a successful ceremony.
///
/// Produced exactly once per successful ceremony and handed to the
/// `OutcomeNotifier`; subscribers receive it read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationOutcome {
    /// A new passkey was registered
    PasskeyRegistered(String),
    /// An existing passkey was used to sign in
    PasskeyAsserted(String),
    /// A stored password was provided for the named user
    PasswordVerified(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!CeremonyState::Idle.is_terminal());
        assert!(!CeremonyState::InFlight.is_terminal());
        assert!(CeremonyState::Completed.is_terminal());
        assert!(CeremonyState::Failed.is_terminal());
        assert!(CeremonyState::Canceled.is_terminal());
    }
}
