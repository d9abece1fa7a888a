use super::errors::ChallengeError;

/// Opaque, single-use challenge issued by the relying-party server.
///
/// A challenge is created per ceremony invocation, consumed immediately by
/// request construction, and never persisted or reused. The only client-side
/// validation is that it is non-empty; freshness and uniqueness are the
/// server's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge(Vec<u8>);

impl Challenge {
    /// Wrap server-issued challenge bytes, rejecting an empty sequence.
    pub fn new(bytes: Vec<u8>) -> Result<Self, ChallengeError> {
        if bytes.is_empty() {
            return Err(ChallengeError::Empty);
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_challenge_accepts_opaque_bytes() {
        let challenge = Challenge::new(vec![0xAB, 0xCD]).unwrap();
        assert_eq!(challenge.as_bytes(), &[0xAB, 0xCD]);
    }

    #[test]
    fn test_challenge_rejects_empty_bytes() {
        match Challenge::new(Vec::new()) {
            Err(ChallengeError::Empty) => {}
            other => panic!("Expected Empty error, got {other:?}"),
        }
    }
}
