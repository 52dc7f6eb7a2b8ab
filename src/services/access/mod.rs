// Access gate service
// Passphrase check guarding the announcement site

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Whether the current session has been let through the gate
///
/// Explicit state with pure transitions, so the surrounding shell can
/// persist or replay it however it likes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessState {
    pub authenticated: bool,
}

impl AccessState {
    /// State after a verified passphrase
    pub fn unlocked() -> Self {
        Self {
            authenticated: true,
        }
    }

    /// State after the session ends
    pub fn locked() -> Self {
        Self::default()
    }
}

/// SHA-256 hex digest of a passphrase, lowercase
pub fn digest_hex(passphrase: &str) -> String {
    let digest = Sha256::digest(passphrase.as_bytes());
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}

/// Compares entered passphrases against a configured digest
pub struct AccessGate {
    expected_digest: String,
}

impl AccessGate {
    pub fn new(expected_digest: impl Into<String>) -> Self {
        Self {
            expected_digest: expected_digest.into().to_lowercase(),
        }
    }

    /// True when the passphrase digests to the configured value
    pub fn verify(&self, passphrase: &str) -> bool {
        digest_hex(passphrase) == self.expected_digest
    }

    /// Attempt to unlock; an already-unlocked state stays unlocked
    pub fn try_unlock(&self, state: AccessState, passphrase: &str) -> AccessState {
        if state.authenticated {
            return state;
        }
        if self.verify(passphrase) {
            log::info!("Access gate unlocked");
            AccessState::unlocked()
        } else {
            log::warn!("Access gate rejected a passphrase attempt");
            state
        }
    }
}
