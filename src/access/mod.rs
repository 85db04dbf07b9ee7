//! The entry gate shown before the advisor.
//!
//! This is not authentication. It keeps casual visitors on a landing
//! screen until they acknowledge it, or type a phrase the operator chose.
//! Once passed, the grant is remembered in the preference store.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::storage::{KeyValueStore, Preferences, StorageError};

#[derive(Error, Debug)]
pub enum AccessError {
    #[error("Access input is blank")]
    Blank,

    /// Carries the localized message to show the user.
    #[error("{0}")]
    Rejected(String),

    #[error("Unable to persist access: {0}")]
    Storage(#[from] StorageError),
}

/// How the gate decides.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccessPolicy {
    /// Always open.
    Open,
    /// Any non-blank input passes.
    #[default]
    Acknowledge,
    /// Input must equal the phrase, ignoring surrounding whitespace.
    Passphrase { phrase: String },
}

impl AccessPolicy {
    /// Whether `input` passes. Blank input never passes a gate that asks
    /// for input.
    ///
    /// ```
    /// use hand_advisor::access::AccessPolicy;
    ///
    /// assert!(AccessPolicy::Acknowledge.accepts("ok"));
    /// assert!(!AccessPolicy::Acknowledge.accepts("   "));
    ///
    /// let policy = AccessPolicy::Passphrase { phrase: "river".to_string() };
    /// assert!(policy.accepts(" river "));
    /// assert!(!policy.accepts("turn"));
    /// ```
    pub fn accepts(&self, input: &str) -> bool {
        let input = input.trim();
        match self {
            Self::Open => true,
            Self::Acknowledge => !input.is_empty(),
            Self::Passphrase { phrase } => !input.is_empty() && input == phrase.trim(),
        }
    }

    pub fn requires_input(&self) -> bool {
        !matches!(self, Self::Open)
    }
}

/// Applies an [`AccessPolicy`] and records grants.
#[derive(Debug, Clone)]
pub struct AccessGate {
    policy: AccessPolicy,
}

impl AccessGate {
    pub fn new(policy: AccessPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    /// Whether the user is already through, either by an earlier grant or
    /// because the gate is open.
    pub fn is_granted<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<bool, StorageError> {
        if !self.policy.requires_input() {
            return Ok(true);
        }
        Preferences::new(store).access_granted()
    }

    /// Check `input` and persist the grant when it passes.
    ///
    /// `rejected_message` becomes the text of [`AccessError::Rejected`].
    #[instrument(level = "debug", skip(self, store, input, rejected_message))]
    pub fn attempt<S: KeyValueStore + ?Sized>(
        &self,
        store: &mut S,
        input: &str,
        rejected_message: &str,
    ) -> Result<(), AccessError> {
        if self.policy.requires_input() && input.trim().is_empty() {
            debug!("Rejected blank access attempt");
            return Err(AccessError::Blank);
        }
        if !self.policy.accepts(input) {
            debug!("Rejected access attempt");
            return Err(AccessError::Rejected(rejected_message.to_string()));
        }
        Preferences::new(store).grant_access()?;
        debug!("Access granted");
        Ok(())
    }
}

impl Default for AccessGate {
    fn default() -> Self {
        Self::new(AccessPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, ACCESS_GRANTED, ACCESS_KEY};

    #[test_log::test]
    fn test_acknowledge() {
        let gate = AccessGate::new(AccessPolicy::Acknowledge);
        let mut store = MemoryStore::new();
        assert!(!gate.is_granted(&mut store).unwrap());

        assert!(matches!(
            gate.attempt(&mut store, "  ", "nope"),
            Err(AccessError::Blank)
        ));
        assert!(!gate.is_granted(&mut store).unwrap());

        gate.attempt(&mut store, "anything", "nope").unwrap();
        assert!(gate.is_granted(&mut store).unwrap());
        assert_eq!(store.get(ACCESS_KEY).unwrap().as_deref(), Some(ACCESS_GRANTED));
    }

    #[test_log::test]
    fn test_passphrase() {
        let gate = AccessGate::new(AccessPolicy::Passphrase {
            phrase: "pocket rockets".to_string(),
        });
        let mut store = MemoryStore::new();

        match gate.attempt(&mut store, "pocket kings", "Access denied") {
            Err(AccessError::Rejected(msg)) => assert_eq!(msg, "Access denied"),
            other => panic!("Expected rejection, got {other:?}"),
        }
        assert!(store.is_empty());

        gate.attempt(&mut store, "pocket rockets\n", "Access denied").unwrap();
        assert!(gate.is_granted(&mut store).unwrap());
    }

    #[test]
    fn test_blank_passphrase_never_matches_blank_input() {
        let policy = AccessPolicy::Passphrase {
            phrase: String::new(),
        };
        assert!(!policy.accepts(""));
    }

    #[test]
    fn test_open() {
        let gate = AccessGate::new(AccessPolicy::Open);
        let mut store = MemoryStore::new();
        assert!(gate.is_granted(&mut store).unwrap());
        gate.attempt(&mut store, "", "nope").unwrap();
    }

    #[test]
    fn test_policy_serde() {
        let policy: AccessPolicy =
            serde_json::from_str(r#"{"type": "passphrase", "phrase": "abc"}"#).unwrap();
        assert_eq!(
            policy,
            AccessPolicy::Passphrase {
                phrase: "abc".to_string()
            }
        );
        let policy: AccessPolicy = serde_json::from_str(r#"{"type": "open"}"#).unwrap();
        assert_eq!(policy, AccessPolicy::Open);
        assert!(serde_json::from_str::<AccessPolicy>(r#"{"type": "password"}"#).is_err());
    }
}
