// src/services/session.rs
use std::{
    fmt,
    sync::{Mutex, MutexGuard, PoisonError},
};

use uuid::Uuid;

/// Opaque token tying a run of exchanges into one conversation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// A fresh random (v4 UUID) id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The one live session id of a client.
///
/// Every access takes the lock briefly and never across an await, so
/// overlapping sends each read the id at call time and the last one to
/// finish wins the write.
#[derive(Debug)]
pub struct Session {
    current: Mutex<SessionId>,
}

impl Session {
    pub fn new(id: SessionId) -> Self {
        Self { current: Mutex::new(id) }
    }

    /// Snapshot of the current id.
    pub fn current(&self) -> SessionId {
        self.lock().clone()
    }

    /// Overwrite with a server-supplied id. Returns true if the id changed.
    pub fn replace(&self, id: SessionId) -> bool {
        let mut guard = self.lock();
        if *guard == id {
            return false;
        }
        *guard = id;
        true
    }

    /// Start a new conversation and return its id.
    pub fn renew(&self) -> SessionId {
        let id = SessionId::generate();
        *self.lock() = id.clone();
        id
    }

    // Poisoning only means another caller panicked mid-assignment; the id
    // itself is always a whole value.
    fn lock(&self) -> MutexGuard<'_, SessionId> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = SessionId::generate();
        let b = SessionId::generate();
        assert!(!a.as_str().is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn replace_and_renew() {
        let session = Session::new(SessionId::from("U0"));
        assert_eq!(session.current().as_str(), "U0");

        assert!(!session.replace(SessionId::from("U0")));
        assert!(session.replace(SessionId::from("U1")));
        assert_eq!(session.current().as_str(), "U1");

        let renewed = session.renew();
        assert_ne!(renewed.as_str(), "U1");
        assert_eq!(session.current(), renewed);
    }
}
