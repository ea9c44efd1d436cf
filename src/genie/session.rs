//! Per-conversation chat state
//!
//! Each conversation is keyed by a client-held session id. State is stored
//! only while a turn is pending, and dropped once it has been idle longer
//! than the TTL. Expired entries are purged whenever a new one is stored.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::time::{Duration, Instant};

use crate::domain::DomainError;

const MAX_SESSION_ID_LEN: usize = 128;

#[derive(Debug, Clone)]
pub struct SessionState {
    /// Set after asking the user for a genre; consumed by the next turn
    pub awaiting_genre: bool,
    pub last_seen: Instant,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            awaiting_genre: false,
            last_seen: Instant::now(),
        }
    }
}

impl SessionState {
    fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.last_seen) > ttl
    }
}

pub struct SessionStore {
    sessions: DashMap<String, SessionState>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    pub fn new_session_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    /// Session ids are opaque but bounded: 1-128 chars of [A-Za-z0-9_-]
    pub fn validate_id(id: &str) -> Result<(), DomainError> {
        if id.is_empty() || id.len() > MAX_SESSION_ID_LEN {
            return Err(DomainError::Validation(format!(
                "session_id must be 1 to {} characters",
                MAX_SESSION_ID_LEN
            )));
        }
        if !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(DomainError::Validation(
                "session_id may only contain letters, digits, '-' and '_'".to_string(),
            ));
        }
        Ok(())
    }

    /// Run `f` against the state of session `id`.
    ///
    /// The entry stays locked for the duration of `f`, so turns of one
    /// conversation never interleave. An expired session starts over fresh.
    /// Only a session left waiting for a genre is kept; any other outcome
    /// drops the entry, so one-shot clients leave nothing behind.
    pub fn with_session<T>(&self, id: &str, f: impl FnOnce(&mut SessionState) -> T) -> T {
        let now = Instant::now();
        let mut inserted = false;

        let result = match self.sessions.entry(id.to_string()) {
            Entry::Occupied(mut occupied) => {
                if occupied.get().is_expired(now, self.ttl) {
                    tracing::debug!("Chat session {} expired, resetting", id);
                    *occupied.get_mut() = SessionState::default();
                }
                let result = f(occupied.get_mut());
                if occupied.get().awaiting_genre {
                    occupied.get_mut().last_seen = now;
                } else {
                    occupied.remove();
                }
                result
            }
            Entry::Vacant(vacant) => {
                let mut state = SessionState::default();
                let result = f(&mut state);
                if state.awaiting_genre {
                    tracing::debug!("Creating chat session {}", id);
                    state.last_seen = now;
                    vacant.insert(state);
                    inserted = true;
                }
                result
            }
        };

        // Entry lock is released here; retain needs every shard
        if inserted {
            self.purge_expired();
        }
        result
    }

    /// Drop sessions idle for longer than the TTL. Returns how many went.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.sessions.len();
        self.sessions.retain(|_, state| !state.is_expired(now, self.ttl));
        let removed = before.saturating_sub(self.sessions.len());
        if removed > 0 {
            tracing::info!("Purged {} expired chat sessions", removed);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
