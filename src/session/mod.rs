//! Admin session tracking.
//!
//! Sessions are an explicit capability object passed to the handlers that
//! need auth status; there is no ambient token lookup anywhere in the
//! crate. The context issues opaque tokens at login, answers probes, and
//! revokes tokens at logout.

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

/// The session-context capability: issue, peek, revoke.
///
/// Tokens are opaque uuid strings held in memory; a restart logs every
/// admin out, which is the lifetime the rest of the store shares.
#[derive(Debug, Default)]
pub struct SessionContext {
    sessions: RwLock<HashMap<String, String>>,
}

impl SessionContext {
    /// Creates an empty session context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a fresh session token for the given admin.
    pub fn issue(&self, admin_id: &str) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions
            .write()
            .expect("sessions lock poisoned")
            .insert(token.clone(), admin_id.to_string());
        token
    }

    /// Returns the admin id a live token belongs to, without consuming it.
    pub fn peek(&self, token: &str) -> Option<String> {
        self.sessions
            .read()
            .expect("sessions lock poisoned")
            .get(token)
            .cloned()
    }

    /// Revokes a token. Revoking an unknown token is a no-op, so logout
    /// stays idempotent.
    pub fn revoke(&self, token: &str) {
        self.sessions
            .write()
            .expect("sessions lock poisoned")
            .remove(token);
    }
}
