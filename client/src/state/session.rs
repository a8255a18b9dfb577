//! Authenticated-session state and its store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for "is someone signed in, and who". The route
//! guard, the header and the auth pages all read it; only the auth pages and
//! the sign-out action write it.
//!
//! DESIGN
//! ======
//! `Session` is a plain value with pure transitions. `SessionStore` owns the
//! current value, writes it through an injected [`SessionStorage`] and
//! notifies subscribers. Token and user live in one `Option`, so a
//! half-populated session cannot be represented.
//!
//! ERROR HANDLING
//! ==============
//! Storage problems are logged and swallowed. Loading fails closed to an
//! anonymous session; a failed write still applies the in-memory transition.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::net::types::{AuthResponse, User};
use crate::util::storage::SessionStorage;

/// Token and profile of a signed-in user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub user: User,
}

/// Authentication state of the running application.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    credentials: Option<Credentials>,
}

/// Wire shape of the persisted record.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedSession {
    token: Option<String>,
    user: Option<User>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session for `user`, or `None` when `token` is empty.
    pub fn authenticated(token: impl Into<String>, user: User) -> Option<Self> {
        let token = token.into();
        if token.is_empty() {
            return None;
        }
        Some(Self { credentials: Some(Credentials { token, user }) })
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.as_ref().is_some_and(|c| !c.token.is_empty())
    }

    pub fn token(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.token.as_str())
    }

    pub fn user(&self) -> Option<&User> {
        self.credentials.as_ref().map(|c| &c.user)
    }

    /// Parse a persisted record.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Malformed`] for invalid JSON, an empty token,
    /// or a record carrying only one of token and user.
    pub fn decode(raw: &str) -> Result<Self, StorageError> {
        let record: PersistedSession =
            serde_json::from_str(raw).map_err(|e| StorageError::Malformed(e.to_string()))?;
        match (record.token, record.user) {
            (None, None) => Ok(Self::anonymous()),
            (Some(token), Some(user)) => Self::authenticated(token, user)
                .ok_or_else(|| StorageError::Malformed("empty token".to_owned())),
            _ => Err(StorageError::Malformed("token and user must be set together".to_owned())),
        }
    }

    /// Serialize into the persisted record format.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if serialization fails.
    pub fn encode(&self) -> Result<String, StorageError> {
        let record = match &self.credentials {
            Some(c) => PersistedSession { token: Some(c.token.clone()), user: Some(c.user.clone()) },
            None => PersistedSession::default(),
        };
        serde_json::to_string(&record).map_err(|e| StorageError::Write(e.to_string()))
    }
}

/// Why the session changed, passed to subscribers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeReason {
    SignedIn,
    SignedOut,
    /// A protected request rejected the token.
    Expired,
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Session, ChangeReason) + Send + Sync>;

/// Owns the current [`Session`] and keeps storage and subscribers in sync.
pub struct SessionStore<S: SessionStorage> {
    session: Session,
    storage: S,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Hydrate from `storage`, falling back to an anonymous session.
    pub fn load(storage: S) -> Self {
        let session = match storage.load() {
            Ok(Some(raw)) => Session::decode(&raw).unwrap_or_else(|err| {
                log::warn!("discarding persisted session: {err}");
                Session::anonymous()
            }),
            Ok(None) => Session::anonymous(),
            Err(err) => {
                log::warn!("session storage unreadable: {err}");
                Session::anonymous()
            }
        };
        if let Some(user) = session.user() {
            log::info!("restored session for {}", user.email);
        }
        Self { session, storage, listeners: Vec::new(), next_subscription: 0 }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Store token and user together.
    ///
    /// An empty token is treated as a failed sign-in: the store keeps its
    /// current state.
    pub fn set_auth(&mut self, token: impl Into<String>, user: User) {
        let Some(next) = Session::authenticated(token, user) else {
            log::warn!("ignoring sign-in with an empty token");
            return;
        };
        if let Some(user) = next.user() {
            log::info!("signed in as {}", user.email);
        }
        self.replace(next, ChangeReason::SignedIn);
    }

    /// [`Self::set_auth`] from an endpoint response.
    pub fn apply(&mut self, response: AuthResponse) {
        self.set_auth(response.token, response.user);
    }

    pub fn logout(&mut self) {
        log::info!("signed out");
        self.replace(Session::anonymous(), ChangeReason::SignedOut);
    }

    /// Clear the session because a protected request rejected it.
    pub fn expire(&mut self) {
        log::warn!("session rejected, signing out");
        self.replace(Session::anonymous(), ChangeReason::Expired);
    }

    /// Register `listener` to run after every transition.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Session, ChangeReason) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn replace(&mut self, next: Session, reason: ChangeReason) {
        self.session = next;
        self.persist();
        for (_, listener) in &mut self.listeners {
            listener(&self.session, reason);
        }
    }

    fn persist(&self) {
        let result = self.session.encode().and_then(|raw| self.storage.save(&raw));
        if let Err(err) = result {
            log::warn!("session not persisted: {err}");
        }
    }
}
