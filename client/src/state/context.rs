//! Dependency-injected application services.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one `AppContext` and provides it through Leptos context.
//! Components reach the session store only through it, never through a
//! global. The store is mirrored into `session`, a signal updated by a store
//! subscription, so anything that reads the signal re-runs on sign-in and
//! sign-out.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use leptos::prelude::*;

use super::notice::{NoticeKind, NoticeState};
use super::session::{ChangeReason, Session, SessionStore};
use crate::config::AppConfig;
use crate::net::mock_auth::MockAuthApi;
use crate::net::types::AuthResponse;
use crate::routing::guard::{Navigation, Navigator};
use crate::routing::redirect::RedirectIntent;
use crate::routing::table::RouteTable;
use crate::util::storage::BrowserStorage;

#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: StoredValue<AppConfig>,
    pub routes: StoredValue<RouteTable>,
    pub auth_service: StoredValue<MockAuthApi>,
    /// Read-only mirror of the store.
    pub session: RwSignal<Session>,
    pub notice: RwSignal<NoticeState>,
    /// Set when the last transition was an expiry, cleared by the next one.
    pub expired: RwSignal<bool>,
    store: StoredValue<SessionStore<BrowserStorage>>,
}

impl AppContext {
    /// Hydrate the session from `localStorage` and wire the mirror signal.
    pub fn new(config: AppConfig, routes: RouteTable) -> Self {
        let mut store = SessionStore::load(BrowserStorage::new(config.storage_key.clone()));
        let session = RwSignal::new(store.session().clone());
        let expired = RwSignal::new(false);
        store.subscribe(move |current, reason| {
            expired.set(reason == ChangeReason::Expired);
            session.set(current.clone());
        });

        Self {
            config: StoredValue::new(config),
            routes: StoredValue::new(routes),
            auth_service: StoredValue::new(MockAuthApi::default()),
            session,
            notice: RwSignal::new(NoticeState::default()),
            expired,
            store: StoredValue::new(store),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    pub fn sign_in(&self, response: AuthResponse) {
        self.store.update_value(|store| store.apply(response));
    }

    pub fn logout(&self) {
        self.store.update_value(SessionStore::logout);
    }

    /// Drop the session after a protected request rejected it.
    ///
    /// The guard then sends the user to the login page with the `expired`
    /// flag and the current page as `redirectTo`.
    pub fn expire(&self) {
        self.store.update_value(SessionStore::expire);
        self.notify(NoticeKind::Error, "Your session has expired. Please sign in again.", None);
    }

    /// Run the guard for `path` against the current session.
    pub fn plan(&self, path: &str) -> Navigation {
        let authenticated = self.is_authenticated();
        let expired = self.expired.get();
        self.with_navigator(expired, |nav| nav.plan(path, authenticated))
    }

    /// Final location after following every redirect from `path`, or `None`
    /// for a redirect loop.
    pub fn settle(&self, path: &str) -> Option<String> {
        let authenticated = self.is_authenticated();
        let expired = self.expired.get_untracked();
        self.with_navigator(expired, |nav| nav.settle(path, authenticated)).map(|settled| settled.path)
    }

    fn with_navigator<T>(&self, expired: bool, f: impl FnOnce(&Navigator<'_>) -> T) -> T {
        self.routes.with_value(|routes| {
            self.config.with_value(|config| f(&Navigator::new(routes, config).session_expired(expired)))
        })
    }

    /// Where to go after signing in, given the login page's `redirectTo`.
    pub fn destination_after_sign_in(&self, redirect_to: Option<String>) -> String {
        let intent = RedirectIntent::from_param(redirect_to);
        self.config.with_value(|config| intent.consume(config))
    }

    /// Show a transient notice; the browser build clears it after the
    /// configured timeout.
    pub fn notify(&self, kind: NoticeKind, title: &str, detail: Option<String>) {
        let mut seq = 0;
        self.notice.update(|state| seq = state.show(kind, title, detail));

        #[cfg(feature = "csr")]
        {
            let notice = self.notice;
            let timeout = self.config.with_value(|config| config.notice_timeout_ms);
            gloo_timers::callback::Timeout::new(timeout, move || {
                notice.update(|state| state.dismiss(seq));
            })
            .forget();
        }
        #[cfg(not(feature = "csr"))]
        let _ = seq;
    }
}
