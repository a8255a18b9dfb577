//! Per-navigation access decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RoutedView` asks the guard on every location change and every session
//! change. Nothing is cached between calls, so signing out while a protected
//! view is mounted sends the user to the login page on the next evaluation.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::redirect::{expired_login_url, login_url};
use super::table::{ResolvedRoute, RouteTable, ViewId, normalize};
use crate::config::AppConfig;

/// Upper bound on chained redirects followed by [`Navigator::settle`].
pub const MAX_REDIRECTS: usize = 4;

/// Why a navigation was redirected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectReason {
    /// Protected route without a session.
    Unauthenticated,
    /// Protected route after the session was rejected mid-use.
    SessionExpired,
    /// No route matches; catch-all back to home.
    UnknownPath,
}

/// Outcome of one navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Render(ResolvedRoute),
    Redirect { to: String, reason: RedirectReason },
    /// Even the home path does not resolve; nothing can be shown.
    NotFound,
}

/// Guard contract for an already-resolved route.
///
/// `requested` is the path (and query) to come back to after signing in.
pub fn decide(route: ResolvedRoute, requested: &str, authenticated: bool, config: &AppConfig) -> Navigation {
    if !route.protected || authenticated {
        return Navigation::Render(route);
    }
    log::debug!("guard: {} requires a session", route.path);
    Navigation::Redirect { to: login_url(config, requested), reason: RedirectReason::Unauthenticated }
}

/// A finished navigation: the path the browser ends on and what it shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settled {
    pub path: String,
    pub view: ViewId,
}

/// Route table plus config, answering navigation questions.
#[derive(Clone, Copy, Debug)]
pub struct Navigator<'a> {
    table: &'a RouteTable,
    config: &'a AppConfig,
    expired: bool,
}

impl<'a> Navigator<'a> {
    pub fn new(table: &'a RouteTable, config: &'a AppConfig) -> Self {
        Self { table, config, expired: false }
    }

    /// Mark the last session as expired, so login redirects carry the
    /// `expired` flag.
    #[must_use]
    pub fn session_expired(mut self, expired: bool) -> Self {
        self.expired = expired;
        self
    }

    /// Decide what happens when `path` is requested.
    pub fn plan(&self, path: &str, authenticated: bool) -> Navigation {
        match self.table.resolve(path) {
            Some(route) => {
                let requested = requested_target(path);
                match decide(route, &requested, authenticated, self.config) {
                    Navigation::Redirect { reason: RedirectReason::Unauthenticated, .. } if self.expired => {
                        Navigation::Redirect {
                            to: expired_login_url(self.config, &requested),
                            reason: RedirectReason::SessionExpired,
                        }
                    }
                    other => other,
                }
            }
            None if normalize(path) == normalize(&self.config.home_path) => {
                log::error!("home path {} matches no route", self.config.home_path);
                Navigation::NotFound
            }
            None => {
                log::debug!("no route for {path}, redirecting home");
                Navigation::Redirect { to: self.config.home_path.clone(), reason: RedirectReason::UnknownPath }
            }
        }
    }

    /// Follow redirects from `path` until a view renders.
    ///
    /// Returns `None` for a redirect loop longer than [`MAX_REDIRECTS`] or
    /// when nothing resolves.
    pub fn settle(&self, path: &str, authenticated: bool) -> Option<Settled> {
        let mut current = path.to_owned();
        for _ in 0..=MAX_REDIRECTS {
            match self.plan(&current, authenticated) {
                Navigation::Render(route) => return Some(Settled { path: current, view: route.view }),
                Navigation::Redirect { to, .. } => current = to,
                Navigation::NotFound => return None,
            }
        }
        log::warn!("redirect chain from {path} exceeded {MAX_REDIRECTS} hops");
        None
    }
}

/// Normalized path plus the original query, if any.
fn requested_target(path: &str) -> String {
    let without_fragment = path.split('#').next().unwrap_or_default();
    match without_fragment.split_once('?') {
        Some((_, query)) if !query.is_empty() => format!("{}?{query}", normalize(without_fragment)),
        _ => normalize(without_fragment),
    }
}
