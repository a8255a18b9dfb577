//! Redirect intent carried through the login detour.
//!
//! The requested path travels as the `redirectTo` query parameter of the
//! login URL. It is read once after a successful sign-in and dropped; it is
//! never persisted.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use url::Url;

use crate::config::AppConfig;

pub const REDIRECT_PARAM: &str = "redirectTo";
pub const EXPIRED_PARAM: &str = "expired";

/// Placeholder origin redirect targets are resolved against; never contacted.
const LOCAL_ORIGIN: &str = "http://local.invalid/";

/// Deferred destination read from the login URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RedirectIntent {
    target: Option<String>,
}

impl RedirectIntent {
    /// Intent from an already-decoded `redirectTo` value.
    pub fn from_param(value: Option<String>) -> Self {
        let target = value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        Self { target }
    }

    /// Consume the intent and pick where to go after signing in.
    ///
    /// Falls back to the landing view when no target was carried, or when
    /// the target would leave the application.
    pub fn consume(self, config: &AppConfig) -> String {
        let Some(target) = self.target else {
            return config.landing_path.clone();
        };
        resolve_local(&target).unwrap_or_else(|| {
            log::warn!("ignoring off-site redirect target {target:?}");
            config.landing_path.clone()
        })
    }
}

/// Login URL that returns to `requested` after signing in.
pub fn login_url(config: &AppConfig, requested: &str) -> String {
    format!("{}?{REDIRECT_PARAM}={}", config.login_path, encode_target(requested))
}

/// Login URL used when a protected request rejected the session.
pub fn expired_login_url(config: &AppConfig, requested: &str) -> String {
    format!("{}?{EXPIRED_PARAM}=1&{REDIRECT_PARAM}={}", config.login_path, encode_target(requested))
}

/// Resolve `target` the way the browser would and keep it only if it stays
/// on this origin.
///
/// Returns the normalized path and query. The URL parser drops tabs and
/// newlines and reads `\` as `/`, so `"/\t/evil.test"` becomes
/// protocol-relative here exactly as it would in `location.assign`.
pub fn resolve_local(target: &str) -> Option<String> {
    if !target.starts_with('/') {
        return None;
    }
    let base = match Url::parse(LOCAL_ORIGIN) {
        Ok(base) => base,
        Err(err) => {
            log::error!("invalid local origin {LOCAL_ORIGIN}: {err}");
            return None;
        }
    };
    let resolved = match base.join(target) {
        Ok(resolved) => resolved,
        Err(err) => {
            log::debug!("unparseable redirect target {target:?}: {err}");
            return None;
        }
    };
    if resolved.origin() != base.origin() {
        return None;
    }
    Some(match resolved.query() {
        Some(query) => format!("{}?{query}", resolved.path()),
        None => resolved.path().to_owned(),
    })
}

/// Percent-encode a path for use as a query value, keeping `/` readable.
fn encode_target(path: &str) -> String {
    urlencoding::encode(path).replace("%2F", "/")
}
