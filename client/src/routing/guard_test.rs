use super::*;
use url::Url;

use crate::routing::redirect::{REDIRECT_PARAM, RedirectIntent};
use crate::routing::routes::app_routes;
use crate::routing::table::RouteNode;

fn config() -> AppConfig {
    AppConfig::default()
}

/// `redirectTo` as the login page's query map would decode it.
fn redirect_param(login_url: &str) -> Option<String> {
    let url = Url::parse("http://local.invalid/").unwrap().join(login_url).unwrap();
    url.query_pairs().find(|(key, _)| key == REDIRECT_PARAM).map(|(_, value)| value.into_owned())
}

fn route(path: &str, protected: bool) -> ResolvedRoute {
    ResolvedRoute { path: path.to_owned(), view: ViewId::ControlTower, protected }
}

// =============================================================
// decide
// =============================================================

#[test]
fn public_route_renders_without_session() {
    let nav = decide(route("/feed", false), "/feed", false, &config());
    assert!(matches!(nav, Navigation::Render(_)));
}

#[test]
fn protected_route_renders_with_session() {
    let nav = decide(route("/admin/control-tower", true), "/admin/control-tower", true, &config());
    assert_eq!(nav, Navigation::Render(route("/admin/control-tower", true)));
}

#[test]
fn protected_route_redirects_without_session() {
    let nav = decide(route("/admin/control-tower", true), "/admin/control-tower", false, &config());
    assert_eq!(
        nav,
        Navigation::Redirect {
            to: "/login?redirectTo=/admin/control-tower".to_owned(),
            reason: RedirectReason::Unauthenticated,
        }
    );
}

// =============================================================
// Navigator::plan
// =============================================================

#[test]
fn plan_unauthenticated_control_tower_redirects_to_login() {
    let (table, cfg) = (app_routes(), config());
    let nav = Navigator::new(&table, &cfg).plan("/admin/control-tower", false);
    assert_eq!(
        nav,
        Navigation::Redirect {
            to: "/login?redirectTo=/admin/control-tower".to_owned(),
            reason: RedirectReason::Unauthenticated,
        }
    );
}

#[test]
fn plan_authenticated_control_tower_renders() {
    let (table, cfg) = (app_routes(), config());
    let Navigation::Render(route) = Navigator::new(&table, &cfg).plan("/admin/control-tower", true) else {
        panic!("expected render");
    };
    assert_eq!(route.view, ViewId::ControlTower);
}

#[test]
fn plan_unknown_path_redirects_home() {
    let (table, cfg) = (app_routes(), config());
    let nav = Navigator::new(&table, &cfg).plan("/does-not-exist", false);
    assert_eq!(nav, Navigation::Redirect { to: "/".to_owned(), reason: RedirectReason::UnknownPath });
}

#[test]
fn plan_unknown_path_redirects_home_even_when_signed_in() {
    let (table, cfg) = (app_routes(), config());
    let nav = Navigator::new(&table, &cfg).plan("/admin", true);
    assert_eq!(nav, Navigation::Redirect { to: "/".to_owned(), reason: RedirectReason::UnknownPath });
}

#[test]
fn plan_keeps_query_in_redirect_target() {
    let (table, cfg) = (app_routes(), config());
    let nav = Navigator::new(&table, &cfg).plan("/dashboard/settings?tab=alerts#top", false);
    let Navigation::Redirect { to, .. } = nav else {
        panic!("expected redirect");
    };
    assert_eq!(to, "/login?redirectTo=/dashboard/settings%3Ftab%3Dalerts");
}

#[test]
fn plan_nested_dashboard_page_is_guarded() {
    let (table, cfg) = (app_routes(), config());
    let nav = Navigator::new(&table, &cfg).plan("/dashboard/meteo/predictions", false);
    assert!(matches!(nav, Navigation::Redirect { reason: RedirectReason::Unauthenticated, .. }));
}

#[test]
fn plan_reports_not_found_when_home_is_missing() {
    let table = RouteTable::new(RouteNode::group("").child(RouteNode::page("login", ViewId::Login)));
    let cfg = config();
    assert_eq!(Navigator::new(&table, &cfg).plan("/", false), Navigation::NotFound);
}

// =============================================================
// Navigator::settle and the login round trip
// =============================================================

#[test]
fn settle_unknown_path_lands_on_home_view() {
    let (table, cfg) = (app_routes(), config());
    let settled = Navigator::new(&table, &cfg).settle("/does-not-exist", false).unwrap();
    assert_eq!(settled, Settled { path: "/".to_owned(), view: ViewId::Home });
}

#[test]
fn settle_protected_path_lands_on_login_view() {
    let (table, cfg) = (app_routes(), config());
    let settled = Navigator::new(&table, &cfg).settle("/admin/control-tower", false).unwrap();
    assert_eq!(settled.view, ViewId::Login);
    assert_eq!(settled.path, "/login?redirectTo=/admin/control-tower");
}

#[test]
fn login_after_redirect_returns_to_requested_page() {
    let (table, cfg) = (app_routes(), config());
    let nav = Navigator::new(&table, &cfg);

    let login = nav.settle("/admin/control-tower", false).unwrap();
    let destination = RedirectIntent::from_param(redirect_param(&login.path)).consume(&cfg);
    assert_eq!(destination, "/admin/control-tower");

    let landed = nav.settle(&destination, true).unwrap();
    assert_eq!(landed, Settled { path: "/admin/control-tower".to_owned(), view: ViewId::ControlTower });
}

#[test]
fn direct_login_lands_on_dashboard() {
    let (table, cfg) = (app_routes(), config());
    let nav = Navigator::new(&table, &cfg);
    let destination = RedirectIntent::from_param(redirect_param("/login")).consume(&cfg);
    assert_eq!(destination, "/dashboard");
    assert_eq!(nav.settle(&destination, true).unwrap().view, ViewId::Dashboard);
}

#[test]
fn expired_session_redirect_carries_flag() {
    let (table, cfg) = (app_routes(), config());
    let nav = Navigator::new(&table, &cfg).session_expired(true);
    assert_eq!(
        nav.plan("/dashboard/statistiques", false),
        Navigation::Redirect {
            to: "/login?expired=1&redirectTo=/dashboard/statistiques".to_owned(),
            reason: RedirectReason::SessionExpired,
        }
    );
}

#[test]
fn expired_flag_does_not_affect_public_or_signed_in_routes() {
    let (table, cfg) = (app_routes(), config());
    let nav = Navigator::new(&table, &cfg).session_expired(true);
    assert!(matches!(nav.plan("/feed", false), Navigation::Render(_)));
    assert!(matches!(nav.plan("/dashboard", true), Navigation::Render(_)));
    assert_eq!(nav.settle("/dashboard", false).unwrap().view, ViewId::Login);
}

#[test]
fn signing_out_on_protected_page_redirects_on_next_evaluation() {
    let (table, cfg) = (app_routes(), config());
    let nav = Navigator::new(&table, &cfg);
    assert!(matches!(nav.plan("/dashboard/profile", true), Navigation::Render(_)));
    assert!(matches!(nav.plan("/dashboard/profile", false), Navigation::Redirect { .. }));
}

#[test]
fn settle_detects_redirect_loops() {
    let table = RouteTable::new(
        RouteNode::group("")
            .child(RouteNode::index(ViewId::Home).protected())
            .child(RouteNode::page("login", ViewId::Login).protected()),
    );
    let cfg = config();
    assert_eq!(Navigator::new(&table, &cfg).settle("/", false), None);
}
