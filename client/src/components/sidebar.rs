//! Dashboard navigation menu.
//!
//! The menu is static data so it can be checked against the route table in
//! tests; every leaf link must land on a dashboard view.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// One menu entry. Entries with `items` are section headers whose `href`
/// opens the first child.
#[derive(Debug)]
pub struct SidebarItem {
    pub title: &'static str,
    pub href: &'static str,
    pub badge: Option<&'static str>,
    pub items: &'static [SidebarItem],
}

const fn leaf(title: &'static str, href: &'static str) -> SidebarItem {
    SidebarItem { title, href, badge: None, items: &[] }
}

pub const SIDEBAR: &[SidebarItem] = &[
    leaf("Dashboard", "/dashboard"),
    SidebarItem {
        title: "Baggage",
        href: "/dashboard/bagages/suivi",
        badge: Some("3"),
        items: &[
            leaf("Follow-up", "/dashboard/bagages/suivi"),
            leaf("Scanner", "/dashboard/bagages/scanner"),
            leaf("Incidents", "/dashboard/bagages/incidents"),
        ],
    },
    SidebarItem {
        title: "Weather",
        href: "/dashboard/meteo/predictions",
        badge: None,
        items: &[
            leaf("Forecasts", "/dashboard/meteo/predictions"),
            leaf("Alerts", "/dashboard/meteo/alertes"),
            leaf("Airports", "/dashboard/meteo/aeroports"),
        ],
    },
    leaf("Statistics", "/dashboard/statistiques"),
    leaf("Settings", "/dashboard/settings"),
    leaf("Profile", "/dashboard/profile"),
];

/// Whether the entry for `href` should be highlighted at `pathname`.
///
/// The dashboard root only matches exactly; other entries also match their
/// descendants.
pub fn is_active(pathname: &str, href: &str) -> bool {
    let pathname = pathname.trim_end_matches('/');
    if pathname == href {
        return true;
    }
    href != "/dashboard" && pathname.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

fn entry_class(active: bool) -> &'static str {
    if active { "sidebar__item sidebar__item--active" } else { "sidebar__item" }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;

    let entries = SIDEBAR
        .iter()
        .map(|item| {
            let children = item
                .items
                .iter()
                .map(|child| {
                    view! {
                        <li class=move || pathname.with(|p| entry_class(is_active(p, child.href)))>
                            <a href=child.href>{child.title}</a>
                        </li>
                    }
                })
                .collect_view();
            let group_active = move || pathname.with(|p| item.items.iter().any(|child| is_active(p, child.href)));

            view! {
                <li class=move || pathname.with(|p| entry_class(is_active(p, item.href) || group_active()))>
                    <a href=item.href>
                        {item.title}
                        {item.badge.map(|badge| view! { <span class="sidebar__badge">{badge}</span> })}
                    </a>
                    <ul class="sidebar__children">{children}</ul>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="sidebar">
            <ul>{entries}</ul>
        </nav>
    }
}
