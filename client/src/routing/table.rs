//! Nested route tree with inherited protection.
//!
//! DESIGN
//! ======
//! Routes are plain data. A navigation walks the tree once from the root,
//! OR-ing each node's `protected` flag into the result, so a child can never
//! be less protected than its ancestors.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

/// Every screen a route can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewId {
    Home,
    Login,
    Register,
    SmartFeed,
    Navigation,
    BaggageTracking,
    ControlTower,
    AlertsManagement,
    Dashboard,
    BaggageFollowUp,
    BaggageScanner,
    BaggageIncidents,
    WeatherForecasts,
    WeatherAlerts,
    WeatherAirports,
    Statistics,
    Settings,
    Profile,
}

impl ViewId {
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Sign in",
            Self::Register => "Create an account",
            Self::SmartFeed => "Smart Feed",
            Self::Navigation => "Indoor Navigation",
            Self::BaggageTracking => "Baggage Tracking",
            Self::ControlTower => "Control Tower",
            Self::AlertsManagement => "Alerts Management",
            Self::Dashboard => "Dashboard",
            Self::BaggageFollowUp => "Baggage Follow-up",
            Self::BaggageScanner => "Baggage Scanner",
            Self::BaggageIncidents => "Baggage Incidents",
            Self::WeatherForecasts => "Weather Forecasts",
            Self::WeatherAlerts => "Weather Alerts",
            Self::WeatherAirports => "Airports",
            Self::Statistics => "Statistics",
            Self::Settings => "Settings",
            Self::Profile => "Profile",
        }
    }

    /// Views rendered inside the dashboard layout.
    pub fn in_dashboard(self) -> bool {
        matches!(
            self,
            Self::Dashboard
                | Self::BaggageFollowUp
                | Self::BaggageScanner
                | Self::BaggageIncidents
                | Self::WeatherForecasts
                | Self::WeatherAlerts
                | Self::WeatherAirports
                | Self::Statistics
                | Self::Settings
                | Self::Profile
        )
    }
}

/// One descriptor in the route tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteNode {
    /// Single path segment; empty for an index route.
    segment: String,
    view: Option<ViewId>,
    protected: bool,
    children: Vec<RouteNode>,
}

impl RouteNode {
    /// Node that renders `view` at `segment`.
    pub fn page(segment: &str, view: ViewId) -> Self {
        Self { segment: segment.trim_matches('/').to_owned(), view: Some(view), protected: false, children: Vec::new() }
    }

    /// Index route rendered when the parent path itself is requested.
    pub fn index(view: ViewId) -> Self {
        Self::page("", view)
    }

    /// Node that only groups children and never matches by itself.
    pub fn group(segment: &str) -> Self {
        Self { segment: segment.trim_matches('/').to_owned(), view: None, protected: false, children: Vec::new() }
    }

    #[must_use]
    pub fn protected(mut self) -> Self {
        self.protected = true;
        self
    }

    #[must_use]
    pub fn child(mut self, node: RouteNode) -> Self {
        self.children.push(node);
        self
    }
}

/// A path matched against the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// Normalized request path, e.g. `/admin/control-tower`.
    pub path: String,
    pub view: ViewId,
    /// Own flag OR-ed with every ancestor's.
    pub protected: bool,
}

/// Route tree rooted at `/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    root: RouteNode,
}

impl RouteTable {
    pub fn new(root: RouteNode) -> Self {
        Self { root }
    }

    /// Match `path` (query and fragment ignored) against the tree.
    ///
    /// Returns `None` when no node with a view matches exactly.
    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute> {
        let segments = segments(path);
        let (view, protected) = walk(&self.root, &segments, false)?;
        Some(ResolvedRoute { path: normalize(path), view, protected })
    }

    /// Every routable path with its view and effective protection, in tree
    /// order.
    #[cfg(test)]
    pub(crate) fn entries(&self) -> Vec<ResolvedRoute> {
        let mut out = Vec::new();
        collect(&self.root, "", false, &mut out);
        out
    }
}

fn walk(node: &RouteNode, rest: &[&str], inherited: bool) -> Option<(ViewId, bool)> {
    let protected = inherited || node.protected;
    let Some((head, tail)) = rest.split_first() else {
        if let Some(view) = node.view {
            return Some((view, protected));
        }
        let index = node.children.iter().find(|c| c.segment.is_empty())?;
        return walk(index, rest, protected);
    };
    node.children
        .iter()
        .filter(|child| !child.segment.is_empty() && child.segment == *head)
        .find_map(|child| walk(child, tail, protected))
}

#[cfg(test)]
fn collect(node: &RouteNode, prefix: &str, inherited: bool, out: &mut Vec<ResolvedRoute>) {
    let protected = inherited || node.protected;
    let path = match (prefix, node.segment.as_str()) {
        (p, "") => p.to_owned(),
        (p, s) => format!("{p}/{s}"),
    };
    if let Some(view) = node.view {
        let shown = if path.is_empty() { "/".to_owned() } else { path.clone() };
        out.push(ResolvedRoute { path: shown, view, protected });
    }
    for child in &node.children {
        collect(child, &path, protected, out);
    }
}

fn strip_suffixes(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

fn segments(path: &str) -> Vec<&str> {
    strip_suffixes(path).split('/').filter(|s| !s.is_empty()).collect()
}

/// Canonical form of `path`: leading slash, no empty segments, no query.
pub fn normalize(path: &str) -> String {
    format!("/{}", segments(path).join("/"))
}
