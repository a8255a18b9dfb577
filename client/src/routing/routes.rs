//! The application's route tree.

use super::table::{RouteNode, RouteTable, ViewId};

/// Public passenger pages, the protected admin area and the protected
/// dashboard with its nested sections.
pub fn app_routes() -> RouteTable {
    let admin = RouteNode::group("admin")
        .child(RouteNode::page("control-tower", ViewId::ControlTower).protected())
        .child(RouteNode::page("alerts", ViewId::AlertsManagement).protected());

    let baggage = RouteNode::group("bagages")
        .child(RouteNode::page("suivi", ViewId::BaggageFollowUp))
        .child(RouteNode::page("scanner", ViewId::BaggageScanner))
        .child(RouteNode::page("incidents", ViewId::BaggageIncidents));

    let weather = RouteNode::group("meteo")
        .child(RouteNode::page("predictions", ViewId::WeatherForecasts))
        .child(RouteNode::page("alertes", ViewId::WeatherAlerts))
        .child(RouteNode::page("aeroports", ViewId::WeatherAirports));

    let dashboard = RouteNode::group("dashboard")
        .protected()
        .child(RouteNode::index(ViewId::Dashboard))
        .child(baggage)
        .child(weather)
        .child(RouteNode::page("statistiques", ViewId::Statistics))
        .child(RouteNode::page("settings", ViewId::Settings))
        .child(RouteNode::page("profile", ViewId::Profile));

    RouteTable::new(
        RouteNode::group("")
            .child(RouteNode::index(ViewId::Home))
            .child(RouteNode::page("login", ViewId::Login))
            .child(RouteNode::page("register", ViewId::Register))
            .child(RouteNode::page("feed", ViewId::SmartFeed))
            .child(RouteNode::page("navigation", ViewId::Navigation))
            .child(RouteNode::page("baggage-tracking", ViewId::BaggageTracking))
            .child(admin)
            .child(dashboard),
    )
}
