pub mod catalog;
pub mod cost;
pub mod error;
pub mod geometry;
pub mod impact;
pub mod models;
pub mod planner;
pub mod terminals;

pub use catalog::{is_road_viable, route_key, CatalogEntry, RouteCatalog, RouteKey};
pub use cost::{
    capacity_status, container_capacity, estimate, eta_days, maritime_freight, BillingBasis,
    CapacityStatus, CargoDeclaration, CargoKind, ContainerSize, ContainerType, CostEstimate,
    LineItem, MaritimeFreight,
};
pub use error::{CatalogError, RouteError};
pub use geometry::{
    crosses_antimeridian_pacific, great_circle_distance_km, map_view, path_distance_km,
    route_distance_km, route_markers, synthesize_display_path, MapView, RouteMarkers,
};
pub use impact::{assess, assess_distance, EnvironmentalImpact, ImpactLevel};
pub use models::{
    Bounds, Country, DisplayPath, GeoPoint, RoutePath, RoutePoint, RouteStyle, TransportMode,
};
pub use planner::{RoutePlan, RoutePlanner, ShipmentQuote, TransportOption};
pub use terminals::{nearest_terminal, Terminal, TerminalKind};
