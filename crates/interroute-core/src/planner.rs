//! Caller-facing composition of catalog, geometry, impact and cost.

use serde::Serialize;

use crate::catalog::{route_key, RouteCatalog};
use crate::cost::{estimate, CargoDeclaration, CargoKind, CostEstimate};
use crate::error::RouteError;
use crate::geometry::{map_view, route_markers, synthesize_display_path, MapView, RouteMarkers};
use crate::impact::{assess, EnvironmentalImpact};
use crate::models::{
    Country, DisplayPath, RoutePath, RouteStyle, TransportMode, DESTINATION_ICON,
};
use crate::terminals::{nearest_terminal, Terminal};

/// One selectable mode for a corridor.
#[derive(Debug, Clone, Serialize)]
pub struct TransportOption {
    pub mode: TransportMode,
    pub style: RouteStyle,
    pub origin_terminal: Option<&'static str>,
    pub destination_terminal: Option<&'static str>,
    pub cargo_kinds: &'static [CargoKind],
    pub impact: EnvironmentalImpact,
}

/// Everything needed to draw and describe a route.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub route_key: String,
    pub origin: Country,
    pub destination: Country,
    pub mode: TransportMode,
    pub reference_path: RoutePath,
    pub display_path: DisplayPath,
    pub markers: RouteMarkers,
    pub style: RouteStyle,
    pub destination_icon: &'static str,
    pub map_view: Option<MapView>,
    pub impact: EnvironmentalImpact,
    pub origin_terminal: Option<&'static Terminal>,
    pub destination_terminal: Option<&'static Terminal>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShipmentQuote {
    pub origin: Country,
    pub destination: Country,
    pub mode: TransportMode,
    pub cargo: CargoDeclaration,
    pub impact: EnvironmentalImpact,
    pub cost: CostEstimate,
}

#[derive(Debug, Clone)]
pub struct RoutePlanner {
    catalog: RouteCatalog,
}

impl RoutePlanner {
    pub fn new(catalog: RouteCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &RouteCatalog {
        &self.catalog
    }

    /// Modes available between two countries with their impact.
    pub fn transport_options(
        &self,
        origin: Country,
        destination: Country,
    ) -> Result<Vec<TransportOption>, RouteError> {
        let mut options = Vec::new();
        for mode in self.catalog.available_modes(origin, destination) {
            let reference = self.catalog.lookup(origin, destination, mode)?;
            options.push(TransportOption {
                mode,
                style: mode.style(),
                origin_terminal: nearest_terminal(&reference.first(), mode).map(|t| t.name),
                destination_terminal: nearest_terminal(&reference.last(), mode).map(|t| t.name),
                cargo_kinds: CargoKind::offered_for(mode),
                impact: assess(mode, reference),
            });
        }

        if options.is_empty() {
            // Report the first mode so the error names a concrete corridor.
            return Err(RouteError::NotFound {
                origin,
                destination,
                mode: TransportMode::Road,
            });
        }
        Ok(options)
    }

    pub fn plan(
        &self,
        origin: Country,
        destination: Country,
        mode: TransportMode,
    ) -> Result<RoutePlan, RouteError> {
        let reference = self.catalog.lookup(origin, destination, mode)?;
        let display_path = synthesize_display_path(reference, mode);
        let markers = route_markers(reference, &display_path, mode);
        let view = map_view(reference, &display_path, mode);

        tracing::debug!(
            key = %route_key(origin, destination),
            %mode,
            reference_points = reference.len(),
            display_points = display_path.len(),
            "planned route"
        );

        Ok(RoutePlan {
            route_key: route_key(origin, destination),
            origin,
            destination,
            mode,
            reference_path: reference.clone(),
            markers,
            style: mode.style(),
            destination_icon: DESTINATION_ICON,
            map_view: view,
            impact: assess(mode, reference),
            origin_terminal: nearest_terminal(&reference.first(), mode),
            destination_terminal: nearest_terminal(&reference.last(), mode),
            display_path,
        })
    }

    /// Impact of the corridor plus the price of the cargo.
    pub fn quote(
        &self,
        origin: Country,
        destination: Country,
        mode: TransportMode,
        cargo: CargoDeclaration,
    ) -> Result<ShipmentQuote, RouteError> {
        let reference = self.catalog.lookup(origin, destination, mode)?;
        let impact = assess(mode, reference);
        let cost = estimate(mode, &cargo)?;
        Ok(ShipmentQuote {
            origin,
            destination,
            mode,
            cargo,
            impact,
            cost,
        })
    }
}
