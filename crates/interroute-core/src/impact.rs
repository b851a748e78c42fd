//! Environmental impact of a route.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geometry::route_distance_km;
use crate::models::{RoutePath, TransportMode};

/// Emissions below this are classified low (kg CO2).
pub const LOW_IMPACT_CEILING_KG: f64 = 500.0;
/// Emissions below this (and at or above the low ceiling) are medium.
pub const MEDIUM_IMPACT_CEILING_KG: f64 = 1500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

impl ImpactLevel {
    pub fn classify(emissions_kg: f64) -> Self {
        if emissions_kg < LOW_IMPACT_CEILING_KG {
            ImpactLevel::Low
        } else if emissions_kg < MEDIUM_IMPACT_CEILING_KG {
            ImpactLevel::Medium
        } else {
            ImpactLevel::High
        }
    }
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ImpactLevel::Low => "low",
            ImpactLevel::Medium => "medium",
            ImpactLevel::High => "high",
        })
    }
}

/// Distance and CO2 of a route. `distance_km` and `emissions_kg` are rounded
/// for display; `level` is always derived from the unrounded emissions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalImpact {
    pub distance_km: f64,
    pub emissions_kg: f64,
    pub level: ImpactLevel,
    pub raw_distance_km: f64,
    pub raw_emissions_kg: f64,
    pub emissions_per_km: f64,
}

/// Assess a reference path travelled by `mode`.
pub fn assess(mode: TransportMode, reference: &RoutePath) -> EnvironmentalImpact {
    assess_distance(mode, route_distance_km(reference))
}

/// Assess an already measured distance.
pub fn assess_distance(mode: TransportMode, distance_km: f64) -> EnvironmentalImpact {
    let emissions = mode.emission_factor() * distance_km;
    let rounded_distance = distance_km.round();
    let rounded_emissions = emissions.round();
    let emissions_per_km = if rounded_distance > 0.0 {
        rounded_emissions / rounded_distance
    } else {
        0.0
    };
    EnvironmentalImpact {
        distance_km: rounded_distance,
        emissions_kg: rounded_emissions,
        level: ImpactLevel::classify(emissions),
        raw_distance_km: distance_km,
        raw_emissions_kg: emissions,
        emissions_per_km,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoutePoint;

    #[test]
    fn classification_thresholds() {
        assert_eq!(ImpactLevel::classify(0.0), ImpactLevel::Low);
        assert_eq!(ImpactLevel::classify(499.99), ImpactLevel::Low);
        assert_eq!(ImpactLevel::classify(500.0), ImpactLevel::Medium);
        assert_eq!(ImpactLevel::classify(1499.9), ImpactLevel::Medium);
        assert_eq!(ImpactLevel::classify(1500.0), ImpactLevel::High);
    }

    #[test]
    fn classification_uses_unrounded_emissions() {
        // 499.6 kg rounds to 500 for display but stays low.
        let impact = assess_distance(TransportMode::Air, 499.6 / 0.25);
        assert_eq!(impact.emissions_kg, 500.0);
        assert_eq!(impact.level, ImpactLevel::Low);
    }

    #[test]
    fn tier_is_monotonic_in_distance() {
        for mode in TransportMode::ALL {
            let mut previous = ImpactLevel::Low;
            for km in (0..40_000).step_by(250) {
                let level = assess_distance(mode, km as f64).level;
                assert!(level >= previous, "{mode} tier dropped at {km} km");
                previous = level;
            }
        }
    }

    #[test]
    fn assess_uses_mode_factor() {
        let path =
            RoutePath::new(vec![RoutePoint::new(0.0, 0.0), RoutePoint::new(10.0, 0.0)]).unwrap();
        let road = assess(TransportMode::Road, &path);
        let sea = assess(TransportMode::Sea, &path);
        assert_eq!(road.distance_km, sea.distance_km);
        assert!((road.raw_emissions_kg - 0.12 * road.raw_distance_km).abs() < 1e-9);
        assert!((sea.raw_emissions_kg - 0.015 * sea.raw_distance_km).abs() < 1e-9);
        assert_eq!(road.level, ImpactLevel::Low);
        assert_eq!(road.emissions_kg, (0.12 * road.raw_distance_km).round());
    }

    #[test]
    fn zero_distance_has_zero_rate() {
        let impact = assess_distance(TransportMode::Sea, 0.0);
        assert_eq!(impact.emissions_per_km, 0.0);
        assert_eq!(impact.level, ImpactLevel::Low);
    }
}
