//! Fixed table of known routes.
//!
//! Routes are stored per ordered country pair (`"MEX-CHN"`), then per mode.
//! Nothing is symmetric: `MEX-JPN` resolving says nothing about `JPN-MEX`.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{CatalogError, RouteError};
use crate::models::{Country, GeoPoint, RoutePath, RoutePoint, TransportMode};

const BUILTIN_ROUTES: &str = include_str!("../data/routes.json");

/// Ordered origin/destination pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteKey {
    pub origin: Country,
    pub destination: Country,
}

impl RouteKey {
    pub fn new(origin: Country, destination: Country) -> Self {
        Self {
            origin,
            destination,
        }
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.origin.code(), self.destination.code())
    }
}

impl FromStr for RouteKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (origin, destination) = s
            .split_once('-')
            .ok_or_else(|| CatalogError::InvalidKey(s.to_string()))?;
        match (Country::from_code(origin), Country::from_code(destination)) {
            (Some(origin), Some(destination)) => Ok(RouteKey::new(origin, destination)),
            _ => Err(CatalogError::InvalidKey(s.to_string())),
        }
    }
}

/// Catalog key for a pair, e.g. `MEX-CHN`.
pub fn route_key(origin: Country, destination: Country) -> String {
    RouteKey::new(origin, destination).to_string()
}

/// Road freight only runs across the Mexico/USA border.
pub fn is_road_viable(origin: Country, destination: Country) -> bool {
    matches!(
        (origin, destination),
        (Country::Mexico, Country::UnitedStates) | (Country::UnitedStates, Country::Mexico)
    )
}

/// A stored mode entry. Table files mark an unavailable corridor with a single
/// `[0, 0]` point.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEntry {
    Route(RoutePath),
    NoRoute,
}

/// Point as written in a route table: `[lat, lng]`,
/// `{"coords": [lat, lng], "strict": true}` or `{"lat": .., "lng": ..}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPoint {
    Pair([f64; 2]),
    Tagged {
        coords: [f64; 2],
        #[serde(default)]
        strict: bool,
    },
    Named {
        lat: f64,
        lng: f64,
        #[serde(default)]
        strict: bool,
    },
}

impl From<RawPoint> for RoutePoint {
    fn from(raw: RawPoint) -> Self {
        let (lat, lng, strict) = match raw {
            RawPoint::Pair([lat, lng]) => (lat, lng, false),
            RawPoint::Tagged {
                coords: [lat, lng],
                strict,
            } => (lat, lng, strict),
            RawPoint::Named { lat, lng, strict } => (lat, lng, strict),
        };
        RoutePoint {
            point: GeoPoint { lat, lng },
            strict,
        }
    }
}

type RawTable = BTreeMap<String, BTreeMap<String, Vec<RawPoint>>>;

#[derive(Debug, Clone, Default)]
pub struct RouteCatalog {
    routes: BTreeMap<RouteKey, BTreeMap<TransportMode, CatalogEntry>>,
}

impl RouteCatalog {
    /// The compiled-in route table.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_ROUTES)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: RawTable = serde_json::from_str(json)?;
        let mut catalog = RouteCatalog::default();

        for (key_text, modes) in raw {
            let key: RouteKey = key_text.parse()?;
            for (mode_text, points) in modes {
                let mode: TransportMode = mode_text.parse().map_err(CatalogError::Unrecognized)?;
                let entry = normalize_entry(&key, mode, points)?;
                catalog.insert(key, mode, entry);
            }
        }

        tracing::debug!(corridors = catalog.routes.len(), "loaded route catalog");
        Ok(catalog)
    }

    pub fn insert(&mut self, key: RouteKey, mode: TransportMode, entry: CatalogEntry) {
        self.routes.entry(key).or_default().insert(mode, entry);
    }

    /// Resolve the reference path for an ordered pair and mode.
    pub fn lookup(
        &self,
        origin: Country,
        destination: Country,
        mode: TransportMode,
    ) -> Result<&RoutePath, RouteError> {
        let not_found = || RouteError::NotFound {
            origin,
            destination,
            mode,
        };

        if mode == TransportMode::Road && !is_road_viable(origin, destination) {
            tracing::debug!(%origin, %destination, "road corridor not viable");
            return Err(not_found());
        }

        match self
            .routes
            .get(&RouteKey::new(origin, destination))
            .and_then(|modes| modes.get(&mode))
        {
            Some(CatalogEntry::Route(path)) => Ok(path),
            Some(CatalogEntry::NoRoute) | None => {
                tracing::debug!(
                    key = %RouteKey::new(origin, destination),
                    %mode,
                    "no catalog route"
                );
                Err(not_found())
            }
        }
    }

    /// Modes that resolve for the pair, in road, sea, air order.
    pub fn available_modes(&self, origin: Country, destination: Country) -> Vec<TransportMode> {
        TransportMode::ALL
            .into_iter()
            .filter(|mode| self.lookup(origin, destination, *mode).is_ok())
            .collect()
    }

    pub fn keys(&self) -> impl Iterator<Item = RouteKey> + '_ {
        self.routes.keys().copied()
    }

    /// Every stored route with a real path.
    pub fn routes(&self) -> impl Iterator<Item = (RouteKey, TransportMode, &RoutePath)> + '_ {
        self.routes.iter().flat_map(|(key, modes)| {
            modes.iter().filter_map(move |(mode, entry)| match entry {
                CatalogEntry::Route(path) => Some((*key, *mode, path)),
                CatalogEntry::NoRoute => None,
            })
        })
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

fn normalize_entry(
    key: &RouteKey,
    mode: TransportMode,
    points: Vec<RawPoint>,
) -> Result<CatalogEntry, CatalogError> {
    let points: Vec<RoutePoint> = points.into_iter().map(RoutePoint::from).collect();

    if let [only] = points.as_slice() {
        if only.point.lat == 0.0 && only.point.lng == 0.0 {
            return Ok(CatalogEntry::NoRoute);
        }
    }
    if points.len() < 2 {
        return Err(CatalogError::PathTooShort {
            key: key.to_string(),
            mode,
            len: points.len(),
        });
    }

    RoutePath::new(points)
        .map(CatalogEntry::Route)
        .map_err(|source| CatalogError::InvalidPoint {
            key: key.to_string(),
            mode,
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::route_distance_km;

    fn catalog() -> RouteCatalog {
        RouteCatalog::builtin().expect("builtin catalog parses")
    }

    #[test]
    fn builtin_resolves_known_corridors() {
        let catalog = catalog();
        let path = catalog
            .lookup(Country::Mexico, Country::China, TransportMode::Sea)
            .unwrap();
        assert!(path.len() > 2);
        assert!(path.points().iter().any(|p| p.strict), "Panama transit is strict");
        assert_eq!(route_key(Country::Mexico, Country::China), "MEX-CHN");
    }

    #[test]
    fn road_only_between_mexico_and_usa() {
        let catalog = catalog();
        assert!(catalog
            .lookup(Country::Mexico, Country::UnitedStates, TransportMode::Road)
            .is_ok());
        assert!(catalog
            .lookup(Country::UnitedStates, Country::Mexico, TransportMode::Road)
            .is_ok());
        for other in Country::ALL {
            if matches!(other, Country::Mexico | Country::UnitedStates) {
                continue;
            }
            let err = catalog
                .lookup(Country::Mexico, other, TransportMode::Road)
                .unwrap_err();
            assert_eq!(
                err,
                RouteError::NotFound {
                    origin: Country::Mexico,
                    destination: other,
                    mode: TransportMode::Road
                }
            );
        }
    }

    #[test]
    fn lookup_uses_exact_ordered_key() {
        let catalog = catalog();
        assert!(catalog
            .lookup(Country::Mexico, Country::Japan, TransportMode::Sea)
            .is_ok());
        assert!(matches!(
            catalog.lookup(Country::Japan, Country::Mexico, TransportMode::Sea),
            Err(RouteError::NotFound { .. })
        ));
    }

    #[test]
    fn pairs_without_mexico_are_absent() {
        let catalog = catalog();
        assert!(catalog
            .lookup(Country::China, Country::Germany, TransportMode::Air)
            .is_err());
        assert!(catalog
            .lookup(Country::Mexico, Country::Mexico, TransportMode::Air)
            .is_err());
    }

    #[test]
    fn available_modes_skip_sentinels() {
        let catalog = catalog();
        assert_eq!(
            catalog.available_modes(Country::Mexico, Country::UnitedStates),
            vec![TransportMode::Road, TransportMode::Sea, TransportMode::Air]
        );
        assert_eq!(
            catalog.available_modes(Country::Germany, Country::Mexico),
            vec![TransportMode::Sea, TransportMode::Air]
        );
        assert!(catalog
            .available_modes(Country::Japan, Country::Mexico)
            .is_empty());
    }

    #[test]
    fn every_route_has_positive_distance() {
        let catalog = catalog();
        let mut count = 0;
        for (key, mode, path) in catalog.routes() {
            assert!(path.len() >= 2);
            assert!(route_distance_km(path) > 0.0, "{key} {mode} has no length");
            count += 1;
        }
        assert!(count >= 20);
    }

    #[test]
    fn sentinel_entries_are_not_routes() {
        let catalog = RouteCatalog::from_json_str(
            r#"{"MEX-CHN": {"terrestre": [[0, 0]], "aerea": [[22.29, -97.87], [31.14, 121.81]]}}"#,
        )
        .unwrap();
        assert_eq!(
            catalog.available_modes(Country::Mexico, Country::China),
            vec![TransportMode::Air]
        );
    }

    #[test]
    fn mixed_point_forms_normalize() {
        let catalog = RouteCatalog::from_json_str(
            r#"{"MEX-NLD": {"sea": [
                [22.49, -97.86],
                {"coords": [51.0, 1.5], "strict": true},
                {"lat": 51.885, "lng": 4.2867}
            ]}}"#,
        )
        .unwrap();
        let path = catalog
            .lookup(Country::Mexico, Country::Netherlands, TransportMode::Sea)
            .unwrap();
        let strict: Vec<bool> = path.points().iter().map(|p| p.strict).collect();
        assert_eq!(strict, vec![false, true, false]);
    }

    #[test]
    fn malformed_tables_are_rejected() {
        assert!(matches!(
            RouteCatalog::from_json_str(r#"{"MEXICO": {}}"#),
            Err(CatalogError::InvalidKey(_))
        ));
        assert!(matches!(
            RouteCatalog::from_json_str(r#"{"MEX-USA": {"rail": [[1, 1], [2, 2]]}}"#),
            Err(CatalogError::Unrecognized(_))
        ));
        assert!(matches!(
            RouteCatalog::from_json_str(r#"{"MEX-USA": {"sea": [[1, 1]]}}"#),
            Err(CatalogError::PathTooShort { len: 1, .. })
        ));
        assert!(matches!(
            RouteCatalog::from_json_str(r#"{"MEX-USA": {"sea": [[1, 1], [95, 2]]}}"#),
            Err(CatalogError::InvalidPoint { .. })
        ));
        assert!(matches!(
            RouteCatalog::from_json_str("not json"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn route_key_round_trips_codes() {
        let key: RouteKey = "KOR-MEX".parse().unwrap();
        assert_eq!(key, RouteKey::new(Country::SouthKorea, Country::Mexico));
        assert_eq!(key.to_string(), "KOR-MEX");
    }
}
