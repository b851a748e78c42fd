//! Core data models for the route engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RouteError;

/// Longitude bound for points on the two rendered world copies.
pub const MAX_EXTENDED_LNG: f64 = 360.0;

/// Countries the route table knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Country {
    Mexico,
    UnitedStates,
    China,
    Germany,
    Netherlands,
    SouthKorea,
    Japan,
}

impl Country {
    pub const ALL: [Country; 7] = [
        Country::Mexico,
        Country::UnitedStates,
        Country::China,
        Country::Germany,
        Country::Netherlands,
        Country::SouthKorea,
        Country::Japan,
    ];

    /// Three-letter code used to build route keys.
    pub fn code(self) -> &'static str {
        match self {
            Country::Mexico => "MEX",
            Country::UnitedStates => "USA",
            Country::China => "CHN",
            Country::Germany => "GER",
            Country::Netherlands => "NLD",
            Country::SouthKorea => "KOR",
            Country::Japan => "JPN",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Country::Mexico => "Mexico",
            Country::UnitedStates => "United States",
            Country::China => "China",
            Country::Germany => "Germany",
            Country::Netherlands => "Netherlands",
            Country::SouthKorea => "South Korea",
            Country::Japan => "Japan",
        }
    }

    pub fn from_code(code: &str) -> Option<Country> {
        Country::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Countries this one may be paired with: Mexico trades with everyone,
    /// everyone else only with Mexico.
    pub fn partners(self) -> Vec<Country> {
        match self {
            Country::Mexico => Country::ALL
                .into_iter()
                .filter(|c| *c != Country::Mexico)
                .collect(),
            _ => vec![Country::Mexico],
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Country {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(country) = Country::from_code(&trimmed.to_ascii_uppercase()) {
            return Ok(country);
        }
        let normalized: String = trimmed
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();
        let country = match normalized.as_str() {
            "mexico" | "méxico" => Country::Mexico,
            "unitedstates" | "us" | "estadosunidos" => Country::UnitedStates,
            "china" => Country::China,
            "germany" | "alemania" | "deu" => Country::Germany,
            "netherlands" | "paisesbajos" | "holland" => Country::Netherlands,
            "southkorea" | "korea" | "corea" | "coreadelsur" => Country::SouthKorea,
            "japan" | "japon" | "japón" => Country::Japan,
            _ => return Err(RouteError::unrecognized("country", s)),
        };
        Ok(country)
    }
}

impl TryFrom<String> for Country {
    type Error = RouteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Country> for String {
    fn from(country: Country) -> Self {
        country.code().to_string()
    }
}

/// How a shipment travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    #[serde(alias = "terrestre")]
    Road,
    #[serde(alias = "maritima")]
    Sea,
    #[serde(alias = "aerea")]
    Air,
}

impl TransportMode {
    pub const ALL: [TransportMode; 3] =
        [TransportMode::Road, TransportMode::Sea, TransportMode::Air];

    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::Road => "road",
            TransportMode::Sea => "sea",
            TransportMode::Air => "air",
        }
    }

    /// kg CO2 emitted per km travelled.
    pub fn emission_factor(self) -> f64 {
        match self {
            TransportMode::Road => 0.12,
            TransportMode::Sea => 0.015,
            TransportMode::Air => 0.25,
        }
    }

    /// Flat base price in USD before cargo multipliers.
    pub fn base_cost_usd(self) -> f64 {
        match self {
            TransportMode::Road => 2000.0,
            TransportMode::Sea => 8000.0,
            TransportMode::Air => 12000.0,
        }
    }

    pub fn time_multiplier(self) -> f64 {
        match self {
            TransportMode::Road => 1.0,
            TransportMode::Sea => 1.5,
            TransportMode::Air => 0.3,
        }
    }

    pub fn style(self) -> RouteStyle {
        match self {
            TransportMode::Road => RouteStyle {
                color: "#e65100",
                weight: 4,
                opacity: 0.8,
                dash_array: "5, 10",
                icon: "🚛",
            },
            TransportMode::Sea => RouteStyle {
                color: "#1565c0",
                weight: 4,
                opacity: 0.9,
                dash_array: "15, 5, 5, 5",
                icon: "🚢",
            },
            TransportMode::Air => RouteStyle {
                color: "#7b1fa2",
                weight: 3,
                opacity: 0.8,
                dash_array: "10, 5",
                icon: "✈️",
            },
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "road" | "land" | "truck" | "terrestre" => Ok(TransportMode::Road),
            "sea" | "ocean" | "maritime" | "maritima" => Ok(TransportMode::Sea),
            "air" | "aerea" => Ok(TransportMode::Air),
            _ => Err(RouteError::unrecognized("transport mode", s)),
        }
    }
}

/// Rendering attributes of a route polyline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteStyle {
    pub color: &'static str,
    pub weight: u8,
    pub opacity: f64,
    pub dash_array: &'static str,
    pub icon: &'static str,
}

/// Icon of the destination marker, whatever the mode.
pub const DESTINATION_ICON: &str = "🏁";

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Build a validated point. Longitudes beyond ±180 are accepted up to ±360
    /// so paths can continue onto the neighbouring world copy.
    pub fn new(lat: f64, lng: f64) -> Result<Self, RouteError> {
        let point = Self { lat, lng };
        point.validate()?;
        Ok(point)
    }

    pub fn validate(&self) -> Result<(), RouteError> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(RouteError::invalid(
                "latitude",
                format!("{} is outside [-90, 90]", self.lat),
            ));
        }
        if !self.lng.is_finite() || self.lng.abs() > MAX_EXTENDED_LNG {
            return Err(RouteError::invalid(
                "longitude",
                format!("{} is outside [-360, 360]", self.lng),
            ));
        }
        Ok(())
    }

    /// Same point with longitude wrapped into [-180, 180).
    pub fn wrapped(&self) -> GeoPoint {
        GeoPoint {
            lat: self.lat,
            lng: (self.lng + 180.0).rem_euclid(360.0) - 180.0,
        }
    }

    /// Euclidean distance in degree space, as used for curve sizing.
    pub fn planar_distance(&self, other: &GeoPoint) -> f64 {
        ((other.lat - self.lat).powi(2) + (other.lng - self.lng).powi(2)).sqrt()
    }

    pub fn shifted_lng(&self, delta: f64) -> GeoPoint {
        GeoPoint {
            lat: self.lat,
            lng: self.lng + delta,
        }
    }
}

/// A reference waypoint. `strict` points must be joined by straight segments
/// (canal passages and similar mandated waypoints).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    #[serde(flatten)]
    pub point: GeoPoint,
    #[serde(default)]
    pub strict: bool,
}

impl RoutePoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            point: GeoPoint { lat, lng },
            strict: false,
        }
    }

    pub fn strict(lat: f64, lng: f64) -> Self {
        Self {
            point: GeoPoint { lat, lng },
            strict: true,
        }
    }
}

impl From<GeoPoint> for RoutePoint {
    fn from(point: GeoPoint) -> Self {
        Self {
            point,
            strict: false,
        }
    }
}

/// The minimal stored geography of a route, used for distance and impact math.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RoutePoint>", into = "Vec<RoutePoint>")]
pub struct RoutePath(Vec<RoutePoint>);

impl RoutePath {
    pub fn new(points: Vec<RoutePoint>) -> Result<Self, RouteError> {
        if points.len() < 2 {
            return Err(RouteError::invalid(
                "route path",
                format!("needs at least 2 points, got {}", points.len()),
            ));
        }
        for point in &points {
            point.point.validate()?;
        }
        Ok(Self(points))
    }

    pub fn points(&self) -> &[RoutePoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a path holds at least two points.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> GeoPoint {
        self.0[0].point
    }

    pub fn last(&self) -> GeoPoint {
        self.0[self.0.len() - 1].point
    }

    pub fn geo_points(&self) -> impl Iterator<Item = GeoPoint> + '_ {
        self.0.iter().map(|p| p.point)
    }

    pub fn reversed(&self) -> RoutePath {
        let mut points = self.0.clone();
        points.reverse();
        RoutePath(points)
    }
}

impl TryFrom<Vec<RoutePoint>> for RoutePath {
    type Error = RouteError;

    fn try_from(points: Vec<RoutePoint>) -> Result<Self, Self::Error> {
        RoutePath::new(points)
    }
}

impl From<RoutePath> for Vec<RoutePoint> {
    fn from(path: RoutePath) -> Self {
        path.0
    }
}

/// Densified coordinates used only for drawing a route.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayPath(pub Vec<GeoPoint>);

impl DisplayPath {
    pub fn points(&self) -> &[GeoPoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<GeoPoint> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<GeoPoint> {
        self.0.last().copied()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.first()?;
        let mut bounds = Bounds {
            south_west: first,
            north_east: first,
        };
        for point in &self.0[1..] {
            bounds.south_west.lat = bounds.south_west.lat.min(point.lat);
            bounds.south_west.lng = bounds.south_west.lng.min(point.lng);
            bounds.north_east.lat = bounds.north_east.lat.max(point.lat);
            bounds.north_east.lng = bounds.north_east.lng.max(point.lng);
        }
        Some(bounds)
    }
}

/// Axis-aligned bounding box in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south_west: GeoPoint,
    pub north_east: GeoPoint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_parses_codes_names_and_legacy_ids() {
        assert_eq!("MEX".parse::<Country>().unwrap(), Country::Mexico);
        assert_eq!("kor".parse::<Country>().unwrap(), Country::SouthKorea);
        assert_eq!("United States".parse::<Country>().unwrap(), Country::UnitedStates);
        assert_eq!("Estados_Unidos".parse::<Country>().unwrap(), Country::UnitedStates);
        assert_eq!("Paises_Bajos".parse::<Country>().unwrap(), Country::Netherlands);
        assert_eq!("Alemania".parse::<Country>().unwrap(), Country::Germany);
        assert!(matches!(
            "Atlantis".parse::<Country>(),
            Err(RouteError::Unrecognized { kind: "country", .. })
        ));
    }

    #[test]
    fn country_serializes_as_code() {
        let json = serde_json::to_string(&Country::Netherlands).unwrap();
        assert_eq!(json, "\"NLD\"");
        let back: Country = serde_json::from_str("\"Corea\"").unwrap();
        assert_eq!(back, Country::SouthKorea);
    }

    #[test]
    fn partners_pivot_on_mexico() {
        assert_eq!(Country::Mexico.partners().len(), Country::ALL.len() - 1);
        assert_eq!(Country::China.partners(), vec![Country::Mexico]);
    }

    #[test]
    fn mode_accepts_legacy_names() {
        assert_eq!("maritima".parse::<TransportMode>().unwrap(), TransportMode::Sea);
        let mode: TransportMode = serde_json::from_str("\"aerea\"").unwrap();
        assert_eq!(mode, TransportMode::Air);
        assert!("rail".parse::<TransportMode>().is_err());
    }

    #[test]
    fn geo_point_range_checks() {
        assert!(GeoPoint::new(91.0, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::NAN).is_err());
        assert!(GeoPoint::new(31.2, -238.5).is_ok());
        assert!(GeoPoint::new(0.0, 361.0).is_err());
    }

    #[test]
    fn wrapped_folds_extended_longitude() {
        let p = GeoPoint { lat: 31.2304, lng: 121.4737 - 360.0 };
        assert!((p.wrapped().lng - 121.4737).abs() < 1e-9);
        let q = GeoPoint { lat: 0.0, lng: 262.14 };
        assert!((q.wrapped().lng - -97.86).abs() < 1e-9);
    }

    #[test]
    fn route_path_requires_two_points() {
        assert!(RoutePath::new(vec![RoutePoint::new(0.0, 0.0)]).is_err());
        let path = RoutePath::new(vec![RoutePoint::new(0.0, 0.0), RoutePoint::strict(1.0, 1.0)])
            .unwrap();
        assert_eq!(path.len(), 2);
        assert!(path.points()[1].strict);
    }

    #[test]
    fn route_point_json_is_flat() {
        let point: RoutePoint =
            serde_json::from_str(r#"{"lat": 9.0, "lng": -79.5, "strict": true}"#).unwrap();
        assert!(point.strict);
        let loose: RoutePoint = serde_json::from_str(r#"{"lat": 9.0, "lng": -79.5}"#).unwrap();
        assert!(!loose.strict);
    }

    #[test]
    fn bounds_cover_all_points() {
        let path = DisplayPath(vec![
            GeoPoint { lat: 10.0, lng: -20.0 },
            GeoPoint { lat: -5.0, lng: 30.0 },
            GeoPoint { lat: 2.0, lng: 0.0 },
        ]);
        let bounds = path.bounds().unwrap();
        assert_eq!(bounds.south_west, GeoPoint { lat: -5.0, lng: -20.0 });
        assert_eq!(bounds.north_east, GeoPoint { lat: 10.0, lng: 30.0 });
        assert!(DisplayPath::default().bounds().is_none());
    }
}
