//! Named freight terminals at the ends of the catalog corridors.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{GeoPoint, TransportMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalKind {
    Port,
    Airport,
    BorderCrossing,
}

impl TerminalKind {
    /// Terminal kind that handles `mode`.
    pub fn serving(mode: TransportMode) -> Self {
        match mode {
            TransportMode::Road => TerminalKind::BorderCrossing,
            TransportMode::Sea => TerminalKind::Port,
            TransportMode::Air => TerminalKind::Airport,
        }
    }
}

impl fmt::Display for TerminalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TerminalKind::Port => "port",
            TerminalKind::Airport => "airport",
            TerminalKind::BorderCrossing => "border crossing",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Terminal {
    pub name: &'static str,
    pub kind: TerminalKind,
    pub location: GeoPoint,
}

const fn terminal(name: &'static str, kind: TerminalKind, lat: f64, lng: f64) -> Terminal {
    Terminal {
        name,
        kind,
        location: GeoPoint { lat, lng },
    }
}

pub static TERMINALS: [Terminal; 16] = [
    terminal("Puerto de Altamira", TerminalKind::Port, 22.4883, -97.858),
    terminal("Aeropuerto de Tampico", TerminalKind::Airport, 22.2915, -97.8661),
    terminal("Nuevo Laredo crossing", TerminalKind::BorderCrossing, 27.4763, -99.5164),
    terminal("Laredo crossing", TerminalKind::BorderCrossing, 27.5064, -99.5075),
    terminal("Port of Shanghai", TerminalKind::Port, 31.2304, 121.4737),
    terminal("Shanghai Pudong International Airport", TerminalKind::Airport, 31.1443, 121.8083),
    terminal("Port of Los Angeles", TerminalKind::Port, 33.7406, -118.26),
    terminal("Los Angeles International Airport", TerminalKind::Airport, 33.9416, -118.4085),
    terminal("Port of Hamburg", TerminalKind::Port, 53.5453, 9.9866),
    terminal("Frankfurt Airport", TerminalKind::Airport, 50.0379, 8.5622),
    terminal("Port of Rotterdam", TerminalKind::Port, 51.885, 4.2867),
    terminal("Amsterdam Airport Schiphol", TerminalKind::Airport, 52.3105, 4.7683),
    terminal("Port of Busan", TerminalKind::Port, 35.1796, 129.0756),
    terminal("Gimhae International Airport", TerminalKind::Airport, 35.1795, 128.9382),
    terminal("Port of Yokohama", TerminalKind::Port, 35.4437, 139.638),
    terminal("Narita International Airport", TerminalKind::Airport, 35.772, 140.3929),
];

/// Closest terminal serving `mode`, by planar degree distance. The point's
/// longitude is wrapped first so extended-longitude path ends still match.
pub fn nearest_terminal(point: &GeoPoint, mode: TransportMode) -> Option<&'static Terminal> {
    let kind = TerminalKind::serving(mode);
    let point = point.wrapped();
    TERMINALS
        .iter()
        .filter(|terminal| terminal.kind == kind)
        .min_by(|a, b| {
            a.location
                .planar_distance(&point)
                .total_cmp(&b.location.planar_distance(&point))
        })
}
