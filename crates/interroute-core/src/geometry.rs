//! Distance math and display-path synthesis.
//!
//! Reference paths (few points, true geography) feed distance and impact math.
//! Display paths (many points, smoothed) are only for drawing, and are built
//! here from a reference path and a transport mode.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::models::{Bounds, DisplayPath, GeoPoint, RoutePath, RoutePoint, TransportMode};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Segments of a transpacific arc (points = segments + 1).
const PACIFIC_ARC_SEGMENTS: usize = 50;
/// Northward bulge of a transpacific arc at its midpoint, in degrees.
const PACIFIC_ARC_BULGE_DEG: f64 = 12.0;
const BEZIER_SEGMENTS: usize = 20;
const BEZIER_ELEVATION_FACTOR: f64 = 0.3;
const TRANSCONTINENTAL_DLNG_DEG: f64 = 90.0;
const SEA_CURVATURE_FACTOR: f64 = 0.03;
const SPLINE_POINTS_PER_SEGMENT: usize = 12;
const SPLINE_TENSION: f64 = 0.5;
const PACIFIC_VIEW_ZOOM: u8 = 3;
const FIT_PADDING_PX: u32 = 20;

/// Great-circle distance between two points in kilometers (haversine).
pub fn great_circle_distance_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let dphi = (b.lat - a.lat).to_radians();
    let dlambda = (b.lng - a.lng).to_radians();
    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Sum of consecutive great-circle segments; 0 for fewer than two points.
pub fn path_distance_km(points: &[GeoPoint]) -> f64 {
    points
        .windows(2)
        .map(|pair| great_circle_distance_km(&pair[0], &pair[1]))
        .sum()
}

/// Distance along a reference path.
pub fn route_distance_km(path: &RoutePath) -> f64 {
    let points: Vec<GeoPoint> = path.geo_points().collect();
    path_distance_km(&points)
}

/// Corridor test for Asia <-> Americas legs that should be drawn across the
/// Pacific. Not a general antimeridian test.
pub fn crosses_antimeridian_pacific(start: &GeoPoint, end: &GeoPoint) -> bool {
    (start.lng < -60.0 && end.lng > 100.0) || (start.lng > 100.0 && end.lng < -60.0)
}

/// Longitude shift (+360 westbound Asia -> Americas, -360 eastbound) that keeps
/// a transpacific leg on one continuous world copy.
pub fn pacific_shift(start: &GeoPoint, end: &GeoPoint) -> Option<f64> {
    if !crosses_antimeridian_pacific(start, end) {
        return None;
    }
    if start.lng > end.lng {
        Some(360.0)
    } else {
        Some(-360.0)
    }
}

/// Build the renderable path for a reference path.
pub fn synthesize_display_path(reference: &RoutePath, mode: TransportMode) -> DisplayPath {
    let points = match mode {
        TransportMode::Air => {
            let start = reference.first();
            let end = reference.last();
            match pacific_shift(&start, &end) {
                Some(shift) => pacific_arc(&start, &end, shift),
                None => bezier_arc(&start, &end),
            }
        }
        TransportMode::Sea if reference.len() == 2 => {
            gentle_sea_curve(&reference.first(), &reference.last())
        }
        TransportMode::Sea => maritime_spline(reference.points()),
        TransportMode::Road => reference.geo_points().collect(),
    };
    DisplayPath(points)
}

fn pacific_arc(start: &GeoPoint, end: &GeoPoint, shift: f64) -> Vec<GeoPoint> {
    let shifted_end = end.shifted_lng(shift);
    let mut points = Vec::with_capacity(PACIFIC_ARC_SEGMENTS + 1);
    points.push(*start);
    for i in 1..PACIFIC_ARC_SEGMENTS {
        let t = i as f64 / PACIFIC_ARC_SEGMENTS as f64;
        points.push(GeoPoint {
            lat: start.lat + (end.lat - start.lat) * t + (t * PI).sin() * PACIFIC_ARC_BULGE_DEG,
            lng: start.lng + (shifted_end.lng - start.lng) * t,
        });
    }
    // Endpoints pinned so sin(pi) residue never moves them.
    points.push(shifted_end);
    points
}

fn bezier_arc(start: &GeoPoint, end: &GeoPoint) -> Vec<GeoPoint> {
    let mid_lat = (start.lat + end.lat) / 2.0;
    let mid_lng = (start.lng + end.lng) / 2.0;
    let elevation = start.planar_distance(end) * BEZIER_ELEVATION_FACTOR;
    let going_east = end.lng > start.lng;

    let control = if (end.lng - start.lng).abs() > TRANSCONTINENTAL_DLNG_DEG {
        GeoPoint {
            lat: mid_lat + elevation,
            lng: mid_lng,
        }
    } else {
        let sideways = elevation * 0.3;
        GeoPoint {
            lat: mid_lat + elevation * 0.5,
            lng: if going_east {
                mid_lng + sideways
            } else {
                mid_lng - sideways
            },
        }
    };

    (0..=BEZIER_SEGMENTS)
        .map(|i| {
            let t = i as f64 / BEZIER_SEGMENTS as f64;
            quadratic_bezier(start, &control, end, t)
        })
        .collect()
}

fn quadratic_bezier(p0: &GeoPoint, c: &GeoPoint, p1: &GeoPoint, t: f64) -> GeoPoint {
    let u = 1.0 - t;
    GeoPoint {
        lat: u * u * p0.lat + 2.0 * u * t * c.lat + t * t * p1.lat,
        lng: u * u * p0.lng + 2.0 * u * t * c.lng + t * t * p1.lng,
    }
}

/// Three-point curve for a direct sea leg. The offset is resolved with
/// sin(mid lng) / cos(mid lat) rather than a true perpendicular; rendered
/// routes depend on these exact numbers.
fn gentle_sea_curve(start: &GeoPoint, end: &GeoPoint) -> Vec<GeoPoint> {
    let mid_lat = (start.lat + end.lat) / 2.0;
    let mid_lng = (start.lng + end.lng) / 2.0;
    let curvature = start.planar_distance(end) * SEA_CURVATURE_FACTOR;
    let mid = GeoPoint {
        lat: mid_lat + curvature * mid_lng.to_radians().sin(),
        lng: mid_lng + curvature * mid_lat.to_radians().cos(),
    };
    vec![*start, mid, *end]
}

fn maritime_spline(points: &[RoutePoint]) -> Vec<GeoPoint> {
    let n = points.len();
    if n < 2 {
        return points.iter().map(|p| p.point).collect();
    }

    let mut out = Vec::with_capacity(1 + (n - 1) * SPLINE_POINTS_PER_SEGMENT);
    out.push(points[0].point);

    for i in 0..n - 1 {
        let current = &points[i];
        let next = &points[i + 1];

        if current.strict || next.strict {
            tracing::debug!(segment = i, "straight segment at strict waypoint");
            for step in 1..=SPLINE_POINTS_PER_SEGMENT {
                let u = step as f64 / SPLINE_POINTS_PER_SEGMENT as f64;
                out.push(lerp(&current.point, &next.point, u));
            }
            continue;
        }

        let p0 = if i > 0 { points[i - 1].point } else { current.point };
        let p3 = if i + 2 < n { points[i + 2].point } else { next.point };
        for step in 1..=SPLINE_POINTS_PER_SEGMENT {
            let u = step as f64 / SPLINE_POINTS_PER_SEGMENT as f64;
            out.push(catmull_rom_point(&p0, &current.point, &next.point, &p3, u));
        }
    }

    out
}

fn lerp(a: &GeoPoint, b: &GeoPoint, t: f64) -> GeoPoint {
    GeoPoint {
        lat: a.lat + (b.lat - a.lat) * t,
        lng: a.lng + (b.lng - a.lng) * t,
    }
}

/// Point on the Catmull-Rom segment p1 -> p2 at `t` in [0, 1].
pub fn catmull_rom_point(
    p0: &GeoPoint,
    p1: &GeoPoint,
    p2: &GeoPoint,
    p3: &GeoPoint,
    t: f64,
) -> GeoPoint {
    let t2 = t * t;
    let t3 = t2 * t;
    let axis = |a: f64, b: f64, c: f64, d: f64| {
        SPLINE_TENSION
            * ((2.0 * b)
                + (-a + c) * t
                + (2.0 * a - 5.0 * b + 4.0 * c - d) * t2
                + (-a + 3.0 * b - 3.0 * c + d) * t3)
    };
    GeoPoint {
        lat: axis(p0.lat, p1.lat, p2.lat, p3.lat),
        lng: axis(p0.lng, p1.lng, p2.lng, p3.lng),
    }
}

/// Marker positions for a drawn route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteMarkers {
    pub start: GeoPoint,
    pub end: GeoPoint,
    /// Vehicle marker halfway along the display path, when it has been densified.
    pub midpoint: Option<GeoPoint>,
}

/// Start/end come from the reference path. On transpacific air legs the
/// destination is moved to the same world copy as the display path.
pub fn route_markers(
    reference: &RoutePath,
    display: &DisplayPath,
    mode: TransportMode,
) -> RouteMarkers {
    let start = reference.first();
    let raw_end = reference.last();
    let end = match (mode, pacific_shift(&start, &raw_end)) {
        (TransportMode::Air, Some(shift)) => raw_end.shifted_lng(shift),
        _ => raw_end,
    };
    let midpoint = if display.len() > 2 {
        display.points().get(display.len() / 2).copied()
    } else {
        None
    };
    RouteMarkers {
        start,
        end,
        midpoint,
    }
}

/// How the map should frame a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MapView {
    Center { center: GeoPoint, zoom: u8 },
    FitBounds { bounds: Bounds, padding_px: u32 },
}

/// Transpacific air legs are centered on the North Pacific; everything else
/// fits the display path.
pub fn map_view(
    reference: &RoutePath,
    display: &DisplayPath,
    mode: TransportMode,
) -> Option<MapView> {
    let start = reference.first();
    let end = reference.last();
    if mode == TransportMode::Air && crosses_antimeridian_pacific(&start, &end) {
        let center = if start.lng > 0.0 && end.lng < 0.0 {
            GeoPoint { lat: 40.0, lng: 180.0 }
        } else if start.lng < 0.0 && end.lng > 0.0 {
            GeoPoint { lat: 40.0, lng: -180.0 }
        } else {
            GeoPoint { lat: 30.0, lng: -150.0 }
        };
        return Some(MapView::Center {
            center,
            zoom: PACIFIC_VIEW_ZOOM,
        });
    }
    display.bounds().map(|bounds| MapView::FitBounds {
        bounds,
        padding_px: FIT_PADDING_PX,
    })
}
