//! Error types returned by the route engine.

use thiserror::Error;

use crate::cost::{ContainerSize, ContainerType};
use crate::models::{Country, TransportMode};

/// Recoverable failures of a route, impact or cost query.
///
/// None of these are fatal; the caller surfaces the message and re-prompts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// No catalog entry for the corridor/mode, or road requested off the one road corridor.
    #[error("no {mode} route from {origin} to {destination}")]
    NotFound {
        origin: Country,
        destination: Country,
        mode: TransportMode,
    },
    /// A required cargo field was not supplied.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    /// A numeric field is out of its allowed range.
    #[error("invalid {field}: {reason}")]
    InvalidRange { field: &'static str, reason: String },
    #[error("{requested} x {size} {container_type} containers exceeds the capacity of {capacity}")]
    CapacityExceeded {
        container_type: ContainerType,
        size: ContainerSize,
        requested: u32,
        capacity: u32,
    },
    /// An identifier (country, mode, container type) could not be parsed.
    #[error("unrecognized {kind} `{value}`")]
    Unrecognized { kind: &'static str, value: String },
}

impl RouteError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn unrecognized(kind: &'static str, value: impl Into<String>) -> Self {
        Self::Unrecognized {
            kind,
            value: value.into(),
        }
    }

    /// Short machine-readable name of the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::MissingField(_) => "missing_field",
            Self::InvalidRange { .. } => "invalid_range",
            Self::CapacityExceeded { .. } => "capacity_exceeded",
            Self::Unrecognized { .. } => "unrecognized",
        }
    }
}

/// Failures while loading a route table.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid route key `{0}`, expected ORIGIN-DESTINATION codes")]
    InvalidKey(String),
    #[error("route {key} ({mode}): {source}")]
    InvalidPoint {
        key: String,
        mode: TransportMode,
        #[source]
        source: RouteError,
    },
    #[error("route {key} ({mode}) needs at least 2 points, got {len}")]
    PathTooShort {
        key: String,
        mode: TransportMode,
        len: usize,
    },
    #[error(transparent)]
    Unrecognized(RouteError),
}
