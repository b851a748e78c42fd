//! REST API routes.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use interroute_core::{
    estimate, CargoDeclaration, CostEstimate, Country, RoutePlan, ShipmentQuote, TransportMode,
    TransportOption,
};

use crate::api::error::ApiError;
use crate::api::request_id;
use crate::state::AppState;

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/v1/countries", get(list_countries))
        .route("/v1/routes/:origin/:destination", get(transport_options))
        .route("/v1/routes/:origin/:destination/:mode", get(route_plan))
        .route("/v1/quotes", post(create_quote))
        .route("/v1/estimate", post(create_estimate))
        .layer(middleware::from_fn(request_id::ensure_request_id))
}

#[derive(Debug, Serialize)]
pub struct CountrySummary {
    pub code: &'static str,
    pub name: &'static str,
    pub partners: Vec<&'static str>,
}

impl From<Country> for CountrySummary {
    fn from(country: Country) -> Self {
        Self {
            code: country.code(),
            name: country.name(),
            partners: country.partners().into_iter().map(Country::code).collect(),
        }
    }
}

/// Quote body. Identifiers stay strings so unknown values map to 400.
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub origin: String,
    pub destination: String,
    pub mode: String,
    pub cargo: CargoDeclaration,
}

#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    pub mode: String,
    pub cargo: CargoDeclaration,
}

async fn list_countries() -> Json<Vec<CountrySummary>> {
    Json(Country::ALL.into_iter().map(CountrySummary::from).collect())
}

async fn transport_options(
    State(state): State<Arc<AppState>>,
    Path((origin, destination)): Path<(String, String)>,
) -> Result<Json<Vec<TransportOption>>, ApiError> {
    let origin: Country = origin.parse()?;
    let destination: Country = destination.parse()?;
    let options = state.planner().transport_options(origin, destination)?;
    Ok(Json(options))
}

async fn route_plan(
    State(state): State<Arc<AppState>>,
    Path((origin, destination, mode)): Path<(String, String, String)>,
) -> Result<Json<RoutePlan>, ApiError> {
    let origin: Country = origin.parse()?;
    let destination: Country = destination.parse()?;
    let mode: TransportMode = mode.parse()?;
    let plan = state.planner().plan(origin, destination, mode)?;
    Ok(Json(plan))
}

async fn create_quote(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<ShipmentQuote>, ApiError> {
    let Json(request) = payload?;
    let origin: Country = request.origin.parse()?;
    let destination: Country = request.destination.parse()?;
    let mode: TransportMode = request.mode.parse()?;
    let quote = state
        .planner()
        .quote(origin, destination, mode, request.cargo)?;
    tracing::info!(
        "Quoted {} {} -> {}: ${}",
        mode,
        origin.code(),
        destination.code(),
        quote.cost.amount_usd
    );
    Ok(Json(quote))
}

async fn create_estimate(
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> Result<Json<CostEstimate>, ApiError> {
    let Json(request) = payload?;
    let mode: TransportMode = request.mode.parse()?;
    Ok(Json(estimate(mode, &request.cargo)?))
}
