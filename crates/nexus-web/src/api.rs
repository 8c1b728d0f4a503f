//! Route handlers.
//!
//! Every route decodes its JSON body into an all-optional struct, validates by
//! hand, calls one core service, and wraps the result in the fixed
//! `{success, data}` envelope. Logic lives in `nexus-core`, not here.
//!
//! Routes:
//! - GET  /health - liveness probe
//! - POST /api/haunted-journal - classify a journal entry's emotion
//! - GET  /api/haunted-locations - list the haunted-location catalog
//! - GET  /api/haunted-locations/:id - one catalog entry
//! - POST /api/reanimator - fetch an archived snapshot of a page
//! - POST /api/frankenstein-stitch - combine two external sources

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use nexus_core::{locations, stitch, Emotion, HauntedLocation, NormalizedResponse, UtcDateTime};

use crate::error::ApiError;
use crate::state::AppState;

/// Fixed success envelope around every route's data payload.
#[derive(Debug, Serialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: T,
}

fn ok<T: Serialize>(data: T) -> Json<ApiEnvelope<T>> {
    Json(ApiEnvelope {
        success: true,
        data,
    })
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/haunted-journal", post(haunted_journal))
        .route("/api/haunted-locations", get(haunted_locations))
        .route("/api/haunted-locations/:id", get(haunted_location_by_id))
        .route("/api/reanimator", post(reanimate))
        .route("/api/frankenstein-stitch", post(frankenstein_stitch))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[derive(Debug, Deserialize)]
struct JournalRequest {
    entry: Option<String>,
}

#[derive(Debug, Serialize)]
struct JournalData {
    emotion: Emotion,
    timestamp: UtcDateTime,
}

async fn haunted_journal(
    body: Option<Json<JournalRequest>>,
) -> Result<Json<ApiEnvelope<JournalData>>, ApiError> {
    let entry = body
        .and_then(|Json(request)| request.entry)
        .ok_or_else(|| ApiError::invalid_request("Journal entry is required"))?;

    if entry.trim().is_empty() {
        return Err(ApiError::invalid_request("Journal entry cannot be empty"));
    }

    Ok(ok(JournalData {
        emotion: Emotion::classify(&entry),
        timestamp: UtcDateTime::now(),
    }))
}

#[derive(Debug, Serialize)]
struct LocationsData {
    locations: Vec<HauntedLocation>,
}

async fn haunted_locations() -> Json<ApiEnvelope<LocationsData>> {
    ok(LocationsData {
        locations: locations::all(),
    })
}

#[derive(Debug, Serialize)]
struct LocationData {
    location: HauntedLocation,
}

async fn haunted_location_by_id(
    Path(id): Path<String>,
) -> Result<Json<ApiEnvelope<LocationData>>, ApiError> {
    match locations::find(&id) {
        Some(location) => Ok(ok(LocationData { location })),
        None => Err(ApiError::not_found(
            "LOCATION_NOT_FOUND",
            "Location not found",
            Some(format!("No location found with ID: {id}")),
        )),
    }
}

#[derive(Debug, Deserialize)]
struct ReanimateRequest {
    url: Option<String>,
}

#[derive(Debug, Serialize)]
struct ReanimateData {
    original_html: String,
    archive_date: String,
    archive_url: String,
}

async fn reanimate(
    State(state): State<AppState>,
    body: Option<Json<ReanimateRequest>>,
) -> Result<Json<ApiEnvelope<ReanimateData>>, ApiError> {
    let url = body.and_then(|Json(request)| request.url).ok_or_else(|| {
        ApiError::bad_request(
            "MISSING_URL",
            "URL is required",
            Some(String::from("Please provide a URL in the request body")),
        )
    })?;

    if url.trim().is_empty() {
        return Err(ApiError::bad_request(
            "INVALID_URL",
            "URL cannot be empty",
            Some(String::from("Please provide a valid URL")),
        ));
    }

    let snapshot = state.snapshots.fetch(&url).await.map_err(|error| {
        if error.is_invalid_url() {
            ApiError::bad_request("INVALID_URL", error.to_string(), None)
        } else {
            ApiError::not_found(
                "WAYBACK_ERROR",
                error.to_string(),
                Some(String::from(
                    "Failed to fetch archived version from Wayback Machine",
                )),
            )
        }
    })?;

    Ok(ok(ReanimateData {
        original_html: snapshot.html,
        archive_date: snapshot.archive_date,
        archive_url: snapshot.archive_url,
    }))
}

#[derive(Debug, Deserialize)]
struct StitchRequest {
    api1: Option<String>,
    api2: Option<String>,
}

#[derive(Debug, Serialize)]
struct StitchData {
    stitched_output: String,
    api1_data: NormalizedResponse,
    api2_data: NormalizedResponse,
}

async fn frankenstein_stitch(
    State(state): State<AppState>,
    body: Option<Json<StitchRequest>>,
) -> Result<Json<ApiEnvelope<StitchData>>, ApiError> {
    let missing = || {
        ApiError::bad_request(
            "MISSING_APIS",
            "Both api1 and api2 are required",
            Some(String::from(
                "Please provide both API selections in the request body",
            )),
        )
    };

    let Some(Json(request)) = body else {
        return Err(missing());
    };
    let (Some(api1), Some(api2)) = (request.api1, request.api2) else {
        return Err(missing());
    };

    if api1.trim().is_empty() || api2.trim().is_empty() {
        return Err(ApiError::bad_request(
            "INVALID_APIS",
            "API selections cannot be empty",
            Some(String::from("Please provide valid API names")),
        ));
    }

    if api1 == api2 {
        return Err(ApiError::bad_request(
            "SAME_APIS",
            "Please select two different APIs",
            Some(String::from("The Frankenstein method requires different limbs")),
        ));
    }

    let api1_data = state.sources.fetch_named(&api1).await.map_err(|error| {
        ApiError::upstream(
            "API1_ERROR",
            format!("Failed to fetch data from {api1}"),
            Some(error.to_string()),
        )
    })?;

    let api2_data = state.sources.fetch_named(&api2).await.map_err(|error| {
        ApiError::upstream(
            "API2_ERROR",
            format!("Failed to fetch data from {api2}"),
            Some(error.to_string()),
        )
    })?;

    let stitched_output = stitch(&api1_data, &api2_data);

    Ok(ok(StitchData {
        stitched_output,
        api1_data,
        api2_data,
    }))
}
