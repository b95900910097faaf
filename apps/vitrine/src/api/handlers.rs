//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.
//!
//! Untrusted input crosses the boundary here, so every handler funnels its
//! query parameters through `validate_url_params` and the field validators
//! before anything reaches the core.

use super::{
    AppState,
    types::{
        FavoriteRequest, FavoritesResponse, HallStatsJson, HallsResponse, HealthResponse,
        LanguageRequest, LanguageResponse, RecordJson, RecordResponse, RecordsResponse,
        SearchRequest, SearchResponse, StatusResponse, ToggleResponse,
    },
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::collections::BTreeMap;
use vitrine_core::{
    Hall, Language, RecordId, is_valid_hall, is_valid_id, is_valid_language, sanitize_search_input,
    validate_url_params,
};

/// The category sentinel meaning "no category filter" on the API surface.
const ALL_CATEGORIES: &str = "all";

/// Default page size for record listings.
const DEFAULT_PAGE_LIMIT: usize = 12;

/// Upper bound on requested page sizes.
const MAX_PAGE_LIMIT: usize = 100;

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// STATUS HANDLER
// =============================================================================

/// Get catalog status.
pub async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.session.read().await;
    let stats = session.designation_stats();

    let response = StatusResponse {
        record_count: session.catalog().len(),
        featured_count: session.catalog().featured().len(),
        favorites_count: session.favorites_count(),
        language: session.language().code().to_string(),
        national_treasures: stats.national_treasures,
        treasures: stats.treasures,
    };

    (StatusCode::OK, Json(response))
}

// =============================================================================
// HALLS HANDLER
// =============================================================================

/// Per-hall breakdown with designation stats. All five halls are always
/// reported, zero counts included.
pub async fn halls_handler(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.session.read().await;

    let halls = Hall::ALL
        .into_iter()
        .map(|hall| HallStatsJson::new(hall, &session.hall_stats(hall)))
        .collect();

    (StatusCode::OK, Json(HallsResponse { halls }))
}

// =============================================================================
// RECORD LISTING HANDLERS
// =============================================================================

/// Paginated record listing: `GET /records?page=&limit=&hall=`.
pub async fn records_handler(
    State(state): State<AppState>,
    Query(raw_params): Query<BTreeMap<String, String>>,
) -> impl IntoResponse {
    let params = validate_url_params(&raw_params);

    let page = params
        .get("page")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(1);
    let limit = params
        .get("limit")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(DEFAULT_PAGE_LIMIT)
        .clamp(1, MAX_PAGE_LIMIT);

    let hall = match params.get("hall") {
        Some(value) => {
            if !is_valid_hall(value) {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(RecordsResponse::error(format!("Invalid hall: {value}"))),
                );
            }
            Hall::from_input(value)
        }
        None => None,
    };

    let session = state.session.read().await;
    let window = session.page(page, limit, hall);
    let records = window
        .records
        .iter()
        .filter_map(|record| RecordJson::from_session(record, &session))
        .collect();

    (
        StatusCode::OK,
        Json(RecordsResponse::success(
            records,
            window.total,
            page,
            limit,
            window.has_more,
        )),
    )
}

/// Single record lookup: `GET /records/{id}`.
pub async fn record_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> impl IntoResponse {
    if !is_valid_id(&raw_id) {
        return (
            StatusCode::BAD_REQUEST,
            Json(RecordResponse::error(format!("Invalid record id: {raw_id}"))),
        );
    }
    let Ok(id) = raw_id.parse::<u32>() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(RecordResponse::error(format!("Invalid record id: {raw_id}"))),
        );
    };

    let session = state.session.read().await;
    match session
        .get(RecordId(id))
        .and_then(|record| RecordJson::from_session(record, &session))
    {
        Some(record) => (StatusCode::OK, Json(RecordResponse::success(record))),
        None => (
            StatusCode::NOT_FOUND,
            Json(RecordResponse::error(format!("Record {id} not found"))),
        ),
    }
}

// =============================================================================
// SEARCH HANDLER
// =============================================================================

/// Execute a search: `POST /search`.
///
/// The term is sanitized before filtering; an empty (or fully sanitized
/// away) term yields an empty result by the filter engine's policy.
pub async fn search_handler(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> impl IntoResponse {
    let session = state.session.read().await;

    let language = match &request.language {
        Some(code) => {
            if !is_valid_language(session.catalog().config(), code) {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(SearchResponse::error(format!("Invalid language: {code}"))),
                );
            }
            match Language::from_code(code) {
                Some(lang) => lang,
                None => {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(SearchResponse::error(format!("Invalid language: {code}"))),
                    );
                }
            }
        }
        None => session.language(),
    };

    let term = sanitize_search_input(&request.term);
    let category = request.category.as_deref().unwrap_or(ALL_CATEGORIES);

    let records = session
        .catalog()
        .search(&term, category, language, ALL_CATEGORIES)
        .into_iter()
        .filter_map(|record| {
            RecordJson::project(record, language, session.is_favorite(record.id))
        })
        .collect();

    (StatusCode::OK, Json(SearchResponse::success(records)))
}

// =============================================================================
// FAVORITES HANDLERS
// =============================================================================

/// List favorites: `GET /favorites`.
pub async fn favorites_list_handler(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.session.read().await;
    (
        StatusCode::OK,
        Json(FavoritesResponse::success(session.favorites().to_raw_ids())),
    )
}

/// Add a favorite: `POST /favorites`.
pub async fn favorite_add_handler(
    State(state): State<AppState>,
    Json(request): Json<FavoriteRequest>,
) -> impl IntoResponse {
    if !RecordId(request.id).in_range() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ToggleResponse::error(
                request.id,
                format!("Invalid record id: {}", request.id),
            )),
        );
    }

    let mut session = state.session.write().await;
    session.add_favorite(RecordId(request.id));
    (
        StatusCode::OK,
        Json(ToggleResponse::success(request.id, true)),
    )
}

/// Toggle a favorite: `POST /favorites/toggle`.
pub async fn favorite_toggle_handler(
    State(state): State<AppState>,
    Json(request): Json<FavoriteRequest>,
) -> impl IntoResponse {
    if !RecordId(request.id).in_range() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ToggleResponse::error(
                request.id,
                format!("Invalid record id: {}", request.id),
            )),
        );
    }

    let mut session = state.session.write().await;
    let now_member = session.toggle_favorite(RecordId(request.id));
    (
        StatusCode::OK,
        Json(ToggleResponse::success(request.id, now_member)),
    )
}

/// Remove a favorite: `DELETE /favorites/{id}`.
pub async fn favorite_remove_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> impl IntoResponse {
    if !is_valid_id(&raw_id) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ToggleResponse::error(0, format!("Invalid record id: {raw_id}"))),
        );
    }
    let Ok(id) = raw_id.parse::<u32>() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ToggleResponse::error(0, format!("Invalid record id: {raw_id}"))),
        );
    };

    let mut session = state.session.write().await;
    session.remove_favorite(RecordId(id));
    (StatusCode::OK, Json(ToggleResponse::success(id, false)))
}

/// Clear all favorites: `DELETE /favorites`.
pub async fn favorites_clear_handler(State(state): State<AppState>) -> impl IntoResponse {
    let mut session = state.session.write().await;
    session.clear_favorites();
    (StatusCode::OK, Json(FavoritesResponse::success(vec![])))
}

// =============================================================================
// LANGUAGE HANDLERS
// =============================================================================

/// Get the active language and the supported set: `GET /language`.
pub async fn language_get_handler(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.session.read().await;
    (StatusCode::OK, Json(LanguageResponse::success(&session)))
}

/// Change the active language: `PUT /language`.
pub async fn language_put_handler(
    State(state): State<AppState>,
    Json(request): Json<LanguageRequest>,
) -> impl IntoResponse {
    let mut session = state.session.write().await;

    let Some(language) = Language::from_code(&request.language) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(LanguageResponse::error(format!(
                "Invalid language: {}",
                request.language
            ))),
        );
    };

    match session.set_language(language) {
        Ok(()) => (StatusCode::OK, Json(LanguageResponse::success(&session))),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(LanguageResponse::error(e.to_string())),
        ),
    }
}
