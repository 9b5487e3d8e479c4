//! REST API handlers for cookie jar operations
//!
//! This module implements HTTP endpoints for creating jars, putting
//! cookies in, taking them out and moving them between jars.

use super::{
    bag::{Bag, CookieJar},
    helpers::{format_jar_summary, get_or_create_jar_id, jar_view},
    models::*,
    state::{SharedState, TransferError},
};
use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use dashmap::mapref::entry::Entry;
use tracing::{debug, info};

type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

/// Creates routes for jar-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/jars", post(create_jar).get(list_jars))
        .route("/jars/:jar_id", get(get_jar).delete(delete_jar))
        .route("/jars/:jar_id/cookies", post(insert_cookies).delete(remove_cookie))
        .route("/jars/:jar_id/transfer", post(transfer_cookies))
}

fn jar_not_found(jar_id: &str) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::new(format!("Jar not found: {}", jar_id))),
    )
}

fn bad_request(rejection: JsonRejection) -> (StatusCode, Json<ApiError>) {
    invalid_body(rejection.body_text())
}

fn invalid_body(details: impl Into<String>) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError::with_details("Invalid request body", details)),
    )
}

/// Reads the optional create-jar body. Only an empty body means "defaults".
fn parse_create_input(body: &[u8]) -> ApiResult<CreateJarInput> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CreateJarInput::default());
    }

    let input: CreateJarInput =
        serde_json::from_slice(body).map_err(|e| invalid_body(e.to_string()))?;
    if input.jar_id.as_deref().is_some_and(|id| id.trim().is_empty()) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::new("Jar id cannot be blank")),
        ));
    }
    Ok(input)
}

/// Endpoint: GET /health
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Endpoint: POST /jars
/// Creates an empty jar. The body may be empty; if present it must be valid.
async fn create_jar(
    State(state): State<SharedState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<JarView>)> {
    let input = parse_create_input(&body)?;
    let jar_id = get_or_create_jar_id(input.jar_id);

    match state.jars.entry(jar_id.clone()) {
        Entry::Occupied(_) => Err((
            StatusCode::CONFLICT,
            Json(ApiError::new(format!("Jar already exists: {}", jar_id))),
        )),
        Entry::Vacant(slot) => {
            let jar = slot.insert(CookieJar::new());
            info!("Created jar {}", jar_id);
            Ok((StatusCode::CREATED, Json(jar_view(&jar_id, &jar))))
        }
    }
}

/// Endpoint: GET /jars
async fn list_jars(State(state): State<SharedState>) -> Json<JarListResponse> {
    let mut jars: Vec<JarView> = state
        .jars
        .iter()
        .map(|entry| jar_view(entry.key(), entry.value()))
        .collect();
    jars.sort_by(|a, b| a.jar_id.cmp(&b.jar_id));

    Json(JarListResponse { jars })
}

/// Endpoint: GET /jars/:jar_id
async fn get_jar(
    State(state): State<SharedState>,
    Path(jar_id): Path<String>,
) -> ApiResult<Json<JarView>> {
    let jar = state.jars.get(&jar_id).ok_or_else(|| jar_not_found(&jar_id))?;
    Ok(Json(jar_view(&jar_id, &jar)))
}

/// Endpoint: DELETE /jars/:jar_id
/// Discards the jar together with whatever cookies are left in it.
async fn delete_jar(
    State(state): State<SharedState>,
    Path(jar_id): Path<String>,
) -> ApiResult<StatusCode> {
    let (_, jar) = state.jars.remove(&jar_id).ok_or_else(|| jar_not_found(&jar_id))?;
    info!("Discarded jar {} ({})", jar_id, format_jar_summary(&jar));
    Ok(StatusCode::NO_CONTENT)
}

/// Endpoint: POST /jars/:jar_id/cookies
/// Bakes `quantity` fresh cookies of one flavor and puts them in the jar.
async fn insert_cookies(
    State(state): State<SharedState>,
    Path(jar_id): Path<String>,
    body: Result<Json<InsertCookiesInput>, JsonRejection>,
) -> ApiResult<Json<JarView>> {
    let Json(input) = body.map_err(bad_request)?;
    if !(1..=MAX_QUANTITY).contains(&input.quantity) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::new(format!(
                "Quantity must be between 1 and {}",
                MAX_QUANTITY
            ))),
        ));
    }

    let mut jar = state.jars.get_mut(&jar_id).ok_or_else(|| jar_not_found(&jar_id))?;
    for _ in 0..input.quantity {
        jar.insert(Cookie::new(input.flavor));
    }
    debug!("Inserted {}x {} into jar {}", input.quantity, input.flavor, jar_id);

    Ok(Json(jar_view(&jar_id, &jar)))
}

/// Endpoint: DELETE /jars/:jar_id/cookies
/// Takes out an arbitrary cookie. An empty jar answers with `"cookie": null`.
async fn remove_cookie(
    State(state): State<SharedState>,
    Path(jar_id): Path<String>,
) -> ApiResult<Json<RemoveCookieResponse>> {
    let mut jar = state.jars.get_mut(&jar_id).ok_or_else(|| jar_not_found(&jar_id))?;
    let cookie = jar.remove();

    match &cookie {
        Some(cookie) => debug!("Took a {} out of jar {}", cookie, jar_id),
        None => debug!("Jar {} is empty, nothing to take", jar_id),
    }

    Ok(Json(RemoveCookieResponse {
        cookie: cookie.as_ref().map(CookieView::from),
        jar: jar_view(&jar_id, &jar),
    }))
}

/// Endpoint: POST /jars/:jar_id/transfer
/// Moves every cookie into the target jar.
async fn transfer_cookies(
    State(state): State<SharedState>,
    Path(jar_id): Path<String>,
    body: Result<Json<TransferInput>, JsonRejection>,
) -> ApiResult<Json<TransferResponse>> {
    let Json(input) = body.map_err(bad_request)?;
    let target_id = input.target_jar_id;

    let response = state.transfer(&jar_id, &target_id).map_err(|e| match e {
        TransferError::SameJar => (
            StatusCode::BAD_REQUEST,
            Json(ApiError::new("Cannot transfer a jar into itself")),
        ),
        TransferError::UnknownJar(id) => jar_not_found(&id),
    })?;
    info!(
        "Transferred {} cookie(s) from {} to {}",
        response.moved, jar_id, target_id
    );

    Ok(Json(response))
}
