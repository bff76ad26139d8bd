//! JSON API over the episode repository
//!
//! One router, two endpoints:
//!
//! - `GET /episodes?page=<n>&limit=<n>` — one page of episodes
//! - `GET /episodes/{number}` — a single episode by ordinal
//!
//! Query parameters are read leniently: absent or unparsable values fall
//! back to their defaults instead of failing the request. The caller
//! recognizes the last page by receiving fewer episodes than `limit`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use mfmepisodes::{Episode, EpisodeStore};
use serde::Serialize;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

/// Page used when the `page` parameter is absent or unparsable
const DEFAULT_PAGE: usize = 1;

/// Shared state of the episodes API
#[derive(Clone)]
struct ApiState {
    store: Arc<EpisodeStore>,
    default_limit: usize,
}

/// Successful listing payload
#[derive(Serialize)]
struct EpisodeListResponse {
    episodes: Vec<Episode>,
}

/// Error payload; carries no internal detail
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Build the episodes API router
///
/// `default_limit` is the page size used when the client sends none;
/// the application wires it from the site configuration.
pub fn episodes_api_router(store: Arc<EpisodeStore>, default_limit: usize) -> Router {
    let state = ApiState {
        store,
        default_limit,
    };

    Router::new()
        .route("/episodes", get(list_episodes))
        .route("/episodes/{number}", get(get_episode))
        .with_state(state)
}

/// `GET /episodes` — one page of the snapshot
async fn list_episodes(
    State(state): State<ApiState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<EpisodeListResponse> {
    let page = parse_param(&params, "page").unwrap_or(DEFAULT_PAGE);
    let limit = parse_param(&params, "limit").unwrap_or(state.default_limit);

    Json(EpisodeListResponse {
        episodes: state.store.page(page, limit),
    })
}

/// `GET /episodes/{number}` — a single episode by ordinal
async fn get_episode(
    State(state): State<ApiState>,
    Path(number): Path<String>,
) -> Result<Json<Episode>, (StatusCode, Json<ErrorResponse>)> {
    let found = number
        .parse::<u32>()
        .ok()
        .and_then(|n| state.store.by_number(n));

    match found {
        Some(episode) => Ok(Json(episode)),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Episode not found: {}", number),
            }),
        )),
    }
}

/// Read one query parameter, ignoring anything that does not parse
fn parse_param<T: FromStr>(params: &HashMap<String, String>, key: &str) -> Option<T> {
    params.get(key).and_then(|value| value.parse().ok())
}
