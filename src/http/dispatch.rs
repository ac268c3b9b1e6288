//! Request dispatch: buffer, decode, route, execute.
//!
//! # Data Flow
//! ```text
//! Request
//!     → buffer the whole body
//!     → body.rs (decode by Content-Type)
//!     → routing (first matching route in table order)
//!     → lock store, run the handler to completion, unlock
//!     → JSON response (or plain-text 404 when nothing matched)
//! ```

use std::sync::PoisonError;
use std::time::Instant;

use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, State},
    http::{header, Method, Request, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, info};

use crate::catalog::CatalogStore;
use crate::handlers::{albums, artists, songs};
use crate::http::body::RequestBody;
use crate::http::request::request_id;
use crate::http::response::{ApiError, ApiResult};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::routing::Action;

/// Route label used when no route matched.
const NO_ROUTE: &str = "none";

/// Fallback handler that serves every request.
pub async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request_id(&request);
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    info!(request_id = %request_id, "{} {}", method, request.uri());

    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let (route, result) = match Bytes::from_request(request, &state).await {
        Ok(bytes) => match RequestBody::decode(content_type.as_deref(), &bytes) {
            Ok(body) => {
                if !body.is_empty() {
                    debug!(request_id = %request_id, body = ?body, "Decoded request body");
                }
                execute(&state, &method, &path, &body)
            }
            Err(e) => (NO_ROUTE, Err(ApiError::from(e))),
        },
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            (NO_ROUTE, Err(ApiError::PayloadTooLarge))
        }
        Err(rejection) => (NO_ROUTE, Err(ApiError::BodyRead(rejection.body_text()))),
    };

    let response = match result {
        Ok(response) => response,
        Err(e) => {
            debug!(request_id = %request_id, route, error = %e, "Request rejected");
            e.into_response()
        }
    };

    metrics::record_request(method.as_str(), response.status().as_u16(), route, start_time);
    response
}

/// Match and run a route with the store locked. Never awaits.
fn execute(
    state: &AppState,
    method: &Method,
    path: &str,
    body: &RequestBody,
) -> (&'static str, ApiResult) {
    let Some(matched) = state.router.match_request(method, path) else {
        return (NO_ROUTE, Err(ApiError::EndpointNotFound));
    };

    let mut store = state.store.lock().unwrap_or_else(PoisonError::into_inner);
    let result = run_action(&mut store, matched.route.action, matched.id, body);
    (matched.route.name, result)
}

fn run_action(
    store: &mut CatalogStore,
    action: Action,
    id: Option<u64>,
    body: &RequestBody,
) -> ApiResult {
    match (action, id) {
        (Action::ListArtists, _) => artists::list(store),
        (Action::CreateArtist, _) => artists::create(store, body),
        (Action::GetArtist, Some(id)) => artists::get(store, id),
        (Action::UpdateArtist, Some(id)) => artists::update(store, id, body),
        (Action::DeleteArtist, Some(id)) => artists::delete(store, id),
        (Action::ListArtistAlbums, Some(id)) => artists::albums(store, id),
        (Action::ListArtistSongs, Some(id)) => artists::songs(store, id),
        (Action::GetAlbum, Some(id)) => albums::get(store, id),
        (Action::CreateAlbum, Some(artist_id)) => albums::create(store, artist_id, body),
        (Action::UpdateAlbum, Some(id)) => albums::update(store, id, body),
        (Action::DeleteAlbum, Some(id)) => albums::delete(store, id),
        (Action::ListAlbumSongs, Some(id)) => albums::songs(store, id),
        (Action::ListTrackNumberSongs, Some(n)) => songs::by_track_number(store, n),
        (Action::GetSong, Some(id)) => songs::get(store, id),
        (Action::CreateSong, Some(album_id)) => songs::create(store, album_id, body),
        (Action::UpdateSong, Some(id)) => songs::update(store, id, body),
        (Action::DeleteSong, Some(id)) => songs::delete(store, id),
        // id routes always capture; a table entry without one is unreachable
        (_, None) => Err(ApiError::EndpointNotFound),
    }
}
