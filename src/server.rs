//! HTTP entry point: a single `GET /` route taking a JSON filter body.
//!
//! Every request gets an `x-request-id` (generated unless the caller sent
//! one), is traced with that id, and has the id echoed on the response.
//! A panicking handler is turned into a 500 response.

use crate::service::{GetPlayersQuery, PlayersResponse, Service, ServiceResponse};
use crate::storage::Players;
use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{Request, StatusCode},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the router around a shared service.
pub fn router<P>(service: Arc<Service<P>>) -> Router
where
    P: Players + Send + Sync + 'static,
{
    let trace = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            let request_id = request
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-");
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id,
            )
        })
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Layers run outermost-last: the id is set before tracing and copied back
    // onto the response, including responses built from a caught panic.
    Router::new()
        .route("/", get(get_players::<P>))
        .with_state(service)
        .layer(CatchPanicLayer::new())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(trace)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Decode the filter from the request body and run the query.
///
/// The body is JSON even though the method is GET. The transport status is
/// always 200; the response's own status marker is only logged.
async fn get_players<P>(State(service): State<Arc<Service<P>>>, body: Bytes) -> Json<PlayersResponse>
where
    P: Players + Send + Sync + 'static,
{
    let query = match serde_json::from_slice::<GetPlayersQuery>(&body) {
        Ok(query) => query,
        Err(e) => {
            tracing::warn!(error = %e, "failed to decode request");
            return Json(ServiceResponse::failure(StatusCode::BAD_REQUEST, None));
        }
    };

    let response = service.get_players(query);
    tracing::info!(
        status = response.status_code.as_u16(),
        players = response.data.as_ref().map_or(0, Vec::len),
        "players query"
    );

    Json(response)
}
