//! Site wide redirect middleware
//!
//! The redirect table is consulted before routing, so configured paths
//! answer 301/302 whether or not a route exists for them. Everything
//! else passes through untouched.
//!
//! The axum `Redirect` helpers answer 308/307, which some feed readers
//! and old crawlers still refuse to follow; the middleware builds plain
//! 301/302 responses instead.

use axum::Router;
use axum::extract::{Request, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use mfmredirect::RedirectTable;
use std::sync::Arc;
use tracing::{debug, warn};

/// Wrap a router so every request consults the redirect table first
pub fn apply_redirects(router: Router, table: Arc<RedirectTable>) -> Router {
    router.layer(middleware::from_fn_with_state(table, redirect_request))
}

/// Answer 301/302 for configured paths, pass everything else through
async fn redirect_request(
    State(table): State<Arc<RedirectTable>>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path();
    let Some(rule) = table.resolve(path) else {
        return next.run(req).await;
    };

    match HeaderValue::from_str(&rule.destination) {
        Ok(location) => {
            debug!(
                "Redirecting {} -> {} ({})",
                path,
                rule.destination,
                rule.status_code()
            );
            let status = if rule.permanent {
                StatusCode::MOVED_PERMANENTLY
            } else {
                StatusCode::FOUND
            };
            (status, [(header::LOCATION, location)]).into_response()
        }
        Err(_) => {
            // A destination that cannot be a Location header cannot redirect
            warn!(
                "Redirect destination for {} is not a valid header value, passing through",
                path
            );
            next.run(req).await
        }
    }
}
