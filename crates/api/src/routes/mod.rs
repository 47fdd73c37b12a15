pub mod health;
pub mod staff;

use axum::Router;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /staff/validate          POST  validate a staff record
/// ```
pub fn api_routes() -> Router {
    Router::new().nest("/staff", staff::router())
}
