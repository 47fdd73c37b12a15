//! Route definitions for staff record validation.

use axum::routing::post;
use axum::Router;

use crate::handlers::staff;

/// Validation path used by existing Sipay clients.
pub const LEGACY_VALIDATE_PATH: &str = "/sipy/api/PersonWithFluentValidation";

/// Routes mounted at `/api/v1/staff`.
///
/// ```text
/// POST   /validate     -> validate
/// ```
pub fn router() -> Router {
    Router::new().route("/validate", post(staff::validate))
}

/// Root-level route for [`LEGACY_VALIDATE_PATH`].
pub fn legacy_router() -> Router {
    Router::new().route(LEGACY_VALIDATE_PATH, post(staff::validate))
}
