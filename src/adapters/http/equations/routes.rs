//! Route configuration for the equation endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{generate_docx, healthz, index, EquationAppState};

/// Creates the router with all endpoints.
///
/// Routes:
/// - `GET /` - Embedded HTML form
/// - `GET /healthz` - Liveness probe
/// - `POST /api/docx` - Batch conversion to docx
pub fn equation_router() -> Router<EquationAppState> {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route("/api/docx", post(generate_docx))
}
