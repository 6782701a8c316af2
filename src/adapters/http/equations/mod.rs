//! HTTP adapter for the equation conversion endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{DocxRequest, ErrorResponse, RequestShapeError};
pub use handlers::EquationAppState;
pub use routes::equation_router;
