//! HTTP router and monitoring endpoints.

pub mod monitoring;
pub mod routes;

pub use routes::create_router;
