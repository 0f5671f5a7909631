pub mod apis;
pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod observability;

// Layered boundaries: ports and shared request plumbing, and their adapters
pub mod app;
pub mod infra;

pub use apis::TraceApi;
pub use app::ports::{HttpMethod, TransportPort};
pub use error::{ApiError, Result};
