//! Request and Response models for the blog frontend API
//!
//! DTOs for the operational endpoints. Page payloads live in `views`.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::RevalidateRequest;
pub use responses::{HealthResponse, RevalidateResponse, StaticParam, StatsResponse};
