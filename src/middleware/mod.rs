// ABOUTME: HTTP middleware for request tracing, CORS, and request ID propagation
// ABOUTME: Layers are assembled into a single stack by the server module

/// CORS configuration
pub mod cors;
/// Request ID generation
pub mod request_id;

pub use cors::setup_cors;
pub use request_id::{request_id_of, MakeRequestUuidV4, REQUEST_ID_HEADER};
