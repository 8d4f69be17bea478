//! HTTP middleware stack for the API.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. CORS (answers preflight before anything else runs)
//! 3. `TraceLayer` (request span, status and latency)
//! 4. Request ID (recorded on the span opened by the trace layer)

pub mod cors;
pub mod request_id;
pub mod trace;

pub use cors::cors_layer;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
pub use trace::trace_layer;
