//! Request handler module
//!
//! Bridges HTTP requests to the dispatch kernel and renders the outcome.

pub mod router;

// Re-export main entry point
pub use router::{dispatch_request, handle_request};
