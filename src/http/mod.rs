//! HTTP protocol layer module
//!
//! Response builders shared by the request handler, decoupled from dispatch logic.

pub mod response;

pub use response::{build_405_response, build_options_response, build_view_response};
