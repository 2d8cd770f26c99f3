//! Request handler module
//!
//! Responsible for request dispatch: drain the body, consult the route
//! table, build the canned response and emit the access line.

pub mod router;

// Re-export main entry point
pub use router::handle_request;
