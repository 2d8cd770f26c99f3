//! HTTP protocol layer module
//!
//! Response builders and header constants, decoupled from routing.

pub mod response;

// Re-export commonly used types
pub use response::{
    build_detect_response, build_not_found_response, build_not_implemented_response,
    build_options_response, build_status_response,
};
