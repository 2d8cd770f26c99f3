//! Mock data module
//!
//! Fixed payloads served by the emulated Face API. Nothing here is mutated
//! after process start.

mod faces;
mod types;

pub use faces::MOCK_FACES;
pub use types::{ErrorResponse, StatusResponse};
