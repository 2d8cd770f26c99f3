//! Routing module
//!
//! Classifies a request by method and path through an ordered table:
//! - Method rules (exact method or any)
//! - Path rules (substring or any)
//! - A default action when no route matches

mod matcher;

pub use matcher::{match_route, RouteAction, ROUTES};
