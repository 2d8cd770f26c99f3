//! Route matching module
//!
//! Routes are evaluated top to bottom; the first match wins.

use hyper::Method;

/// What the dispatcher does with a matched request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAction {
    /// CORS preflight, empty body
    Preflight,
    /// Server status JSON
    Status,
    /// Canned face detection result
    Detect,
    /// 404 JSON error
    NotFound,
    /// 501 JSON error
    NotImplemented,
}

#[derive(Debug, Clone, Copy)]
pub enum PathRule {
    Any,
    /// Matches when the request target contains the substring anywhere,
    /// query string included
    Contains(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct Route {
    /// Exact method name
    pub method: &'static str,
    pub path: PathRule,
    pub action: RouteAction,
}

const fn route(method: &'static str, path: PathRule, action: RouteAction) -> Route {
    Route {
        method,
        path,
        action,
    }
}

/// The route table
pub static ROUTES: &[Route] = &[
    route("OPTIONS", PathRule::Any, RouteAction::Preflight),
    route("GET", PathRule::Any, RouteAction::Status),
    route("POST", PathRule::Contains("/face/v1.0/detect"), RouteAction::Detect),
    route("POST", PathRule::Contains("/detect"), RouteAction::Detect),
    route("POST", PathRule::Any, RouteAction::NotFound),
];

/// Used when nothing in the table matches
pub const FALLBACK_ACTION: RouteAction = RouteAction::NotImplemented;

/// Find the action for a request.
///
/// `target` is the request target as received (path and query).
pub fn match_route(routes: &[Route], method: &Method, target: &str) -> RouteAction {
    routes
        .iter()
        .find(|route| method.as_str() == route.method && matches_path(route.path, target))
        .map_or(FALLBACK_ACTION, |route| route.action)
}

fn matches_path(rule: PathRule, target: &str) -> bool {
    match rule {
        PathRule::Any => true,
        PathRule::Contains(needle) => target.contains(needle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_any_path() {
        assert_eq!(
            match_route(ROUTES, &Method::OPTIONS, "/anything"),
            RouteAction::Preflight
        );
        assert_eq!(
            match_route(ROUTES, &Method::OPTIONS, "/face/v1.0/detect"),
            RouteAction::Preflight
        );
    }

    #[test]
    fn test_get_any_path() {
        assert_eq!(match_route(ROUTES, &Method::GET, "/"), RouteAction::Status);
        // GET never reaches the detection route
        assert_eq!(
            match_route(ROUTES, &Method::GET, "/face/v1.0/detect"),
            RouteAction::Status
        );
    }

    #[test]
    fn test_post_detect() {
        assert_eq!(
            match_route(
                ROUTES,
                &Method::POST,
                "/face/v1.0/detect?returnFaceAttributes=age,gender"
            ),
            RouteAction::Detect
        );
        assert_eq!(
            match_route(ROUTES, &Method::POST, "/detect"),
            RouteAction::Detect
        );
        assert_eq!(
            match_route(ROUTES, &Method::POST, "/v2/detect/faces"),
            RouteAction::Detect
        );
        assert_eq!(
            match_route(ROUTES, &Method::POST, "/detector"),
            RouteAction::Detect
        );
    }

    #[test]
    fn test_post_detect_in_query() {
        // Loose substring matching covers the query string too
        assert_eq!(
            match_route(ROUTES, &Method::POST, "/other?next=/detect"),
            RouteAction::Detect
        );
    }

    #[test]
    fn test_post_unknown() {
        assert_eq!(
            match_route(ROUTES, &Method::POST, "/unknown/path"),
            RouteAction::NotFound
        );
    }

    #[test]
    fn test_fallback() {
        assert_eq!(
            match_route(ROUTES, &Method::PUT, "/face/v1.0/detect"),
            RouteAction::NotImplemented
        );
        assert_eq!(
            match_route(ROUTES, &Method::HEAD, "/"),
            RouteAction::NotImplemented
        );
        assert_eq!(match_route(&[], &Method::GET, "/"), FALLBACK_ACTION);
    }

    #[test]
    fn test_order_matters() {
        let routes = [
            route("GET", PathRule::Contains("/x"), RouteAction::NotFound),
            route("GET", PathRule::Any, RouteAction::Status),
        ];
        assert_eq!(
            match_route(&routes, &Method::GET, "/x/y"),
            RouteAction::NotFound
        );
        assert_eq!(match_route(&routes, &Method::GET, "/y"), RouteAction::Status);
    }
}
