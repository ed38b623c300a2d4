//! The fixed path table.

use crate::http::response::Response;

pub const ROOT_BODY: &str = "Hello, World!";
pub const HEALTH_BODY: &str = r#"{"status": "healthy"}"#;

/// Picks the response for a GET on `path`. Matching is exact: no prefix
/// matching, no query-string stripping, no trailing-slash folding.
pub fn dispatch(path: &str) -> Response {
    match path {
        "/" => Response::text(ROOT_BODY),
        "/health" => Response::json(HEALTH_BODY),
        _ => Response::not_found(),
    }
}
