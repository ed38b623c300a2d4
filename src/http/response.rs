/// HTTP status codes the server can emit.
///
/// - `Ok` (200): a known path was requested with GET
/// - `NotFound` (404): an unknown path was requested with GET
/// - `MethodNotAllowed` (405): any method other than GET
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use hello_listener::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use hello_listener::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
        }
    }
}

pub const TEXT_PLAIN: &str = "text/plain";
pub const APPLICATION_JSON: &str = "application/json";
pub const TEXT_HTML: &str = "text/html";

/// A complete HTTP response ready to be serialized.
///
/// There is no header map: the writer always emits `Content-Type`,
/// `Content-Length` and `Connection: close`, and the length is taken from
/// `body` at that point so it cannot drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Value of the Content-Type header
    pub content_type: &'static str,
    /// Response body as bytes
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use hello_listener::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .content_type("application/json")
///     .body(b"{}".to_vec())
///     .build();
/// assert_eq!(response.content_length(), 2);
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    content_type: &'static str,
    body: Vec<u8>,
}

impl ResponseBuilder {
    /// Creates a builder with an empty `text/plain` body.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: TEXT_PLAIN,
            body: Vec::new(),
        }
    }

    pub fn content_type(mut self, content_type: &'static str) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Response {
        Response {
            status: self.status,
            content_type: self.content_type,
            body: self.body,
        }
    }
}

impl Response {
    /// 200 OK with a `text/plain` body.
    pub fn text(body: impl Into<Vec<u8>>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .content_type(TEXT_PLAIN)
            .body(body)
            .build()
    }

    /// 200 OK with an `application/json` body.
    pub fn json(body: impl Into<Vec<u8>>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .content_type(APPLICATION_JSON)
            .body(body)
            .build()
    }

    /// HTML page naming the status, e.g.
    /// `<html><body><h1>404 Not Found</h1></body></html>`.
    pub fn error_page(status: StatusCode) -> Self {
        let body = format!(
            "<html><body><h1>{} {}</h1></body></html>",
            status.as_u16(),
            status.reason_phrase()
        );

        ResponseBuilder::new(status)
            .content_type(TEXT_HTML)
            .body(body)
            .build()
    }

    pub fn not_found() -> Self {
        Self::error_page(StatusCode::NotFound)
    }

    pub fn method_not_allowed() -> Self {
        Self::error_page(StatusCode::MethodNotAllowed)
    }

    /// Byte length of the body, as sent in `Content-Length`.
    pub fn content_length(&self) -> usize {
        self.body.len()
    }
}
