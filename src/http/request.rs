use std::fmt;

/// HTTP request method token.
///
/// Only `GET` is served; every other token is answered with 405 Method Not
/// Allowed. Matching is case-sensitive, so `get` is `Other`, not `Get`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Get,
    Other(String),
}

impl Method {
    /// Classifies a method token.
    ///
    /// # Example
    ///
    /// ```
    /// # use hello_listener::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Method::Get);
    /// assert_eq!(Method::from_token("get"), Method::Other("get".into()));
    /// ```
    pub fn from_token(s: &str) -> Self {
        match s {
            "GET" => Method::Get,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Other(token) => token,
        }
    }

    /// Whether the server answers this method with a routed response.
    pub fn is_supported(&self) -> bool {
        *self == Method::Get
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The parts of a request line the server looks at.
///
/// Headers are never stored and bodies are never read, so a request is just
/// the three request-line tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The method token
    pub method: Method,
    /// The request target exactly as sent (e.g., "/health")
    pub path: String,
    /// Protocol version token; logged, never validated
    pub version: String,
}
