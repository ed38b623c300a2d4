use thiserror::Error;

use crate::http::request::{Method, Request};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed request line: {0:?}")]
    MalformedRequestLine(String),
}

/// Parses a request line such as `GET /health HTTP/1.1\r\n`.
///
/// Surrounding whitespace and the line terminator are trimmed, then the line
/// is split on every single space. Consecutive spaces yield empty tokens,
/// which still count toward the three required ones.
pub fn parse_request_line(line: &str) -> Result<Request, ParseError> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split(' ').collect();

    if parts.len() < 3 {
        return Err(ParseError::MalformedRequestLine(trimmed.to_string()));
    }

    Ok(Request {
        method: Method::from_token(parts[0]),
        path: parts[1].to_string(),
        version: parts[2].to_string(),
    })
}

/// True for the empty line that ends the header block.
pub fn is_blank_line(line: &[u8]) -> bool {
    line.trim_ascii().is_empty()
}
