//! Request line parsing
//!
//! Only the request line is read from a connection; headers are never
//! consumed or honored.

use std::fmt;

/// A parsed `<METHOD> <TARGET> <VERSION>` request line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: String,
    pub target: String,
    pub version: String,
}

/// Errors produced while parsing a request line
///
/// Either variant causes the connection to be dropped without a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestLineError {
    /// Line was missing or contained only whitespace
    Empty,
    /// Fewer than 3 whitespace-separated tokens
    MissingTokens,
}

impl fmt::Display for RequestLineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty request line"),
            Self::MissingTokens => write!(f, "request line has fewer than 3 tokens"),
        }
    }
}

impl std::error::Error for RequestLineError {}

impl RequestLine {
    /// Parse a raw request line; a trailing CRLF or LF is tolerated.
    ///
    /// Tokens past the third are ignored.
    pub fn parse(line: &str) -> Result<Self, RequestLineError> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Err(RequestLineError::Empty);
        }

        let mut tokens = line.split_whitespace();
        let (Some(method), Some(target), Some(version)) =
            (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(RequestLineError::MissingTokens);
        };

        Ok(Self {
            method: method.to_string(),
            target: target.to_string(),
            version: version.to_string(),
        })
    }

    /// Whether the method is GET, the only method this server serves
    pub fn is_get(&self) -> bool {
        self.method == "GET"
    }
}
