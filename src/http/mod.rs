//! HTTP wire layer module
//!
//! Request-line parsing, response framing and MIME lookup for the restricted
//! protocol subset this server speaks: one GET request line in, one complete
//! response out, connection closed.

pub mod mime;
pub mod request;
pub mod response;

// Re-export commonly used types
pub use request::{RequestLine, RequestLineError};
pub use response::Response;
