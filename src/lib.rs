//! statikd - a minimal static file server.
//!
//! Serves files from a fixed root directory over a restricted subset of
//! HTTP/1.1: one GET request line per connection, one complete response,
//! connection closed. Only `.html`, `.css` and `.js` files inside the root
//! are served; everything else is rejected before any bytes are read.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
