//! Server module
//!
//! Listener setup and the accept loop.

pub mod connection;
pub mod listener;

// Re-export commonly used functions
pub use listener::create_listener;

use crate::config::Config;
use crate::logger;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Accept connections forever, spawning one task per connection.
///
/// Connection failures never reach this loop; accept failures are logged and
/// the loop keeps going.
pub async fn run(listener: TcpListener, config: Arc<Config>) {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                if config.logging.access_log {
                    logger::log_connection_accepted(&peer_addr);
                }
                connection::spawn_connection(stream, peer_addr, Arc::clone(&config));
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
