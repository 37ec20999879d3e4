//! Connection handling module
//!
//! One task per accepted connection: read one request line, write one
//! response, close. Any I/O failure terminates the connection without a
//! response and without touching the accept loop.

use crate::config::Config;
use crate::handler;
use crate::http::RequestLine;
use crate::logger::{self, AccessLogEntry};
use chrono::Local;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

/// Spawn a task that serves one connection to completion.
pub fn spawn_connection(stream: TcpStream, peer_addr: SocketAddr, config: Arc<Config>) {
    tokio::spawn(async move {
        if let Err(e) = serve_connection(stream, peer_addr, &config).await {
            logger::log_error(&format!("Connection from {peer_addr} failed: {e}"));
        }
    });
}

/// Serve a single connection: one request line in, one response out.
///
/// Malformed input (empty line, fewer than 3 tokens, oversized line,
/// non-UTF-8 bytes) closes the connection with no response written.
async fn serve_connection(
    mut stream: TcpStream,
    peer_addr: SocketAddr,
    config: &Config,
) -> std::io::Result<()> {
    let start = Instant::now();
    let max_line = config.http.max_request_line;

    let (read_half, mut write_half) = stream.split();
    let mut reader = BufReader::new(read_half.take(max_line as u64));

    let mut line = String::new();
    let bytes_read = reader.read_line(&mut line).await?;

    // EOF before any request line
    if bytes_read == 0 {
        return Ok(());
    }

    // The read is capped at max_request_line; hitting the cap without a
    // newline means the line is oversized, which is malformed input
    if !line.ends_with('\n') && bytes_read >= max_line {
        logger::log_warning(&format!(
            "Request line over {max_line} bytes from {peer_addr}, dropping"
        ));
        return Ok(());
    }

    let Ok(request) = RequestLine::parse(&line) else {
        return Ok(());
    };

    let response = handler::handle_request(&request, config).await?;
    write_half.write_all(&response.to_bytes()).await?;
    write_half.shutdown().await?;

    if config.logging.access_log {
        let entry = AccessLogEntry {
            remote_addr: peer_addr.ip().to_string(),
            time: Local::now(),
            method: request.method.clone(),
            target: request.target.clone(),
            http_version: request.version.clone(),
            status: response.status(),
            body_bytes: response.body_len(),
            request_time_us: u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX),
        };
        logger::log_access(&entry, &config.logging.access_log_format);
    }

    Ok(())
}
