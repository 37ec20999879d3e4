//! Request handling module
//!
//! Maps one parsed request line to one complete response.

pub mod resolve;

use crate::config::Config;
use crate::http::{mime, RequestLine, Response};
use resolve::Resolution;

/// Produce the response for a single request line.
///
/// A read failure after a successful resolution is an I/O error and
/// propagates to the connection handler, which closes the connection without
/// a response.
pub async fn handle_request(line: &RequestLine, config: &Config) -> std::io::Result<Response> {
    if !line.is_get() {
        return Ok(Response::method_not_allowed());
    }

    match resolve::resolve(&config.files.root, &line.target, &config.files.index) {
        Resolution::Forbidden => Ok(Response::forbidden()),
        Resolution::NotFound => Ok(Response::not_found()),
        Resolution::File(path) => {
            let body = tokio::fs::read(&path).await?;
            let content_type = mime::content_type(path.extension().and_then(|e| e.to_str()));
            Ok(Response::ok(content_type, body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, FilesConfig, HttpConfig, LoggingConfig, ServerConfig};
    use std::sync::atomic::{AtomicU32, Ordering};

    static DIR_SEQ: AtomicU32 = AtomicU32::new(0);

    fn test_config(root: &std::path::Path) -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                workers: None,
            },
            files: FilesConfig {
                root: root.to_string_lossy().into_owned(),
                index: "index.html".to_string(),
            },
            http: HttpConfig {
                max_request_line: 8192,
            },
            logging: LoggingConfig {
                access_log: false,
                access_log_format: "common".to_string(),
                access_log_file: None,
                error_log_file: None,
            },
        }
    }

    fn setup_root() -> std::path::PathBuf {
        let seq = DIR_SEQ.fetch_add(1, Ordering::SeqCst);
        let root = std::env::temp_dir().join(format!(
            "statikd-handler-{}-{seq}",
            std::process::id()
        ));
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("index.html"), "<html>home</html>").unwrap();
        root
    }

    #[tokio::test]
    async fn get_serves_file_bytes() {
        let root = setup_root();
        let config = test_config(&root);
        let line = RequestLine::parse("GET / HTTP/1.1\r\n").unwrap();

        let response = handle_request(&line, &config).await.unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(response.body_len(), "<html>home</html>".len());
    }

    #[tokio::test]
    async fn non_get_is_method_not_allowed() {
        let root = setup_root();
        let config = test_config(&root);

        for raw in ["POST / HTTP/1.1\r\n", "HEAD / HTTP/1.1\r\n", "DELETE /x HTTP/1.1\r\n"] {
            let line = RequestLine::parse(raw).unwrap();
            let response = handle_request(&line, &config).await.unwrap();
            assert_eq!(response.status(), 405);
        }
    }

    #[tokio::test]
    async fn traversal_is_forbidden() {
        let root = setup_root();
        let config = test_config(&root);
        let line = RequestLine::parse("GET /../../etc/passwd HTTP/1.1\r\n").unwrap();

        let response = handle_request(&line, &config).await.unwrap();
        assert_eq!(response.status(), 403);
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let root = setup_root();
        let config = test_config(&root);
        let line = RequestLine::parse("GET /absent.html HTTP/1.1\r\n").unwrap();

        let response = handle_request(&line, &config).await.unwrap();
        assert_eq!(response.status(), 404);
    }
}
