//! HTTP response framing
//!
//! Every response is serialized as a single buffer: status line, three fixed
//! headers, blank line, body. The connection is closed after the write, so
//! `Connection: close` is always set.

/// A complete HTTP response ready to be written to the socket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: u16,
    reason: &'static str,
    content_type: &'static str,
    body: Vec<u8>,
}

impl Response {
    /// 200 response carrying file contents
    pub fn ok(content_type: &'static str, body: Vec<u8>) -> Self {
        Self {
            status: 200,
            reason: "OK",
            content_type,
            body,
        }
    }

    /// 403 response with the generated HTML error page
    pub fn forbidden() -> Self {
        Self::error_page(403, "Forbidden")
    }

    /// 404 response with the generated HTML error page
    pub fn not_found() -> Self {
        Self::error_page(404, "Not Found")
    }

    /// 405 response with the generated HTML error page
    pub fn method_not_allowed() -> Self {
        Self::error_page(405, "Method Not Allowed")
    }

    /// Error response body: `<html><body><h1>Error {code}: {text}</h1></body></html>`
    fn error_page(status: u16, reason: &'static str) -> Self {
        let body = format!("<html><body><h1>Error {status}: {reason}</h1></body></html>");
        Self {
            status,
            reason,
            content_type: "text/html",
            body: body.into_bytes(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body_len(&self) -> usize {
        self.body.len()
    }

    /// Serialize to wire format
    ///
    /// `Content-Length` is always the exact byte length of the body that
    /// follows the blank line.
    pub fn to_bytes(&self) -> Vec<u8> {
        let header = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            self.status,
            self.reason,
            self.content_type,
            self.body.len(),
        );

        let mut bytes = Vec::with_capacity(header.len() + self.body.len());
        bytes.extend_from_slice(header.as_bytes());
        bytes.extend_from_slice(&self.body);
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_response_wire_layout() {
        let response = Response::ok("text/html", b"<html>hi</html>".to_vec());
        let text = String::from_utf8(response.to_bytes()).unwrap();

        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("Content-Type: text/html\r\n"));
        assert!(text.contains("Content-Length: 15\r\n"));
        assert!(text.contains("Connection: close\r\n"));
        assert!(text.ends_with("\r\n\r\n<html>hi</html>"));
    }

    #[test]
    fn error_page_body() {
        let response = Response::not_found();
        let text = String::from_utf8(response.to_bytes()).unwrap();

        assert!(text.starts_with("HTTP/1.1 404 Not Found\r\n"));
        assert!(text.ends_with("<html><body><h1>Error 404: Not Found</h1></body></html>"));
    }

    #[test]
    fn error_statuses() {
        assert_eq!(Response::forbidden().status(), 403);
        assert_eq!(Response::not_found().status(), 404);
        assert_eq!(Response::method_not_allowed().status(), 405);
    }

    #[test]
    fn content_length_matches_body() {
        for response in [
            Response::ok("application/javascript", b"console.log(1);".to_vec()),
            Response::ok("application/octet-stream", vec![0x00, 0x01, 0xFF]),
            Response::forbidden(),
            Response::method_not_allowed(),
        ] {
            let bytes = response.to_bytes();
            let text = String::from_utf8_lossy(&bytes);
            let header_end = text.find("\r\n\r\n").unwrap() + 4;

            let declared: usize = text
                .lines()
                .find_map(|l| l.strip_prefix("Content-Length: "))
                .unwrap()
                .parse()
                .unwrap();

            assert_eq!(declared, bytes.len() - header_end);
            assert_eq!(declared, response.body_len());
        }
    }
}
