//! MIME type lookup
//!
//! Fixed extension table matching the serve allow-list; anything else falls
//! back to octet-stream.

/// Get MIME Content-Type based on file extension
///
/// # Examples
/// ```
/// use statikd::http::mime::content_type;
/// assert_eq!(content_type(Some("html")), "text/html");
/// assert_eq!(content_type(None), "application/octet-stream");
/// ```
pub fn content_type(extension: Option<&str>) -> &'static str {
    match extension {
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_types() {
        assert_eq!(content_type(Some("html")), "text/html");
        assert_eq!(content_type(Some("css")), "text/css");
        assert_eq!(content_type(Some("js")), "application/javascript");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(content_type(Some("txt")), "application/octet-stream");
        assert_eq!(content_type(Some("htm")), "application/octet-stream");
        assert_eq!(content_type(None), "application/octet-stream");
    }
}
