//! Request target resolution
//!
//! Maps a raw request target onto a file inside the root directory. Anything
//! that leaves the root, names a disallowed extension or is not a regular
//! file is rejected here, before any bytes are read.

use crate::logger;
use std::path::{Component, Path, PathBuf};

/// Extensions the server is willing to serve
const ALLOWED_EXTENSIONS: [&str; 3] = ["html", "css", "js"];

/// Outcome of resolving a request target against the root directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Canonicalized path to an existing regular file inside the root
    File(PathBuf),
    /// Target escapes the root or names a disallowed extension
    Forbidden,
    /// Target stays inside the root but no such regular file exists
    NotFound,
}

/// Resolve a raw request target to a servable file path.
///
/// Steps: strip the query string (first `?` onward), strip leading slashes,
/// substitute the index file for an empty target, reject parent-directory
/// components, join with the root, canonicalize both sides and require the
/// canonical root as a component-wise prefix of the canonical candidate.
///
/// The extension allow-list is checked lexically so a disallowed extension
/// yields Forbidden whether or not the file exists. Canonicalization fails
/// for paths that do not exist; after the lexical checks have passed that
/// failure means NotFound.
pub fn resolve(root: &str, target: &str, index: &str) -> Resolution {
    let path_part = target.split('?').next().unwrap_or("");
    let rel = path_part.trim_start_matches('/');
    let rel = if rel.is_empty() { index } else { rel };

    let candidate = Path::new(root).join(rel);

    if !has_allowed_extension(&candidate) {
        return Resolution::Forbidden;
    }

    if Path::new(rel)
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        logger::log_warning(&format!("Path traversal attempt blocked: {target}"));
        return Resolution::Forbidden;
    }

    let Ok(root_canonical) = Path::new(root).canonicalize() else {
        logger::log_error(&format!("Root directory not found or inaccessible: {root}"));
        return Resolution::NotFound;
    };

    let Ok(candidate_canonical) = candidate.canonicalize() else {
        return Resolution::NotFound;
    };

    // Component-wise prefix check, so a sibling directory sharing the root's
    // name as a string prefix does not pass
    if !candidate_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            target,
            candidate_canonical.display()
        ));
        return Resolution::Forbidden;
    }

    if !candidate_canonical.is_file() {
        return Resolution::NotFound;
    }

    Resolution::File(candidate_canonical)
}

fn has_allowed_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext))
}
