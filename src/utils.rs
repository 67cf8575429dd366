//! Utility functions for file naming and path resolution

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Derive a local file name from an image URL
///
/// Uses the last non-empty path segment of the URL. The query string and
/// fragment are never part of the name, and the segment is percent-decoded.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] when the URL does not parse, has no path
/// segment, or its last segment would not be a plain file name.
///
/// # Examples
///
/// ```
/// use xkcd_dl::utils::filename_from_url;
///
/// let name = filename_from_url("https://imgs.xkcd.com/comics/barrel_cropped_(1).jpg?v=2").unwrap();
/// assert_eq!(name, "barrel_cropped_(1).jpg");
/// ```
pub fn filename_from_url(url: &str) -> Result<String> {
    let invalid = |reason: String| Error::InvalidUrl {
        url: url.to_string(),
        reason,
    };

    let parsed = url::Url::parse(url).map_err(|e| invalid(e.to_string()))?;

    let segment = parsed
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).next_back())
        .ok_or_else(|| invalid("URL has no path segment to name the file after".to_string()))?;

    let decoded = urlencoding::decode(segment)
        .map_err(|e| invalid(format!("path segment is not valid UTF-8: {}", e)))?;

    if decoded == "." || decoded == ".." || decoded.contains(['/', '\\']) {
        return Err(invalid(format!("'{}' is not a usable file name", decoded)));
    }

    Ok(decoded.into_owned())
}

/// Resolve an output directory to an absolute path
///
/// Relative paths are resolved against the current working directory. The
/// directory is not required to exist.
pub fn resolve_output_dir(dir: &Path) -> std::io::Result<PathBuf> {
    std::path::absolute(dir)
}
