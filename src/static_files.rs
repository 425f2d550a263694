//! Maps request paths to files on disk.

use std::path::{Path, PathBuf};

/// Name of the fallback page served as the body of 404 responses.
const NOT_FOUND_PAGE: &str = "NotFound.html";

/// Resolves a request path to a file under the base directory.
///
/// The candidate location is built by plain string concatenation: working
/// directory + base directory + request path with one leading `/` removed.
/// Nothing is canonicalized and `..` segments are not rejected, so a request
/// can name files outside the base directory. The base directory string must
/// therefore start with `/` to land inside the working directory (e.g.
/// `/public`).
///
/// Returns the location only when it names an existing regular file;
/// missing paths, directories and any other target resolve to `None`.
pub fn resolve(base_dir: &str, request_path: &str) -> Option<PathBuf> {
    let rel = request_path.strip_prefix('/').unwrap_or(request_path);
    let candidate = candidate_path(base_dir, rel)?;
    candidate.is_file().then_some(candidate)
}

/// Body for 404 responses: the contents of `NotFound.html` under the base
/// directory, or empty when the page is missing or unreadable.
pub async fn not_found_body(base_dir: &str) -> Vec<u8> {
    match resolve(base_dir, NOT_FOUND_PAGE) {
        Some(path) => tokio::fs::read(path).await.unwrap_or_default(),
        None => Vec::new(),
    }
}

fn candidate_path(base_dir: &str, rel: &str) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let joined = Path::new(base_dir).join(rel);
    Some(PathBuf::from(format!("{}{}", cwd.display(), joined.display())))
}
