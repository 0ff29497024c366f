// Cache path utilities.
// Constructs filesystem paths for per-site state, keyed by the site's host name.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use url::Url;

use crate::error::{BlogspinError, Result};

/// Get the default data directory (~/.local/share/blogspin on Linux).
pub fn default_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "blogspin").map(|dirs| dirs.data_dir().to_path_buf())
}

/// Extract the host component of a site URL; this is the site's storage key.
pub fn host_for_url(url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|_| BlogspinError::InvalidSiteUrl(url.to_string()))?;
    parsed
        .host_str()
        .map(sanitize_name)
        .ok_or_else(|| BlogspinError::InvalidSiteUrl(url.to_string()))
}

/// Path to a site's state directory.
pub fn site_dir(root: &Path, host: &str) -> PathBuf {
    root.join("sites").join(sanitize_name(host))
}

/// Path to a site's post-index snapshot.
pub fn snapshot_path(root: &Path, host: &str) -> PathBuf {
    site_dir(root, host).join("snapshot.json")
}

/// Path to a site's last-sync watermark file.
pub fn watermark_path(root: &Path, host: &str) -> PathBuf {
    site_dir(root, host).join("last_update.txt")
}

/// Sanitize a name for use in filesystem paths.
/// Replaces problematic characters with underscores.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}
