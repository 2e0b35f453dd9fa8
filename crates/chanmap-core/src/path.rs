//! User-home shorthand expansion for configured paths
//!
//! Directory values in the mapping config may start with `~`. Expansion
//! happens once at load time so that per-item resolution never touches the
//! filesystem or the environment.

use std::path::PathBuf;

/// Expand a leading `~` or `~/` prefix to the current user's home directory.
///
/// Paths without the shorthand are returned unchanged. When no home
/// directory can be determined the path is returned verbatim.
pub fn expand_user(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
