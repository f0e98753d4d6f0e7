use super::mountpoint::normalize_mountpoint;
use super::rewrites::{rewrite_content_path, rewrite_plugin_path};

/// Resolve the real in-game asset path for one pakfile record.
///
/// The raw path is the normalized mountpoint concatenated with the in-pak path, with
/// no separator inserted; mountpoints in pakfile data already end in `/` where one is
/// needed. The plugin rewrite is then attempted, and the content rewrite is attempted
/// on whatever that produced. Neither, either, or both may fire; a path matching no
/// pattern comes back as the plain concatenation.
///
/// Total over all string inputs: no errors, no I/O, deterministic. Not idempotent:
/// feeding an already-resolved path (say one starting with `/Game/`) back through is
/// not guaranteed to leave it alone.
pub fn resolve_real_path(mountpoint: &str, in_pak_path: &str) -> String {
    let mut real_path = format!("{}{}", normalize_mountpoint(mountpoint), in_pak_path);

    if let Some(rewritten) = rewrite_plugin_path(&real_path) {
        real_path = rewritten;
    }
    if let Some(rewritten) = rewrite_content_path(&real_path) {
        real_path = rewritten;
    }

    real_path
}
