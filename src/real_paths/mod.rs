//! Helpers for translating raw pakfile paths into real in-game asset paths.
//!
//! This module intentionally splits the responsibilities into focused submodules so that
//! the mountpoint massaging, the two packaging-artifact rewrites, and the content-root
//! translation table can be tested independently. [`resolve_real_path`] composes them in
//! the one order that matters: plugin stripping runs before content stripping, since a
//! path can carry both artifacts at once.

mod mountpoint;
mod resolve;
mod rewrites;
mod translate;

pub use mountpoint::normalize_mountpoint;
pub use resolve::resolve_real_path;
pub use rewrites::{rewrite_content_path, rewrite_plugin_path};
pub use translate::translate_content_root;
