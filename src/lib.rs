#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod catalog;
pub mod grouping;
pub mod models;
pub mod real_paths;
pub mod search;

pub use catalog::{CatalogError, PakCatalog};
pub use grouping::{EntryPaths, PakGroup, PatchGroup, group_matches};
pub use models::{LookupMatch, PakEntry};
pub use real_paths::resolve_real_path;
