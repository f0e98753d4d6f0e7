//! Data structures describing indexed pakfile contents and lookup results.

use serde::{Deserialize, Serialize};

/// One indexed object occurrence inside one pakfile, as recorded in the catalog dump.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PakEntry {
    /// Directory name of the patch release the pakfile shipped with.
    pub patch_name: String,
    /// Release date of the patch, as an ISO `YYYY-MM-DD` string.
    pub released: String,
    /// Human-readable description of the patch.
    pub description: String,
    /// Filename of the pakfile containing the object.
    pub pak_name: String,
    /// Raw mountpoint the pakfile attaches its contents at.
    pub mountpoint: String,
    /// Ordering number of the pakfile within its patch.
    pub order_num: u32,
    /// Full path of the object as stored inside the pakfile.
    pub full_path: String,
}

/// A catalog entry matched by a search, with its resolved real path attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupMatch {
    /// The matched catalog entry.
    pub entry: PakEntry,
    /// In-game asset reference path derived from the mountpoint and in-pak path.
    pub real_path: String,
}
