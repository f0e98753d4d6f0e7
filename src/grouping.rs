//! Arrange ordered lookup matches into the patch/pakfile hierarchy used for display.

use serde::Serialize;

use crate::models::LookupMatch;

/// Matches from one patch release, grouped by pakfile.
#[derive(Debug, Clone, Serialize)]
pub struct PatchGroup {
    /// Directory name of the patch release.
    pub patch_name: String,
    /// Release date of the patch.
    pub released: String,
    /// Human-readable patch description.
    pub description: String,
    /// Pakfiles within this patch that contain the object, in catalog order.
    pub paks: Vec<PakGroup>,
}

/// Matches from one pakfile within one patch.
#[derive(Debug, Clone, Serialize)]
pub struct PakGroup {
    /// Filename of the pakfile.
    pub pak_name: String,
    /// Raw mountpoint the pakfile attaches its contents at.
    pub mountpoint: String,
    /// Matched object occurrences inside this pakfile.
    pub entries: Vec<EntryPaths>,
}

/// Both path renditions of one matched object occurrence.
#[derive(Debug, Clone, Serialize)]
pub struct EntryPaths {
    /// Full path of the object as stored inside the pakfile.
    pub full_path: String,
    /// Resolved in-game asset reference path.
    pub real_path: String,
}

/// Group an ordered slice of matches by patch, then by pakfile.
///
/// Grouping is over consecutive runs: matches are expected to arrive already sorted
/// by release date, order number and path, as
/// [`PakCatalog::search`](crate::catalog::PakCatalog::search) returns them. A patch
/// or pakfile that reappears after an intervening one starts a new group rather than
/// being merged back.
pub fn group_matches(matches: &[LookupMatch]) -> Vec<PatchGroup> {
    let mut patches: Vec<PatchGroup> = Vec::new();

    for matched in matches {
        let entry = &matched.entry;

        let start_patch = patches
            .last()
            .is_none_or(|patch| patch.patch_name != entry.patch_name);
        if start_patch {
            patches.push(PatchGroup {
                patch_name: entry.patch_name.clone(),
                released: entry.released.clone(),
                description: entry.description.clone(),
                paks: Vec::new(),
            });
        }
        let patch = patches.last_mut().unwrap();

        let start_pak = patch
            .paks
            .last()
            .is_none_or(|pak| pak.pak_name != entry.pak_name);
        if start_pak {
            patch.paks.push(PakGroup {
                pak_name: entry.pak_name.clone(),
                mountpoint: entry.mountpoint.clone(),
                entries: Vec::new(),
            });
        }

        patch.paks.last_mut().unwrap().entries.push(EntryPaths {
            full_path: entry.full_path.clone(),
            real_path: matched.real_path.clone(),
        });
    }

    patches
}
