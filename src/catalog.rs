//! In-memory catalog of indexed pakfile contents, loaded from a JSON dump.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::models::{LookupMatch, PakEntry};
use crate::real_paths::resolve_real_path;
use crate::search::{base_name_matches, sanitize_search_term};

/// On-disk layout of a catalog dump.
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    entries: Vec<PakEntry>,
}

/// Searchable index of which pakfiles contain which objects.
#[derive(Debug, Clone, Default)]
pub struct PakCatalog {
    entries: Vec<PakEntry>,
}

/// Errors that can occur while loading a catalog dump.
#[derive(Debug)]
pub enum CatalogError {
    /// Failed to read the catalog file from disk.
    Io {
        /// Path that caused the error.
        path: PathBuf,
        /// Source I/O error.
        source: std::io::Error,
    },
    /// Failed to parse the JSON catalog file.
    Parse {
        /// Path that caused the error.
        path: PathBuf,
        /// Source parse error.
        source: serde_json::Error,
    },
}

impl PakCatalog {
    /// Build a catalog directly from entries already in memory.
    pub fn from_entries(entries: impl IntoIterator<Item = PakEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Load a catalog from a JSON dump on disk.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|err| CatalogError::Io {
            path: path.to_path_buf(),
            source: err,
        })?;

        let file: CatalogFile =
            serde_json::from_str(&contents).map_err(|err| CatalogError::Parse {
                path: path.to_path_buf(),
                source: err,
            })?;
        Ok(Self::from_entries(file.entries))
    }

    /// Number of indexed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find every pakfile occurrence of an object, by exact base name.
    ///
    /// The term is sanitized first; an empty result after sanitization matches
    /// nothing. Duplicate rows are collapsed and results come back ordered by patch
    /// release date, then pakfile order number, then full in-pak path, with the
    /// resolved real path attached to each match. Resolution itself neither sorts
    /// nor de-duplicates; that is this layer's job.
    pub fn search(&self, term: &str) -> Vec<LookupMatch> {
        let term = sanitize_search_term(term);
        if term.is_empty() {
            return Vec::new();
        }

        let mut matched: Vec<&PakEntry> = self
            .entries
            .iter()
            .filter(|entry| base_name_matches(&term, &entry.full_path))
            .collect();

        // Tiebreak on the remaining fields so fully identical rows end up adjacent
        // and collapse; result order is still governed by the leading three keys.
        matched.sort_by(|a, b| {
            (&a.released, a.order_num, &a.full_path)
                .cmp(&(&b.released, b.order_num, &b.full_path))
                .then_with(|| {
                    (&a.patch_name, &a.description, &a.pak_name, &a.mountpoint).cmp(&(
                        &b.patch_name,
                        &b.description,
                        &b.pak_name,
                        &b.mountpoint,
                    ))
                })
        });
        matched.dedup();

        matched
            .into_iter()
            .map(|entry| LookupMatch {
                real_path: resolve_real_path(&entry.mountpoint, &entry.full_path),
                entry: entry.clone(),
            })
            .collect()
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entry(released: &str, order_num: u32, pak_name: &str, full_path: &str) -> PakEntry {
        PakEntry {
            patch_name: format!("patch-{released}"),
            released: released.to_string(),
            description: "Test patch".to_string(),
            pak_name: pak_name.to_string(),
            mountpoint: "../../../OakGame/Content/Paks/".to_string(),
            order_num,
            full_path: full_path.to_string(),
        }
    }

    #[test]
    fn finds_entries_by_base_name_case_insensitively() {
        let catalog = PakCatalog::from_entries([entry(
            "2021-01-21",
            1,
            "pakchunk0-WindowsNoEditor.pak",
            "OakGame/Content/GameData/Loot/ItemPool_GunsAll.uasset",
        )]);

        assert_eq!(catalog.search("itempool_gunsall").len(), 1);
        assert_eq!(catalog.search("ItemPool_GunsAll").len(), 1);
        assert!(catalog.search("ItemPool_Guns").is_empty());
    }

    #[test]
    fn attaches_resolved_real_paths() {
        let catalog = PakCatalog::from_entries([entry(
            "2021-01-21",
            1,
            "pakchunk0-WindowsNoEditor.pak",
            "OakGame/Content/GameData/Loot/ItemPool_GunsAll.uasset",
        )]);

        let matches = catalog.search("ItemPool_GunsAll");
        assert_eq!(
            matches[0].real_path,
            "/Game/GameData/Loot/ItemPool_GunsAll.uasset"
        );
    }

    #[test]
    fn orders_by_release_then_order_number_then_path() {
        let catalog = PakCatalog::from_entries([
            entry("2021-04-08", 2, "pakchunk2.pak", "OakGame/Content/B/Thing.uasset"),
            entry("2021-04-08", 1, "pakchunk1.pak", "OakGame/Content/Z/Thing.uasset"),
            entry("2021-01-21", 9, "pakchunk9.pak", "OakGame/Content/A/Thing.uasset"),
            entry("2021-04-08", 2, "pakchunk2.pak", "OakGame/Content/A/Thing.uasset"),
        ]);

        let matches = catalog.search("Thing");
        let paths: Vec<&str> = matches
            .iter()
            .map(|m| m.entry.full_path.as_str())
            .collect();
        assert_eq!(paths, vec![
            "OakGame/Content/A/Thing.uasset",
            "OakGame/Content/Z/Thing.uasset",
            "OakGame/Content/A/Thing.uasset",
            "OakGame/Content/B/Thing.uasset",
        ]);
    }

    #[test]
    fn collapses_duplicate_rows() {
        let row = entry("2021-01-21", 1, "pakchunk0.pak", "OakGame/Content/Dup.uasset");
        let catalog = PakCatalog::from_entries([row.clone(), row]);

        assert_eq!(catalog.search("Dup").len(), 1);
    }

    #[test]
    fn collapses_duplicates_split_by_an_equal_key_row() {
        // Two identical rows with a third row in between sharing the same release
        // date, order number and path but a different pakfile. The duplicates must
        // still collapse, matching distinct-row semantics over the whole entry.
        let dup = entry("2021-01-21", 1, "pakchunk0.pak", "OakGame/Content/Thing.uasset");
        let other = entry("2021-01-21", 1, "pakchunk1.pak", "OakGame/Content/Thing.uasset");
        let catalog = PakCatalog::from_entries([dup.clone(), other, dup]);

        let matches = catalog.search("Thing");
        assert_eq!(matches.len(), 2);
        let paks: Vec<&str> = matches.iter().map(|m| m.entry.pak_name.as_str()).collect();
        assert_eq!(paks, vec!["pakchunk0.pak", "pakchunk1.pak"]);
    }

    #[test]
    fn blank_terms_match_nothing() {
        let catalog = PakCatalog::from_entries([entry(
            "2021-01-21",
            1,
            "pakchunk0.pak",
            "OakGame/Content/Thing.uasset",
        )]);

        assert!(catalog.search("").is_empty());
        assert!(catalog.search(" \t\n").is_empty());
    }

    #[test]
    fn load_from_path_reads_a_dump() {
        let temp = tempdir().expect("failed to create temp dir");
        let path = temp.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{"entries": [{
                "patch_name": "2021-01-21",
                "released": "2021-01-21",
                "description": "January patch",
                "pak_name": "pakchunk0-WindowsNoEditor.pak",
                "mountpoint": "../../../OakGame/Content/Paks/",
                "order_num": 0,
                "full_path": "OakGame/Content/GameData/Loot/Table.uasset"
            }]}"#,
        )
        .expect("failed to write catalog file");

        let catalog = PakCatalog::load_from_path(&path).expect("catalog should load");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.search("Table").len(), 1);
    }

    #[test]
    fn load_from_path_reports_missing_files() {
        let temp = tempdir().expect("failed to create temp dir");
        let path = temp.path().join("missing.json");

        match PakCatalog::load_from_path(&path) {
            Err(CatalogError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected an I/O error, got {other:?}"),
        }
    }

    #[test]
    fn load_from_path_reports_malformed_json() {
        let temp = tempdir().expect("failed to create temp dir");
        let path = temp.path().join("catalog.json");
        std::fs::write(&path, "not json").expect("failed to write catalog file");

        assert!(matches!(
            PakCatalog::load_from_path(&path),
            Err(CatalogError::Parse { .. })
        ));
    }
}
