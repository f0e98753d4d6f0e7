/// Known translations from on-disk content roots to the roots the game references.
///
/// These were discovered empirically by comparing pakfile contents against object paths
/// the game actually uses; nobody has found a general rule that derives them. They
/// appear to be the only two needed for regular objects. Adding a newly discovered
/// mapping is a one-line change here.
const CONTENT_ROOT_TRANSLATIONS: &[(&str, &str)] = &[
    ("OakGame", "Game"),
    ("Wwise", "WwiseEditor"),
];

/// Translate an on-disk content root into the root used by in-game asset references.
///
/// Roots without a known translation pass through verbatim. That is deliberate: the
/// table is a closed, empirically discovered set, and inventing mappings for unknown
/// roots would be worse than leaving the path recognizably untranslated.
pub fn translate_content_root(root: &str) -> &str {
    CONTENT_ROOT_TRANSLATIONS
        .iter()
        .find(|(from, _)| *from == root)
        .map(|(_, to)| *to)
        .unwrap_or(root)
}

#[cfg(test)]
mod tests {
    use super::translate_content_root;

    #[test]
    fn translates_oakgame_to_game() {
        assert_eq!(translate_content_root("OakGame"), "Game");
    }

    #[test]
    fn translates_wwise_to_wwise_editor() {
        assert_eq!(translate_content_root("Wwise"), "WwiseEditor");
    }

    #[test]
    fn passes_through_unmapped_roots() {
        // Regression coverage for roots seen in real pakfile data that have no
        // translation and must survive untouched.
        for root in ["Engine", "Dandelion", "Geranium", "Alisma", "Ixora", "Foo"] {
            assert_eq!(translate_content_root(root), root);
        }
    }

    #[test]
    fn translation_is_case_sensitive() {
        assert_eq!(translate_content_root("oakgame"), "oakgame");
    }
}
