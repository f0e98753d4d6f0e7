/// Prefix that pakfiles use to anchor their mountpoint relative to the engine binary dir.
const RELATIVE_PARENT_PREFIX: &str = "../../../";

/// Massage a raw pakfile mountpoint into the prefix used for path assembly.
///
/// Mountpoints in the wild come in two shapes: almost all start with `../../../`
/// (relative to where the engine binary lives), which we strip so the remainder is
/// rooted at the game install; a bare `/` only ever shows up in empty pakfiles and
/// collapses to nothing. Anything else passes through untouched rather than failing,
/// so unexpected upstream data degrades to a plain concatenation downstream.
pub fn normalize_mountpoint(mountpoint: &str) -> &str {
    if let Some(stripped) = mountpoint.strip_prefix(RELATIVE_PARENT_PREFIX) {
        stripped
    } else if mountpoint == "/" {
        ""
    } else {
        mountpoint
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_mountpoint;

    #[test]
    fn strips_relative_parent_prefix() {
        assert_eq!(
            normalize_mountpoint("../../../OakGame/Content/Paks/"),
            "OakGame/Content/Paks/"
        );
    }

    #[test]
    fn strips_only_one_prefix_occurrence() {
        assert_eq!(
            normalize_mountpoint("../../../../../../Engine/"),
            "../../../Engine/"
        );
    }

    #[test]
    fn collapses_bare_root_to_empty() {
        assert_eq!(normalize_mountpoint("/"), "");
    }

    #[test]
    fn passes_through_other_shapes() {
        assert_eq!(normalize_mountpoint(""), "");
        assert_eq!(normalize_mountpoint("SomeMount/"), "SomeMount/");
        assert_eq!(normalize_mountpoint("/Engine/"), "/Engine/");
    }
}
