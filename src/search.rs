//! Search-term cleanup and object-name matching rules.

/// Strip whitespace and control padding from a user-supplied search term.
///
/// Object names never contain whitespace, so rather than rejecting padded input we
/// silently drop spaces, tabs, newlines, NULs and vertical tabs wherever they appear.
/// An all-whitespace term sanitizes to the empty string, which matches nothing.
pub fn sanitize_search_term(term: &str) -> String {
    term.chars()
        .filter(|c| !matches!(c, ' ' | '\n' | '\r' | '\t' | '\0' | '\u{0b}'))
        .collect()
}

/// Derive the base object name from a full in-pak path.
///
/// The base name is the final `/`-delimited segment with its last extension removed;
/// this is the name users search by, since full object paths are rarely known up
/// front. A segment without a dot is its own base name.
pub fn object_base_name(full_path: &str) -> &str {
    let file_name = full_path.rsplit('/').next().unwrap_or(full_path);
    match file_name.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => file_name,
    }
}

/// Compare a search term against an object base name.
///
/// Matching is case-insensitive since the catalog preserves original casing while
/// users rarely reproduce it exactly. No wildcard or substring semantics.
pub fn base_name_matches(term: &str, full_path: &str) -> bool {
    term.eq_ignore_ascii_case(object_base_name(full_path))
}
