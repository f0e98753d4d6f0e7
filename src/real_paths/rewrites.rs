//! The two packaging-artifact rewrites applied to assembled pakfile paths.

use std::sync::OnceLock;

use regex::Regex;

use super::translate::translate_content_root;

fn plugin_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?P<firstpart>\w+)/Plugins/(?P<lastpart>.*)\s*$")
            .expect("invalid plugin path regex")
    })
}

fn content_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?P<junk>.*/)?(?P<firstpart>\w+)/Content/(?P<lastpart>.*)\s*$")
            .expect("invalid content path regex")
    })
}

/// Strip the plugin-root artifact from a path, if present.
///
/// Paths packaged out of a plugin look like `<PluginRoot>/Plugins/<rest>`; the game
/// references the asset by `<rest>` alone, so both the root and the literal `Plugins`
/// segment are discarded. Returns `None` when the path carries no plugin artifact.
pub fn rewrite_plugin_path(path: &str) -> Option<String> {
    plugin_pattern()
        .captures(path)
        .map(|captures| captures["lastpart"].to_string())
}

/// Re-root a `<Root>/Content/` path onto the reference root the game uses.
///
/// The root is the *last* run of word characters immediately before a `/Content/`
/// segment; anything before it is packaging junk and is dropped. The root then goes
/// through [`translate_content_root`] and the result is re-rooted at `/`. Returns
/// `None` when the path carries no content artifact.
pub fn rewrite_content_path(path: &str) -> Option<String> {
    content_pattern().captures(path).map(|captures| {
        let root = translate_content_root(&captures["firstpart"]);
        format!("/{}/{}", root, &captures["lastpart"])
    })
}
