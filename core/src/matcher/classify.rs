//! Suffix matching: which group a file belongs to, and what its stem is.
//!
//! Suffixes compare with ASCII case folding. Compound suffixes such as
//! `.module.css` are always tried before the plain `.css` they end with.

use std::ffi::{OsStr, OsString};
use std::path::Path;

use crate::types::config::PairSettings;
use crate::types::document::Category;


/// Split `suffix` off the end of `name` when `tail_matches` accepts the tail.
///
/// Works on the platform encoding, so names that are not valid UTF-8 keep
/// their exact bytes.
fn split_suffix<'a>(
    name: &'a OsStr,
    suffix: &str,
    tail_matches: impl Fn(&[u8], &[u8]) -> bool,
) -> Option<&'a OsStr> {
    let bytes = name.as_encoded_bytes();
    let suffix = suffix.as_bytes();
    if suffix.is_empty() || bytes.len() < suffix.len() {
        return None;
    }
    let (head, tail) = bytes.split_at(bytes.len() - suffix.len());
    if !tail_matches(tail, suffix) {
        return None;
    }
    // SAFETY: `tail` equals `suffix` up to ASCII case, so it is a non-empty
    // valid UTF-8 substring and `head` ends immediately before it.
    Some(unsafe { OsStr::from_encoded_bytes_unchecked(head) })
}

/// Strip `suffix` from the end of `name`, ignoring ASCII case.
pub(crate) fn strip_suffix_ignore_case<'a>(name: &'a OsStr, suffix: &str) -> Option<&'a OsStr> {
    split_suffix(name, suffix, |tail, suffix| tail.eq_ignore_ascii_case(suffix))
}

/// Strip `suffix` from the end of `name`, matching case exactly.
pub(crate) fn strip_suffix<'a>(name: &'a OsStr, suffix: &str) -> Option<&'a OsStr> {
    split_suffix(name, suffix, |tail, suffix| tail == suffix)
}

/// Extensions ordered longest first. Equal lengths keep their configured order.
pub(crate) fn longest_first<'a, S: AsRef<str>>(extensions: &'a [S]) -> Vec<&'a str> {
    let mut sorted: Vec<&str> = extensions.iter().map(|e| e.as_ref()).collect();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()));
    sorted
}

/// Length of the longest suffix in `group` that `name` ends with.
fn longest_match(name: &OsStr, group: &[String]) -> Option<usize> {
    longest_first(group)
        .into_iter()
        .find(|ext| strip_suffix_ignore_case(name, ext).is_some())
        .map(|ext| ext.len())
}


/// Classify a path into the style or markup group.
///
/// When both groups have a matching suffix, the group owning the longer one
/// wins, so `.module.css` in the markup group beats `.css` in the style
/// group. An exact tie goes to style.
pub fn classify(path: &Path, settings: &PairSettings) -> Option<Category> {
    let name = path.file_name()?;
    let style = longest_match(name, &settings.style_extensions);
    let markup = longest_match(name, &settings.markup_extensions);
    match (style, markup) {
        (Some(s), Some(m)) if m > s => Some(Category::Markup),
        (Some(_), _) => Some(Category::Style),
        (None, Some(_)) => Some(Category::Markup),
        (None, None) => None,
    }
}


/// The file name with its recognised extension removed.
///
/// Falls back to dropping the last dot-delimited segment when no configured
/// extension matches. A leading-dot name like `.env` is kept whole.
pub fn base_name<S: AsRef<str>>(path: &Path, extensions: &[S]) -> OsString {
    let name = match path.file_name() {
        Some(n) => n,
        None => return OsString::new(),
    };
    for ext in longest_first(extensions) {
        if let Some(stem) = strip_suffix_ignore_case(name, ext) {
            return stem.to_os_string();
        }
    }
    Path::new(name).file_stem().unwrap_or(name).to_os_string()
}


#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> PairSettings {
        PairSettings::default()
    }

    fn os(s: &str) -> &OsStr {
        OsStr::new(s)
    }

    #[test]
    fn strip_suffix_case_insensitive() {
        assert_eq!(strip_suffix_ignore_case(os("App.MODULE.CSS"), ".module.css"), Some(os("App")));
        assert_eq!(strip_suffix_ignore_case(os("app.css"), ".scss"), None);
        assert_eq!(strip_suffix_ignore_case(os("css"), ".css"), None);
        assert_eq!(strip_suffix_ignore_case(os("a.css"), ""), None);
    }

    #[test]
    fn exact_strip_keeps_case() {
        assert_eq!(strip_suffix(os("Card.module"), ".module"), Some(os("Card")));
        assert_eq!(strip_suffix(os("Card.MODULE"), ".module"), None);
    }

    #[test]
    fn strip_suffix_respects_char_boundaries() {
        // "é" is two bytes; a three-byte suffix would split it.
        assert_eq!(strip_suffix_ignore_case(os("a\u{e9}.c"), "x.c"), None);
        assert_eq!(strip_suffix_ignore_case(os("caf\u{e9}.css"), ".css"), Some(os("caf\u{e9}")));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_names_keep_their_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"caf\xe9.TSX");
        let stem = strip_suffix_ignore_case(name, ".tsx").unwrap();
        assert_eq!(stem.as_bytes(), b"caf\xe9");

        let path = Path::new(name);
        let s = settings();
        assert_eq!(classify(path, &s), Some(Category::Markup));
        assert_eq!(base_name(path, &s.all_extensions()).as_bytes(), b"caf\xe9");
    }

    #[test]
    fn longest_first_is_stable_for_ties() {
        let exts = [".css", ".module.css", ".ts", ".js", ".tsx"];
        assert_eq!(longest_first(&exts), vec![".module.css", ".css", ".tsx", ".ts", ".js"]);
    }

    #[test]
    fn classify_default_groups() {
        let s = settings();
        assert_eq!(classify(Path::new("/p/Button.tsx"), &s), Some(Category::Markup));
        assert_eq!(classify(Path::new("/p/Button.module.scss"), &s), Some(Category::Style));
        assert_eq!(classify(Path::new("/p/theme.LESS"), &s), Some(Category::Style));
        assert_eq!(classify(Path::new("/p/index.js"), &s), Some(Category::Markup));
        assert_eq!(classify(Path::new("/p/README.md"), &s), None);
        assert_eq!(classify(Path::new("/"), &s), None);
    }

    #[test]
    fn compound_suffix_beats_shorter_suffix_of_other_group() {
        let s = PairSettings {
            enabled: true,
            style_extensions: vec![".css".into()],
            markup_extensions: vec![".module.css".into(), ".tsx".into()],
        };
        assert_eq!(classify(Path::new("a.module.css"), &s), Some(Category::Markup));
        assert_eq!(classify(Path::new("a.css"), &s), Some(Category::Style));
    }

    #[test]
    fn tie_goes_to_style() {
        let s = PairSettings {
            enabled: true,
            style_extensions: vec![".x".into()],
            markup_extensions: vec![".x".into()],
        };
        assert_eq!(classify(Path::new("a.x"), &s), Some(Category::Style));
    }

    #[test]
    fn base_name_strips_compound_first() {
        let s = settings();
        let all = s.all_extensions();
        assert_eq!(base_name(Path::new("/p/Card.module.css"), &all), "Card");
        assert_eq!(base_name(Path::new("/p/Card.css"), &all), "Card");
        assert_eq!(base_name(Path::new("/p/Card.styles.scss"), &all), "Card.styles");
        assert_eq!(base_name(Path::new("Card.TSX"), &all), "Card");
    }

    #[test]
    fn base_name_fallback_drops_last_segment() {
        let s = settings();
        let all = s.all_extensions();
        assert_eq!(base_name(Path::new("/p/notes.tar.gz"), &all), "notes.tar");
        assert_eq!(base_name(Path::new("/p/Makefile"), &all), "Makefile");
        assert_eq!(base_name(Path::new("/p/.env"), &all), ".env");
    }

    #[test]
    fn base_name_unmatched_reapplication_only_uses_fallback() {
        let s = settings();
        let all = s.all_extensions();
        let once = base_name(Path::new("Card.module.css"), &all);
        // "Card" has no extension left; the fallback keeps it unchanged.
        assert_eq!(base_name(Path::new(&once), &all), once);
    }
}
