//! Sibling search — ordered candidate generation and existence filtering.
//!
//! Candidate generation is pure. Only `resolve_sibling` touches the outside
//! world, through a `Probe`.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::matcher::classify::{base_name, classify, strip_suffix};
use crate::types::config::PairSettings;
use crate::types::document::{Category, ResolvedPair};


/// Answers "does a file exist at this path?".
pub trait Probe {
    fn exists(&self, path: &Path) -> bool;
}

impl<F> Probe for F
where
    F: Fn(&Path) -> bool,
{
    fn exists(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Synchronous file system stat. Directories do not count.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskProbe;

impl Probe for DiskProbe {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}


fn with_suffix(stem: &OsStr, suffix: &str) -> OsString {
    let mut name = stem.to_os_string();
    name.push(suffix);
    name
}

/// Stem variants tried after direct substitution, in order.
fn stem_variants(stem: &OsStr, source: Category) -> Vec<OsString> {
    match source {
        Category::Style => vec![
            stem.to_os_string(),
            strip_suffix(stem, ".module").unwrap_or(stem).to_os_string(),
            strip_suffix(stem, ".styles").unwrap_or(stem).to_os_string(),
        ],
        Category::Markup => vec![
            stem.to_os_string(),
            with_suffix(stem, ".module"),
            with_suffix(stem, ".styles"),
        ],
    }
}

fn push_candidate(out: &mut Vec<PathBuf>, source: &Path, candidate: PathBuf) {
    if candidate != source && !out.contains(&candidate) {
        out.push(candidate);
    }
}

/// Every path that could hold the sibling of `path`, in search order.
///
/// 1. `dir/stem+ext` for each opposite-group extension, configuration order.
/// 2. naming-pattern variants of the stem (outer) times the opposite-group
///    extensions (inner).
///
/// The source itself never appears and repeated paths keep only their first
/// position, which leaves first-hit resolution unchanged.
pub fn candidates(path: &Path, source: Category, settings: &PairSettings) -> Vec<PathBuf> {
    let dir = path.parent().unwrap_or_else(|| Path::new(""));
    let stem = base_name(path, &settings.all_extensions());
    let targets = settings.extensions(source.opposite());

    let mut out = Vec::new();
    for ext in targets {
        push_candidate(&mut out, path, dir.join(with_suffix(&stem, ext)));
    }
    for variant in stem_variants(&stem, source) {
        for ext in targets {
            push_candidate(&mut out, path, dir.join(with_suffix(&variant, ext)));
        }
    }
    out
}


/// First candidate the probe reports as present. Not cached.
pub fn resolve_sibling(
    path: &Path,
    source: Category,
    settings: &PairSettings,
    probe: &dyn Probe,
) -> Option<PathBuf> {
    let found = candidates(path, source, settings)
        .into_iter()
        .find(|c| probe.exists(c));
    match &found {
        Some(sibling) => log::debug!("{} pairs with {}", path.display(), sibling.display()),
        None => log::debug!("no {} sibling for {}", source.opposite(), path.display()),
    }
    found
}


/// Classify `path` and resolve its sibling in one step.
pub fn resolve_pair(path: &Path, settings: &PairSettings, probe: &dyn Probe) -> Option<ResolvedPair> {
    let category = classify(path, settings)?;
    let sibling = resolve_sibling(path, category, settings, probe)?;
    Some(ResolvedPair {
        source: path.to_path_buf(),
        sibling,
        source_is_style: category == Category::Style,
    })
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    fn files(paths: &[&str]) -> impl Fn(&Path) -> bool {
        let set: BTreeSet<PathBuf> = paths.iter().map(PathBuf::from).collect();
        move |p: &Path| set.contains(p)
    }

    #[test]
    fn direct_substitution_in_configured_order() {
        let s = PairSettings::default();
        let c = candidates(Path::new("/src/Card.tsx"), Category::Markup, &s);
        let first: Vec<_> = c.iter().take(6).map(|p| p.to_string_lossy().into_owned()).collect();
        assert_eq!(
            first,
            vec![
                "/src/Card.css",
                "/src/Card.scss",
                "/src/Card.sass",
                "/src/Card.less",
                "/src/Card.module.css",
                "/src/Card.module.scss",
            ]
        );
    }

    #[test]
    fn markup_variants_follow_direct_candidates() {
        let s = PairSettings::default();
        let c = candidates(Path::new("/src/Card.tsx"), Category::Markup, &s);
        // "Card" repeats step 1 entirely; "Card.module" + ".css" repeats
        // "Card" + ".module.css".
        assert_eq!(c[6], PathBuf::from("/src/Card.module.sass"));
        assert!(c.contains(&PathBuf::from("/src/Card.module.module.css")));
        assert!(c.contains(&PathBuf::from("/src/Card.styles.scss")));
        assert_eq!(c.len(), 16);
    }

    #[test]
    fn style_variants_strip_module_and_styles() {
        let s = PairSettings::default();
        let c = candidates(Path::new("/src/Card.styles.scss"), Category::Style, &s);
        assert_eq!(c[0], PathBuf::from("/src/Card.styles.tsx"));
        assert!(c.contains(&PathBuf::from("/src/Card.tsx")));
        assert_eq!(c.len(), 8);
    }

    #[test]
    fn no_parent_yields_bare_names() {
        let s = PairSettings::default();
        let c = candidates(Path::new("Card.css"), Category::Style, &s);
        assert_eq!(c[0], PathBuf::from("Card.tsx"));
    }

    #[test]
    fn module_css_and_tsx_resolve_to_each_other() {
        let s = PairSettings::default();
        let probe = files(&["/src/a.module.css", "/src/a.tsx"]);
        assert_eq!(
            resolve_sibling(Path::new("/src/a.module.css"), Category::Style, &s, &probe),
            Some(PathBuf::from("/src/a.tsx"))
        );
        assert_eq!(
            resolve_sibling(Path::new("/src/a.tsx"), Category::Markup, &s, &probe),
            Some(PathBuf::from("/src/a.module.css"))
        );
    }

    #[test]
    fn styles_suffix_found_by_naming_pattern() {
        let s = PairSettings::default();
        let probe = files(&["/ui/button.styles.scss", "/ui/button.tsx"]);
        assert_eq!(
            resolve_sibling(Path::new("/ui/button.tsx"), Category::Markup, &s, &probe),
            Some(PathBuf::from("/ui/button.styles.scss"))
        );
        assert_eq!(
            resolve_sibling(Path::new("/ui/button.styles.scss"), Category::Style, &s, &probe),
            Some(PathBuf::from("/ui/button.tsx"))
        );
    }

    #[test]
    fn styles_suffix_configured_as_extension() {
        let mut s = PairSettings::default();
        s.style_extensions.push(".styles.scss".into());
        let probe = files(&["/ui/button.styles.scss", "/ui/button.tsx"]);
        assert_eq!(
            resolve_sibling(Path::new("/ui/button.tsx"), Category::Markup, &s, &probe),
            Some(PathBuf::from("/ui/button.styles.scss"))
        );
    }

    #[test]
    fn first_hit_in_fixed_order_wins() {
        let s = PairSettings::default();
        let probe = files(&["/src/a.tsx", "/src/a.scss", "/src/a.css"]);
        assert_eq!(
            resolve_sibling(Path::new("/src/a.tsx"), Category::Markup, &s, &probe),
            Some(PathBuf::from("/src/a.css"))
        );
        let probe = files(&["/src/a.css", "/src/a.js", "/src/a.tsx"]);
        assert_eq!(
            resolve_sibling(Path::new("/src/a.css"), Category::Style, &s, &probe),
            Some(PathBuf::from("/src/a.tsx"))
        );
    }

    #[test]
    fn never_returns_source() {
        // Same suffix in both groups: the only existing candidate is the source.
        let s = PairSettings {
            enabled: true,
            style_extensions: vec![".x".into()],
            markup_extensions: vec![".x".into()],
        };
        let probe = files(&["/d/a.x"]);
        assert_eq!(resolve_sibling(Path::new("/d/a.x"), Category::Style, &s, &probe), None);
    }

    #[test]
    fn missing_sibling_is_none() {
        let s = PairSettings::default();
        let probe = files(&["/src/lonely.tsx"]);
        assert_eq!(resolve_sibling(Path::new("/src/lonely.tsx"), Category::Markup, &s, &probe), None);
    }

    #[test]
    fn resolve_pair_classifies_first() {
        let s = PairSettings::default();
        let probe = files(&["/src/a.module.scss", "/src/a.jsx"]);
        let pair = resolve_pair(Path::new("/src/a.module.scss"), &s, &probe).unwrap();
        assert!(pair.source_is_style);
        assert_eq!(pair.sibling, PathBuf::from("/src/a.jsx"));
        assert!(resolve_pair(Path::new("/src/a.md"), &s, &probe).is_none());
    }

    #[test]
    fn disk_probe_against_temp_dir() {
        let dir = tempfile::tempdir().unwrap();
        let tsx = dir.path().join("Nav.tsx");
        let css = dir.path().join("Nav.module.css");
        std::fs::write(&tsx, "export {}").unwrap();
        std::fs::write(&css, ".nav {}").unwrap();
        std::fs::create_dir(dir.path().join("Nav.css")).unwrap();

        let s = PairSettings::default();
        // The directory named Nav.css is skipped.
        assert_eq!(resolve_sibling(&tsx, Category::Markup, &s, &DiskProbe), Some(css.clone()));
        assert_eq!(resolve_sibling(&css, Category::Style, &s, &DiskProbe), Some(tsx));
    }

    // macOS file systems refuse names that are not valid UTF-8.
    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_stem_pairs_on_disk() {
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let tsx = dir.path().join(OsStr::from_bytes(b"caf\xe9.tsx"));
        let css = dir.path().join(OsStr::from_bytes(b"caf\xe9.css"));
        std::fs::write(&tsx, "").unwrap();
        std::fs::write(&css, "").unwrap();

        let s = PairSettings::default();
        assert_eq!(candidates(&tsx, Category::Markup, &s)[0], css);
        assert_eq!(resolve_sibling(&tsx, Category::Markup, &s, &DiskProbe), Some(css.clone()));
        assert_eq!(resolve_sibling(&css, Category::Style, &s, &DiskProbe), Some(tsx));
    }

    proptest! {
        #[test]
        fn candidates_never_contain_source(
            stem in "[A-Za-z][A-Za-z0-9_-]{0,12}",
            ext_idx in 0usize..10,
        ) {
            let s = PairSettings::default();
            let ext = s.all_extensions()[ext_idx].to_string();
            let path = PathBuf::from(format!("/w/{}{}", stem, ext));
            let category = classify(&path, &s).unwrap();
            let c = candidates(&path, category, &s);
            prop_assert!(!c.contains(&path));
        }

        #[test]
        fn candidates_share_directory_and_opposite_category(
            stem in "[a-z]{1,8}",
            ext_idx in 0usize..10,
        ) {
            let s = PairSettings::default();
            let ext = s.all_extensions()[ext_idx].to_string();
            let path = PathBuf::from(format!("/w/{}{}", stem, ext));
            let category = classify(&path, &s).unwrap();
            for c in candidates(&path, category, &s) {
                prop_assert_eq!(c.parent(), path.parent());
                prop_assert_eq!(classify(&c, &s), Some(category.opposite()));
            }
        }

        #[test]
        fn candidates_are_unique(stem in "[a-z.]{1,10}", ext_idx in 0usize..10) {
            let s = PairSettings::default();
            let ext = s.all_extensions()[ext_idx].to_string();
            let path = PathBuf::from(format!("/w/{}{}", stem, ext));
            let category = classify(&path, &s).unwrap();
            let c = candidates(&path, category, &s);
            let unique: BTreeSet<_> = c.iter().collect();
            prop_assert_eq!(unique.len(), c.len());
        }
    }
}
