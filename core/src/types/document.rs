//! Documents, panes, and the pairing vocabulary shared by matcher and layout.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};


/// Which extension group a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Style,
    Markup,
}

impl Category {
    pub fn opposite(self) -> Category {
        match self {
            Category::Style => Category::Markup,
            Category::Markup => Category::Style,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Style => "style",
            Category::Markup => "markup",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


/// One of the two fixed layout regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pane {
    /// Left region, holds markup.
    Primary,
    /// Right region, holds styles.
    Secondary,
}

impl Pane {
    pub fn other(self) -> Pane {
        match self {
            Pane::Primary => Pane::Secondary,
            Pane::Secondary => Pane::Primary,
        }
    }

    pub fn parse(s: &str) -> Option<Pane> {
        match s.to_ascii_lowercase().as_str() {
            "primary" | "1" | "one" | "left" => Some(Pane::Primary),
            "secondary" | "2" | "two" | "right" => Some(Pane::Secondary),
            _ => None,
        }
    }
}


/// A document as the host knows it. Identity is the file system path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Document {
    pub path: PathBuf,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Document { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}


/// How the host should show a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowOptions {
    pub pane: Pane,
    /// Leave keyboard focus where it is.
    pub keep_focus: bool,
    /// Open as a real tab rather than a transient preview.
    pub force_new_tab: bool,
}


/// A source file and the sibling resolved for it. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPair {
    pub source: PathBuf,
    pub sibling: PathBuf,
    pub source_is_style: bool,
}

impl ResolvedPair {
    pub fn source_category(&self) -> Category {
        if self.source_is_style {
            Category::Style
        } else {
            Category::Markup
        }
    }
}
