//! Command — the typed interface for all splitpair operations.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "command")]
pub enum Command {
    // -----------------------------------------------------------------
    // Matcher commands
    // -----------------------------------------------------------------

    #[serde(rename = "classify")]
    Classify {
        path: String,
    },

    #[serde(rename = "resolve")]
    Resolve {
        path: String,
    },

    #[serde(rename = "candidates")]
    Candidates {
        path: String,
    },

    // -----------------------------------------------------------------
    // Layout commands
    // -----------------------------------------------------------------

    /// Run the manual "open paired file" command with `path` focused.
    #[serde(rename = "open")]
    Open {
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pane: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        beside: Option<String>,
    },

    /// Deliver a focus change for `path` to the automatic path.
    #[serde(rename = "focus")]
    Focus {
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pane: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        beside: Option<String>,
    },

    // -----------------------------------------------------------------
    // Settings / Help
    // -----------------------------------------------------------------

    #[serde(rename = "settings")]
    Settings,

    #[serde(rename = "help")]
    Help {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        topic: Option<String>,
    },
}
