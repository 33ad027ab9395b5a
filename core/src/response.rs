//! Responses returned by `Sys::execute` and the host actions a run issued.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::document::Pane;


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Response {
    Ok { output: String },
    Error { message: String },
}


/// One call made against the host, in the order it was made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    OpenDocument {
        path: PathBuf,
    },
    ShowDocument {
        path: PathBuf,
        pane: Pane,
        keep_focus: bool,
        force_new_tab: bool,
    },
    Warning {
        message: String,
    },
}

impl Action {
    /// True for calls that change the pane layout.
    pub fn is_placement(&self) -> bool {
        matches!(self, Action::OpenDocument { .. } | Action::ShowDocument { .. })
    }
}
