//! splitpair-core — pair stylesheets with their component files and show
//! both in a two-pane layout.

pub mod command;
pub mod error;
pub mod help;
pub mod host;
pub mod layout;
pub mod matcher;
pub mod response;
pub mod sys;
pub mod types;

pub use error::{ConfigError, HostError};
pub use host::{Host, MemoryHost};
pub use layout::controller::{Controller, Outcome, OPEN_PAIRED_COMMAND};
pub use types::config::PairSettings;
pub use types::document::{Category, Document, Pane, ResolvedPair};
