//! Host seam — the editor operations the controller drives.
//!
//! Production code binds `Host` to a real editor. `MemoryHost` keeps a
//! virtual two-pane layout and records every call; the CLI and the tests
//! run against it.

pub mod memory;

use std::path::Path;

use crate::error::HostError;
use crate::types::config::PairSettings;
use crate::types::document::{Document, Pane, ShowOptions};

pub use memory::MemoryHost;


/// Handle for a command registration or event subscription. Released on
/// deactivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(pub u64);


/// Editor operations consumed by the layout controller.
pub trait Host {
    /// Open (load) a document without showing it.
    fn open_document(&mut self, path: &Path) -> Result<Document, HostError>;

    /// Show a document in a pane.
    fn show_document(&mut self, document: &Document, options: ShowOptions) -> Result<(), HostError>;

    /// Documents currently visible in any pane.
    fn visible_documents(&self) -> Vec<Document>;

    fn active_document(&self) -> Option<Document>;

    /// Pane currently showing `document`, if any.
    fn pane_of(&self, document: &Document) -> Option<Pane>;

    /// Current settings. Read on every trigger, never cached.
    fn read_configuration(&self) -> PairSettings;

    fn register_command(&mut self, id: &str) -> Subscription;

    fn subscribe_active_document_changed(&mut self) -> Subscription;

    fn release(&mut self, subscription: Subscription);

    /// Surface a user-visible warning.
    fn show_warning(&mut self, message: &str);

    /// Existence check used by sibling resolution.
    fn file_exists(&self, path: &Path) -> bool;
}
