//! In-memory host with a virtual two-pane layout.
//!
//! Each pane shows at most one document. Focus moves raise pending
//! "active document changed" events instead of calling back into the
//! controller; `pump` delivers them afterwards, the way an editor would
//! once the controller yields.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::error::HostError;
use crate::host::{Host, Subscription};
use crate::layout::controller::{Controller, Outcome};
use crate::response::Action;
use crate::types::config::PairSettings;
use crate::types::document::{Document, Pane, ShowOptions};


/// Where `file_exists` looks.
#[derive(Debug, Clone)]
enum FileSource {
    Virtual(BTreeSet<PathBuf>),
    Disk,
}


#[derive(Debug, Clone, PartialEq, Eq)]
enum SubscriptionKind {
    Command(String),
    ActiveDocumentChanged,
}


#[derive(Debug, Clone)]
pub struct MemoryHost {
    settings: PairSettings,
    files: FileSource,
    panes: BTreeMap<Pane, Document>,
    active: Option<(Document, Pane)>,
    pending_events: Vec<Option<Document>>,
    actions: Vec<Action>,
    subscriptions: Vec<(Subscription, SubscriptionKind)>,
    next_subscription: u64,
    rejected: BTreeSet<PathBuf>,
}


impl MemoryHost {
    /// A host whose file system is an in-memory set of paths.
    pub fn new(settings: PairSettings) -> Self {
        Self::with_source(settings, FileSource::Virtual(BTreeSet::new()))
    }

    /// A host that checks the real file system.
    pub fn on_disk(settings: PairSettings) -> Self {
        Self::with_source(settings, FileSource::Disk)
    }

    fn with_source(settings: PairSettings, files: FileSource) -> Self {
        MemoryHost {
            settings,
            files,
            panes: BTreeMap::new(),
            active: None,
            pending_events: Vec::new(),
            actions: Vec::new(),
            subscriptions: Vec::new(),
            next_subscription: 1,
            rejected: BTreeSet::new(),
        }
    }

    /// Add a file to the virtual file system. No effect on a disk host.
    pub fn add_file(&mut self, path: impl Into<PathBuf>) {
        if let FileSource::Virtual(set) = &mut self.files {
            set.insert(path.into());
        }
    }

    pub fn remove_file(&mut self, path: &Path) {
        if let FileSource::Virtual(set) = &mut self.files {
            set.remove(path);
        }
    }

    pub fn set_settings(&mut self, settings: PairSettings) {
        self.settings = settings;
    }

    /// Make `show_document` fail for this path.
    pub fn reject_show(&mut self, path: impl Into<PathBuf>) {
        self.rejected.insert(path.into());
    }

    /// Put a document in a pane without touching focus or recording actions.
    pub fn arrange(&mut self, pane: Pane, path: impl Into<PathBuf>) -> Document {
        let document = Document::new(path);
        self.panes.insert(pane, document.clone());
        document
    }

    /// User focuses a document in a pane. Raises a pending event.
    pub fn focus(&mut self, pane: Pane, path: impl Into<PathBuf>) -> Document {
        let document = self.arrange(pane, path);
        self.set_active(document.clone(), pane);
        document
    }

    /// User closes every editor.
    pub fn close_all(&mut self) {
        self.panes.clear();
        if self.active.take().is_some() {
            self.pending_events.push(None);
        }
    }

    fn set_active(&mut self, document: Document, pane: Pane) {
        let next = Some((document.clone(), pane));
        if self.active != next {
            self.active = next;
            self.pending_events.push(Some(document));
        }
    }

    /// Document shown in a pane, if any.
    pub fn shown_in(&self, pane: Pane) -> Option<&Document> {
        self.panes.get(&pane)
    }

    /// Pane holding keyboard focus.
    pub fn active_pane(&self) -> Option<Pane> {
        self.active.as_ref().map(|(_, pane)| *pane)
    }

    /// Every call recorded so far.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Take and clear recorded calls.
    pub fn drain_actions(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.actions)
    }

    /// Layout-changing calls recorded so far.
    pub fn placement_actions(&self) -> Vec<&Action> {
        self.actions.iter().filter(|a| a.is_placement()).collect()
    }

    /// Warning messages shown so far.
    pub fn warnings(&self) -> Vec<&str> {
        self.actions
            .iter()
            .filter_map(|a| match a {
                Action::Warning { message } => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Take the focus-change events raised since the last call.
    pub fn take_events(&mut self) -> Vec<Option<Document>> {
        std::mem::take(&mut self.pending_events)
    }

    /// Registered command ids that have not been released.
    pub fn registered_commands(&self) -> Vec<&str> {
        self.subscriptions
            .iter()
            .filter_map(|(_, kind)| match kind {
                SubscriptionKind::Command(id) => Some(id.as_str()),
                SubscriptionKind::ActiveDocumentChanged => None,
            })
            .collect()
    }

    /// Number of live subscriptions of any kind.
    pub fn live_subscriptions(&self) -> usize {
        self.subscriptions.len()
    }

    fn has_focus_listener(&self) -> bool {
        self.subscriptions
            .iter()
            .any(|(_, kind)| *kind == SubscriptionKind::ActiveDocumentChanged)
    }

    /// Deliver pending focus events to the controller, including events its
    /// own placement raises, until none are left. Without a live
    /// subscription the events are dropped.
    pub fn pump(&mut self, controller: &mut Controller) -> Result<Vec<Outcome>, HostError> {
        let mut outcomes = Vec::new();
        loop {
            let events = self.take_events();
            if events.is_empty() || !self.has_focus_listener() {
                return Ok(outcomes);
            }
            for event in events {
                outcomes.push(controller.on_active_document_changed(self, event.as_ref())?);
            }
        }
    }
}


impl Host for MemoryHost {
    fn open_document(&mut self, path: &Path) -> Result<Document, HostError> {
        if !self.file_exists(path) {
            return Err(HostError::NotFound(path.to_path_buf()));
        }
        self.actions.push(Action::OpenDocument {
            path: path.to_path_buf(),
        });
        Ok(Document::new(path))
    }

    fn show_document(&mut self, document: &Document, options: ShowOptions) -> Result<(), HostError> {
        self.actions.push(Action::ShowDocument {
            path: document.path.clone(),
            pane: options.pane,
            keep_focus: options.keep_focus,
            force_new_tab: options.force_new_tab,
        });
        if self.rejected.contains(&document.path) {
            return Err(HostError::Rejected {
                operation: "show_document".into(),
                reason: format!("{} cannot be shown", document.path.display()),
            });
        }
        self.panes.insert(options.pane, document.clone());
        if !options.keep_focus || self.active.is_none() {
            self.set_active(document.clone(), options.pane);
        }
        Ok(())
    }

    fn visible_documents(&self) -> Vec<Document> {
        self.panes.values().cloned().collect()
    }

    fn active_document(&self) -> Option<Document> {
        self.active.as_ref().map(|(doc, _)| doc.clone())
    }

    fn pane_of(&self, document: &Document) -> Option<Pane> {
        if let Some((active, pane)) = &self.active {
            if active == document {
                return Some(*pane);
            }
        }
        self.panes
            .iter()
            .find(|(_, shown)| *shown == document)
            .map(|(pane, _)| *pane)
    }

    fn read_configuration(&self) -> PairSettings {
        self.settings.clone()
    }

    fn register_command(&mut self, id: &str) -> Subscription {
        let sub = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.subscriptions
            .push((sub, SubscriptionKind::Command(id.to_string())));
        sub
    }

    fn subscribe_active_document_changed(&mut self) -> Subscription {
        let sub = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.subscriptions
            .push((sub, SubscriptionKind::ActiveDocumentChanged));
        sub
    }

    fn release(&mut self, subscription: Subscription) {
        self.subscriptions.retain(|(sub, _)| *sub != subscription);
    }

    fn show_warning(&mut self, message: &str) {
        log::warn!("{}", message);
        self.actions.push(Action::Warning {
            message: message.to_string(),
        });
    }

    fn file_exists(&self, path: &Path) -> bool {
        match &self.files {
            FileSource::Virtual(set) => set.contains(path),
            FileSource::Disk => path.is_file(),
        }
    }
}
