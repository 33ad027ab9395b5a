//! Layout controller — reacts to focus changes and the manual command by
//! placing a file and its sibling side by side.
//!
//! The automatic path is silent and conservative: it ignores events while a
//! placement is in flight, honours `enabled`, and leaves the layout alone
//! when the sibling is already visible. The manual command always places and
//! reports problems as warnings.

use std::path::Path;

use serde::Serialize;

use crate::error::HostError;
use crate::host::{Host, Subscription};
use crate::layout::targeting::{self, Step};
use crate::layout::timer::{Clock, PlacementTimer, SystemClock, DEFAULT_RELEASE_DELAY_MS};
use crate::matcher::{classify, resolve_sibling};
use crate::types::document::{Category, Document, ResolvedPair};


/// Command id bound to `manual_open_paired`.
pub const OPEN_PAIRED_COMMAND: &str = "splitpair.openPairedFile";


/// What a trigger did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Placed { pair: ResolvedPair },
    AlreadyVisible { pair: ResolvedPair },
    NoSibling { category: Category },
    Unclassified,
    Disabled,
    Suppressed,
    NoActiveDocument,
}


/// Live registrations made by `activate`.
#[derive(Debug)]
pub struct Activation {
    command: Subscription,
    active_document: Subscription,
}


pub struct Controller {
    timer: PlacementTimer,
    clock: Box<dyn Clock>,
}


impl Default for Controller {
    fn default() -> Self {
        Controller::new(Box::new(SystemClock))
    }
}


impl Controller {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self::with_release_delay(clock, DEFAULT_RELEASE_DELAY_MS)
    }

    pub fn with_release_delay(clock: Box<dyn Clock>, release_delay_ms: u64) -> Self {
        Controller {
            timer: PlacementTimer::new(release_delay_ms),
            clock,
        }
    }

    /// True while a placement runs or its release delay has not elapsed.
    pub fn is_placing(&self) -> bool {
        self.timer.is_placing(self.clock.now_ms())
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Register the command, subscribe to focus changes, and handle the
    /// document that is already active.
    pub fn activate(&mut self, host: &mut dyn Host) -> Activation {
        let command = host.register_command(OPEN_PAIRED_COMMAND);
        let active_document = host.subscribe_active_document_changed();
        let current = host.active_document();
        if let Err(e) = self.on_active_document_changed(host, current.as_ref()) {
            log::warn!("initial pairing failed: {}", e);
        }
        Activation {
            command,
            active_document,
        }
    }

    pub fn deactivate(&mut self, host: &mut dyn Host, activation: Activation) {
        host.release(activation.command);
        host.release(activation.active_document);
    }

    /// Route an invoked command id.
    pub fn handle_command(&mut self, host: &mut dyn Host, id: &str) -> Result<Outcome, HostError> {
        match id {
            OPEN_PAIRED_COMMAND => self.manual_open_paired(host),
            _ => Err(HostError::UnknownCommand(id.to_string())),
        }
    }

    // -----------------------------------------------------------------------
    // Triggers
    // -----------------------------------------------------------------------

    /// Automatic path, run on every "active document changed" event.
    pub fn on_active_document_changed(
        &mut self,
        host: &mut dyn Host,
        document: Option<&Document>,
    ) -> Result<Outcome, HostError> {
        let document = match document {
            Some(d) => d,
            None => return Ok(Outcome::NoActiveDocument),
        };
        if self.is_placing() {
            log::debug!("ignoring focus on {} during placement", document.path.display());
            return Ok(Outcome::Suppressed);
        }
        let settings = host.read_configuration();
        if !settings.enabled {
            return Ok(Outcome::Disabled);
        }
        let category = match classify(document.path(), &settings) {
            Some(c) => c,
            None => return Ok(Outcome::Unclassified),
        };
        let probe = |p: &Path| host.file_exists(p);
        let resolved = resolve_sibling(document.path(), category, &settings, &probe);
        let sibling = match resolved {
            Some(s) => s,
            None => {
                return Ok(Outcome::NoSibling {
                    category: category.opposite(),
                })
            }
        };
        let pair = ResolvedPair {
            source: document.path.clone(),
            sibling,
            source_is_style: category == Category::Style,
        };
        if host.visible_documents().iter().any(|d| d.path == pair.sibling) {
            return Ok(Outcome::AlreadyVisible { pair });
        }

        let current = host.pane_of(document);
        let steps = targeting::automatic_plan(document, &pair, current);
        self.place(host, &steps)?;
        log::info!(
            "paired {} with {}, ignoring focus changes for {} ms",
            pair.source.display(),
            pair.sibling.display(),
            self.timer.release_delay_ms()
        );
        Ok(Outcome::Placed { pair })
    }

    /// Manual command. Ignores `enabled`, the placement state, and whether
    /// the sibling is already visible.
    pub fn manual_open_paired(&mut self, host: &mut dyn Host) -> Result<Outcome, HostError> {
        let document = match host.active_document() {
            Some(d) => d,
            None => {
                host.show_warning("No active editor");
                return Ok(Outcome::NoActiveDocument);
            }
        };
        let settings = host.read_configuration();
        let category = match classify(document.path(), &settings) {
            Some(c) => c,
            None => {
                host.show_warning("Current file is not a style or markup file");
                return Ok(Outcome::Unclassified);
            }
        };
        let probe = |p: &Path| host.file_exists(p);
        let resolved = resolve_sibling(document.path(), category, &settings, &probe);
        let sibling = match resolved {
            Some(s) => s,
            None => {
                host.show_warning(&format!("No paired {} file found", category.opposite()));
                return Ok(Outcome::NoSibling {
                    category: category.opposite(),
                });
            }
        };
        let pair = ResolvedPair {
            source: document.path.clone(),
            sibling,
            source_is_style: category == Category::Style,
        };

        let steps = targeting::manual_plan(&document, &pair);
        self.place(host, &steps)?;
        log::info!("opened {} beside {}", pair.sibling.display(), pair.source.display());
        Ok(Outcome::Placed { pair })
    }

    // -----------------------------------------------------------------------
    // Placement
    // -----------------------------------------------------------------------

    /// Run steps in order while Placing. The first failing step aborts the
    /// sequence; the release is scheduled either way.
    fn place(&mut self, host: &mut dyn Host, steps: &[Step]) -> Result<(), HostError> {
        let _guard = self.timer.begin(&*self.clock);
        for step in steps {
            match step {
                Step::Show { document, options } => host.show_document(document, *options)?,
                Step::Open { path, options } => {
                    let opened = host.open_document(path)?;
                    host.show_document(&opened, *options)?;
                }
            }
        }
        Ok(())
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
