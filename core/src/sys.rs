use std::path::Path;

use crate::command::Command;
use crate::host::{Host, MemoryHost};
use crate::layout::controller::{Controller, OPEN_PAIRED_COMMAND};
use crate::matcher::{candidates, classify, resolve_sibling, DiskProbe};
use crate::response::{Action, Response};
use crate::types::config::PairSettings;
use crate::types::document::Pane;


/// Central runtime for splitpair. Dispatches matcher and layout commands
/// against the real file system and an in-memory pane layout.
pub struct Sys {
    settings: PairSettings,
    actions: Vec<Action>,
}


impl Sys {
    pub fn new(settings: PairSettings) -> Sys {
        Sys {
            settings,
            actions: Vec::new(),
        }
    }

    /// Return a reference to the current settings.
    pub fn settings(&self) -> &PairSettings {
        &self.settings
    }

    /// The single dispatch method.
    pub fn execute(&mut self, cmd: Command) -> Response {
        self.actions.clear();
        match cmd {
            Command::Classify { path } => self.cmd_classify(path),
            Command::Resolve { path } => self.cmd_resolve(path),
            Command::Candidates { path } => self.cmd_candidates(path),
            Command::Open { path, pane, beside } => self.cmd_layout(path, pane, beside, true),
            Command::Focus { path, pane, beside } => self.cmd_layout(path, pane, beside, false),
            Command::Settings => self.cmd_settings(),
            Command::Help { topic } => self.cmd_help(topic),
        }
    }

    /// Host actions issued during the last execute() call.
    pub fn pending_actions(&self) -> &[Action] {
        &self.actions
    }

    /// Take and clear accumulated actions.
    pub fn drain_actions(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.actions)
    }

    // -----------------------------------------------------------------------
    // Matcher commands
    // -----------------------------------------------------------------------

    fn cmd_classify(&self, path: String) -> Response {
        let output = classify(Path::new(&path), &self.settings)
            .map(|c| c.as_str())
            .unwrap_or("none");
        Response::Ok {
            output: output.into(),
        }
    }

    fn cmd_resolve(&self, path: String) -> Response {
        let source = Path::new(&path);
        let category = match classify(source, &self.settings) {
            Some(c) => c,
            None => return not_classified(&path),
        };
        match resolve_sibling(source, category, &self.settings, &DiskProbe) {
            Some(sibling) => Response::Ok {
                output: sibling.display().to_string(),
            },
            None => Response::Error {
                message: format!("No paired {} file found for '{}'", category.opposite(), path),
            },
        }
    }

    fn cmd_candidates(&self, path: String) -> Response {
        let source = Path::new(&path);
        let category = match classify(source, &self.settings) {
            Some(c) => c,
            None => return not_classified(&path),
        };
        let lines: Vec<String> = candidates(source, category, &self.settings)
            .iter()
            .map(|c| c.display().to_string())
            .collect();
        Response::Ok {
            output: lines.join("\n"),
        }
    }

    // -----------------------------------------------------------------------
    // Layout commands
    // -----------------------------------------------------------------------

    /// Focus `path` in a fresh two-pane layout, trigger the manual or the
    /// automatic path, then deliver the focus events the placement raised.
    fn cmd_layout(
        &mut self,
        path: String,
        pane: Option<String>,
        beside: Option<String>,
        manual: bool,
    ) -> Response {
        let pane = match pane.as_deref() {
            None => Pane::Primary,
            Some(p) => match Pane::parse(p) {
                Some(p) => p,
                None => {
                    return Response::Error {
                        message: format!("Unknown pane: '{}' (use primary or secondary)", p),
                    }
                }
            },
        };

        let mut host = MemoryHost::on_disk(self.settings.clone());
        let mut controller = Controller::default();
        let command = host.register_command(OPEN_PAIRED_COMMAND);
        let subscription = host.subscribe_active_document_changed();
        if let Some(other) = beside {
            host.arrange(pane.other(), other);
        }
        let document = host.focus(pane, path);

        host.take_events();
        let result = if manual {
            controller.handle_command(&mut host, OPEN_PAIRED_COMMAND)
        } else {
            controller.on_active_document_changed(&mut host, Some(&document))
        };
        let outcome = match result {
            Ok(o) => o,
            Err(e) => {
                self.actions = host.drain_actions();
                return Response::Error {
                    message: e.to_string(),
                };
            }
        };
        let followups = match host.pump(&mut controller) {
            Ok(f) => f,
            Err(e) => {
                self.actions = host.drain_actions();
                return Response::Error {
                    message: e.to_string(),
                };
            }
        };
        host.release(command);
        host.release(subscription);

        self.actions = host.drain_actions();
        let report = serde_json::json!({
            "outcome": outcome,
            "followups": followups,
            "actions": self.actions,
            "layout": {
                "primary": host.shown_in(Pane::Primary).map(|d| d.path.display().to_string()),
                "secondary": host.shown_in(Pane::Secondary).map(|d| d.path.display().to_string()),
            },
        });
        Response::Ok {
            output: report.to_string(),
        }
    }

    // -----------------------------------------------------------------------
    // Settings / Help
    // -----------------------------------------------------------------------

    fn cmd_settings(&self) -> Response {
        match serde_json::to_string_pretty(&self.settings) {
            Ok(output) => Response::Ok { output },
            Err(e) => Response::Error {
                message: format!("Failed to serialize settings: {}", e),
            },
        }
    }

    fn cmd_help(&self, topic: Option<String>) -> Response {
        Response::Ok {
            output: crate::help::help_text(topic.as_deref()),
        }
    }
}


fn not_classified(path: &str) -> Response {
    Response::Error {
        message: format!("'{}' is not a style or markup file", path),
    }
}
