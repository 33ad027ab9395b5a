//! Pane targeting — which pane each category lives in, and the ordered steps
//! that put a resolved pair there.
//!
//! Markup goes to the primary (left) pane, styles to the secondary (right)
//! pane. Plans are plain data; the controller executes them in order.

use std::path::PathBuf;

use crate::types::document::{Category, Document, Pane, ResolvedPair, ShowOptions};


/// Designated pane for a category.
pub fn pane_for(category: Category) -> Pane {
    match category {
        Category::Markup => Pane::Primary,
        Category::Style => Pane::Secondary,
    }
}


/// One host call in a placement sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Show a document that is already open.
    Show { document: Document, options: ShowOptions },
    /// Open a document by path, then show it.
    Open { path: PathBuf, options: ShowOptions },
}


fn take_focus(pane: Pane) -> ShowOptions {
    ShowOptions {
        pane,
        keep_focus: false,
        force_new_tab: true,
    }
}

fn keep_focus(pane: Pane) -> ShowOptions {
    ShowOptions {
        pane,
        keep_focus: true,
        force_new_tab: true,
    }
}


/// Steps for a focus-triggered placement.
///
/// 1. Move the source to its pane, unless `current` already is that pane.
/// 2. Open the sibling in the other pane without taking focus.
/// 3. Focus the source in its pane again.
pub fn automatic_plan(source: &Document, pair: &ResolvedPair, current: Option<Pane>) -> Vec<Step> {
    let source_pane = pane_for(pair.source_category());
    let sibling_pane = pane_for(pair.source_category().opposite());
    let mut steps = Vec::with_capacity(3);
    if current != Some(source_pane) {
        steps.push(Step::Show {
            document: source.clone(),
            options: take_focus(source_pane),
        });
    }
    steps.push(Step::Open {
        path: pair.sibling.clone(),
        options: keep_focus(sibling_pane),
    });
    steps.push(Step::Show {
        document: source.clone(),
        options: take_focus(source_pane),
    });
    steps
}


/// Steps for an explicit user request: always show the source in its pane,
/// then open the sibling beside it without taking focus.
pub fn manual_plan(source: &Document, pair: &ResolvedPair) -> Vec<Step> {
    let source_pane = pane_for(pair.source_category());
    let sibling_pane = pane_for(pair.source_category().opposite());
    vec![
        Step::Show {
            document: source.clone(),
            options: take_focus(source_pane),
        },
        Step::Open {
            path: pair.sibling.clone(),
            options: keep_focus(sibling_pane),
        },
    ]
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
