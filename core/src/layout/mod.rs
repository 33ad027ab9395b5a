//! Layout management — pane targeting, placement timing, and the controller.
//!
//! The `targeting` module maps categories to panes and builds the ordered
//! placement steps. The `timer` module holds the Idle/Placing state that
//! keeps the controller from reacting to its own focus moves. The
//! `controller` module wires the matcher and the host together.

pub mod controller;
pub mod targeting;
pub mod timer;
