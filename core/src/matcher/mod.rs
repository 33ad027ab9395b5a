//! Matcher — classify a path into the style or markup group and find its
//! sibling in the opposite group.
//!
//! The `classify` module does suffix matching and stem extraction. The
//! `candidates` module builds the ordered candidate list and filters it
//! through a `Probe`.

pub mod candidates;
pub mod classify;

pub use candidates::{candidates, resolve_pair, resolve_sibling, DiskProbe, Probe};
pub use classify::{base_name, classify};
