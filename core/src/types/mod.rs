//! Plain data types: settings, documents, panes.

pub mod config;
pub mod document;
