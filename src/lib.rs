//! Showroom library crate
//!
//! Exposes the core state modules so tests and external tooling can exercise
//! the filter, comparison, view-state, and advisory logic without going
//! through the TUI.

pub mod advisor;
pub mod app;
pub mod catalog;
pub mod compare;
pub mod config;
pub mod filter;
pub mod ui;
pub mod util;
pub mod view;
