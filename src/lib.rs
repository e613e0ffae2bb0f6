//! TabDesk — the store behind a new-tab dashboard.
//!
//! Folders of links for the sidebar and a flat grid of shortcuts, persisted in
//! a local SQLite database. This library crate exposes all modules for use by
//! the binaries and integration tests.

pub mod app;
pub mod database;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod types;
