//! # Rolodex Architecture
//!
//! Rolodex is a **UI-agnostic contact table**. The interesting part is the view
//! logic (search, sort, selection, pagination, tag styling); the terminal
//! client is just one way of drawing it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments and browse commands, renders tables     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Turns a ViewQuery into view events                       │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View + Commands (view.rs, commands/*.rs)                   │
//! │  - ContactsView: transient UI state and its events          │
//! │  - filter, sort, selection, pagination, tags, export        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ContactSource trait                                      │
//! │  - FileStore (JSON file), InMemoryStore (sample, tests)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust arguments, returns
//! `Result<CmdResult>` or plain values, and never writes to stdout or stderr.
//! Every table operation is total: filtering, selecting and paging cannot fail.
//! Errors only come from loading contacts or configuration and from parsing
//! user input (page sizes, sort keys).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`view`]: Transient table state and derived snapshots
//! - [`commands`]: Filter, sort, selection, pagination, tag styles, export, config
//! - [`store`]: Contact sources
//! - [`model`]: The `Contact` record
//! - [`sample`]: Built-in contacts
//! - [`config`]: Persistent defaults
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod sample;
pub mod store;
pub mod view;
