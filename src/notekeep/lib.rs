//! # Notekeep Architecture
//!
//! Notekeep is a **UI-agnostic note-keeping library**. The bundled command-line
//! client is just one caller; a browser view or any other surface drives the same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Holds the edit session and the current view state        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Query Engine (query.rs)    │
//! │  - Operations on Rust types returning `CmdResult`           │
//! │  - Read-only filter/search derivation of visible notes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NoteStore: collection, id allocator, categories, theme   │
//! │  - StorageBackend trait: FsBackend, MemBackend              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular Rust
//! types, never prints and never exits. Persistence goes exclusively through a
//! [`store::StorageBackend`].
//!
//! ## Failure Model
//!
//! Referencing a missing note is a no-op result, not a failure. Persistence
//! failures are logged through the `log` facade and absorbed; the in-memory
//! collection remains authoritative for the rest of the session.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Operations wrapping the store, with user-facing messages
//! - [`query`]: Filter and search over a note slice
//! - [`store`]: Storage abstraction, backends and the note store
//! - [`model`]: Core data types (`Note`, `NoteDraft`, `NotePatch`, `ImageUpdate`)
//! - [`config`]: Client configuration
//! - [`editor`]: Speech transcript appending
//! - [`image`]: Image files as data URLs
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod image;
pub mod model;
pub mod query;
pub mod store;
