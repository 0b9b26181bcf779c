//! # Prdgen Architecture
//!
//! Prdgen is a **UI-agnostic PRD-building library** with a CLI client on top.
//! The core turns a single persisted document state into a planning PRD in
//! one of four output formats; the binary is just one way to drive it.
//!
//! ## Layers
//!
//! ```text
//! CLI (main.rs + args.rs)
//!   parses arguments, prints CmdResults, owns stdout/stderr/exit codes
//!        │
//! API (api.rs)
//!   facade holding the document state, routes mutations through the
//!   reducer and persists after every change
//!        │
//! Commands (commands/*.rs)
//!   business logic on a PrdState snapshot, returns structured results
//!        │
//! Core (model, state, phrasing, render)
//!   pure functions, no I/O at all
//!        │
//! Storage (store/)
//!   StateStore trait, FileStore (production), InMemoryStore (testing)
//! ```
//!
//! ## Key Principle: Rendering Is Pure
//!
//! From `api.rs` inward, nothing touches stdout, the terminal, or the
//! process environment. Rendering the same state twice yields the same
//! bytes. Persistence degrades silently: a missing or unreadable document
//! file just means default state.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`model`]: Field, section, format, and phrasing types
//! - [`state`]: Document state and the action reducer
//! - [`phrasing`]: Text normalization (verbatim/assisted modes)
//! - [`render`]: The four output renderers
//! - [`store`]: Storage abstraction and implementations
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod error;
pub mod model;
pub mod phrasing;
pub mod render;
pub mod state;
pub mod store;
