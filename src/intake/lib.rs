//! # Intake Architecture
//!
//! Intake is a **UI-agnostic contact-management library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: validation, status workflow,        │
//! │    timestamps, cascades                                     │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract ContactStore trait                              │
//! │  - SqliteStore (production), MemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! This means the same core could serve a REST API, a desktop app, or any
//! other UI.
//!
//! ## View state is a value
//!
//! The listing/filtering engine ([`view`]) is a pure function over an
//! explicit [`view::ViewState`] value. No filter, sort, page, or selection
//! state lives anywhere else, which is what makes the engine trivially
//! testable without a terminal or a database.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Contact`, `Note`, `Service`, `Status`)
//! - [`validate`]: Schema validation with field-keyed error maps
//! - [`view`]: The listing/filtering engine over a `ViewState` value
//! - [`thread`]: Optimistic note-thread protocol (tentative/commit/rollback)
//! - [`auth`]: Access gate—credential check, session, referral capture
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod auth;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod thread;
pub mod validate;
pub mod view;
