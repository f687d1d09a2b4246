//! # Userdesk Architecture
//!
//! Userdesk is a **UI-agnostic user registry**. It validates submitted credentials and
//! keeps user records in a single flat JSON file. The command line binary is one client;
//! a web request layer would be another, talking to the same [`api::UsersApi`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Serializes store access behind one lock                  │
//! │  - Validate-then-persist for form submissions               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + validation.rs              │
//! │  - Read whole table, mutate in memory, write whole table    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code returns `Result<CmdResult>` and never prints, never
//! exits, and never installs a log subscriber. Logging goes through `tracing`
//! macros; the binary decides where it ends up (see [`logging`]).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`validation`]: Credential checks producing a [`model::ValidationReport`]
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`UserRecord`, `UserFields`, `ValidationReport`)
//! - [`config`]: Per-data-directory configuration
//! - [`logging`]: Subscriber setup for binaries
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;
pub mod validation;
