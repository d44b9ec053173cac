//! # Roster Architecture
//!
//! Roster is a **UI-agnostic student roster library**. The bundled `roster`
//! binary is one client of it; nothing in the library knows a terminal exists.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments and shell lines, formats output         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over the service                             │
//! │  - Normalizes inputs (selectors → policies, text → ages)    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Service (service.rs) + Command Layer (commands/*.rs)       │
//! │  - Service owns store, creation policy, ordering policy     │
//! │  - Commands hold the rules: uniqueness, existence, edits    │
//! └─────────────────────────────────────────────────────────────┘
//!                    │                         │
//!                    ▼                         ▼
//! ┌──────────────────────────────┐ ┌────────────────────────────┐
//! │  Policies                    │ │  Storage Layer (store/)    │
//! │  - factory.rs (creation)     │ │  - StudentStore trait      │
//! │  - ordering.rs (listing)     │ │  - InMemoryStore           │
//! └──────────────────────────────┘ └────────────────────────────┘
//! ```
//!
//! Writes flow API → service → factory → store. Reads flow service → store →
//! ordering policy. The store never calls back up.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<T>` with [`error::RosterError`])
//! - **Never** writes to stdout/stderr (diagnostics go through `tracing`,
//!   which is silent unless the host installs a subscriber)
//! - **Never** calls `std::process::exit`
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): thorough unit tests of the rules, run
//!    against `InMemoryStore` fixtures.
//! 2. **Service / API**: dispatch tests plus property tests for ordering and
//!    no-mutation-on-error.
//! 3. **CLI**: integration tests that pipe scripted sessions into the binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for presentation clients
//! - [`service`]: Stateful orchestration of store and policies
//! - [`shared`]: Lock-guarded service handle for concurrent hosts
//! - [`commands`]: Business logic for each operation
//! - [`factory`]: Creation policies
//! - [`ordering`]: Ordering policies and sort keys
//! - [`validation`]: Field rules shared by create and edit
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: The `Student` record
//! - [`config`]: Client configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod factory;
pub mod model;
pub mod ordering;
pub mod service;
pub mod shared;
pub mod store;
pub mod validation;
