//! # CLI Behavior
//!
//! This is **one possible UI client** for roster, not the application itself.
//! It stands in for the form-and-table front end: it collects raw input,
//! hands it to [`roster::api::RosterApi`], and renders what comes back.
//!
//! ## Sessions
//!
//! ### Naked Execution (`roster`)
//!
//! Running `roster` with no subcommand starts a shell session.
//!
//! ### Shell (`roster shell`)
//!
//! One command per line on stdin, applied to a single roster:
//!
//! ```text
//! create 3 Carlos 25
//! create 1 "Ana María" 22
//! order name
//! list
//! ```
//!
//! Failed commands print an error and the session carries on. Blank lines and
//! lines starting with `#` are ignored.
//!
//! ### Demo (`roster demo`)
//!
//! Creates three students and lists them under each ordering.
//!
//! ## Module Structure
//!
//! - `commands`: context setup, dispatch, per-command handlers
//! - `setup`: process arguments via clap
//! - `shell`: the line grammar and the read loop
//! - `print`: output formatting (tables, colors, messages, JSON)

mod commands;
mod print;
mod setup;
mod shell;

pub use commands::run;
