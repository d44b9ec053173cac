//! # Command Layer
//!
//! One module per roster operation. Each `run` function is the complete
//! business logic for its operation: it takes the store (and whatever policy
//! it needs) as plain arguments, performs every check, and only then mutates.
//!
//! Existence checks live here and nowhere else. The store answers questions
//! and applies changes; it does not decide whether a change is allowed.
//!
//! Nothing in this layer prints or assumes a terminal.

use crate::model::Student;

pub mod create;
pub mod delete;
pub mod edit;
pub mod find;
pub mod list;

/// Result of a copy-before-mutate edit.
///
/// `before` is a snapshot taken before the store was touched; it is an owned
/// value and does not follow later changes to the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    pub before: Student,
    pub after: Student,
}
