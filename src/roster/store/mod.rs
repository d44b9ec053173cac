//! # Storage Layer
//!
//! This module defines the storage abstraction for the roster. The
//! [`StudentStore`] trait is the only way the service layer touches records.
//!
//! ## Responsibilities
//!
//! A store owns the authoritative collection and keeps it in insertion order.
//! It does **not** enforce business rules:
//! - uniqueness of ids is checked by the command layer before [`StudentStore::add`]
//! - field validation happens in the factory and the edit command
//!
//! A store that checked these again would be a second owner of the same rule,
//! and the two could drift apart.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: a `Vec`-backed store, the only backend. Records
//!   live as long as the store value does.

use crate::model::Student;

pub mod memory;

/// Abstract interface for student storage.
pub trait StudentStore {
    /// Append a record. The caller has already checked the id is free.
    fn add(&mut self, student: Student);

    /// First record with a matching id, in insertion order.
    fn find_by_id(&self, id: &str) -> Option<&Student>;

    /// Replace `name` and `age` of the record with `id` in place.
    ///
    /// Returns `false` without mutating anything when no such record exists.
    fn update(&mut self, id: &str, name: &str, age: i32) -> bool;

    /// Remove the record with `id`. Returns whether a record was removed.
    fn remove(&mut self, id: &str) -> bool;

    /// The live collection in storage order.
    fn list(&self) -> &[Student];

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
