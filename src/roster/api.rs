//! # API Facade
//!
//! The API layer is a **thin facade** over [`StudentService`]. It is the single
//! entry point for presentation clients (the bundled CLI, or anything else).
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** each call to the matching service operation
//! - **Normalizes inputs** (ordering selectors → policies, raw age text → `i32`)
//! - **Returns structured types**, never strings meant for display
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Validation**: the service path is the system of record; the facade
//!   only converts text to numbers
//! - **I/O**: no stdout, stderr, or terminal assumptions
//!
//! ## Generic Over StudentStore
//!
//! `RosterApi<S: StudentStore>` is generic over the storage backend so tests
//! and hosts can inject whichever store they construct.

use crate::error::Result;
use crate::model::Student;
use crate::service::StudentService;
use crate::store::StudentStore;
use crate::validation;

/// The controller surface presentation clients call.
pub struct RosterApi<S: StudentStore> {
    service: StudentService<S>,
}

impl<S: StudentStore> RosterApi<S> {
    pub fn new(service: StudentService<S>) -> Self {
        Self { service }
    }

    pub fn create(&mut self, id: &str, name: &str, age: i32) -> Result<Student> {
        self.service.create_student(id, name, age)
    }

    pub fn list(&self) -> Vec<Student> {
        self.service.list_students()
    }

    pub fn delete(&mut self, id: &str) -> Result<bool> {
        self.service.delete_student(id)
    }

    pub fn edit(&mut self, id: &str, name: &str, age: i32) -> Result<bool> {
        self.service.edit_student(id, name, age)
    }

    pub fn edit_with_snapshot(&mut self, id: &str, name: &str, age: i32) -> Result<EditOutcome> {
        self.service.edit_student_with_snapshot(id, name, age)
    }

    pub fn find(&self, id: &str) -> Option<Student> {
        self.service.find_student(id)
    }

    /// An independent copy of the stored record, unaffected by later edits.
    pub fn snapshot(&self, id: &str) -> Option<Student> {
        self.service.snapshot_student(id)
    }

    pub fn set_ordering(&mut self, key: SortKey) {
        self.service.set_ordering_policy(key);
    }

    pub fn ordering(&self) -> &str {
        self.service.ordering_policy_name()
    }

    pub fn count(&self) -> usize {
        self.service.len()
    }

    pub fn service(&self) -> &StudentService<S> {
        &self.service
    }
}

/// Converts raw age text for the `create`/`edit` calls.
pub fn parse_age(raw: &str) -> Result<i32> {
    Ok(validation::parse_age(raw)?)
}

pub use crate::commands::EditOutcome;
pub use crate::ordering::SortKey;
