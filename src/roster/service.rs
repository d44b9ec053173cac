//! # Student Service
//!
//! [`StudentService`] owns the roster state and is the only thing that
//! mutates the store. It holds three collaborators:
//!
//! - the store, moved in at construction
//! - the creation policy (a [`StudentFactory`]), fixed at construction
//! - the active ordering policy, replaceable with
//!   [`StudentService::set_ordering_policy`]
//!
//! Each operation dispatches to the matching `commands::*::run` function,
//! which carries the actual rules.

use crate::commands::{self, EditOutcome};
use crate::error::Result;
use crate::factory::{StudentFactory, ValidatingFactory};
use crate::model::Student;
use crate::ordering::{OrderingPolicy, SortKey};
use crate::store::StudentStore;
use tracing::debug;

pub struct StudentService<S: StudentStore> {
    store: S,
    factory: Box<dyn StudentFactory + Send>,
    ordering: Box<dyn OrderingPolicy + Send>,
}

impl<S: StudentStore> StudentService<S> {
    /// A service with the validating factory, listing by id.
    pub fn new(store: S) -> Self {
        Self {
            store,
            factory: Box::new(ValidatingFactory),
            ordering: Box::new(SortKey::Id),
        }
    }

    pub fn with_factory<F>(mut self, factory: F) -> Self
    where
        F: StudentFactory + Send + 'static,
    {
        self.factory = Box::new(factory);
        self
    }

    pub fn with_ordering<P>(mut self, policy: P) -> Self
    where
        P: OrderingPolicy + Send + 'static,
    {
        self.ordering = Box::new(policy);
        self
    }

    pub fn create_student(&mut self, id: &str, name: &str, age: i32) -> Result<Student> {
        commands::create::run(&mut self.store, self.factory.as_ref(), id, name, age)
    }

    pub fn edit_student(&mut self, id: &str, name: &str, age: i32) -> Result<bool> {
        commands::edit::run(&mut self.store, id, name, age)
    }

    pub fn edit_student_with_snapshot(
        &mut self,
        id: &str,
        name: &str,
        age: i32,
    ) -> Result<EditOutcome> {
        commands::edit::run_with_snapshot(&mut self.store, id, name, age)
    }

    pub fn delete_student(&mut self, id: &str) -> Result<bool> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn find_student(&self, id: &str) -> Option<Student> {
        commands::find::run(&self.store, id)
    }

    /// An independent copy of the stored record.
    pub fn snapshot_student(&self, id: &str) -> Option<Student> {
        self.store.find_by_id(id.trim()).map(Student::snapshot)
    }

    pub fn list_students(&self) -> Vec<Student> {
        commands::list::run(&self.store, self.ordering.as_ref())
    }

    pub fn set_ordering_policy<P>(&mut self, policy: P)
    where
        P: OrderingPolicy + Send + 'static,
    {
        debug!(
            from = self.ordering.name(),
            to = policy.name(),
            "ordering policy replaced"
        );
        self.ordering = Box::new(policy);
    }

    pub fn ordering_policy_name(&self) -> &str {
        self.ordering.name()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
