//! Lock-guarded roster handle for hosts that serve several callers at once.
//!
//! The whole [`StudentService`] sits behind one mutex. Each method takes the
//! lock exactly once, so the existence check and the mutation that follows it
//! (find + add, find + update, find + remove) can never interleave with
//! another caller's.

use crate::commands::EditOutcome;
use crate::error::{Result, RosterError};
use crate::model::Student;
use crate::ordering::OrderingPolicy;
use crate::service::StudentService;
use crate::store::StudentStore;
use std::sync::{Arc, Mutex, MutexGuard};

pub struct SharedRoster<S: StudentStore> {
    inner: Arc<Mutex<StudentService<S>>>,
}

impl<S: StudentStore> Clone for SharedRoster<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: StudentStore> SharedRoster<S> {
    pub fn new(service: StudentService<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(service)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StudentService<S>>> {
        self.inner.lock().map_err(|_| RosterError::Poisoned)
    }

    pub fn create_student(&self, id: &str, name: &str, age: i32) -> Result<Student> {
        self.lock()?.create_student(id, name, age)
    }

    pub fn edit_student(&self, id: &str, name: &str, age: i32) -> Result<bool> {
        self.lock()?.edit_student(id, name, age)
    }

    pub fn edit_student_with_snapshot(
        &self,
        id: &str,
        name: &str,
        age: i32,
    ) -> Result<EditOutcome> {
        self.lock()?.edit_student_with_snapshot(id, name, age)
    }

    pub fn delete_student(&self, id: &str) -> Result<bool> {
        self.lock()?.delete_student(id)
    }

    pub fn find_student(&self, id: &str) -> Result<Option<Student>> {
        Ok(self.lock()?.find_student(id))
    }

    pub fn snapshot_student(&self, id: &str) -> Result<Option<Student>> {
        Ok(self.lock()?.snapshot_student(id))
    }

    /// Orders a copy taken under the lock.
    pub fn list_students(&self) -> Result<Vec<Student>> {
        Ok(self.lock()?.list_students())
    }

    pub fn set_ordering_policy<P>(&self, policy: P) -> Result<()>
    where
        P: OrderingPolicy + Send + 'static,
    {
        self.lock()?.set_ordering_policy(policy);
        Ok(())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }
}
