use crate::model::Student;
use crate::store::StudentStore;
use tracing::trace;

/// Look up a student by id. Absence is a normal answer, not an error.
pub fn run<S: StudentStore>(store: &S, id: &str) -> Option<Student> {
    let id = id.trim();
    let found = store.find_by_id(id).cloned();
    trace!(id, found = found.is_some(), "student lookup");
    found
}
