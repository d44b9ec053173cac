use crate::commands::EditOutcome;
use crate::error::{Result, RosterError};
use crate::store::StudentStore;
use crate::validation::{validate_age, validate_name};
use tracing::debug;

/// Replace `name` and `age` of an existing student. The id is never changed
/// and is not re-validated.
pub fn run<S: StudentStore>(store: &mut S, id: &str, name: &str, age: i32) -> Result<bool> {
    let id = id.trim();
    if store.find_by_id(id).is_none() {
        return Err(RosterError::NotFound(id.to_string()));
    }

    let name = validate_name(name)?;
    validate_age(age)?;

    let updated = store.update(id, name, age);
    debug!(id, "student edited");
    Ok(updated)
}

/// Same as [`run`], but snapshots the record first and returns both versions.
pub fn run_with_snapshot<S: StudentStore>(
    store: &mut S,
    id: &str,
    name: &str,
    age: i32,
) -> Result<EditOutcome> {
    let id = id.trim();
    let before = store
        .find_by_id(id)
        .map(|s| s.snapshot())
        .ok_or_else(|| RosterError::NotFound(id.to_string()))?;

    run(store, id, name, age)?;

    let after = store
        .find_by_id(id)
        .map(|s| s.snapshot())
        .ok_or_else(|| RosterError::NotFound(id.to_string()))?;

    Ok(EditOutcome { before, after })
}
