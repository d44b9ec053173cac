use crate::error::{Result, RosterError};
use crate::store::StudentStore;
use tracing::debug;

pub fn run<S: StudentStore>(store: &mut S, id: &str) -> Result<bool> {
    let id = id.trim();
    if store.find_by_id(id).is_none() {
        return Err(RosterError::NotFound(id.to_string()));
    }

    let removed = store.remove(id);
    debug!(id, count = store.len(), "student deleted");
    Ok(removed)
}
