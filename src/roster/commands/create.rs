use crate::error::{Result, RosterError};
use crate::factory::StudentFactory;
use crate::model::Student;
use crate::store::StudentStore;
use tracing::debug;

/// Builds a student through `factory` and adds it.
///
/// The requested id is checked before the factory runs, and the id the
/// factory actually produced is checked again before anything is stored.
pub fn run<S, F>(store: &mut S, factory: &F, id: &str, name: &str, age: i32) -> Result<Student>
where
    S: StudentStore,
    F: StudentFactory + ?Sized,
{
    let id = id.trim();
    if store.find_by_id(id).is_some() {
        return Err(RosterError::DuplicateId(id.to_string()));
    }

    let student = factory.create(id, name, age)?;
    if store.find_by_id(student.id()).is_some() {
        return Err(RosterError::DuplicateId(student.id().to_string()));
    }

    store.add(student.clone());
    debug!(id = student.id(), count = store.len(), "student created");
    Ok(student)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::ValidatingFactory;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use crate::validation::FieldError;

    #[test]
    fn creates_and_stores_student() {
        let mut store = InMemoryStore::new();
        let created = run(&mut store, &ValidatingFactory, "3", "Carlos", 25).unwrap();

        assert_eq!(created.id(), "3");
        assert_eq!(store.len(), 1);
        assert_eq!(store.find_by_id("3"), Some(&created));
    }

    #[test]
    fn duplicate_id_is_rejected_without_mutation() {
        let mut store = StoreFixture::new().with_classroom().store;
        let err = run(&mut store, &ValidatingFactory, "1", "Otra Ana", 40).unwrap_err();

        assert!(matches!(err, RosterError::DuplicateId(ref id) if id == "1"));
        assert_eq!(store.len(), 3);
        assert_eq!(store.find_by_id("1").unwrap().name(), "Ana");
    }

    #[test]
    fn invalid_input_is_rejected_without_mutation() {
        let mut store = StoreFixture::new().with_classroom().store;

        let cases = [("4", "", 20), ("4", "D4vid", 20), ("4", "David", 0), ("", "David", 20)];
        for (id, name, age) in cases {
            let err = run(&mut store, &ValidatingFactory, id, name, age).unwrap_err();
            assert!(matches!(err, RosterError::Validation(_)));
        }
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn duplicate_check_runs_before_validation() {
        let mut store = StoreFixture::new().with_classroom().store;
        let err = run(&mut store, &ValidatingFactory, "1", "", 0).unwrap_err();
        assert!(matches!(err, RosterError::DuplicateId(_)));
    }

    #[test]
    fn padded_id_collides_with_stored_one() {
        let mut store = StoreFixture::new().with_classroom().store;
        let err = run(&mut store, &ValidatingFactory, " 1 ", " Ana ", 22).unwrap_err();

        assert!(matches!(err, RosterError::DuplicateId(ref id) if id == "1"));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn factory_chosen_id_is_checked_too() {
        let mut store = InMemoryStore::new();
        let always_one = |_: &str, name: &str, age: i32| -> Result<Student> {
            ValidatingFactory.create("1", name, age)
        };

        assert!(run(&mut store, &always_one, "1", "Ana", 22).is_ok());
        let err = run(&mut store, &always_one, "2", "Beto", 30).unwrap_err();

        assert!(matches!(err, RosterError::DuplicateId(ref id) if id == "1"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.find_by_id("1").unwrap().name(), "Ana");
    }

    #[test]
    fn uses_the_given_factory() {
        let mut store = InMemoryStore::new();
        let reject_all = |_: &str, _: &str, _: i32| -> Result<Student> {
            Err(RosterError::Validation(FieldError::EmptyName))
        };
        assert!(run(&mut store, &reject_all, "1", "Ana", 22).is_err());
        assert!(store.is_empty());
    }
}
