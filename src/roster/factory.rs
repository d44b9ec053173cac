//! Creation policies.
//!
//! A [`StudentFactory`] turns raw input into a well-formed [`Student`] or a
//! validation error. Factories never see the store: whether an id is already
//! taken is the command layer's question, not theirs.
//!
//! Any closure with the right shape is a factory too, so callers can wrap or
//! tighten the default rules without declaring a type:
//!
//! ```
//! use roster::error::Result;
//! use roster::factory::{StudentFactory, ValidatingFactory};
//! use roster::model::Student;
//!
//! let single_spaced = |id: &str, name: &str, age: i32| -> Result<Student> {
//!     let name = name.split_whitespace().collect::<Vec<_>>().join(" ");
//!     ValidatingFactory.create(id, &name, age)
//! };
//!
//! let student = single_spaced.create("1", "Ana   María", 22).unwrap();
//! assert_eq!(student.name(), "Ana María");
//! assert!(single_spaced.create("2", "R2 D2", 30).is_err());
//! ```

use crate::error::Result;
use crate::model::Student;
use crate::validation::{validate_age, validate_id, validate_name};

pub trait StudentFactory {
    fn create(&self, id: &str, name: &str, age: i32) -> Result<Student>;
}

/// The default policy: every field rule in [`crate::validation`], then build
/// from the trimmed id and name.
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidatingFactory;

impl StudentFactory for ValidatingFactory {
    fn create(&self, id: &str, name: &str, age: i32) -> Result<Student> {
        let id = validate_id(id)?;
        let name = validate_name(name)?;
        validate_age(age)?;
        Ok(Student::new(id, name, age))
    }
}

impl<F> StudentFactory for F
where
    F: Fn(&str, &str, i32) -> Result<Student>,
{
    fn create(&self, id: &str, name: &str, age: i32) -> Result<Student> {
        self(id, name, age)
    }
}
