use serde::Serialize;
use std::fmt;

/// A single student record.
///
/// Fields are private: a `Student` only comes into existence through a
/// [`StudentFactory`](crate::factory::StudentFactory), and only the edit
/// command changes `name` and `age` afterwards. The `id` never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    id: String,
    name: String,
    age: i32,
}

impl Student {
    /// Builds a record without validation. Callers are the factory (after it
    /// validated) and test fixtures.
    pub(crate) fn new(id: impl Into<String>, name: impl Into<String>, age: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    /// Returns an owned copy that shares nothing with `self`.
    ///
    /// Later edits to the stored record are not visible through the snapshot.
    pub fn snapshot(&self) -> Student {
        self.clone()
    }

    pub(crate) fn set_details(&mut self, name: &str, age: i32) {
        self.name = name.to_string();
        self.age = age;
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} - {}", self.id, self.name, self.age)
    }
}
