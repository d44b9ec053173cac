//! Ordering policies.
//!
//! An [`OrderingPolicy`] re-sequences a copy of the roster for display. It
//! never sees the store and never changes a record, so swapping policies is
//! free: the next listing simply comes out in the new order.
//!
//! Every policy must return a permutation of its input, and ties must keep the
//! relative order they came in with. Both named keys and comparator closures
//! get this from [`slice::sort_by`], which is stable.

use crate::model::Student;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub trait OrderingPolicy {
    fn order(&self, students: Vec<Student>) -> Vec<Student>;

    /// Short label for diagnostics.
    fn name(&self) -> &str {
        "custom"
    }
}

/// The built-in sort keys, and the selector presentation layers pass around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Lexicographic by id. Note `"10"` sorts before `"9"`.
    #[default]
    Id,
    /// Lexicographic by name.
    Name,
    /// Ascending by age.
    Age,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Id, SortKey::Name, SortKey::Age];

    pub fn compare(&self, a: &Student, b: &Student) -> Ordering {
        match self {
            SortKey::Id => a.id().cmp(b.id()),
            SortKey::Name => a.name().cmp(b.name()),
            SortKey::Age => a.age().cmp(&b.age()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Name => "name",
            SortKey::Age => "age",
        }
    }
}

impl OrderingPolicy for SortKey {
    fn order(&self, mut students: Vec<Student>) -> Vec<Student> {
        students.sort_by(|a, b| self.compare(a, b));
        students
    }

    fn name(&self) -> &str {
        self.as_str()
    }
}

impl<F> OrderingPolicy for F
where
    F: Fn(&Student, &Student) -> Ordering,
{
    fn order(&self, mut students: Vec<Student>) -> Vec<Student> {
        students.sort_by(|a, b| self(a, b));
        students
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortKey(pub String);

impl fmt::Display for UnknownSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown ordering '{}' (expected one of: id, name, age)",
            self.0
        )
    }
}

impl std::error::Error for UnknownSortKey {}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(SortKey::Id),
            "name" => Ok(SortKey::Name),
            "age" => Ok(SortKey::Age),
            _ => Err(UnknownSortKey(s.to_string())),
        }
    }
}
