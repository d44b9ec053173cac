use super::StudentStore;
use crate::model::Student;

/// In-memory storage. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    students: Vec<Student>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StudentStore for InMemoryStore {
    fn add(&mut self, student: Student) {
        self.students.push(student);
    }

    fn find_by_id(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id() == id)
    }

    fn update(&mut self, id: &str, name: &str, age: i32) -> bool {
        match self.students.iter_mut().find(|s| s.id() == id) {
            Some(student) => {
                student.set_details(name, age);
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, id: &str) -> bool {
        match self.students.iter().position(|s| s.id() == id) {
            Some(pos) => {
                self.students.remove(pos);
                true
            }
            None => false,
        }
    }

    fn list(&self) -> &[Student] {
        &self.students
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_student(mut self, id: &str, name: &str, age: i32) -> Self {
            self.store.add(Student::new(id, name, age));
            self
        }

        /// The three students used throughout the ordering tests, inserted
        /// out of id order: `3 Carlos 25`, `1 Ana 22`, `2 Bernardo 30`.
        pub fn with_classroom(self) -> Self {
            self.with_student("3", "Carlos", 25)
                .with_student("1", "Ana", 22)
                .with_student("2", "Bernardo", 30)
        }

        pub fn with_students(mut self, count: usize) -> Self {
            for i in 0..count {
                let id = format!("S{:03}", i + 1);
                let age = 18 + (i % 10) as i32;
                self.store.add(Student::new(id, "Test Student", age));
            }
            self
        }
    }
}
