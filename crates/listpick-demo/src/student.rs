//! The sample record used by the demonstration.

use listpick::FieldAccessible;
use serde::Serialize;
use serde_json::Value as Json;

/// A student with a name, an age and a graduation flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FieldAccessible)]
pub struct Student {
    name: String,
    age: i32,
    #[serde(rename = "isGraduated")]
    #[pick(rename = "isGraduated")]
    is_graduated: bool,
}

impl Student {
    pub fn new(name: impl Into<String>, age: i32, is_graduated: bool) -> Self {
        Student {
            name: name.into(),
            age,
            is_graduated,
        }
    }

    /// Converts the student into a JSON object keyed `name`, `age` and
    /// `isGraduated`.
    pub fn to_map(&self) -> Json {
        serde_json::json!({
            "name": self.name,
            "age": self.age,
            "isGraduated": self.is_graduated,
        })
    }
}

/// The six students every demonstration runs against.
pub fn sample_students() -> Vec<Student> {
    vec![
        Student::new("John", 1, false),
        Student::new("Jane", 2, true),
        Student::new("Mike", 3, false),
        Student::new("Alice", 4, true),
        Student::new("Bob", 5, true),
        Student::new("Charlie", 6, false),
    ]
}

/// The sample students as JSON objects.
pub fn sample_maps() -> Vec<Json> {
    sample_students().iter().map(Student::to_map).collect()
}

/// A plain list of names.
pub fn sample_names() -> Vec<String> {
    ["John", "Alice", "Bob", "Charlie", "Mike", "David"]
        .iter()
        .map(|name| name.to_string())
        .collect()
}
