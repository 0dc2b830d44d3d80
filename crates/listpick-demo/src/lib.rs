//! Demonstration of listpick lookups over records, JSON maps and plain
//! names built from the same six students.

pub mod cli;
pub mod logging;
pub mod student;

pub use cli::{run, Cli, Collection, Lookup, Source};
pub use student::{sample_maps, sample_names, sample_students, Student};
