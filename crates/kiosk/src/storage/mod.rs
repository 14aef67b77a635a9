//! Storage backends for the exhibition catalog.

mod json_file;

pub use json_file::JsonFileRepository;
