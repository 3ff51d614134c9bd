//! Storage engine for the `notes` command-line tool.
//!
//! Notes live in a single SQLite file. Every backend implements
//! [`storage::NoteStore`], validates its parameters with the functions in
//! [`validation`] and reports failures through [`Error`].

pub mod error;
pub mod models;
pub mod storage;
pub mod validation;

pub use error::{Error, Result};
pub use models::Note;
pub use storage::{Database, MemoryStore, NoteStore};
