mod database;
mod memory;
mod note_repository;
mod store;

pub use database::Database;
pub use memory::MemoryStore;
pub(crate) use note_repository::NoteRepository;
pub use store::NoteStore;
