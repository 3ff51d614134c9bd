use crate::models::Note;
use crate::Result;

/// Operations a note backend must provide.
///
/// Implementations validate every parameter with [`crate::validation`]
/// before touching storage, so an `InvalidParameter` error guarantees that
/// nothing was read or written.
pub trait NoteStore {
    /// Insert a note and return its newly assigned id.
    fn create_note(&self, title: &str, content: &str) -> Result<i64>;

    /// Hard-delete a note, returning the id that was removed.
    fn delete_note(&self, id: i64) -> Result<i64>;

    /// Replace a note's content and refresh its edit timestamp.
    fn update_content(&self, id: i64, content: &str) -> Result<()>;

    fn get_by_id(&self, id: i64) -> Result<Note>;

    /// Every note, in id order.
    fn list_all(&self) -> Result<Vec<Note>>;

    /// Notes whose title or content contains `keyword` (case-sensitive), in id order.
    fn search_by_keyword(&self, keyword: &str) -> Result<Vec<Note>>;
}
