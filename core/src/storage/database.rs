use super::{NoteRepository, NoteStore};
use crate::models::Note;
use crate::validation::{validate_id, validate_text};
use crate::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::debug;

/// SQLite-backed note store owning a single connection.
///
/// The connection is released when the store is dropped; [`Database::close`]
/// does the same but reports the failure.
pub struct Database {
    db_path: PathBuf,
    conn: Connection,
}

impl Database {
    /// Open the database at `db_path`, creating the file and schema if needed.
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();

        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&db_path)?;
        Self::initialize_schema(&conn)?;
        debug!(path = %db_path.display(), "opened note database");

        Ok(Self { db_path, conn })
    }

    /// Open a private in-memory database with the same schema.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::initialize_schema(&conn)?;

        Ok(Self {
            db_path: PathBuf::from(":memory:"),
            conn,
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<()> {
        let schema = include_str!("../../schema.sql");
        conn.execute_batch(schema)?;
        Ok(())
    }

    /// Get the database path
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Release the connection.
    pub fn close(self) -> Result<()> {
        debug!(path = %self.db_path.display(), "closing note database");
        self.conn.close().map_err(|(_, err)| err.into())
    }
}

impl NoteStore for Database {
    fn create_note(&self, title: &str, content: &str) -> Result<i64> {
        validate_text(title)?;
        validate_text(content)?;

        let id = NoteRepository::create(&self.conn, title, content)?;
        debug!(id, "created note");
        Ok(id)
    }

    fn delete_note(&self, id: i64) -> Result<i64> {
        validate_id(id)?;

        let id = NoteRepository::delete(&self.conn, id)?;
        debug!(id, "deleted note");
        Ok(id)
    }

    fn update_content(&self, id: i64, content: &str) -> Result<()> {
        validate_id(id)?;
        validate_text(content)?;

        NoteRepository::update_content(&self.conn, id, content)?;
        debug!(id, "updated note content");
        Ok(())
    }

    fn get_by_id(&self, id: i64) -> Result<Note> {
        validate_id(id)?;
        NoteRepository::get_by_id(&self.conn, id)
    }

    fn list_all(&self) -> Result<Vec<Note>> {
        let notes = NoteRepository::get_all(&self.conn)?;
        debug!(count = notes.len(), "listed notes");
        Ok(notes)
    }

    fn search_by_keyword(&self, keyword: &str) -> Result<Vec<Note>> {
        validate_text(keyword)?;

        let notes = NoteRepository::search(&self.conn, keyword)?;
        debug!(count = notes.len(), "searched notes");
        Ok(notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::MAX_TEXT_LEN;
    use crate::Error;
    use std::thread::sleep;
    use std::time::Duration;
    use tempfile::tempdir;

    fn setup_test_db() -> (tempfile::TempDir, Database) {
        let dir = tempdir().unwrap();
        let db = Database::open(dir.path().join("test.db")).unwrap();
        (dir, db)
    }

    #[test]
    fn test_database_creation() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("nested").join("notes.db");

        let db = Database::open(&db_path).unwrap();
        assert!(db_path.exists());
        assert_eq!(db.path(), db_path.as_path());

        db.close().unwrap();
    }

    #[test]
    fn test_open_is_idempotent() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");

        let db = Database::open(&db_path).unwrap();
        let id = db.create_note("Kept", "across reopen").unwrap();
        db.close().unwrap();

        let db = Database::open(&db_path).unwrap();
        assert_eq!(db.get_by_id(id).unwrap().title, "Kept");
    }

    #[test]
    fn test_open_unreachable_path() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = Database::open(blocker.join("test.db")).err().unwrap();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_create_then_get() {
        let (_dir, db) = setup_test_db();

        let id = db.create_note("T", "C").unwrap();
        assert!(id > 0);

        let note = db.get_by_id(id).unwrap();
        assert_eq!(note.id, id);
        assert_eq!(note.title, "T");
        assert_eq!(note.content, "C");
        assert_eq!(note.created_at, note.last_edited_at);
    }

    #[test]
    fn test_update_advances_last_edited() {
        let (_dir, db) = setup_test_db();
        let id = db.create_note("T", "C").unwrap();
        let before = db.get_by_id(id).unwrap();

        sleep(Duration::from_millis(20));
        db.update_content(id, "C2").unwrap();

        let after = db.get_by_id(id).unwrap();
        assert_eq!(after.content, "C2");
        assert_eq!(after.created_at, before.created_at);
        assert!(after.last_edited_at > before.last_edited_at);
    }

    #[test]
    fn test_update_missing_note() {
        let (_dir, db) = setup_test_db();

        let err = db.update_content(7, "C").unwrap_err();
        assert!(matches!(err, Error::NotFound(7)));
    }

    #[test]
    fn test_delete_then_get() {
        let (_dir, db) = setup_test_db();
        let id = db.create_note("To Delete", "C").unwrap();

        assert_eq!(db.delete_note(id).unwrap(), id);

        let err = db.get_by_id(id).unwrap_err();
        assert!(matches!(err, Error::NotFound(found) if found == id));

        let err = db.delete_note(id).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let (_dir, db) = setup_test_db();
        db.create_note("First", "C").unwrap();
        let second = db.create_note("Second", "C").unwrap();

        db.delete_note(second).unwrap();
        let third = db.create_note("Third", "C").unwrap();

        assert!(third > second);
    }

    #[test]
    fn test_search_by_keyword() {
        let (_dir, db) = setup_test_db();
        db.create_note("Test Note 1", "This is the first test note.")
            .unwrap();
        let id = db
            .create_note("Test Note 2", "This is the second test note with a keyword.")
            .unwrap();

        let notes = db.search_by_keyword("keyword").unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, id);
        assert_eq!(notes[0].title, "Test Note 2");
    }

    #[test]
    fn test_search_matches_title_and_is_case_sensitive() {
        let (_dir, db) = setup_test_db();
        db.create_note("Keyword in title", "body").unwrap();
        db.create_note("lower", "keyword in body").unwrap();

        assert_eq!(db.search_by_keyword("Keyword").unwrap().len(), 1);
        assert_eq!(db.search_by_keyword("eyword").unwrap().len(), 2);
        assert!(db.search_by_keyword("KEYWORD").unwrap().is_empty());
    }

    #[test]
    fn test_list_all() {
        let (_dir, db) = setup_test_db();
        assert!(db.list_all().unwrap().is_empty());

        let first = db.create_note("Note 1", "C").unwrap();
        let second = db.create_note("Note 2", "C").unwrap();

        let ids: Vec<i64> = db.list_all().unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn test_create_validation() {
        let (_dir, db) = setup_test_db();

        for (title, content) in [("", "C"), ("T", "")] {
            let err = db.create_note(title, content).unwrap_err();
            assert!(matches!(err, Error::InvalidParameter("invalid param length")));
        }

        let oversized = "x".repeat(MAX_TEXT_LEN + 1);
        let err = db.create_note("T", &oversized).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));

        assert!(db.list_all().unwrap().is_empty());
        assert!(db.create_note("a", "b").is_ok());
    }

    #[test]
    fn test_oversized_text_rejected_everywhere() {
        let (_dir, db) = setup_test_db();
        let id = db.create_note("T", "C").unwrap();
        let oversized = "x".repeat(MAX_TEXT_LEN + 1);

        assert!(matches!(
            db.create_note(&oversized, "C"),
            Err(Error::InvalidParameter("invalid param length"))
        ));
        assert!(matches!(
            db.update_content(id, &oversized),
            Err(Error::InvalidParameter("invalid param length"))
        ));
        assert!(matches!(
            db.search_by_keyword(&oversized),
            Err(Error::InvalidParameter("invalid param length"))
        ));

        assert_eq!(db.get_by_id(id).unwrap().content, "C");
        assert_eq!(db.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_id_validation() {
        let (_dir, db) = setup_test_db();

        for id in [0, -1, i64::from(i32::MAX) + 1] {
            assert!(matches!(db.get_by_id(id), Err(Error::InvalidParameter("invalid number"))));
            assert!(matches!(db.delete_note(id), Err(Error::InvalidParameter(_))));
            assert!(matches!(db.update_content(id, "C"), Err(Error::InvalidParameter(_))));
        }

        assert!(matches!(db.search_by_keyword(""), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_in_memory_database() {
        let db = Database::open_in_memory().unwrap();
        let id = db.create_note("T", "C").unwrap();
        assert_eq!(db.get_by_id(id).unwrap().content, "C");
    }
}
