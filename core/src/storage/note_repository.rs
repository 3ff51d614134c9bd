use crate::models::Note;
use crate::{Error, Result};
use rusqlite::{params, Connection, OptionalExtension, Row};

const NOTE_COLUMNS: &str = "id, title, content, created_at, last_edited_at";

/// Raw SQL access to the `notes` table. Callers validate parameters first.
pub struct NoteRepository;

impl NoteRepository {
    /// Insert a note; both timestamps come from the column defaults.
    pub fn create(conn: &Connection, title: &str, content: &str) -> Result<i64> {
        conn.execute(
            "INSERT INTO notes (title, content) VALUES (?1, ?2)",
            params![title, content],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Get a note by ID
    pub fn get_by_id(conn: &Connection, id: i64) -> Result<Note> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {NOTE_COLUMNS} FROM notes WHERE id = ?1"
        ))?;

        stmt.query_row(params![id], note_from_row)
            .optional()?
            .ok_or(Error::NotFound(id))
    }

    /// Get all notes
    pub fn get_all(conn: &Connection) -> Result<Vec<Note>> {
        let mut stmt = conn.prepare(&format!("SELECT {NOTE_COLUMNS} FROM notes ORDER BY id"))?;

        let notes = stmt
            .query_map([], note_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(notes)
    }

    /// Replace the content of a note. The `update_last_edited_at` trigger
    /// refreshes the edit timestamp in the same statement.
    pub fn update_content(conn: &Connection, id: i64, content: &str) -> Result<()> {
        let rows_affected = conn.execute(
            "UPDATE notes SET content = ?1 WHERE id = ?2",
            params![content, id],
        )?;

        if rows_affected == 0 {
            return Err(Error::NotFound(id));
        }

        Ok(())
    }

    /// Delete a note
    pub fn delete(conn: &Connection, id: i64) -> Result<i64> {
        let rows_affected = conn.execute("DELETE FROM notes WHERE id = ?1", params![id])?;

        if rows_affected == 0 {
            return Err(Error::NotFound(id));
        }

        Ok(id)
    }

    /// Search title and content for a literal, case-sensitive substring.
    ///
    /// `instr` is used instead of `LIKE`, which folds ASCII case and treats
    /// `%` and `_` as wildcards.
    pub fn search(conn: &Connection, keyword: &str) -> Result<Vec<Note>> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {NOTE_COLUMNS} FROM notes \
             WHERE instr(title, ?1) > 0 OR instr(content, ?1) > 0 \
             ORDER BY id"
        ))?;

        let notes = stmt
            .query_map(params![keyword], note_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(notes)
    }
}

fn note_from_row(row: &Row<'_>) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        created_at: row.get(3)?,
        last_edited_at: row.get(4)?,
    })
}
