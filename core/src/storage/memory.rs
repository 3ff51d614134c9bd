use super::NoteStore;
use crate::models::Note;
use crate::validation::{validate_id, validate_text};
use crate::{Error, Result};
use chrono::Utc;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Non-persistent [`NoteStore`] with the same validation and id rules as
/// [`super::Database`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RefCell<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    notes: BTreeMap<i64, Note>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NoteStore for MemoryStore {
    fn create_note(&self, title: &str, content: &str) -> Result<i64> {
        validate_text(title)?;
        validate_text(content)?;

        let mut inner = self.inner.borrow_mut();
        inner.last_id += 1;
        let id = inner.last_id;
        inner.notes.insert(
            id,
            Note::new(id, title.to_string(), content.to_string(), Utc::now()),
        );
        Ok(id)
    }

    fn delete_note(&self, id: i64) -> Result<i64> {
        validate_id(id)?;

        self.inner
            .borrow_mut()
            .notes
            .remove(&id)
            .map(|note| note.id)
            .ok_or(Error::NotFound(id))
    }

    fn update_content(&self, id: i64, content: &str) -> Result<()> {
        validate_id(id)?;
        validate_text(content)?;

        let mut inner = self.inner.borrow_mut();
        let note = inner.notes.get_mut(&id).ok_or(Error::NotFound(id))?;
        note.set_content(content.to_string(), Utc::now());
        Ok(())
    }

    fn get_by_id(&self, id: i64) -> Result<Note> {
        validate_id(id)?;

        self.inner
            .borrow()
            .notes
            .get(&id)
            .cloned()
            .ok_or(Error::NotFound(id))
    }

    fn list_all(&self) -> Result<Vec<Note>> {
        Ok(self.inner.borrow().notes.values().cloned().collect())
    }

    fn search_by_keyword(&self, keyword: &str) -> Result<Vec<Note>> {
        validate_text(keyword)?;

        Ok(self
            .inner
            .borrow()
            .notes
            .values()
            .filter(|note| note.contains(keyword))
            .cloned()
            .collect())
    }
}
