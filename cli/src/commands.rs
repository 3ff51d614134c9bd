use crate::cli::Command;
use anyhow::{Context, Result};
use notes_core::models::{format_timestamp, Note};
use notes_core::NoteStore;
use std::io::Write;

/// Runs exactly one storage operation per command and writes its report.
pub struct Dispatcher<'a, S: NoteStore> {
    store: &'a S,
}

impl<'a, S: NoteStore> Dispatcher<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Execute `command` against the store.
    ///
    /// Missing arguments for `new`, `update` and `search` produce a prompt
    /// and `Ok(())`; for `delete` and `get` they are errors.
    pub fn run<W: Write>(&self, command: Command, out: &mut W) -> Result<()> {
        match command {
            Command::New { title, content, .. } => self.new_note(title, content, out),
            Command::Delete { id, .. } => self.delete_note(id, out),
            Command::Get { id, .. } => self.get_note(id, out),
            Command::List => self.list_notes(out),
            Command::Update { id, content, .. } => self.update_note(id, content, out),
            Command::Search { keyword, .. } => self.search_notes(keyword, out),
        }
    }

    fn new_note<W: Write>(
        &self,
        title: Option<String>,
        content: Option<String>,
        out: &mut W,
    ) -> Result<()> {
        let Some(title) = present(title) else {
            writeln!(out, "Please provide a title for new note.")?;
            return Ok(());
        };
        let Some(content) = present(content) else {
            writeln!(out, "Please provide content for new note.")?;
            return Ok(());
        };

        let id = self
            .store
            .create_note(&title, &content)
            .context("creating new note")?;

        writeln!(out, "Created a new note with ID {id}")?;
        Ok(())
    }

    fn delete_note<W: Write>(&self, id: Option<String>, out: &mut W) -> Result<()> {
        let Some(raw) = present(id) else {
            anyhow::bail!("please provide ID of note to delete");
        };
        let id = parse_id(&raw)?;

        let deleted = self.store.delete_note(id).context("deleting note")?;

        writeln!(out, "Deleted note with ID {deleted}")?;
        Ok(())
    }

    fn get_note<W: Write>(&self, id: Option<String>, out: &mut W) -> Result<()> {
        let Some(raw) = present(id) else {
            anyhow::bail!("please provide ID of note to retrieve");
        };
        let id = parse_id(&raw)?;

        let note = self.store.get_by_id(id).context("retrieving note")?;

        writeln!(
            out,
            "Note ID: {}\nTitle: {}\nContent: {}\nCreatedAt: {}\nLastEditedAt: {}",
            note.id,
            note.title,
            note.content,
            format_timestamp(&note.created_at),
            format_timestamp(&note.last_edited_at),
        )?;
        Ok(())
    }

    fn list_notes<W: Write>(&self, out: &mut W) -> Result<()> {
        let notes = self.store.list_all().context("listing notes")?;

        writeln!(out, "List of notes:")?;
        for note in &notes {
            writeln!(
                out,
                "ID: {}, Title: {}, CreatedAt: {}, LastEditedAt: {}",
                note.id,
                note.title,
                format_timestamp(&note.created_at),
                format_timestamp(&note.last_edited_at),
            )?;
        }
        Ok(())
    }

    fn update_note<W: Write>(
        &self,
        id: Option<String>,
        content: Option<String>,
        out: &mut W,
    ) -> Result<()> {
        let Some(raw) = present(id) else {
            writeln!(out, "Please provide ID of note to update.")?;
            return Ok(());
        };
        let id = parse_id(&raw)?;

        let Some(content) = present(content) else {
            writeln!(out, "Please provide content to update note.")?;
            return Ok(());
        };

        self.store
            .update_content(id, &content)
            .context("updating note")?;

        writeln!(out, "Updated note with ID {id}")?;
        Ok(())
    }

    fn search_notes<W: Write>(&self, keyword: Option<String>, out: &mut W) -> Result<()> {
        let Some(keyword) = present(keyword) else {
            writeln!(out, "Please provide a keyword to search for notes.")?;
            return Ok(());
        };

        let notes = self
            .store
            .search_by_keyword(&keyword)
            .context("searching notes")?;

        if notes.is_empty() {
            writeln!(out, "No notes found for keyword: {keyword}")?;
            return Ok(());
        }

        writeln!(out, "Notes found for keyword '{keyword}':")?;
        for note in &notes {
            writeln!(out, "{}", full_line(note))?;
        }
        Ok(())
    }
}

/// Treat an empty argument the same as an absent one.
fn present(arg: Option<String>) -> Option<String> {
    arg.filter(|value| !value.is_empty())
}

fn parse_id(raw: &str) -> Result<i64> {
    raw.parse::<i64>().context("invalid note ID")
}

fn full_line(note: &Note) -> String {
    format!(
        "ID: {}, Title: {}, Content: {}, CreatedAt: {}, LastEditedAt: {}",
        note.id,
        note.title,
        note.content,
        format_timestamp(&note.created_at),
        format_timestamp(&note.last_edited_at),
    )
}
