//! Output formats and renderers for CLI commands.

use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};

use super::handlers::truncate_str;
use crate::view::{NoteCard, Renderer};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A tag with its note count.
#[derive(Debug, Serialize)]
pub struct TagListing {
    pub name: String,
    pub label: String,
    pub count: usize,
}

/// Writes a serializable value as pretty JSON wrapped in `{"data": ...}`.
pub(crate) fn write_json<T: Serialize>(out: &mut dyn Write, data: T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &Output::new(data))?;
    writeln!(out)
}

/// Draws note cards as an indexed table.
pub struct HumanRenderer<'a> {
    out: &'a mut dyn Write,
}

impl<'a> HumanRenderer<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self { out }
    }
}

impl Renderer for HumanRenderer<'_> {
    fn render(&mut self, cards: &[NoteCard]) -> io::Result<()> {
        if cards.is_empty() {
            return Ok(());
        }

        writeln!(
            self.out,
            "{:>5}  {:<40}  {:<12}  {:<17}",
            "Index", "Title", "Tag", "Created"
        )?;
        writeln!(
            self.out,
            "{:>5}  {:<40}  {:<12}  {:<17}",
            "-----",
            "----------------------------------------",
            "------------",
            "-----------------"
        )?;

        for card in cards {
            writeln!(
                self.out,
                "{:>5}  {:<40}  {:<12}  {:<17}",
                card.index,
                truncate_str(&card.title, 40),
                truncate_str(&card.tag_label, 12),
                card.date
            )?;
            for line in card.content.lines() {
                writeln!(self.out, "{:>5}  {}", "", line)?;
            }
        }

        writeln!(self.out)?;
        writeln!(self.out, "{} note(s)", cards.len())
    }

    fn notify_empty(&mut self, is_empty: bool) -> io::Result<()> {
        if is_empty {
            writeln!(self.out, "No notes found.")?;
        }
        Ok(())
    }
}

/// Writes note cards as a JSON document.
pub struct JsonRenderer<'a> {
    out: &'a mut dyn Write,
}

impl<'a> JsonRenderer<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self { out }
    }
}

impl Renderer for JsonRenderer<'_> {
    fn render(&mut self, cards: &[NoteCard]) -> io::Result<()> {
        write_json(self.out, cards)
    }

    fn notify_empty(&mut self, _is_empty: bool) -> io::Result<()> {
        Ok(())
    }
}
