//! Generation session
//!
//! Owns the current input text and the current date list. Every generate
//! replaces the previous list wholesale.

use crate::anchor::default_anchor;
use crate::clipboard::{Clipboard, ClipboardExporter, ExportOutcome};
use crate::date::{self, Clock};
use crate::error::{Error, Result};
use crate::export::{self, ExportPayload, TableStyle};
use crate::sequence::{generate, DateSequence};

#[derive(Debug)]
pub struct Session {
    clock: Box<dyn Clock>,
    style: TableStyle,
    input: String,
    sequence: Option<DateSequence>,
}

impl Session {
    pub fn new(clock: Box<dyn Clock>, style: TableStyle) -> Self {
        Self {
            clock,
            style,
            input: String::new(),
            sequence: None,
        }
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn sequence(&self) -> Option<&DateSequence> {
        self.sequence.as_ref()
    }

    /// Generate starting at the Monday of last week
    pub fn generate_default(&mut self) -> Result<&DateSequence> {
        let anchor = default_anchor(self.clock.as_ref())?;
        Ok(self.sequence.insert(generate(anchor)?))
    }

    /// Generate starting at the date in the current input.
    ///
    /// On failure the previous list is kept.
    pub fn generate_from_input(&mut self) -> Result<&DateSequence> {
        let anchor = date::parse(&self.input, self.clock.as_ref())?;
        Ok(self.sequence.insert(generate(anchor)?))
    }

    /// Export payload for the current list
    pub fn payload(&self) -> Result<ExportPayload> {
        self.sequence
            .as_ref()
            .map(|seq| export::format_with_style(seq, &self.style))
            .ok_or(Error::NothingGenerated)
    }

    /// Copy the current list as text and HTML
    pub fn copy<C: Clipboard>(&self, exporter: &mut ClipboardExporter<C>) -> Result<ExportOutcome> {
        Ok(exporter.write(&self.payload()?))
    }

    /// Copy a selection of rendered output with metadata removed.
    ///
    /// Returns `None` when nothing but whitespace was selected.
    pub fn copy_selection<C: Clipboard>(
        &self,
        selected: &str,
        exporter: &mut ClipboardExporter<C>,
    ) -> Option<ExportOutcome> {
        if selected.trim().is_empty() {
            return None;
        }
        let filtered = export::filter_selection(selected);
        Some(exporter.write_text_only(&filtered))
    }
}
