//! Clipboard export
//!
//! Writes are attempted tier by tier: a rich write carrying both plain text
//! and HTML, then plain text only, then a legacy mechanism. A tier that is
//! missing or fails hands over to the next one. Only when every tier has been
//! tried is the plain text handed back for manual copying.

pub mod memory;
pub mod system;

use std::fmt;

use crate::export::ExportPayload;

// Re-export commonly used items
pub use memory::{MemoryClipboard, TierState};
pub use system::SystemClipboard;

/// One way of getting text onto the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Plain text and HTML in a single write
    Rich,
    /// Plain text only
    PlainText,
    /// Synchronous legacy copy
    Legacy,
}

impl Tier {
    /// Every tier, best first
    pub const ALL: [Tier; 3] = [Tier::Rich, Tier::PlainText, Tier::Legacy];
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Rich => "rich text",
            Tier::PlainText => "plain text",
            Tier::Legacy => "compatibility mode",
        };
        f.write_str(name)
    }
}

/// Result of a single tier attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TierOutcome {
    Written,
    /// The capability does not exist here
    Unsupported,
    /// The capability exists but the write failed
    Failed(String),
}

/// Clipboard capability, one method per tier
pub trait Clipboard {
    fn write_rich(&mut self, plain: &str, html: &str) -> TierOutcome;
    fn write_text(&mut self, plain: &str) -> TierOutcome;
    fn legacy_copy(&mut self, plain: &str) -> TierOutcome;
}

/// Final result of an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Copied { tier: Tier },
    /// Every tier failed; the text must be copied by hand
    Manual { text: String },
}

impl ExportOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, ExportOutcome::Copied { .. })
    }
}

/// Runs the tier cascade against a clipboard
#[derive(Debug)]
pub struct ClipboardExporter<C> {
    clipboard: C,
    tiers: Vec<Tier>,
}

impl<C: Clipboard> ClipboardExporter<C> {
    pub fn new(clipboard: C) -> Self {
        Self::with_tiers(clipboard, Tier::ALL.to_vec())
    }

    /// Use a custom tier order
    pub fn with_tiers(clipboard: C, tiers: Vec<Tier>) -> Self {
        Self { clipboard, tiers }
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn into_inner(self) -> C {
        self.clipboard
    }

    /// Copy a payload, preferring the rich tier
    pub fn write(&mut self, payload: &ExportPayload) -> ExportOutcome {
        self.run(&payload.plain_text, Some(&payload.html))
    }

    /// Copy plain text only; the rich tier is skipped
    pub fn write_text_only(&mut self, text: &str) -> ExportOutcome {
        self.run(text, None)
    }

    fn run(&mut self, plain: &str, html: Option<&str>) -> ExportOutcome {
        for tier in self.tiers.clone() {
            let outcome = match (tier, html) {
                (Tier::Rich, Some(html)) => self.clipboard.write_rich(plain, html),
                (Tier::Rich, None) => continue,
                (Tier::PlainText, _) => self.clipboard.write_text(plain),
                (Tier::Legacy, _) => self.clipboard.legacy_copy(plain),
            };

            match outcome {
                TierOutcome::Written => {
                    tracing::info!(%tier, bytes = plain.len(), "copied to clipboard");
                    return ExportOutcome::Copied { tier };
                }
                TierOutcome::Unsupported => {
                    tracing::debug!(%tier, "clipboard tier unavailable");
                }
                TierOutcome::Failed(reason) => {
                    tracing::warn!(%tier, %reason, "clipboard tier failed");
                }
            }
        }

        tracing::error!("every clipboard tier failed");
        ExportOutcome::Manual {
            text: plain.to_string(),
        }
    }
}
