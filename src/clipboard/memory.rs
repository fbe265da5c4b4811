//! In-process clipboard

use super::{Clipboard, Tier, TierOutcome};

/// Availability of one tier on a [`MemoryClipboard`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierState {
    Available,
    Missing,
    Failing,
}

/// What the last successful write left on the clipboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardContents {
    pub plain: String,
    pub html: Option<String>,
    pub tier: Tier,
}

/// Clipboard that keeps its contents in memory.
///
/// Each tier can be switched to missing or failing, which makes the fallback
/// order observable. Also backs `--dry-run`.
#[derive(Debug, Clone)]
pub struct MemoryClipboard {
    rich: TierState,
    text: TierState,
    legacy: TierState,
    contents: Option<ClipboardContents>,
    attempts: Vec<Tier>,
}

impl Default for MemoryClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryClipboard {
    /// All tiers available
    pub fn new() -> Self {
        Self {
            rich: TierState::Available,
            text: TierState::Available,
            legacy: TierState::Available,
            contents: None,
            attempts: Vec::new(),
        }
    }

    pub fn with_rich(mut self, state: TierState) -> Self {
        self.rich = state;
        self
    }

    pub fn with_text(mut self, state: TierState) -> Self {
        self.text = state;
        self
    }

    pub fn with_legacy(mut self, state: TierState) -> Self {
        self.legacy = state;
        self
    }

    pub fn contents(&self) -> Option<&ClipboardContents> {
        self.contents.as_ref()
    }

    /// Tiers that were attempted, in order
    pub fn attempts(&self) -> &[Tier] {
        &self.attempts
    }

    fn store(&mut self, tier: Tier, state: TierState, plain: &str, html: Option<&str>) -> TierOutcome {
        self.attempts.push(tier);
        match state {
            TierState::Available => {
                self.contents = Some(ClipboardContents {
                    plain: plain.to_string(),
                    html: html.map(str::to_string),
                    tier,
                });
                TierOutcome::Written
            }
            TierState::Missing => TierOutcome::Unsupported,
            TierState::Failing => TierOutcome::Failed(format!("{} write rejected", tier)),
        }
    }
}

impl Clipboard for MemoryClipboard {
    fn write_rich(&mut self, plain: &str, html: &str) -> TierOutcome {
        self.store(Tier::Rich, self.rich, plain, Some(html))
    }

    fn write_text(&mut self, plain: &str) -> TierOutcome {
        self.store(Tier::PlainText, self.text, plain, None)
    }

    fn legacy_copy(&mut self, plain: &str) -> TierOutcome {
        self.store(Tier::Legacy, self.legacy, plain, None)
    }
}
