//! Export formatting
//!
//! Renders a [`DateSequence`] as plain text, as an HTML table that pastes
//! cleanly into spreadsheets, and as the tagged text shown to the user. Also
//! strips metadata lines out of ad-hoc selections before they are copied.

use serde::Deserialize;

use crate::sequence::DateSequence;

/// Prefix of the metadata line in the tagged representation
pub const FULL_START_MARKER: &str = "FULL_START_DATE:";

/// Prefix of the banner line shown above the list
pub const BANNER_MARKER: &str = "开始日期:";

/// Clipboard-ready representations of a sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    /// Entry labels, one per line, without the anchor metadata
    pub plain_text: String,
    /// Table fragment with one row per entry
    pub html: String,
}

/// Inline styling applied to the exported table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableStyle {
    pub font_family: String,
    pub font_size: String,
    pub border_color: String,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            font_family: "微软雅黑".to_string(),
            font_size: "10pt".to_string(),
            border_color: "#ddd".to_string(),
        }
    }
}

/// Format a sequence with the default table style
pub fn format(seq: &DateSequence) -> ExportPayload {
    format_with_style(seq, &TableStyle::default())
}

pub fn format_with_style(seq: &DateSequence, style: &TableStyle) -> ExportPayload {
    ExportPayload {
        plain_text: plain_text(seq),
        html: html_table(seq, style),
    }
}

/// Entry labels joined by newlines
pub fn plain_text(seq: &DateSequence) -> String {
    seq.labels().collect::<Vec<_>>().join("\n")
}

/// HTML table with one single-cell row per entry
pub fn html_table(seq: &DateSequence, style: &TableStyle) -> String {
    let font_family = escape_html(&style.font_family);
    let font_size = escape_html(&style.font_size);
    let border_color = escape_html(&style.border_color);

    let mut html = format!(
        "<table style=\"font-family: {}; font-size: {}; text-align: center;\"><tbody>",
        font_family, font_size
    );
    for label in seq.labels() {
        html.push_str(&format!(
            "<tr><td style=\"text-align: center; padding: 2px 0; border: 1px solid {};\">{}</td></tr>",
            border_color,
            escape_html(label)
        ));
    }
    html.push_str("</tbody></table>");
    html
}

/// Internal representation: a metadata line carrying the anchor's full
/// label, then one line per entry
pub fn tagged(seq: &DateSequence) -> String {
    let mut text = format!("{}{}\n", FULL_START_MARKER, seq.anchor_full_label());
    for label in seq.labels() {
        text.push_str(label);
        text.push('\n');
    }
    text
}

/// Recover the entry lines from tagged text
pub fn untag(tagged: &str) -> Vec<String> {
    tagged
        .lines()
        .filter(|line| !line.trim().is_empty() && !is_metadata_line(line))
        .map(str::to_string)
        .collect()
}

/// Banner line shown above the list, e.g. "开始日期: 2023-09-01 周五"
pub fn banner(seq: &DateSequence) -> String {
    format!("{} {}", BANNER_MARKER, seq.anchor_full_label())
}

/// What the user sees: the banner, then the list
pub fn render(seq: &DateSequence) -> String {
    format!("{}\n{}", banner(seq), plain_text(seq))
}

/// True for banner and tagged-metadata lines
pub fn is_metadata_line(line: &str) -> bool {
    line.contains(BANNER_MARKER) || line.starts_with(FULL_START_MARKER)
}

/// Drop metadata lines from selected text, keeping entry lines in order
pub fn filter_selection(selected: &str) -> String {
    selected
        .split('\n')
        .filter(|line| !is_metadata_line(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escape text for use in HTML content and quoted attributes
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
