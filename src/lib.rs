//! Fortnight Library
//!
//! Generates two-week date lists and prepares them for the clipboard.
//! This library provides functionality to:
//! - Parse flexible date strings (`9/1`, `9月1日`, `2023-9-1`, ...)
//! - Resolve the default anchor (Monday of last week)
//! - Generate fourteen consecutive labelled days
//! - Format the list as plain text and as a spreadsheet-friendly HTML table
//! - Copy to the clipboard with tiered fallbacks
//!
//! # Example
//!
//! ```
//! use fortnight::date::{parse, FixedClock, CalendarDate};
//! use fortnight::{export, sequence};
//!
//! let clock = FixedClock(CalendarDate::from_ymd(2023, 6, 1).unwrap());
//! let anchor = parse("9/1", &clock).unwrap();
//! let seq = sequence::generate(anchor).unwrap();
//!
//! let payload = export::format(&seq);
//! assert!(payload.plain_text.starts_with("9-1周五\n9-2周六"));
//! ```

pub mod anchor;
pub mod clipboard;
pub mod config;
pub mod date;
pub mod error;
pub mod export;
pub mod logging;
pub mod sequence;
pub mod session;

// Re-export commonly used items
pub use error::{Error, Result};
