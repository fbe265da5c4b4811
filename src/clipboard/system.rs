//! System clipboard through the platform copy utilities

use std::io::{self, IsTerminal, Write};
use std::process::{Command, Stdio};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::{Clipboard, TierOutcome};
use crate::config::ClipboardSettings;

/// Copy utilities tried in order when no command is configured
#[cfg(target_os = "macos")]
const DEFAULT_COMMANDS: &[&[&str]] = &[&["pbcopy"]];

#[cfg(target_os = "linux")]
const DEFAULT_COMMANDS: &[&[&str]] = &[
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
];

#[cfg(target_os = "windows")]
const DEFAULT_COMMANDS: &[&[&str]] = &[&["clip"]];

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const DEFAULT_COMMANDS: &[&[&str]] = &[];

/// Clipboard backed by the operating system.
///
/// The copy utilities publish one representation per write, so the rich tier
/// is reported unsupported. The legacy tier emits an OSC 52 escape sequence,
/// which most terminal emulators forward to the clipboard.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    text_command: Option<Vec<String>>,
    osc52: bool,
}

impl SystemClipboard {
    pub fn new(settings: &ClipboardSettings) -> Self {
        Self {
            text_command: settings.text_command.clone().filter(|c| !c.is_empty()),
            osc52: settings.osc52,
        }
    }
}

impl Clipboard for SystemClipboard {
    fn write_rich(&mut self, _plain: &str, _html: &str) -> TierOutcome {
        TierOutcome::Unsupported
    }

    fn write_text(&mut self, plain: &str) -> TierOutcome {
        if let Some(command) = &self.text_command {
            return pipe_to(command, plain);
        }

        let mut outcome = TierOutcome::Unsupported;
        for command in DEFAULT_COMMANDS {
            let command: Vec<String> = command.iter().map(|s| s.to_string()).collect();
            match pipe_to(&command, plain) {
                TierOutcome::Written => return TierOutcome::Written,
                TierOutcome::Unsupported => {}
                failed => outcome = failed,
            }
        }
        outcome
    }

    fn legacy_copy(&mut self, plain: &str) -> TierOutcome {
        if !self.osc52 || !io::stderr().is_terminal() {
            return TierOutcome::Unsupported;
        }

        let mut stderr = io::stderr().lock();
        match stderr
            .write_all(osc52_sequence(plain).as_bytes())
            .and_then(|_| stderr.flush())
        {
            Ok(()) => TierOutcome::Written,
            Err(e) => TierOutcome::Failed(format!("OSC 52 write failed: {}", e)),
        }
    }
}

/// Terminal escape that sets the system clipboard
fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Run a copy utility with `text` on its stdin
fn pipe_to(command: &[String], text: &str) -> TierOutcome {
    let Some((program, args)) = command.split_first() else {
        return TierOutcome::Unsupported;
    };

    let mut child = match Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(child) => child,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(%program, "copy utility not installed");
            return TierOutcome::Unsupported;
        }
        Err(e) => return TierOutcome::Failed(format!("Failed to start {}: {}", program, e)),
    };

    if let Some(mut stdin) = child.stdin.take() {
        if let Err(e) = stdin.write_all(text.as_bytes()) {
            let _ = child.wait();
            return TierOutcome::Failed(format!("Failed to write to {}: {}", program, e));
        }
    }

    match child.wait() {
        Ok(status) if status.success() => TierOutcome::Written,
        Ok(status) => TierOutcome::Failed(format!("{} exited with {}", program, status)),
        Err(e) => TierOutcome::Failed(format!("{} wait failed: {}", program, e)),
    }
}
