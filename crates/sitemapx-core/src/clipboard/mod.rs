//! Copy text to the OS clipboard through platform helper programs.
//!
//! Each helper is a [`ClipboardBackend`]; [`copy_with_fallback`] tries them in
//! order and stops at the first one that succeeds. A failed copy is reported
//! to the user but never fails the run.

mod command;

use std::time::Duration;
use thiserror::Error;

pub use command::{CommandBackend, TextEncoding};

#[derive(Debug, Error)]
pub enum ClipboardError {
    /// None of the helper programs is installed.
    #[error("Clipboard copy skipped: {} tools not found.", tool_list(.tried))]
    Unavailable { tried: Vec<String> },

    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Feeding the text or waiting for the helper failed.
    #[error("{program}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    Exit {
        program: String,
        status: std::process::ExitStatus,
    },

    #[error("{program} did not finish within {timeout:?} and was stopped")]
    Timeout { program: String, timeout: Duration },
}

/// One way of putting text on the clipboard.
pub trait ClipboardBackend {
    /// Short name used in messages, e.g. `xclip`.
    fn name(&self) -> &str;

    /// Cheap check whether this backend can be tried at all.
    fn is_available(&self) -> bool;

    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard helpers for the current platform, in the order they should be tried.
#[cfg(windows)]
pub fn platform_backends(timeout: Duration) -> Vec<Box<dyn ClipboardBackend>> {
    vec![Box::new(CommandBackend::new(
        "clip",
        &[],
        TextEncoding::Utf16,
        timeout,
    ))]
}

/// Clipboard helpers for the current platform, in the order they should be tried.
#[cfg(not(windows))]
pub fn platform_backends(timeout: Duration) -> Vec<Box<dyn ClipboardBackend>> {
    vec![
        // macOS
        Box::new(CommandBackend::new("pbcopy", &[], TextEncoding::Utf8, timeout)),
        // X11
        Box::new(CommandBackend::new(
            "xclip",
            &["-selection", "clipboard"],
            TextEncoding::Utf8,
            timeout,
        )),
        Box::new(CommandBackend::new(
            "xsel",
            &["--clipboard", "--input"],
            TextEncoding::Utf8,
            timeout,
        )),
    ]
}

/// Tries each available backend in order; returns the name of the one that took the text.
///
/// Returns [`ClipboardError::Unavailable`] when no backend could be tried, or
/// the last backend's error when every available backend failed.
pub fn copy_with_fallback<'a>(
    backends: &'a [Box<dyn ClipboardBackend>],
    text: &str,
) -> Result<&'a str, ClipboardError> {
    let mut last_err = None;

    for backend in backends {
        if !backend.is_available() {
            tracing::debug!("clipboard backend {} not available", backend.name());
            continue;
        }
        match backend.write_text(text) {
            Ok(()) => {
                tracing::info!("copied {} bytes to clipboard via {}", text.len(), backend.name());
                return Ok(backend.name());
            }
            Err(e) => {
                tracing::warn!("clipboard backend {} failed: {}", backend.name(), e);
                last_err = Some(e);
            }
        }
    }

    Err(last_err.unwrap_or_else(|| ClipboardError::Unavailable {
        tried: backends.iter().map(|b| b.name().to_string()).collect(),
    }))
}

/// `'a'`, `'a' or 'b'`, `'a', 'b', or 'c'`.
fn tool_list(tools: &[String]) -> String {
    let quoted: Vec<String> = tools.iter().map(|t| format!("'{}'", t)).collect();
    match quoted.as_slice() {
        [] => "clipboard".to_string(),
        [one] => one.clone(),
        [first, second] => format!("{} or {}", first, second),
        [rest @ .., last] => format!("{}, or {}", rest.join(", "), last),
    }
}
