//! Clipboard backend that pipes text into an external helper program.

use std::io::{self, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use super::{ClipboardBackend, ClipboardError};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Byte encoding a helper expects on stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    /// Little-endian with a byte-order mark (what Windows `clip` reads).
    Utf16,
}

impl TextEncoding {
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            TextEncoding::Utf8 => text.as_bytes().to_vec(),
            TextEncoding::Utf16 => {
                let mut out = Vec::with_capacity(2 + text.len() * 2);
                out.extend_from_slice(&[0xFF, 0xFE]);
                for unit in text.encode_utf16() {
                    out.extend_from_slice(&unit.to_le_bytes());
                }
                out
            }
        }
    }
}

/// Runs `program args...` and writes the text to its stdin.
#[derive(Debug, Clone)]
pub struct CommandBackend {
    program: String,
    args: Vec<String>,
    encoding: TextEncoding,
    timeout: Duration,
}

impl CommandBackend {
    pub fn new(program: &str, args: &[&str], encoding: TextEncoding, timeout: Duration) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            encoding,
            timeout,
        }
    }

    fn io_error(&self, source: io::Error) -> ClipboardError {
        ClipboardError::Io {
            program: self.program.clone(),
            source,
        }
    }
}

impl ClipboardBackend for CommandBackend {
    fn name(&self) -> &str {
        &self.program
    }

    fn is_available(&self) -> bool {
        which::which(&self.program).is_ok()
    }

    /// The helper gets the whole text on stdin followed by EOF. Stdin is fed
    /// from a separate thread so a helper that stops reading cannot block us
    /// past the timeout; on timeout the helper is killed.
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let bytes = self.encoding.encode(text);

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ClipboardError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let writer = child.stdin.take().map(|mut stdin| {
            // Dropping stdin at the end of the thread closes the pipe.
            thread::spawn(move || stdin.write_all(&bytes))
        });

        let status = match wait_with_timeout(&mut child, self.timeout) {
            Ok(Some(status)) => status,
            Ok(None) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(ClipboardError::Timeout {
                    program: self.program.clone(),
                    timeout: self.timeout,
                });
            }
            Err(e) => {
                let _ = child.kill();
                return Err(self.io_error(e));
            }
        };

        if !status.success() {
            return Err(ClipboardError::Exit {
                program: self.program.clone(),
                status,
            });
        }

        if let Some(handle) = writer {
            let written = handle.join().unwrap_or_else(|_| {
                Err(io::Error::new(io::ErrorKind::Other, "stdin writer panicked"))
            });
            match written {
                Ok(()) => {}
                // The helper exited successfully before reading everything; nothing to add.
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                    tracing::debug!("{} closed stdin early", self.program);
                }
                Err(e) => return Err(self.io_error(e)),
            }
        }

        Ok(())
    }
}

fn wait_with_timeout(child: &mut Child, timeout: Duration) -> io::Result<Option<ExitStatus>> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}
