//! System clipboard access
//!
//! The editor talks to the clipboard through `ClipboardProvider`. The real
//! implementation shells out to the platform's clipboard tools:
//! - macOS: `pbcopy` / `pbpaste`
//! - Linux: `xclip -selection clipboard` (`-o` to read)
//! - Windows: PowerShell `Set-Clipboard` / `Get-Clipboard`
//!
//! Each helper runs as a child process bounded by a timeout. A missing tool,
//! a non-zero exit or a timeout is reported as `ClipboardError` and the
//! caller degrades to a no-op.

use std::io::{self, Read, Write};
use std::process::{Child, Command, Stdio};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;

/// How often a running helper is polled for exit
const POLL_INTERVAL: Duration = Duration::from_millis(5);

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard tool '{program}' is not available")]
    Unavailable { program: String },

    #[error("Clipboard tool '{program}' failed ({status})")]
    Failed { program: String, status: String },

    #[error("Clipboard tool '{program}' timed out after {timeout_ms} ms")]
    Timeout { program: String, timeout_ms: u64 },

    #[error("Clipboard is not supported on this platform")]
    Unsupported,

    #[error("Clipboard I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Read/write access to a text clipboard
pub trait ClipboardProvider: Send {
    fn get_text(&mut self) -> Result<String, ClipboardError>;
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// A program plus its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ClipboardCommand {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Copy and paste commands for the current platform
pub fn platform_commands() -> Option<(ClipboardCommand, ClipboardCommand)> {
    if cfg!(target_os = "macos") {
        Some((
            ClipboardCommand::new("pbcopy", &[]),
            ClipboardCommand::new("pbpaste", &[]),
        ))
    } else if cfg!(target_os = "windows") {
        Some((
            ClipboardCommand::new(
                "powershell",
                &["-NoProfile", "-Command", "$input | Set-Clipboard"],
            ),
            ClipboardCommand::new("powershell", &["-NoProfile", "-Command", "Get-Clipboard"]),
        ))
    } else if cfg!(target_os = "linux") {
        Some((
            ClipboardCommand::new("xclip", &["-selection", "clipboard"]),
            ClipboardCommand::new("xclip", &["-selection", "clipboard", "-o"]),
        ))
    } else {
        None
    }
}

/// Clipboard backed by external helper processes
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    commands: Option<(ClipboardCommand, ClipboardCommand)>,
    timeout: Duration,
}

impl SystemClipboard {
    pub fn new(timeout_ms: u64) -> Self {
        Self {
            commands: platform_commands(),
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    pub fn with_commands(copy: ClipboardCommand, paste: ClipboardCommand, timeout_ms: u64) -> Self {
        Self {
            commands: Some((copy, paste)),
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    /// Run `command`, feeding `input` on stdin, and return its stdout.
    ///
    /// The whole exchange (writing stdin, waiting for exit, collecting
    /// stdout) is bounded by the timeout. Copy helpers get a null stdout:
    /// `xclip` forks a selection owner that keeps inherited pipes open.
    fn run(&self, command: &ClipboardCommand, input: Option<&str>) -> Result<String, ClipboardError> {
        let capture_output = input.is_none();
        let mut child = Command::new(&command.program)
            .args(&command.args)
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(if capture_output {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => ClipboardError::Unavailable {
                    program: command.program.clone(),
                },
                _ => ClipboardError::Io(e),
            })?;
        let deadline = Instant::now() + self.timeout;

        // A helper that never reads would block a direct write once the pipe fills
        let writer = match (input, child.stdin.take()) {
            (Some(text), Some(mut stdin)) => {
                let text = text.to_string();
                let (tx, rx) = mpsc::channel();
                thread::spawn(move || {
                    // Dropping stdin at the end closes the pipe so the helper sees EOF
                    let _ = tx.send(stdin.write_all(text.as_bytes()));
                });
                Some(rx)
            }
            _ => None,
        };

        let reader = child.stdout.take().map(|mut stdout| {
            let (tx, rx) = mpsc::channel();
            thread::spawn(move || {
                let mut buf = Vec::new();
                let _ = tx.send(stdout.read_to_end(&mut buf).map(|_| buf));
            });
            rx
        });

        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) => {}
                Err(e) => {
                    reap(&mut child, &command.program);
                    return Err(ClipboardError::Io(e));
                }
            }
            if Instant::now() >= deadline {
                reap(&mut child, &command.program);
                return Err(self.timed_out(command));
            }
            thread::sleep(POLL_INTERVAL);
        };

        if let Some(rx) = writer {
            match rx.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
                Ok(result) => result?,
                Err(mpsc::RecvTimeoutError::Timeout) => return Err(self.timed_out(command)),
                Err(mpsc::RecvTimeoutError::Disconnected) => {
                    return Err(io::Error::new(io::ErrorKind::Other, "stdin writer panicked").into())
                }
            }
        }

        let output = match reader {
            Some(rx) => match rx.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
                Ok(result) => result?,
                Err(mpsc::RecvTimeoutError::Timeout) => return Err(self.timed_out(command)),
                Err(mpsc::RecvTimeoutError::Disconnected) => {
                    return Err(io::Error::new(io::ErrorKind::Other, "stdout reader panicked").into())
                }
            },
            None => Vec::new(),
        };

        if !status.success() {
            return Err(ClipboardError::Failed {
                program: command.program.clone(),
                status: status.to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output).into_owned())
    }

    fn timed_out(&self, command: &ClipboardCommand) -> ClipboardError {
        tracing::warn!(
            "Clipboard helper {} timed out after {:?}",
            command.program,
            self.timeout
        );
        ClipboardError::Timeout {
            program: command.program.clone(),
            timeout_ms: self.timeout.as_millis() as u64,
        }
    }
}

/// Kill a helper that is still running and collect its exit status
fn reap(child: &mut Child, program: &str) {
    if let Err(e) = child.kill() {
        tracing::debug!("Failed to kill {}: {}", program, e);
    }
    if let Err(e) = child.wait() {
        tracing::debug!("Failed to wait for {}: {}", program, e);
    }
}

impl ClipboardProvider for SystemClipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        let (_, paste) = self.commands.as_ref().ok_or(ClipboardError::Unsupported)?;
        let mut text = self.run(paste, None)?;
        if cfg!(target_os = "windows") && text.ends_with("\r\n") {
            // Get-Clipboard terminates its output with a newline
            text.truncate(text.len() - 2);
        }
        tracing::debug!("Read {} bytes from system clipboard", text.len());
        Ok(text)
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let (copy, _) = self.commands.as_ref().ok_or(ClipboardError::Unsupported)?;
        self.run(copy, Some(text))?;
        tracing::debug!("Wrote {} bytes to system clipboard", text.len());
        Ok(())
    }
}

/// In-process clipboard. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        self.contents
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        Ok(self.contents())
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if let Ok(mut guard) = self.contents.lock() {
            guard.clear();
            guard.push_str(text);
        }
        Ok(())
    }
}

/// Clipboard for the running editor: the system one where the platform has
/// clipboard tools, otherwise an in-process one
pub fn default_provider(timeout_ms: u64) -> Box<dyn ClipboardProvider> {
    if platform_commands().is_some() {
        Box::new(SystemClipboard::new(timeout_ms))
    } else {
        tracing::info!("No system clipboard tools for this platform, using in-memory clipboard");
        Box::new(MemoryClipboard::new())
    }
}
