// src/clipboard.rs
use std::io::{self, Write};
use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Failed to start copy command '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write to copy command: {0}")]
    Write(#[from] io::Error),

    #[error("Copy command exited with {0}")]
    ExitStatus(String),
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Pipes text into a shell command's stdin, e.g. `xclip -selection clipboard`.
pub struct CommandClipboard {
    command: String,
}

impl CommandClipboard {
    pub fn new(command: impl Into<String>) -> Self {
        Self { command: command.into() }
    }
}

impl Clipboard for CommandClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut child = Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ClipboardError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }

        let status = child.wait()?;
        if !status.success() {
            return Err(ClipboardError::ExitStatus(status.to_string()));
        }

        log::debug!("Copied {} characters to clipboard", text.chars().count());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn text_reaches_command_stdin() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("clip.txt");
        let clipboard = CommandClipboard::new(format!("cat > '{}'", out.display()));

        clipboard.write_text("Ab3#Ab3#").unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "Ab3#Ab3#");
    }

    #[test]
    fn failing_command_is_reported() {
        let clipboard = CommandClipboard::new("exit 3");
        assert!(matches!(
            clipboard.write_text("x"),
            Err(ClipboardError::ExitStatus(_)) | Err(ClipboardError::Write(_))
        ));
    }
}
