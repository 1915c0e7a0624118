use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Capability to open an interactive editor on a file, positioned at a line,
/// with occurrences of a pattern highlighted. Blocks until the editor session
/// ends; the file may have been arbitrarily modified on return.
pub trait EditorLauncher {
    fn open(&self, file: &Path, line: usize, pattern: &str) -> Result<()>;
}

/// Launches a vim-compatible editor: `+N` positions at the line, `-c /pattern`
/// highlights every occurrence of the word.
pub struct CommandEditor {
    program: String,
}

impl CommandEditor {
    pub fn new(program: String) -> Self {
        Self { program }
    }
}

impl EditorLauncher for CommandEditor {
    fn open(&self, file: &Path, line: usize, pattern: &str) -> Result<()> {
        // A nonzero editor exit is not fatal; the file may still have changed
        // and the scan restarts either way.
        Command::new(&self.program)
            .arg(format!("+{}", line))
            .arg("-c")
            .arg(format!("/{}", pattern))
            .arg(file)
            .status()
            .with_context(|| format!("Failed to launch editor: {}", self.program))?;

        Ok(())
    }
}
