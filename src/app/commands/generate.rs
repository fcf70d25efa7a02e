//! Script generation command.

use std::fs;
use std::path::PathBuf;

use crate::domain::{AppError, EnvConfig, ScriptFactory};
use crate::ports::ClipboardWriter;

/// Output actions for a generated script.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Copy the script to the system clipboard.
    pub copy: bool,
    /// Write the script to its dialect filename in the current directory.
    pub save: bool,
    /// Write the script to an explicit path instead of the dialect filename.
    pub output: Option<PathBuf>,
}

impl GenerateOptions {
    /// Whether the script should be printed to stdout.
    ///
    /// Printing is the default action; any explicit output action replaces it.
    pub fn print_to_stdout(&self) -> bool {
        !self.copy && !self.save && self.output.is_none()
    }
}

/// Result of a generate invocation.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    /// The rendered script text.
    pub script: String,
    /// Whether the script was copied to the clipboard.
    pub copied: bool,
    /// Path the script was written to, if any.
    pub written_to: Option<PathBuf>,
}

/// Render the script for `config` and apply the requested output actions.
pub fn execute<C: ClipboardWriter>(
    config: &EnvConfig,
    options: &GenerateOptions,
    mut clipboard: Option<&mut C>,
) -> Result<GenerateOutcome, AppError> {
    let script = ScriptFactory::generate(config);

    let mut copied = false;
    if options.copy {
        let writer = clipboard.as_deref_mut().ok_or_else(|| {
            AppError::ClipboardError("No clipboard writer available".to_string())
        })?;
        writer.write_text(&script)?;
        copied = true;
    }

    let mut written_to = None;
    if options.save || options.output.is_some() {
        let path = match &options.output {
            Some(path) => path.clone(),
            None => PathBuf::from(config.script_filename()),
        };
        fs::write(&path, &script)?;
        written_to = Some(path);
    }

    Ok(GenerateOutcome { script, copied, written_to })
}
