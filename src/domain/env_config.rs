//! Environment configuration domain model.

use super::dependencies::DependencyList;

/// Script dialect target.
///
/// Exactly two dialects exist: Windows batch and POSIX shell. `Unix` covers
/// both macOS and Linux.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OsTarget {
    #[default]
    Windows,
    Unix,
}

impl OsTarget {
    /// Human-readable label used in status output and the wizard.
    pub fn label(self) -> &'static str {
        match self {
            OsTarget::Windows => "Windows",
            OsTarget::Unix => "Mac / Linux",
        }
    }

    /// Parse a target from a user-supplied name.
    pub fn from_name(name: &str) -> Option<OsTarget> {
        match name.to_lowercase().as_str() {
            "windows" | "win" => Some(OsTarget::Windows),
            "unix" | "mac" | "macos" | "linux" => Some(OsTarget::Unix),
            _ => None,
        }
    }
}

/// Interpreter commands offered by the wizard. Free text is also accepted.
pub const PYTHON_COMMANDS: [&str; 3] = ["python", "python3", "py"];

/// The single source of truth for script generation.
///
/// Always fully populated; defaults are applied at creation time and every
/// field edit replaces the value in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    /// Informational only; never appears in the generated script.
    pub project_name: String,
    /// Used verbatim as a path segment and displayed name.
    pub env_name: String,
    /// Interpreter invocation used for the venv-creation step only.
    pub python_command: String,
    pub os_target: OsTarget,
    pub dependencies: DependencyList,
    /// Append a `pip freeze > requirements.txt` step.
    pub include_requirements_txt: bool,
    /// Keep the terminal open with the environment activated.
    /// Only meaningful on the Windows dialect.
    pub keep_terminal_open: bool,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            project_name: "my-project".to_string(),
            env_name: ".venv".to_string(),
            python_command: "python".to_string(),
            os_target: OsTarget::Windows,
            dependencies: DependencyList::default(),
            include_requirements_txt: true,
            keep_terminal_open: true,
        }
    }
}

impl EnvConfig {
    /// Filename under which the generated script is saved.
    pub fn script_filename(&self) -> &'static str {
        match self.os_target {
            OsTarget::Windows => "setup_env.bat",
            OsTarget::Unix => "setup_env.sh",
        }
    }

    /// One-line summary shown above the script preview.
    pub fn summary(&self) -> String {
        if self.dependencies.is_empty() {
            format!("Clean environment '{}'", self.env_name)
        } else {
            format!(
                "Installing {} package(s) into '{}'",
                self.dependencies.len(),
                self.env_name
            )
        }
    }
}
