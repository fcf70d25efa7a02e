//! Setup script generation domain logic.

use super::env_config::{EnvConfig, OsTarget};

/// Domain logic for rendering setup scripts from an [`EnvConfig`].
pub struct ScriptFactory;

impl ScriptFactory {
    /// Render the setup script for the configured dialect.
    ///
    /// Pure and total: every configuration, including one with an empty
    /// dependency list, produces a valid script. Names are substituted
    /// verbatim with no shell escaping; the generator trusts its input.
    ///
    /// Only the venv-creation step uses the configured interpreter command.
    /// Every later step runs inside the freshly activated environment, where
    /// `python` and `pip` resolve to the environment's own interpreter, so
    /// those steps invoke the literal names regardless of `python_command`.
    pub fn generate(config: &EnvConfig) -> String {
        match config.os_target {
            OsTarget::Windows => Self::generate_windows(config),
            OsTarget::Unix => Self::generate_unix(config),
        }
    }

    fn generate_windows(config: &EnvConfig) -> String {
        let deps = config.dependencies.names().join(" ");
        let mut lines = vec![
            "@echo off".to_string(),
            format!("echo Creating virtual environment '{}'...", config.env_name),
            format!("{} -m venv {}", config.python_command, config.env_name),
            "echo Activating environment...".to_string(),
            format!("call .\\{}\\Scripts\\activate", config.env_name),
            "echo Upgrading pip...".to_string(),
            "python -m pip install --upgrade pip".to_string(),
        ];

        if !deps.is_empty() {
            lines.push(format!("echo Installing dependencies: {}...", deps));
            lines.push(format!("pip install {}", deps));
        }

        if config.include_requirements_txt {
            lines.push("echo Generating requirements.txt...".to_string());
            lines.push("pip freeze > requirements.txt".to_string());
        }

        lines.push(format!(
            "echo Done! To activate later, run: .\\{}\\Scripts\\activate",
            config.env_name
        ));

        // Keeps the window open with the environment still activated.
        if config.keep_terminal_open {
            lines.push("cmd /k".to_string());
        }

        lines.join("\n")
    }

    fn generate_unix(config: &EnvConfig) -> String {
        let deps = config.dependencies.names().join(" ");
        let mut lines = vec![
            "#!/bin/bash".to_string(),
            format!("echo \"Creating virtual environment '{}'...\"", config.env_name),
            format!("{} -m venv {}", config.python_command, config.env_name),
            "echo \"Activating environment...\"".to_string(),
            format!("source ./{}/bin/activate", config.env_name),
            "echo \"Upgrading pip...\"".to_string(),
            "pip install --upgrade pip".to_string(),
        ];

        if !deps.is_empty() {
            lines.push(format!("echo \"Installing dependencies: {}...\"", deps));
            lines.push(format!("pip install {}", deps));
        }

        if config.include_requirements_txt {
            lines.push("echo \"Generating requirements.txt...\"".to_string());
            lines.push("pip freeze > requirements.txt".to_string());
        }

        // `keep_terminal_open` has no effect on this dialect: the script is
        // meant to be sourced or run in an already-interactive shell.
        lines.push(format!(
            "echo \"Setup complete! To activate run: source ./{}/bin/activate\"",
            config.env_name
        ));

        lines.join("\n")
    }
}
