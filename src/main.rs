use std::path::PathBuf;

use clap::{Parser, Subcommand};
use venvgen::{AppError, EnvConfig, GenerateOptions, OsTarget, SuggestFormat};

#[derive(Parser)]
#[command(name = "venvgen")]
#[command(version)]
#[command(
    about = "Generate Python virtual environment setup scripts",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the setup script for a configuration
    #[clap(visible_alias = "g")]
    Generate {
        /// Script dialect: windows or unix (mac/linux)
        #[arg(long, default_value = "windows")]
        os: String,
        /// Interpreter command used to create the venv
        #[arg(long, default_value = "python")]
        python: String,
        /// Virtual environment directory name
        #[arg(long, default_value = ".venv")]
        env_name: String,
        /// Informational project name (not part of the script)
        #[arg(long, default_value = "my-project")]
        project_name: String,
        /// Package to install (repeatable)
        #[arg(long = "dep")]
        deps: Vec<String>,
        /// Skip the requirements.txt freeze step
        #[arg(long)]
        no_requirements: bool,
        /// Do not keep the terminal open after setup (Windows dialect only)
        #[arg(long)]
        no_keep_open: bool,
        /// Copy the script to the clipboard
        #[arg(long)]
        copy: bool,
        /// Write the script to its dialect filename in the current directory
        #[arg(long)]
        save: bool,
        /// Write the script to an explicit path
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Suggest PyPI packages for a free-text project description
    #[clap(visible_alias = "s")]
    Suggest {
        /// Project description, e.g. "a web scraper for news sites"
        description: Vec<String>,
        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,
        /// Use the offline mock client instead of the Gemini API
        #[arg(long)]
        mock: bool,
    },
    /// Interactive configuration wizard with live script preview
    #[clap(visible_alias = "w")]
    Wizard {
        /// Use the offline mock client for suggestions
        #[arg(long)]
        mock: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate {
            os,
            python,
            env_name,
            project_name,
            deps,
            no_requirements,
            no_keep_open,
            copy,
            save,
            output,
        } => OsTarget::from_name(&os)
            .ok_or_else(|| {
                AppError::config_error(format!(
                    "Invalid OS target '{}': must be 'windows' or 'unix'",
                    os
                ))
            })
            .and_then(|os_target| {
                let config = EnvConfig {
                    project_name,
                    env_name,
                    python_command: python,
                    os_target,
                    dependencies: deps.into_iter().collect(),
                    include_requirements_txt: !no_requirements,
                    keep_terminal_open: !no_keep_open,
                };
                let options = GenerateOptions { copy, save, output };
                venvgen::generate(&config, &options).map(|_| ())
            }),
        Commands::Suggest { description, format, mock } => SuggestFormat::from_name(&format)
            .ok_or_else(|| {
                AppError::config_error(format!(
                    "Invalid format '{}': must be 'text' or 'json'",
                    format
                ))
            })
            .and_then(|format| venvgen::suggest(&description.join(" "), format, mock).map(|_| ())),
        Commands::Wizard { mock } => venvgen::wizard(mock),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
