//! Interactive configuration wizard.
//!
//! A dialoguer-driven loop over the environment configuration: every edit
//! re-renders the script preview, so the displayed script always matches the
//! current configuration.

use std::io::IsTerminal;

use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::app::AppContext;
use crate::domain::{AppError, EnvConfig, OsTarget, PYTHON_COMMANDS, ScriptFactory};
use crate::ports::{ClipboardWriter, SuggestionClient};

use super::generate::{self, GenerateOptions};
use super::suggest;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WizardChoice {
    TargetOs,
    PythonCommand,
    EnvName,
    ProjectName,
    ToggleRequirements,
    ToggleKeepOpen,
    AddDependency,
    RemoveDependency,
    SuggestDependencies,
    CopyScript,
    SaveScript,
    Quit,
}

impl WizardChoice {
    const ALL: [WizardChoice; 12] = [
        WizardChoice::TargetOs,
        WizardChoice::PythonCommand,
        WizardChoice::EnvName,
        WizardChoice::ProjectName,
        WizardChoice::ToggleRequirements,
        WizardChoice::ToggleKeepOpen,
        WizardChoice::AddDependency,
        WizardChoice::RemoveDependency,
        WizardChoice::SuggestDependencies,
        WizardChoice::CopyScript,
        WizardChoice::SaveScript,
        WizardChoice::Quit,
    ];

    fn label(self, config: &EnvConfig) -> String {
        match self {
            WizardChoice::TargetOs => format!("Target OS [{}]", config.os_target.label()),
            WizardChoice::PythonCommand => {
                format!("Python command [{}]", config.python_command)
            }
            WizardChoice::EnvName => format!("Venv name [{}]", config.env_name),
            WizardChoice::ProjectName => format!("Project name [{}]", config.project_name),
            WizardChoice::ToggleRequirements => format!(
                "Generate requirements.txt [{}]",
                if config.include_requirements_txt { "on" } else { "off" }
            ),
            WizardChoice::ToggleKeepOpen => format!(
                "Keep terminal open, Windows only [{}]",
                if config.keep_terminal_open { "on" } else { "off" }
            ),
            WizardChoice::AddDependency => "Add dependency".to_string(),
            WizardChoice::RemoveDependency => {
                format!("Remove dependency ({} selected)", config.dependencies.len())
            }
            WizardChoice::SuggestDependencies => "Suggest dependencies (AI)".to_string(),
            WizardChoice::CopyScript => "Copy script to clipboard".to_string(),
            WizardChoice::SaveScript => "Save script to file".to_string(),
            WizardChoice::Quit => "Quit".to_string(),
        }
    }
}

/// Check that both stdin and stdout are attached to a terminal.
///
/// Called before any adapter is constructed so piped invocations fail with a
/// clear message rather than a clipboard or credential error.
pub fn ensure_interactive() -> Result<(), AppError> {
    if !std::io::stdin().is_terminal() || !std::io::stdout().is_terminal() {
        return Err(AppError::config_error(
            "The wizard requires an interactive terminal. Use 'venvgen generate' instead.",
        ));
    }
    Ok(())
}

/// Run the interactive wizard until the user quits.
pub fn execute<S, C>(ctx: &mut AppContext<S, C>) -> Result<(), AppError>
where
    S: SuggestionClient,
    C: ClipboardWriter,
{
    ensure_interactive()?;

    let mut config = EnvConfig::default();
    print_preview(&config);

    loop {
        let items: Vec<String> =
            WizardChoice::ALL.iter().map(|choice| choice.label(&config)).collect();

        let selection = Select::new()
            .with_prompt("Configure your environment")
            .items(&items)
            .default(0)
            .interact()
            .map_err(|e| AppError::config_error(format!("Selection failed: {e}")))?;

        match WizardChoice::ALL[selection] {
            WizardChoice::TargetOs => select_os(&mut config)?,
            WizardChoice::PythonCommand => select_python_command(&mut config)?,
            WizardChoice::EnvName => {
                config.env_name = prompt_text("Venv name", &config.env_name)?;
            }
            WizardChoice::ProjectName => {
                config.project_name = prompt_text("Project name", &config.project_name)?;
            }
            WizardChoice::ToggleRequirements => {
                config.include_requirements_txt = !config.include_requirements_txt;
            }
            WizardChoice::ToggleKeepOpen => {
                config.keep_terminal_open = !config.keep_terminal_open;
            }
            WizardChoice::AddDependency => add_dependency(&mut config)?,
            WizardChoice::RemoveDependency => remove_dependency(&mut config)?,
            WizardChoice::SuggestDependencies => suggest_dependencies(ctx, &mut config)?,
            WizardChoice::CopyScript => {
                let script = ScriptFactory::generate(&config);
                ctx.clipboard_mut().write_text(&script)?;
                println!("✅ Copied {} script to clipboard", config.script_filename());
                continue;
            }
            WizardChoice::SaveScript => {
                let options = GenerateOptions { save: true, ..GenerateOptions::default() };
                let outcome = generate::execute::<C>(&config, &options, None)?;
                if let Some(path) = outcome.written_to {
                    println!("✅ Wrote {}", path.display());
                }
                continue;
            }
            WizardChoice::Quit => {
                if confirm_quit()? {
                    return Ok(());
                }
                continue;
            }
        }

        print_preview(&config);
    }
}

fn print_preview(config: &EnvConfig) {
    println!();
    println!("── {} ──", config.summary());
    println!("{}", ScriptFactory::generate(config));
    println!("── end of {} ──", config.script_filename());
    println!();
}

fn select_os(config: &mut EnvConfig) -> Result<(), AppError> {
    let targets = [OsTarget::Windows, OsTarget::Unix];
    let items: Vec<&str> = targets.iter().map(|t| t.label()).collect();

    let selection = Select::new()
        .with_prompt("Target OS")
        .items(&items)
        .default(if config.os_target == OsTarget::Windows { 0 } else { 1 })
        .interact()
        .map_err(|e| AppError::config_error(format!("OS selection failed: {e}")))?;

    config.os_target = targets[selection];
    Ok(())
}

fn select_python_command(config: &mut EnvConfig) -> Result<(), AppError> {
    let mut items: Vec<String> = PYTHON_COMMANDS.iter().map(|c| c.to_string()).collect();
    items.push("Custom…".to_string());

    let selection = Select::new()
        .with_prompt("Python command")
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| AppError::config_error(format!("Command selection failed: {e}")))?;

    if selection < PYTHON_COMMANDS.len() {
        config.python_command = PYTHON_COMMANDS[selection].to_string();
    } else {
        config.python_command = prompt_text("Python command", &config.python_command)?;
    }
    Ok(())
}

fn prompt_text(prompt: &str, current: &str) -> Result<String, AppError> {
    Input::new()
        .with_prompt(prompt)
        .with_initial_text(current)
        .interact_text()
        .map_err(|e| AppError::config_error(format!("Failed to read {prompt}: {e}")))
}

fn add_dependency(config: &mut EnvConfig) -> Result<(), AppError> {
    let name: String = Input::new()
        .with_prompt("Package name (e.g. pandas)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| AppError::config_error(format!("Failed to read package name: {e}")))?;

    // Empty and duplicate names are no-ops by contract.
    if !config.dependencies.add(&name) && !name.trim().is_empty() {
        println!("'{}' is already selected", name.trim());
    }
    Ok(())
}

fn remove_dependency(config: &mut EnvConfig) -> Result<(), AppError> {
    if config.dependencies.is_empty() {
        println!("No packages selected.");
        return Ok(());
    }

    let mut items: Vec<String> = config.dependencies.names().to_vec();
    items.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt("Remove which package?")
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| AppError::config_error(format!("Package selection failed: {e}")))?;

    if selection < items.len() - 1 {
        let name = items[selection].clone();
        config.dependencies.remove(&name);
    }
    Ok(())
}

fn suggest_dependencies<S, C>(
    ctx: &AppContext<S, C>,
    config: &mut EnvConfig,
) -> Result<(), AppError>
where
    S: SuggestionClient,
    C: ClipboardWriter,
{
    let description: String = Input::new()
        .with_prompt("Describe your project (e.g. 'A web scraper for news sites')")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| AppError::config_error(format!("Failed to read description: {e}")))?;

    let suggestions = suggest::execute(ctx.suggestions(), &description);
    if suggestions.is_empty() {
        println!("No suggestions available.");
        return Ok(());
    }

    let items: Vec<String> =
        suggestions.iter().map(|s| format!("{}  —  {}", s.package, s.reason)).collect();

    let picked = MultiSelect::new()
        .with_prompt("Select packages to add (space to toggle, enter to confirm)")
        .items(&items)
        .interact()
        .map_err(|e| AppError::config_error(format!("Suggestion selection failed: {e}")))?;

    for index in picked {
        config.dependencies.add(&suggestions[index].package);
    }
    Ok(())
}

fn confirm_quit() -> Result<bool, AppError> {
    Confirm::new()
        .with_prompt("Quit without saving?")
        .default(true)
        .interact()
        .map_err(|e| AppError::config_error(format!("Confirmation failed: {e}")))
}
