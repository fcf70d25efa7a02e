//! venvgen: Generate Python virtual-environment setup scripts with
//! Gemini-assisted dependency suggestions.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

use url::Url;

use adapters::{ArboardClipboard, EnvGeminiClient, HttpGeminiClient};
use app::AppContext;
use app::commands::{generate, suggest, wizard};
use ports::MockSuggestionClient;

pub use app::commands::generate::{GenerateOptions, GenerateOutcome};
pub use app::commands::suggest::SuggestFormat;
pub use domain::{
    AppError, DependencyList, DependencySuggestion, EnvConfig, GeminiApiConfig, OsTarget,
    ScriptFactory,
};

/// Render the setup script for `config` and apply the requested output
/// actions: print to stdout (the default), copy to the clipboard, and/or
/// write to a file.
pub fn generate(config: &EnvConfig, options: &GenerateOptions) -> Result<GenerateOutcome, AppError> {
    let outcome = if options.copy {
        let mut clipboard = ArboardClipboard::new()?;
        generate::execute(config, options, Some(&mut clipboard))?
    } else {
        generate::execute::<ArboardClipboard>(config, options, None)?
    };

    if options.print_to_stdout() {
        println!("{}", outcome.script);
    }
    if outcome.copied {
        println!("✅ Copied {} script to clipboard", config.script_filename());
    }
    if let Some(path) = &outcome.written_to {
        println!("✅ Wrote {}", path.display());
    }

    Ok(outcome)
}

/// Fetch dependency suggestions for a project description and print them.
///
/// A blank description resolves to no suggestions without touching the
/// network or requiring credentials. Service failures degrade to an empty
/// result; only operational errors (a missing API key for a live call)
/// surface to the caller.
pub fn suggest(
    description: &str,
    format: SuggestFormat,
    mock: bool,
) -> Result<Vec<DependencySuggestion>, AppError> {
    if description.trim().is_empty() {
        println!("{}", suggest::render(&[], format));
        return Ok(Vec::new());
    }

    let suggestions = if mock {
        suggest::execute(&MockSuggestionClient, description)
    } else {
        let client = HttpGeminiClient::from_env_with_config(&api_config_from_env()?)?;
        suggest::execute(&client, description)
    };

    println!("{}", suggest::render(&suggestions, format));
    Ok(suggestions)
}

/// Run the interactive configuration wizard.
pub fn wizard(mock: bool) -> Result<(), AppError> {
    wizard::ensure_interactive()?;
    let clipboard = ArboardClipboard::new()?;

    if mock {
        let mut ctx = AppContext::new(MockSuggestionClient, clipboard);
        wizard::execute(&mut ctx)
    } else {
        let mut ctx = AppContext::new(EnvGeminiClient::new(api_config_from_env()?), clipboard);
        wizard::execute(&mut ctx)
    }
}

/// Endpoint configuration with environment overrides applied.
///
/// `GEMINI_API_URL` and `GEMINI_MODEL` override the defaults; the API key
/// itself is read by the client at request time.
fn api_config_from_env() -> Result<GeminiApiConfig, AppError> {
    let mut config = GeminiApiConfig::default();

    if let Ok(raw) = std::env::var("GEMINI_API_URL") {
        config.api_url = Url::parse(&raw).map_err(|e| AppError::ParseError {
            what: "GEMINI_API_URL".to_string(),
            details: e.to_string(),
        })?;
    }
    if let Ok(model) = std::env::var("GEMINI_MODEL") {
        config.model = model;
    }

    Ok(config)
}
