//! Dependency suggestion command.

use crate::domain::DependencySuggestion;
use crate::ports::SuggestionClient;

/// Output format for suggestion results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestFormat {
    #[default]
    Text,
    Json,
}

impl SuggestFormat {
    /// Parse a format from a user-supplied name.
    pub fn from_name(name: &str) -> Option<SuggestFormat> {
        match name.to_lowercase().as_str() {
            "text" => Some(SuggestFormat::Text),
            "json" => Some(SuggestFormat::Json),
            _ => None,
        }
    }
}

/// Fetch suggestions for a project description.
///
/// Best-effort by design: a blank description short-circuits without calling
/// the service, and any service failure collapses to an empty list with a
/// warning on stderr. The primary script-generation workflow must never be
/// blocked by this feature.
pub fn execute<S: SuggestionClient>(client: &S, description: &str) -> Vec<DependencySuggestion> {
    if description.trim().is_empty() {
        return Vec::new();
    }

    match client.suggest(description) {
        Ok(suggestions) => suggestions,
        Err(e) => {
            eprintln!("Warning: failed to fetch suggestions: {}", e);
            Vec::new()
        }
    }
}

/// Render suggestions for terminal or machine consumption.
pub fn render(suggestions: &[DependencySuggestion], format: SuggestFormat) -> String {
    match format {
        SuggestFormat::Text => {
            if suggestions.is_empty() {
                return "No suggestions available.".to_string();
            }
            suggestions
                .iter()
                .map(|s| format!("{}  —  {}", s.package, s.reason))
                .collect::<Vec<_>>()
                .join("\n")
        }
        SuggestFormat::Json => {
            serde_json::to_string_pretty(suggestions).unwrap_or_else(|_| "[]".to_string())
        }
    }
}
