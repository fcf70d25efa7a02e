//! Suggestion service port definition.

use crate::domain::{AppError, DependencySuggestion};

/// Port for fetching dependency suggestions from a generative-text service.
///
/// Implementations are stateless between calls: one request per invocation,
/// no caching, no retry. An empty or whitespace-only description must resolve
/// to an empty list without issuing any external call.
pub trait SuggestionClient {
    /// Suggest packages for a free-text project description.
    ///
    /// Errors are typed here so callers can log them, but the suggestion
    /// feature is best-effort: the app layer collapses failures to an empty
    /// list rather than surfacing them.
    fn suggest(&self, description: &str) -> Result<Vec<DependencySuggestion>, AppError>;
}

/// Mock client for running without API access.
#[derive(Debug, Clone, Default)]
pub struct MockSuggestionClient;

impl SuggestionClient for MockSuggestionClient {
    fn suggest(&self, description: &str) -> Result<Vec<DependencySuggestion>, AppError> {
        if description.trim().is_empty() {
            return Ok(Vec::new());
        }

        println!("=== MOCK MODE ===");
        println!("Would query the suggestion service with:");
        println!("  Description length: {} chars", description.len());

        Ok(vec![
            DependencySuggestion {
                package: "requests".to_string(),
                reason: "De-facto standard HTTP client".to_string(),
            },
            DependencySuggestion {
                package: "pytest".to_string(),
                reason: "Testing framework".to_string(),
            },
        ])
    }
}
