pub mod api_config;
pub mod dependencies;
pub mod env_config;
pub mod error;
pub mod script;
pub mod suggestion;

pub use api_config::GeminiApiConfig;
pub use dependencies::DependencyList;
pub use env_config::{EnvConfig, OsTarget, PYTHON_COMMANDS};
pub use error::AppError;
pub use script::ScriptFactory;
pub use suggestion::DependencySuggestion;
