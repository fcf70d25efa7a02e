pub mod clipboard_writer;
pub mod suggestion_client;

pub use clipboard_writer::ClipboardWriter;
pub use suggestion_client::{MockSuggestionClient, SuggestionClient};
