//! Sources of candidate addresses.
//!
//! The classifier never reads input itself. A presentation layer hands it
//! one string per submission through an [`InputProvider`]:
//! - [`ArgsInput`] - a fixed list, e.g. command-line arguments
//! - [`PromptInput`] - an interactive prompt over any reader/writer pair

mod args;
mod prompt;

pub use args::ArgsInput;
pub use prompt::PromptInput;

/// Yields one candidate address per submission, `None` when done.
pub trait InputProvider {
    fn next_input(&mut self) -> Option<String>;
}
