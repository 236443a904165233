use super::InputProvider;
use std::io::{BufRead, Write};

/// Words that end an interactive session.
const QUIT_WORDS: [&str; 2] = ["quit", "exit"];

/// Interactive prompt, one address per line.
///
/// Only the line terminator is stripped, so stray whitespace reaches the
/// validator and is rejected there.
pub struct PromptInput<R, W> {
    reader: R,
    writer: W,
    prompt: String,
}

impl<R: BufRead, W: Write> PromptInput<R, W> {
    pub fn new(reader: R, writer: W, prompt: &str) -> Self {
        PromptInput {
            reader,
            writer,
            prompt: prompt.to_string(),
        }
    }
}

impl<R: BufRead, W: Write> InputProvider for PromptInput<R, W> {
    fn next_input(&mut self) -> Option<String> {
        if let Err(e) = write!(self.writer, "{}", self.prompt).and_then(|_| self.writer.flush()) {
            log::warn!("Failed to write prompt: {e}");
        }

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                log::debug!("End of input");
                None
            }
            Ok(_) => {
                let line = line.strip_suffix('\n').unwrap_or(&line);
                let line = line.strip_suffix('\r').unwrap_or(line);
                if QUIT_WORDS.contains(&line) {
                    return None;
                }
                Some(line.to_string())
            }
            Err(e) => {
                log::warn!("Failed to read input: {e}");
                None
            }
        }
    }
}
