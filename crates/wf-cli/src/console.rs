//! A line-based host over any reader and writer.

use std::io::{BufRead, Write};

use tracing::warn;
use wf_fiction::{FramePresenter, KeyWaiter, LineReader};

/// Reads commands from `R` and prints frames to `W`.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, text: &str) {
        if let Err(e) = write!(self.output, "{text}").and_then(|_| self.output.flush()) {
            warn!(error = %e, "failed to write prompt");
        }
    }

    fn next_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                warn!(error = %e, "failed to read input");
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> LineReader for Console<R, W> {
    fn read_line(&mut self) -> Option<String> {
        self.prompt("> ");
        self.next_line()
    }
}

impl<R: BufRead, W: Write> KeyWaiter for Console<R, W> {
    fn wait_for_key(&mut self) {
        self.prompt("(press enter) ");
        // End of input counts as a key press.
        let _ = self.next_line();
    }
}

impl<R: BufRead, W: Write> FramePresenter<String> for Console<R, W> {
    fn present(&mut self, frame: String) {
        if let Err(e) = writeln!(self.output, "{frame}") {
            warn!(error = %e, "failed to write frame");
        }
    }
}
