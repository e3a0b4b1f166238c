//! Line-oriented user interaction
//!
//! Everything the application says or hears goes through a [`Console`]. The
//! terminal implementation mirrors each line into the session [`Transcript`].

use std::io::{BufRead, Write};

use crate::error::{FlashcardError, FlashcardResult};
use crate::transcript::Transcript;

/// A source of user input lines and a sink for output lines
pub trait Console {
    /// Show one line to the user
    fn say(&mut self, line: &str) -> FlashcardResult<()>;

    /// Wait for the next line of input, without its line terminator
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD. Returns
    /// `FlashcardError::InputClosed` once input is exhausted.
    fn listen(&mut self) -> FlashcardResult<String>;

    /// Show a prompt and wait for the reply
    fn ask(&mut self, prompt: &str) -> FlashcardResult<String> {
        self.say(prompt)?;
        self.listen()
    }
}

/// Console over a reader/writer pair that records a transcript
pub struct RecordingConsole<R, W> {
    input: R,
    output: W,
    transcript: Transcript,
}

impl<R: BufRead, W: Write> RecordingConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            transcript: Transcript::new(),
        }
    }

    /// Everything said and heard so far
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}

impl<R: BufRead, W: Write> Console for RecordingConsole<R, W> {
    fn say(&mut self, line: &str) -> FlashcardResult<()> {
        self.transcript.record_output(line);
        writeln!(self.output, "{}", line)?;
        self.output.flush()?;
        Ok(())
    }

    fn listen(&mut self) -> FlashcardResult<String> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(FlashcardError::InputClosed);
        }

        let line = String::from_utf8_lossy(&raw)
            .trim_end_matches(['\n', '\r'])
            .to_string();
        self.transcript.record_input(line.as_str());
        Ok(line)
    }
}
