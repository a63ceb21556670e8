use std::{
    collections::VecDeque,
    io::{self, Write},
};

/// A service that can ask the user one question at a time.
///
/// `ask me` blocks until a whole line is available and receives it with the
/// line terminator already stripped. The trait is the seam that lets tests
/// script replies instead of reading a terminal.
pub trait LineInput {
    /// Shows the prompt and reads one line of input.
    ///
    /// # Errors
    /// Returns an [`io::Error`] when the underlying read or the prompt write
    /// fails.
    fn ask(&mut self, prompt: &str) -> io::Result<String>;
}

/// Interactive input from stdin.
///
/// The prompt is printed with a trailing space and flushed, so the user types
/// on the same line.
pub struct StdinInput;

impl LineInput for StdinInput {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt} ")?;
        stdout.flush()?;

        let mut reply = String::new();
        io::stdin().read_line(&mut reply)?;

        Ok(reply.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Scripted input that replays prepared lines.
///
/// Every `ask` pops the next line; once the lines run out it keeps answering
/// with empty lines, like a user holding down the enter key.
///
/// # Examples
/// ```
/// use parlance::interpreter::input::{LineInput, ScriptedInput};
///
/// let mut input = ScriptedInput::new(["5"]);
///
/// assert_eq!(input.ask("How many?").unwrap(), "5");
/// assert_eq!(input.ask("How many?").unwrap(), "");
/// ```
#[derive(Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    /// Queues up the lines to reply with, in order.
    pub fn new<I>(lines: I) -> Self
        where I: IntoIterator,
              I::Item: Into<String>
    {
        Self { lines: lines.into_iter().map(Into::into).collect() }
    }
}

impl LineInput for ScriptedInput {
    fn ask(&mut self, _prompt: &str) -> io::Result<String> {
        Ok(self.lines.pop_front().unwrap_or_default())
    }
}
