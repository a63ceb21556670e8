use std::io::Write;

use crate::{error::Error, interpreter::evaluator::core::Context, run_source};

/// The word at a time surface of the language.
///
/// A session collects words one `say` at a time until a terminator arrives.
/// `please`, `ok` and `ok?` run the collected words through the full
/// pipeline; `?` is reserved for querying a value but is not implemented.
/// Either way the buffer is emptied, so a broken phrase never poisons the
/// next one.
///
/// Each run starts from a fresh namespace: variables do not survive from one
/// phrase to the next. The context does survive, so all output of a session
/// lands in one place.
///
/// Errors are reported rather than returned, because the chained calls have
/// nowhere to put a `Result`: parse errors go to the session's output sink,
/// runtime errors to stderr, the same split the command line makes.
///
/// # Examples
/// ```
/// use parlance::session::Session;
///
/// let mut session = Session::new();
/// session.say("let").say("x").say("be").say("5");
///
/// assert_eq!(session.buffered().len(), 4);
///
/// session.say("please");
///
/// assert!(session.buffered().is_empty());
/// ```
pub struct Session {
    words:   Vec<String>,
    context: Context,
}

#[allow(clippy::new_without_default)]
impl Session {
    /// Creates a session that prints to stdout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_context(Context::new())
    }

    /// Creates a session around an existing context, keeping whatever output
    /// sink and input it carries.
    #[must_use]
    pub fn with_context(context: Context) -> Self {
        Self { words: Vec::new(),
               context }
    }

    /// Says one word.
    ///
    /// Ordinary words are buffered. The terminators `please`, `ok` and `ok?`
    /// run the buffer; `?` reports itself unimplemented. Terminators are
    /// matched before tokenization, so they must arrive as their own word.
    pub fn say(&mut self, word: &str) -> &mut Self {
        match word {
            "please" | "ok" | "ok?" => self.run_buffer(),
            "?" => self.reject_query(),
            _ => self.words.push(word.to_string()),
        }
        self
    }

    /// The words said since the last terminator.
    #[must_use]
    pub fn buffered(&self) -> &[String] {
        &self.words
    }

    /// Runs the buffered words as a program in a fresh namespace.
    fn run_buffer(&mut self) {
        let source = std::mem::take(&mut self.words).join(" ");

        match run_source(&source, &mut self.context) {
            Ok(()) => {},
            Err(Error::Parse(error)) => {
                let _ = writeln!(self.context.out, "{error}");
            },
            Err(Error::Runtime(error)) => eprintln!("{error}"),
        }
    }

    /// Reports the unimplemented `?` terminator and drops the buffer.
    fn reject_query(&mut self) {
        self.words.clear();
        let _ = writeln!(self.context.out,
                         "The '?' terminator is not implemented yet; the phrase was discarded.");
    }
}
