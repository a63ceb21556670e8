#[derive(Debug)]
/// Represents all errors that can occur while parsing a token sequence.
///
/// Every variant carries the text of the offending token (or an end-of-input
/// marker) and the source line, so a failure can point at the exact word that
/// broke the phrase.
pub enum ParseError {
    /// Reached the end of input while a phrase still needed more words.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A required keyword such as `be` or `and` was not found.
    ExpectedKeyword {
        /// The keyword that was required.
        keyword: &'static str,
        /// The token encountered instead.
        found:   String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A position that requires a statement held something else.
    ExpectedStatement {
        /// The token encountered instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The word `is` was not followed by a comparator phrase.
    ExpectedComparator {
        /// The token encountered instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A block was not closed with `and lastly` or `finally`.
    MissingBlockTerminator {
        /// The first token that failed to match the terminator.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A prompt was not given a target variable with `and call it`.
    MissingPromptTarget {
        /// The token encountered instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedKeyword { keyword, found, line } => {
                write!(f, "Error on line {line}: Expected '{keyword}' but got '{found}' instead.")
            },

            Self::ExpectedStatement { found, line } => {
                write!(f, "Error on line {line}: Expected a statement but got '{found}' instead.")
            },

            Self::ExpectedComparator { found, line } => write!(f,
                                                               "Error on line {line}: Expected a comparator after 'is' (equal to, greater than, less than, different from) but got '{found}' instead."),

            Self::MissingBlockTerminator { found, line } => write!(f,
                                                                   "Error on line {line}: A statement block must end with 'and lastly' or 'finally', but got '{found}' instead."),

            Self::MissingPromptTarget { found, line } => write!(f,
                                                                "Error on line {line}: No target variable provided for prompt input; expected 'and call it' but got '{found}' instead."),
        }
    }
}

impl std::error::Error for ParseError {}
