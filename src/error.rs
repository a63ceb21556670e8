/// Parsing errors.
///
/// Defines all error types that can occur while turning a token sequence into
/// a program. Parse errors are structured values carrying the offending token
/// and its source line; the parser never panics on malformed input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unknown
/// functions, missing call parameters, missing return values, bad random
/// bounds, and failed input/output.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Either kind of failure the pipeline can produce.
///
/// The two kinds are kept apart so that callers can route them differently:
/// the command line prints parse errors to stdout and runtime errors to
/// stderr.
pub enum Error {
    /// The token sequence did not form a valid program.
    Parse(ParseError),
    /// The program failed while running.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(error) => write!(f, "{error}"),
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
