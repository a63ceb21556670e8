#[derive(Debug)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Called a name that is not bound to a function.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function was called without one of its declared parameters.
    MissingParameter {
        /// The name of the function being called.
        function:  String,
        /// The declared parameter that was not supplied.
        parameter: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A call with `and call it` finished without the function producing an
    /// answer.
    MissingReturnValue {
        /// The name of the function that was called.
        function: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A numeric value was expected, but not found.
    ExpectedNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The bounds of a random number were given in the wrong order.
    InvalidRandomBounds {
        /// The requested lower bound.
        lower: f64,
        /// The requested upper bound.
        upper: f64,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Writing output or reading input failed.
    Io {
        /// The underlying I/O error.
        source: std::io::Error,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Unknown function '{name}'.")
            },

            Self::MissingParameter { function, parameter, line } => write!(f,
                                                                           "Error on line {line}: Function call '{function}' missing required parameter '{parameter}'."),

            Self::MissingReturnValue { function, line } => write!(f,
                                                                  "Error on line {line}: Function '{function}' finished without an answer to call it by."),

            Self::ExpectedNumber { line } => write!(f, "Error on line {line}: Expected number."),

            Self::InvalidRandomBounds { lower, upper, line } => write!(f,
                                                                       "Error on line {line}: Random number upper bound {upper} is smaller than the lower bound {lower}."),

            Self::Io { source, line } => {
                write!(f, "Error on line {line}: Input/output failed: {source}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
