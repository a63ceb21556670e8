use std::rc::Rc;

use crate::{
    ast::FunctionDef,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::words,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in assignments,
/// printed output, function returns, and conditions.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by the comparator phrases and by the literals `true` and
    /// `false`.
    Bool(bool),
    /// A string of text.
    Str(String),
    /// A user-defined function, bound under its name like any variable.
    Function(Rc<FunctionDef>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<FunctionDef> for Value {
    fn from(v: FunctionDef) -> Self {
        Self::Function(Rc::new(v))
    }
}

impl Value {
    /// Reads a literal out of raw token text.
    ///
    /// Tried in order: an English number word (`five`, `twenty-one`), a
    /// standard numeric form (`5`, `3.5`, `-2e3`), the boolean literals, and
    /// finally the text itself as a string. Coercion is applied to quoted
    /// literals, to prompt replies, and to bare words that are not bound to
    /// anything at evaluation time.
    ///
    /// # Example
    /// ```
    /// use parlance::interpreter::value::Value;
    ///
    /// assert_eq!(Value::coerce("forty-two"), Value::Number(42.0));
    /// assert_eq!(Value::coerce("3.5"), Value::Number(3.5));
    /// assert_eq!(Value::coerce("false"), Value::Bool(false));
    /// assert_eq!(Value::coerce("old friend"), Value::Str("old friend".to_string()));
    /// ```
    #[must_use]
    pub fn coerce(text: &str) -> Self {
        if let Some(number) = words::number(text) {
            return Self::Number(number);
        }
        if let Ok(number) = text.parse::<f64>() {
            return Self::Number(number);
        }
        match text {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => Self::Str(text.to_string()),
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is a number.
    /// - `Err(RuntimeError::ExpectedNumber)`: Otherwise.
    pub fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(number) => Ok(*number),
            Self::Bool(_) | Self::Str(_) | Self::Function(_) => {
                Err(RuntimeError::ExpectedNumber { line })
            },
        }
    }

    /// Whether the value counts as true in a condition.
    ///
    /// Zero, NaN, the empty string and `false` are falsy; every other value
    /// including any function is truthy.
    ///
    /// # Example
    /// ```
    /// use parlance::interpreter::value::Value;
    ///
    /// assert!(Value::Number(-1.0).is_truthy());
    /// assert!(!Value::Number(0.0).is_truthy());
    /// assert!(!Value::Str(String::new()).is_truthy());
    /// assert!(Value::Str("no".to_string()).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(number) => *number != 0.0 && !number.is_nan(),
            Self::Bool(boolean) => *boolean,
            Self::Str(text) => !text.is_empty(),
            Self::Function(_) => true,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Bool(boolean) => write!(f, "{boolean}"),
            Self::Str(text) => write!(f, "{text}"),
            Self::Function(function) => write!(f, "<function {}>", function.name),
        }
    }
}
