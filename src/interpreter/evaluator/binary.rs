use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context {
    /// Applies a two-operand operator to already-evaluated values.
    ///
    /// Arithmetic works on numbers; the one exception is `the sum of`, which
    /// concatenates display forms as soon as either operand is a string.
    /// Division is plain f64 division, so dividing by zero yields an
    /// infinity rather than an error.
    ///
    /// Equality is strict about kinds: values of different kinds are never
    /// equal, and `greater than`/`less than` are only ever true within a
    /// kind. NaN compares as neither less, greater, nor equal.
    ///
    /// # Example
    /// ```
    /// use parlance::{ast::BinaryOperator, interpreter::{evaluator::core::Context, value::Value}};
    ///
    /// let three = Value::Number(3.0);
    /// let nine = Value::Number(9.0);
    ///
    /// let signed = Context::apply_binary(BinaryOperator::Difference, &three, &nine, 1).unwrap();
    /// let absolute =
    ///     Context::apply_binary(BinaryOperator::AbsoluteDifference, &three, &nine, 1).unwrap();
    ///
    /// assert_eq!(signed, Value::Number(-6.0));
    /// assert_eq!(absolute, Value::Number(6.0));
    /// ```
    ///
    /// # Errors
    /// `RuntimeError::ExpectedNumber` when an arithmetic operand is not a
    /// number and the string-concatenation rule does not apply.
    pub fn apply_binary(op: BinaryOperator,
                        lhs: &Value,
                        rhs: &Value,
                        line: usize)
                        -> EvalResult<Value> {
        match op {
            BinaryOperator::Sum => Self::apply_sum(lhs, rhs, line),

            BinaryOperator::Difference => {
                Ok(Value::Number(lhs.as_number(line)? - rhs.as_number(line)?))
            },
            BinaryOperator::Product => {
                Ok(Value::Number(lhs.as_number(line)? * rhs.as_number(line)?))
            },
            BinaryOperator::Division => {
                Ok(Value::Number(lhs.as_number(line)? / rhs.as_number(line)?))
            },
            BinaryOperator::AbsoluteDifference => {
                Ok(Value::Number((lhs.as_number(line)? - rhs.as_number(line)?).abs()))
            },

            BinaryOperator::EqualTo => Ok(Value::Bool(lhs == rhs)),
            BinaryOperator::DifferentFrom => Ok(Value::Bool(lhs != rhs)),
            BinaryOperator::LessThan => {
                Ok(Value::Bool(matches!(Self::compare(lhs, rhs), Some(Ordering::Less))))
            },
            BinaryOperator::GreaterThan => {
                Ok(Value::Bool(matches!(Self::compare(lhs, rhs), Some(Ordering::Greater))))
            },
        }
    }

    /// Adds numbers, or concatenates once strings are involved.
    fn apply_sum(lhs: &Value, rhs: &Value, line: usize) -> EvalResult<Value> {
        if matches!(lhs, Value::Str(_)) || matches!(rhs, Value::Str(_)) {
            return Ok(Value::Str(format!("{lhs}{rhs}")));
        }
        Ok(Value::Number(lhs.as_number(line)? + rhs.as_number(line)?))
    }

    /// Orders two values of the same kind; values of different kinds (and
    /// NaN) have no order.
    fn compare(lhs: &Value, rhs: &Value) -> Option<Ordering> {
        match (lhs, rhs) {
            (Value::Number(lhs), Value::Number(rhs)) => lhs.partial_cmp(rhs),
            (Value::Str(lhs), Value::Str(rhs)) => Some(lhs.cmp(rhs)),
            (Value::Bool(lhs), Value::Bool(rhs)) => Some(lhs.cmp(rhs)),
            _ => None,
        }
    }
}
