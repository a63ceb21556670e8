use std::io::{self, Write};

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    ast::{Expr, Node, Statement},
    error::RuntimeError,
    interpreter::{
        input::{LineInput, StdinInput},
        namespace::Namespace,
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The context holds the collaborators the language reaches outside itself
/// for: the output sink for `tell me`, the line-input service for `ask me`,
/// and the random number generator. Variable state lives in a [`Namespace`]
/// passed to the evaluation methods, not here, so one context can run many
/// programs.
///
/// ## Usage
///
/// `Context::new()` wires up stdout and stdin for normal use;
/// [`Context::with_io`] swaps both ends for captured output and scripted
/// replies in tests.
pub struct Context {
    pub(crate) out:   Box<dyn Write>,
    pub(crate) input: Box<dyn LineInput>,
    pub(crate) rng:   StdRng,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a context connected to stdout and stdin, with the random
    /// number generator seeded from entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_io(Box::new(io::stdout()), Box::new(StdinInput))
    }

    /// Creates a context with the given output sink and line input.
    #[must_use]
    pub fn with_io(out: Box<dyn Write>, input: Box<dyn LineInput>) -> Self {
        Self { out,
               input,
               rng: StdRng::from_entropy() }
    }

    /// Executes a parsed program inside a namespace.
    ///
    /// Nodes run in list order: function declarations are registered as
    /// bindings, statements run, and bare values are evaluated and their
    /// results discarded. The parser hoists declarations to the front of the
    /// list, so by the time any statement runs every function in the source
    /// is already bound.
    ///
    /// # Errors
    /// Stops at the first statement or value that fails.
    pub fn execute(&mut self, program: &[Node], namespace: &mut Namespace) -> EvalResult<()> {
        for node in program {
            match node {
                Node::Function(function) => {
                    namespace.bind(&function.name, Value::from(function.clone()));
                },
                Node::Statement(statement) => self.run(statement, namespace)?,
                Node::Value(value) => {
                    self.evaluate(value, namespace)?;
                },
            }
        }
        Ok(())
    }

    /// Runs a single statement.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] when evaluation of an involved value fails,
    /// a call is malformed, or output cannot be written.
    pub fn run(&mut self, statement: &Statement, namespace: &mut Namespace) -> EvalResult<()> {
        match statement {
            Statement::Assignment { target, value, .. } => {
                let value = self.evaluate(value, namespace)?;
                namespace.bind(target, value);
            },

            Statement::Block { statements, .. } => {
                for statement in statements {
                    self.run(statement, namespace)?;
                    if namespace.has_answer() {
                        break;
                    }
                }
            },

            Statement::If { condition, body, .. } => {
                if self.evaluate(condition, namespace)?.is_truthy() {
                    self.run(body, namespace)?;
                }
            },

            Statement::IfElse { condition, body, otherwise, .. } => {
                if self.evaluate(condition, namespace)?.is_truthy() {
                    self.run(body, namespace)?;
                } else {
                    self.run(otherwise, namespace)?;
                }
            },

            Statement::While { condition, body, .. } => {
                while self.evaluate(condition, namespace)?.is_truthy() {
                    self.run(body, namespace)?;
                }
            },

            Statement::Print { value, line } => {
                let value = self.evaluate(value, namespace)?;
                writeln!(self.out, "{value}").map_err(|source| RuntimeError::Io { source,
                                                                                  line: *line })?;
            },

            Statement::Prompt { prompt, target, line } => {
                let reply = self.input
                                .ask(prompt)
                                .map_err(|source| RuntimeError::Io { source, line: *line })?;
                namespace.bind(target, Value::coerce(&reply));
            },

            Statement::Call { name, arguments, line } => {
                self.run_call(name, arguments, *line, namespace)?;
            },

            Statement::CallAssign { name, arguments, target, line } => {
                let mut scope = self.run_call(name, arguments, *line, namespace)?;
                match scope.take_answer() {
                    Some(answer) => namespace.bind(target, answer),
                    None => {
                        return Err(RuntimeError::MissingReturnValue { function: name.clone(),
                                                                      line:     *line, });
                    },
                }
            },

            Statement::Return { value, .. } => {
                let value = self.evaluate(value, namespace)?;
                namespace.set_answer(value);
            },
        }
        Ok(())
    }

    /// Evaluates a value node and returns the resulting [`Value`].
    ///
    /// Literals are coerced from their text. A variable reference resolves
    /// its binding, or falls back to coercing the name itself when nothing is
    /// bound; reading a never-assigned word therefore yields its literal
    /// reading instead of failing.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] for non-numeric arithmetic operands or bad
    /// random bounds.
    pub fn evaluate(&mut self, value: &Expr, namespace: &Namespace) -> EvalResult<Value> {
        match value {
            Expr::Literal { text, .. } => Ok(Value::coerce(text)),

            Expr::Variable { name, .. } => Ok(namespace.get(name)
                                                       .cloned()
                                                       .unwrap_or_else(|| Value::coerce(name))),

            Expr::Binary { op, lhs, rhs, line } => {
                let lhs = self.evaluate(lhs, namespace)?;
                let rhs = self.evaluate(rhs, namespace)?;
                Self::apply_binary(*op, &lhs, &rhs, *line)
            },

            Expr::Random { lower, upper, line } => {
                let lower = self.evaluate(lower, namespace)?.as_number(*line)?;
                let upper = self.evaluate(upper, namespace)?.as_number(*line)?;
                self.random_between(lower, upper, *line)
            },
        }
    }

    /// Draws a whole number uniformly from `lower..=upper`.
    fn random_between(&mut self, lower: f64, upper: f64, line: usize) -> EvalResult<Value> {
        if upper < lower {
            return Err(RuntimeError::InvalidRandomBounds { lower, upper, line });
        }

        let roll = self.rng.gen_range(0.0..1.0);
        Ok(Value::Number((roll * (upper - lower + 1.0)).floor() + lower))
    }
}
