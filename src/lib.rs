//! # parlance
//!
//! parlance is an interpreter for a small programming language that reads
//! like plain English sentences. A program is ordinary prose:
//!
//! ```text
//! Let price be 3.
//! As long as price is less than 20, increment price.
//! Tell me price.
//! ```
//!
//! Keywords are multi-word phrases, punctuation outside quotes is decorative,
//! and any word that is not part of a keyword is a variable or a literal.
//! Source runs through three stages: the lexer folds words and preserves
//! quoted spans, the parser matches keyword phrases into an AST, and the
//! evaluator walks that tree against a namespace of values.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{evaluator::core::Context, lexer::tokenize, namespace::Namespace,
                  parser::core::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the node types that represent the syntactic structure
/// of source code as a tree. The AST is built by the parser and traversed by
/// the evaluator.
///
/// # Responsibilities
/// - Defines statement and value types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Keeps literal text verbatim until evaluation decides what it means.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or running
/// a program. It standardizes error reporting and carries the offending token
/// and source line, and it separates the two failure kinds so callers can
/// route them to different streams.
///
/// # Responsibilities
/// - Defines error enums for parse-time and run-time failures.
/// - Attaches line numbers and offending tokens for user feedback.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representation, namespaces, and input handling to provide a complete
/// runtime for the language.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Provides the building blocks behind [`run_source`].
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The word-by-word conversational surface.
///
/// This module provides the chained builder that accumulates single words and
/// runs them as a program when a terminator word like `please` arrives.
///
/// # Responsibilities
/// - Buffers words across chained calls.
/// - Runs or discards the buffer on the terminator words.
/// - Reports pipeline errors without breaking the chain.
pub mod session;
/// General utilities shared across the interpreter.
///
/// Currently this is the recognition of spelled-out English numbers, used by
/// literal coercion.
///
/// # Responsibilities
/// - Converts number words such as `twenty-one` to numeric values.
pub mod util;

/// Runs a source string from start to finish.
///
/// The text is tokenized and parsed as a whole program, then executed in a
/// fresh namespace against the given context. The context supplies output,
/// input and randomness, and is reusable across runs; variables are not
/// carried over.
///
/// # Errors
/// Returns an [`Error`] when the program does not parse or a statement fails
/// at runtime. Nothing is executed unless the whole program parses.
///
/// # Examples
/// ```
/// use parlance::{interpreter::evaluator::core::Context, run_source};
///
/// let mut context = Context::new();
///
/// // A complete phrase runs without error.
/// let result = run_source("let x be 5", &mut context);
/// assert!(result.is_ok());
///
/// // A block missing its 'and lastly' terminator is a parse error.
/// let result = run_source("first let x be 1 then let y be 2", &mut context);
/// assert!(result.is_err());
/// ```
pub fn run_source(source: &str, context: &mut Context) -> Result<(), Error> {
    let tokens = tokenize(source);
    let program = parse_program(tokens)?;

    let mut namespace = Namespace::new();
    context.execute(&program, &mut namespace)?;

    Ok(())
}
