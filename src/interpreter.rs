/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the parsed program, evaluates values, runs statements,
/// and performs function calls in copied scopes. It is the core execution
/// engine of the interpreter.
///
/// # Responsibilities
/// - Runs statements, including blocks, conditionals and loops.
/// - Resolves variables and calls user-defined functions.
/// - Reports runtime errors such as a missing call parameter.
pub mod evaluator;
/// The input module connects `ask me` to the outside world.
///
/// Prompting for input is the one place the language blocks on its
/// surroundings. The module defines the line-input trait the evaluator talks
/// to, the interactive stdin implementation, and a scripted implementation
/// for tests.
///
/// # Responsibilities
/// - Shows a prompt and reads exactly one line per question.
/// - Strips line terminators before the reply reaches the evaluator.
pub mod input;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces the two token kinds of
/// the language: bare words, which are case-folded and lose their sentence
/// punctuation, and quoted spans, which are preserved exactly. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Splits the input on whitespace and tracks line numbers.
/// - Keeps quoted text intact while normalizing everything else.
/// - Never fails: any input tokenizes.
pub mod lexer;
/// The namespace module holds variable state.
///
/// A namespace maps names to runtime values and carries the answer slot that
/// `the answer is` fills. Function calls copy the whole namespace, which is
/// the language's entire scoping story: no closures, no scope chain.
///
/// # Responsibilities
/// - Stores and resolves bindings.
/// - Builds the copied scope a call runs in.
/// - Tracks whether the running function has produced its answer.
pub mod namespace;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser walks the token sequence with a cursor and matches multi-word
/// keyword phrases. Statements, values and function declarations become
/// structured AST nodes; function declarations are hoisted to the front of
/// the program.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements, values).
/// - Validates phrase grammar, reporting errors with the offending token and
///   its location.
/// - Keeps failed matches free of side effects so phrases can be tried in
///   order.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types used during execution: numbers,
/// booleans, strings, and functions. It also owns literal coercion, which
/// turns raw token text into the most specific value it can read.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements coercion, display, truthiness, and numeric conversion.
pub mod value;
