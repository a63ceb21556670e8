/// Binary operator evaluation logic.
///
/// Handles the execution of the two-operand phrases: arithmetic, string
/// concatenation through `the sum of`, and the comparators.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context with its output,
/// input and randomness collaborators, and error propagation.
pub mod core;

/// Function evaluation.
///
/// Handles user-defined function calls: argument checking, the copied call
/// scope, and reading the answer back out.
pub mod function;
