/// Parser entry point and program assembly.
///
/// Contains the `ParseResult` alias and the program parser, which tries
/// function declarations, statements and values in order and hoists
/// declarations to the front.
pub mod core;

/// The read position over the token buffer.
///
/// Implements peeking, consuming, and all-or-nothing matching of multi-word
/// keyword phrases, including negative lookahead.
pub mod cursor;

/// Statement parsing.
///
/// Recognizes every statement phrase of the language, from `let ... be` to
/// `let's ... and call it`, plus function declarations.
pub mod statement;

/// Value parsing.
///
/// Recognizes literals, variable references, the two-operand arithmetic
/// phrases, random numbers, and the postfix comparator and division
/// constructs.
pub mod value;
