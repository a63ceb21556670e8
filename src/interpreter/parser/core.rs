use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            cursor::Cursor,
            statement::{parse_function, parse_statement},
            value::parse_value,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole token buffer into a program.
///
/// This is the entry point for parsing. Each step tries, in order: a function
/// declaration, a statement, and finally a bare value. The value parser
/// always consumes at least one token, so every iteration makes progress and
/// parsing always terminates.
///
/// Function declarations are hoisted: they are moved to the front of the
/// returned program in declaration order, so a call may appear in the source
/// before the function it names.
///
/// # Errors
/// Returns the first [`ParseError`] raised by any sub-parser.
///
/// # Examples
/// ```
/// use parlance::{ast::Node, interpreter::{lexer::tokenize, parser::core::parse_program}};
///
/// let program = parse_program(tokenize("tell me x. I'll explain how to greet. tell me \"hi\"")).unwrap();
///
/// assert_eq!(program.len(), 2);
/// assert!(matches!(program[0], Node::Function(_)));
/// ```
pub fn parse_program(tokens: Vec<(Token, usize)>) -> ParseResult<Vec<Node>> {
    let mut cursor = Cursor::new(tokens);
    let mut program = Vec::new();
    let mut body = Vec::new();

    while !cursor.is_empty() {
        if let Some(function) = parse_function(&mut cursor)? {
            program.push(Node::Function(function));
        } else if let Some(statement) = parse_statement(&mut cursor)? {
            body.push(Node::Statement(statement));
        } else {
            body.push(Node::Value(parse_value(&mut cursor)?));
        }
    }

    program.append(&mut body);
    Ok(program)
}
