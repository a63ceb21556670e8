use crate::{
    ast::{BinaryOperator, Expr, FunctionDef, Statement},
    error::ParseError,
    interpreter::parser::{
        core::ParseResult,
        cursor::Cursor,
        value::parse_value,
    },
};

/// Parses a single statement.
/// A statement may be one of:
/// - an assignment (`let <name> be <value>`).
/// - a block (`first ... then ... and lastly ...`, or opened with `you
///   should`).
/// - a conditional (`if`, with an optional `otherwise` arm).
/// - a loop (`as long as`).
/// - a print (`tell me`, `show me`).
/// - a prompt (`ask me <prompt> and call it <name>`).
/// - a function call (`let's`, with optional bindings and `and call it`).
/// - a return (`the answer is <value>`).
/// - increment/decrement sugar.
///
/// Parsing is attempted in that order; the first phrase whose keywords match
/// decides the statement. If no phrase matches, `Ok(None)` is returned
/// without consuming anything so the caller can fall back to value parsing.
///
/// # Errors
/// Returns a [`ParseError`] when a phrase matches but the rest of the
/// statement is malformed.
pub fn parse_statement(cursor: &mut Cursor) -> ParseResult<Option<Statement>> {
    let line = cursor.line();

    if cursor.match_phrase("let") {
        let target = cursor.shift()?;
        if !cursor.match_phrase("be") {
            return Err(ParseError::ExpectedKeyword { keyword: "be",
                                                     found:   cursor.current_text(),
                                                     line:    cursor.line(), });
        }
        let value = parse_value(cursor)?;
        return Ok(Some(Statement::Assignment { target, value, line }));
    }

    if cursor.match_phrase("first") || cursor.match_phrase("you should") {
        return parse_block(cursor, line).map(Some);
    }

    if cursor.match_phrase("if") {
        return parse_if(cursor, line).map(Some);
    }

    if cursor.match_phrase("as long as") {
        return parse_while(cursor, line).map(Some);
    }

    if cursor.match_phrase("tell me") || cursor.match_phrase("show me") {
        let value = parse_value(cursor)?;
        return Ok(Some(Statement::Print { value, line }));
    }

    if cursor.match_phrase("ask me") {
        return parse_prompt(cursor, line).map(Some);
    }

    if cursor.match_phrase("let's") {
        return parse_call(cursor, line).map(Some);
    }

    if cursor.match_phrase("the answer is") {
        let value = parse_value(cursor)?;
        return Ok(Some(Statement::Return { value, line }));
    }

    if cursor.match_phrase("increment") {
        return parse_step(cursor, BinaryOperator::Sum, line).map(Some);
    }

    if cursor.match_phrase("decrement") {
        return parse_step(cursor, BinaryOperator::Difference, line).map(Some);
    }

    Ok(None)
}

/// Parses a statement in a position where one is required.
///
/// Block items, conditional and loop bodies, `otherwise` arms and function
/// bodies may not fall back to value parsing; anything that is not a
/// statement there is an error naming the offending token.
fn require_statement(cursor: &mut Cursor) -> ParseResult<Statement> {
    match parse_statement(cursor)? {
        Some(statement) => Ok(statement),
        None => Err(ParseError::ExpectedStatement { found: cursor.current_text(),
                                                    line:  cursor.line(), }),
    }
}

/// Parses a statement block after its opening keyword.
///
/// Syntax:
/// ```text
///     first <statement> (then <statement>)* and lastly <statement>
/// ```
/// `finally` is accepted in place of `and lastly`. A block that never reaches
/// its terminator is a parse error pointing at the first token that matched
/// neither `then` nor a terminator.
fn parse_block(cursor: &mut Cursor, line: usize) -> ParseResult<Statement> {
    let mut statements = vec![require_statement(cursor)?];

    while cursor.match_phrase("then") {
        statements.push(require_statement(cursor)?);
    }

    if !cursor.match_phrase("and lastly") && !cursor.match_phrase("finally") {
        return Err(ParseError::MissingBlockTerminator { found: cursor.current_text(),
                                                        line:  cursor.line(), });
    }
    statements.push(require_statement(cursor)?);

    Ok(Statement::Block { statements, line })
}

/// Parses a conditional after the `if` keyword.
///
/// Syntax:
/// ```text
///     if <value> [then] [you] <statement> [otherwise <statement>]
/// ```
/// `then` and `you` are optional filler words.
fn parse_if(cursor: &mut Cursor, line: usize) -> ParseResult<Statement> {
    let condition = parse_value(cursor)?;
    cursor.match_phrase("then");
    cursor.match_phrase("you");

    let body = Box::new(require_statement(cursor)?);

    if cursor.match_phrase("otherwise") {
        let otherwise = Box::new(require_statement(cursor)?);
        return Ok(Statement::IfElse { condition, body, otherwise, line });
    }

    Ok(Statement::If { condition, body, line })
}

/// Parses a loop after the `as long as` keywords.
///
/// Syntax:
/// ```text
///     as long as <value> [then] [you] <statement>
/// ```
fn parse_while(cursor: &mut Cursor, line: usize) -> ParseResult<Statement> {
    let condition = parse_value(cursor)?;
    cursor.match_phrase("then");
    cursor.match_phrase("you");

    let body = Box::new(require_statement(cursor)?);

    Ok(Statement::While { condition, body, line })
}

/// Parses a prompt after the `ask me` keywords.
///
/// Syntax:
/// ```text
///     ask me <prompt> and call it <name>
/// ```
/// The prompt is a single token, usually quoted so it keeps its case and
/// punctuation.
fn parse_prompt(cursor: &mut Cursor, line: usize) -> ParseResult<Statement> {
    let prompt = cursor.shift()?;

    if !cursor.match_phrase("and call it") {
        return Err(ParseError::MissingPromptTarget { found: cursor.current_text(),
                                                     line:  cursor.line(), });
    }
    let target = cursor.shift()?;

    Ok(Statement::Prompt { prompt, target, line })
}

/// Parses a function call after the `let's` keyword.
///
/// Syntax:
/// ```text
///     let's <name> [where <param> is <value> (and <param> is <value>)*]
///           [and call it <name>]
/// ```
/// The `and` between bindings only continues the list when the word after it
/// is not `call`; otherwise it starts the `and call it` tail.
fn parse_call(cursor: &mut Cursor, line: usize) -> ParseResult<Statement> {
    let name = cursor.shift()?;
    let mut arguments = Vec::new();

    if cursor.match_phrase("where") {
        loop {
            let parameter = cursor.shift()?;
            if !cursor.match_phrase("is") {
                return Err(ParseError::ExpectedKeyword { keyword: "is",
                                                         found:   cursor.current_text(),
                                                         line:    cursor.line(), });
            }
            let value = parse_value(cursor)?;
            arguments.push((parameter, value));

            if !cursor.match_phrase_unless("and", "call") {
                break;
            }
        }
    }

    if cursor.match_phrase("and call it") {
        let target = cursor.shift()?;
        return Ok(Statement::CallAssign { name, arguments, target, line });
    }

    Ok(Statement::Call { name, arguments, line })
}

/// Parses the target of `increment` or `decrement`.
///
/// Both are sugar for an assignment combining the variable with the literal
/// word `one`.
fn parse_step(cursor: &mut Cursor, op: BinaryOperator, line: usize) -> ParseResult<Statement> {
    let target = cursor.shift()?;
    let value = Expr::Binary { op,
                               lhs: Box::new(Expr::Variable { name: target.clone(),
                                                              line }),
                               rhs: Box::new(Expr::Literal { text: "one".to_string(),
                                                             line }),
                               line };

    Ok(Statement::Assignment { target, value, line })
}

/// Parses a function declaration.
///
/// Syntax:
/// ```text
///     i'll explain how to <name>
///         (i'll tell you what <param> is [and])*
///         <statement>
/// ```
/// The body is a single statement, usually a block. Returns `Ok(None)`
/// without consuming anything when the declaration phrase is absent.
///
/// # Errors
/// Returns a [`ParseError`] when a parameter declaration is missing its `is`
/// or the body is not a statement.
pub fn parse_function(cursor: &mut Cursor) -> ParseResult<Option<FunctionDef>> {
    let line = cursor.line();

    if !cursor.match_phrase("i'll explain how to") {
        return Ok(None);
    }
    let name = cursor.shift()?;
    let mut params = Vec::new();

    while cursor.match_phrase("i'll tell you what") {
        params.push(cursor.shift()?);
        if !cursor.match_phrase("is") {
            return Err(ParseError::ExpectedKeyword { keyword: "is",
                                                     found:   cursor.current_text(),
                                                     line:    cursor.line(), });
        }
        cursor.match_phrase("and");
    }

    let body = require_statement(cursor)?;

    Ok(Some(FunctionDef { name, params, body, line }))
}
