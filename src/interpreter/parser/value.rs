use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, cursor::Cursor},
    },
};

/// Parses a value.
///
/// This is the entry point for value parsing. A value may be one of:
/// - a variable read (`the value of <name>`).
/// - a two-operand arithmetic phrase (`the sum of <a> and <b>` and friends).
/// - a random number (`a random number between <low> and <high>`).
/// - a single token: quoted tokens are literals, bare words are variable
///   references.
///
/// Afterwards one postfix construct may apply: a comparison introduced by
/// `is`, or `divided by`. Postfixes do not chain; `8 divided by 2 divided by
/// 2` leaves the second `divided by` for the surrounding phrase to reject.
///
/// Always consumes at least one token.
///
/// # Errors
/// Returns a [`ParseError`] for a malformed operand list, a missing
/// comparator after `is`, or end of input.
pub fn parse_value(cursor: &mut Cursor) -> ParseResult<Expr> {
    let line = cursor.line();

    let value = if cursor.match_phrase("the value of") {
        Expr::Variable { name: cursor.shift()?,
                         line }
    } else if let Some(value) = parse_arithmetic(cursor)? {
        value
    } else if let Some(value) = parse_random(cursor)? {
        value
    } else {
        parse_atom(cursor)?
    };

    parse_postfix(cursor, value)
}

/// Parses a two-operand arithmetic phrase, if one starts here.
///
/// Syntax:
/// ```text
///     the product of <value> and <value>
///     the sum of <value> and <value>
///     the difference of <value> and <value>
///     the difference between <value> and <value>
/// ```
/// `difference of` is signed, `difference between` is absolute.
fn parse_arithmetic(cursor: &mut Cursor) -> ParseResult<Option<Expr>> {
    let line = cursor.line();

    let op = if cursor.match_phrase("the product of") {
        BinaryOperator::Product
    } else if cursor.match_phrase("the sum of") {
        BinaryOperator::Sum
    } else if cursor.match_phrase("the difference of") {
        BinaryOperator::Difference
    } else if cursor.match_phrase("the difference between") {
        BinaryOperator::AbsoluteDifference
    } else {
        return Ok(None);
    };

    let lhs = parse_value(cursor)?;
    expect_and(cursor)?;
    let rhs = parse_value(cursor)?;

    Ok(Some(Expr::Binary { op,
                           lhs: Box::new(lhs),
                           rhs: Box::new(rhs),
                           line }))
}

/// Parses a random number phrase, if one starts here.
///
/// Syntax:
/// ```text
///     a random number between <value> and <value>
/// ```
/// Both bounds are inclusive.
fn parse_random(cursor: &mut Cursor) -> ParseResult<Option<Expr>> {
    let line = cursor.line();

    if !cursor.match_phrase("a random number between") {
        return Ok(None);
    }

    let lower = parse_value(cursor)?;
    expect_and(cursor)?;
    let upper = parse_value(cursor)?;

    Ok(Some(Expr::Random { lower: Box::new(lower),
                           upper: Box::new(upper),
                           line }))
}

/// Parses a single-token value.
///
/// A quoted token is a literal and is never looked up as a variable. A bare
/// word becomes a variable reference; whether it resolves to a binding or
/// falls back to its literal reading is decided at evaluation time.
fn parse_atom(cursor: &mut Cursor) -> ParseResult<Expr> {
    let line = cursor.line();

    match cursor.bump() {
        Some(Token::Quoted(text)) => Ok(Expr::Literal { text, line }),
        Some(token) => Ok(Expr::Variable { name: token.text().to_string(),
                                           line }),
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Applies at most one postfix construct to an already-parsed value.
///
/// Syntax:
/// ```text
///     <value> is equal to <value>
///     <value> is greater than <value>
///     <value> is less than <value>
///     <value> is different from <value>
///     <value> divided by <value>
/// ```
fn parse_postfix(cursor: &mut Cursor, value: Expr) -> ParseResult<Expr> {
    let line = cursor.line();

    if cursor.match_phrase("is") {
        let op = if cursor.match_phrase("equal to") {
            BinaryOperator::EqualTo
        } else if cursor.match_phrase("greater than") {
            BinaryOperator::GreaterThan
        } else if cursor.match_phrase("less than") {
            BinaryOperator::LessThan
        } else if cursor.match_phrase("different from") {
            BinaryOperator::DifferentFrom
        } else {
            return Err(ParseError::ExpectedComparator { found: cursor.current_text(),
                                                        line:  cursor.line(), });
        };

        let rhs = parse_value(cursor)?;
        return Ok(Expr::Binary { op,
                                 lhs: Box::new(value),
                                 rhs: Box::new(rhs),
                                 line });
    }

    if cursor.match_phrase("divided by") {
        let rhs = parse_value(cursor)?;
        return Ok(Expr::Binary { op: BinaryOperator::Division,
                                 lhs: Box::new(value),
                                 rhs: Box::new(rhs),
                                 line });
    }

    Ok(value)
}

/// Requires the word `and` between the operands of a two-operand phrase.
fn expect_and(cursor: &mut Cursor) -> ParseResult<()> {
    if cursor.match_phrase("and") {
        return Ok(());
    }
    Err(ParseError::ExpectedKeyword { keyword: "and",
                                      found:   cursor.current_text(),
                                      line:    cursor.line(), })
}
