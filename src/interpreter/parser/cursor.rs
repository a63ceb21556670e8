use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// A read position over a tokenized program.
///
/// The token buffer itself is immutable; consuming a token only advances the
/// position. All keyword matching is all-or-nothing: a phrase either matches
/// completely and is consumed, or the position does not move at all. This
/// keeps failed matches free of side effects, which the statement parser
/// relies on when it tries phrases in order.
pub struct Cursor {
    tokens: Vec<(Token, usize)>,
    pos:    usize,
}

impl Cursor {
    /// Creates a cursor at the start of a token buffer.
    #[must_use]
    pub const fn new(tokens: Vec<(Token, usize)>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Whether every token has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// The token at the read position, if any.
    #[must_use]
    pub fn peek(&self) -> Option<&Token> {
        self.peek_at(0)
    }

    /// The token `offset` places past the read position, if any.
    #[must_use]
    pub fn peek_at(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset).map(|(token, _)| token)
    }

    /// The source line of the token at the read position.
    ///
    /// Past the end of the buffer this reports the line of the final token,
    /// so end-of-input errors still point somewhere useful.
    #[must_use]
    pub fn line(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map_or(1, |(_, line)| *line)
    }

    /// The text of the token at the read position, for error messages.
    #[must_use]
    pub fn current_text(&self) -> String {
        self.peek()
            .map_or_else(|| "end of input".to_string(), |token| token.text().to_string())
    }

    /// Consumes the next token.
    pub fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).map(|(token, _)| token.clone());
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consumes the next token and yields its text.
    ///
    /// # Errors
    /// `UnexpectedEndOfInput` when no token is left.
    pub fn shift(&mut self) -> ParseResult<String> {
        let line = self.line();
        match self.bump() {
            Some(token) => Ok(token.text().to_string()),
            None => Err(ParseError::UnexpectedEndOfInput { line }),
        }
    }

    /// Tries to match a multi-word keyword phrase at the read position.
    ///
    /// The phrase is given space-separated (`"as long as"`) and matches only
    /// against bare words, never quoted tokens. On success every word of the
    /// phrase is consumed; on failure nothing is.
    ///
    /// # Examples
    /// ```
    /// use parlance::interpreter::{lexer::tokenize, parser::cursor::Cursor};
    ///
    /// let mut cursor = Cursor::new(tokenize("as long as x"));
    ///
    /// assert!(!cursor.match_phrase("as long if"));
    /// assert!(cursor.match_phrase("as long as"));
    /// assert_eq!(cursor.current_text(), "x");
    /// ```
    pub fn match_phrase(&mut self, phrase: &str) -> bool {
        let words: Vec<&str> = phrase.split_whitespace().collect();

        if self.phrase_matches(&words) {
            self.pos += words.len();
            return true;
        }
        false
    }

    /// Tries to match a phrase unless it is followed by a given word.
    ///
    /// Used where a phrase is ambiguous with the start of a longer one; a
    /// call argument list continues with `and` only when the word after it is
    /// not `call`, because `and call it` belongs to the call itself.
    pub fn match_phrase_unless(&mut self, phrase: &str, negative: &str) -> bool {
        let words: Vec<&str> = phrase.split_whitespace().collect();

        if !self.phrase_matches(&words) {
            return false;
        }
        if let Some(token) = self.peek_at(words.len())
           && token.word() == Some(negative)
        {
            return false;
        }
        self.pos += words.len();
        true
    }

    /// Whether the given words all appear in order at the read position.
    fn phrase_matches(&self, words: &[&str]) -> bool {
        words.iter().enumerate().all(|(offset, word)| {
                                    self.peek_at(offset)
                                        .and_then(Token::word)
                                        .is_some_and(|text| text == *word)
                                })
    }
}
