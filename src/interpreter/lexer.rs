use logos::{Filter, Logos};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// The language has no operators or brackets; the only token kinds are bare
/// words and quoted spans. Keywords are plain English words and are only told
/// apart from variable names by the parser.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// A double-quoted span such as `"What is your Name?"`.
    /// The surrounding quotes are stripped; case, inner whitespace and
    /// punctuation are preserved exactly.
    #[regex(r#""[^"]+""#, quoted_text)]
    Quoted(String),
    /// A bare word. Words are lowercased and any `.`, `,` or `!` characters
    /// are removed, so `Tell` and `tell` match the same keyword and a
    /// sentence may end in a full stop without changing its meaning.
    #[regex(r#"[^"\s]+"#, plain_word)]
    Word(String),
    /// Line feeds, counted for error reporting.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns the text carried by the token.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Word(text) | Self::Quoted(text) => text,
            Self::NewLine | Self::Ignored => "",
        }
    }

    /// Returns the text when the token is a bare word.
    ///
    /// Keyword phrases match against this, so a quoted token never acts as a
    /// keyword even when its text happens to spell one.
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        match self {
            Self::Word(text) => Some(text),
            _ => None,
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Cleans a bare word from the current token slice.
///
/// # Returns
/// - `Filter::Emit(String)`: The lowercased word with sentence punctuation
///   removed.
/// - `Filter::Skip`: If the word consisted of punctuation only.
fn plain_word(lex: &mut logos::Lexer<Token>) -> Filter<String> {
    match clean_word(lex.slice()) {
        Some(word) => Filter::Emit(word),
        None => Filter::Skip,
    }
}

/// Strips sentence punctuation from a word and folds its case.
///
/// Yields `None` when nothing is left, as for a lone `!`.
fn clean_word(word: &str) -> Option<String> {
    let cleaned: String = word.chars()
                              .filter(|c| !matches!(c, '.' | ',' | '!'))
                              .collect();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_lowercase())
    }
}

/// Extracts the inside of a quoted span from the current token slice.
///
/// Quoted spans may contain line feeds, which still have to be counted.
fn quoted_text(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let inner = &slice[1..slice.len() - 1];

    lex.extras.line += inner.chars().filter(|&c| c == '\n').count();
    inner.to_string()
}

/// Turns a source string into a sequence of tokens with their line numbers.
///
/// Tokenization cannot fail. A `"` that never closes is dropped and the
/// words after it are read as bare words, so malformed quoting never costs
/// any program text beyond the quote itself.
///
/// # Examples
/// ```
/// use parlance::interpreter::lexer::tokenize;
///
/// let tokens = tokenize("Let x be 5. Tell me x.");
/// let words: Vec<&str> = tokens.iter().map(|(token, _)| token.text()).collect();
///
/// assert_eq!(words, ["let", "x", "be", "5", "tell", "me", "x"]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<(Token, usize)> {
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        match token {
            Ok(token) => tokens.push((token, lexer.extras.line)),
            Err(()) => {
                let span = lexer.slice();
                recover_unclosed_quote(span, &mut lexer.extras, &mut tokens);
            },
        }
    }

    tokens
}

/// Re-reads a span the token patterns could not match.
///
/// The only such span is an unterminated quote: a `"` whose closing partner
/// never arrives. The quote is dropped and everything after it is cleaned
/// like any bare word, with newlines in the span still counted.
fn recover_unclosed_quote(span: &str,
                          extras: &mut LexerExtras,
                          tokens: &mut Vec<(Token, usize)>) {
    for (offset, piece) in span.trim_start_matches('"').split('\n').enumerate() {
        if offset > 0 {
            extras.line += 1;
        }

        for word in piece.split_whitespace() {
            if let Some(word) = clean_word(word) {
                tokens.push((Token::Word(word), extras.line));
            }
        }
    }
}
