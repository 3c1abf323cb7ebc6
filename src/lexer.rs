use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::token::Token;

/// Single-pass tokenizer over path text.
///
/// Positions are byte offsets into the input, so errors point at the exact
/// place in the original string.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    /// Set once a key or bracket segment has been read and cleared by `.`,
    /// so a separator is only legal right after a segment.
    after_segment: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            position: 0,
            after_segment: false,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn error(&self, kind: SyntaxErrorKind, offset: usize) -> SyntaxError {
        SyntaxError::new(kind, offset)
    }

    /// Bare key: everything up to the next `.`, `[` or end of input.
    fn read_key(&mut self) -> Token {
        let start = self.position;
        while let Some(ch) = self.current_char() {
            if ch == '.' || ch == '[' {
                break;
            }
            self.advance();
        }
        Token::Key(self.input[start..self.position].to_string())
    }

    /// Quoted key form, with the cursor on the opening quote.
    fn read_quoted_key(&mut self) -> Result<Token, SyntaxError> {
        let quote = self.position;
        let mut result = String::new();
        self.advance(); // opening quote

        loop {
            match self.current_char() {
                None => return Err(self.error(SyntaxErrorKind::UnterminatedQuote, quote)),
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    let escape = self.position;
                    self.advance();
                    // \\ and \" decode to the escaped char, anything else is kept as written
                    match self.current_char() {
                        Some(ch) => {
                            result.push(ch);
                            self.advance();
                        }
                        None => return Err(self.error(SyntaxErrorKind::DanglingEscape, escape)),
                    }
                }
                Some(ch) => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        self.skip_whitespace();
        match self.current_char() {
            Some(']') => {
                self.advance();
                Ok(Token::Key(result))
            }
            _ => Err(self.error(SyntaxErrorKind::MissingBracketAfterQuote, self.position)),
        }
    }

    /// Index form, with the cursor just past `[`.
    fn read_index(&mut self, bracket: usize) -> Result<Token, SyntaxError> {
        let body_start = self.position;
        let Some(len) = self.input[body_start..].find(']') else {
            return Err(self.error(SyntaxErrorKind::UnterminatedBracket, bracket));
        };
        let body_end = body_start + len;
        self.position = body_end + 1;

        let body = &self.input[body_start..body_end];
        let digits = body.trim();
        let offset = body_start + (body.len() - body.trim_start().len());

        if digits.is_empty() {
            return Err(self.error(SyntaxErrorKind::EmptyIndex, bracket));
        }
        if digits.starts_with(['+', '-']) {
            return Err(self.error(SyntaxErrorKind::SignedIndex, offset));
        }
        if let Some(bad) = digits.find(|c: char| !c.is_ascii_digit()) {
            return Err(self.error(SyntaxErrorKind::InvalidIndex, offset + bad));
        }

        digits
            .parse::<usize>()
            .map(Token::Index)
            .map_err(|_| self.error(SyntaxErrorKind::IndexOverflow, offset))
    }

    /// Bracket segment, with the cursor on `[`.
    fn read_bracket(&mut self) -> Result<Token, SyntaxError> {
        let bracket = self.position;
        self.advance();
        self.skip_whitespace();

        if self.current_char() == Some('"') {
            self.read_quoted_key()
        } else {
            self.read_index(bracket)
        }
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>, SyntaxError> {
        loop {
            let token = match self.current_char() {
                None => return Ok(None),
                Some('.') => {
                    let dot = self.position;
                    if !self.after_segment {
                        return Err(self.error(SyntaxErrorKind::EmptyKey, dot));
                    }
                    self.advance();
                    self.after_segment = false;
                    match self.current_char() {
                        None => return Err(self.error(SyntaxErrorKind::EmptyKey, dot)),
                        Some('.') => {
                            return Err(self.error(SyntaxErrorKind::EmptyKey, self.position));
                        }
                        Some(_) => continue,
                    }
                }
                Some('[') => self.read_bracket()?,
                Some(_) => self.read_key(),
            };
            self.after_segment = true;
            return Ok(Some(token));
        }
    }

    /// Drains the remaining input into a token list.
    pub fn tokenize(mut self) -> Result<Vec<Token>, SyntaxError> {
        let mut tokens = Vec::with_capacity(self.estimated_segments());
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn estimated_segments(&self) -> usize {
        1 + self.input[self.position..]
            .bytes()
            .filter(|b| *b == b'.' || *b == b'[')
            .count()
    }
}

/// Splits a path into its keys and indices.
///
/// An empty path yields no tokens and denotes the root.
///
/// # Examples
///
/// ```
/// use jpath::{Token, tokenize};
///
/// assert_eq!(
///     tokenize("user.roles[1]").unwrap(),
///     vec![Token::key("user"), Token::key("roles"), Token::index(1)],
/// );
/// assert!(tokenize("a..b").is_err());
/// ```
pub fn tokenize(path: &str) -> Result<Vec<Token>, SyntaxError> {
    Lexer::new(path).tokenize()
}

#[test]
fn test_key_before_bracket() {
    let mut lexer = Lexer::new("a[0]b");
    assert_eq!(lexer.next_token().unwrap(), Some(Token::key("a")));
    assert_eq!(lexer.next_token().unwrap(), Some(Token::index(0)));
    assert_eq!(lexer.next_token().unwrap(), Some(Token::key("b")));
    assert_eq!(lexer.next_token().unwrap(), None);
}

#[test]
fn test_error_offsets() {
    let err = tokenize("a..b").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::EmptyKey);
    assert_eq!(err.offset, 2);

    let err = tokenize("list[ 1x ]").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::InvalidIndex);
    assert_eq!(err.offset, 7);
}
