use std::fmt;

use serde::Serialize;

/// One traversal step of a parsed path.
///
/// Serializes externally tagged, so a token list prints as
/// `[{"key":"user"},{"index":1}]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Token {
    /// Select an object member by name
    ///
    /// # Examples
    /// ```text
    /// user           → Key("user")
    /// ["x.y"]        → Key("x.y")
    /// ["say \"hi\""] → Key("say \"hi\"")
    /// ```
    Key(String),

    /// Select an array element by zero-based position
    ///
    /// # Examples
    /// ```text
    /// [0]     → Index(0)
    /// [ 12 ]  → Index(12)
    /// ```
    Index(usize),
}

impl Token {
    pub fn key(name: impl Into<String>) -> Self {
        Token::Key(name.into())
    }

    pub fn index(value: usize) -> Self {
        Token::Index(value)
    }

    /// Whether a key can be written without brackets and still read back as itself.
    fn is_bare(name: &str) -> bool {
        !name.is_empty() && !name.contains(['.', '['])
    }
}

/// Renders the token as a standalone path segment.
///
/// Bare keys print as-is, other keys use the quoted bracket form and
/// indices print as `[n]`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Key(name) if Token::is_bare(name) => f.write_str(name),
            Token::Key(name) => {
                f.write_str("[\"")?;
                for ch in name.chars() {
                    if ch == '\\' || ch == '"' {
                        f.write_str("\\")?;
                    }
                    write!(f, "{}", ch)?;
                }
                f.write_str("\"]")
            }
            Token::Index(n) => write!(f, "[{}]", n),
        }
    }
}

/// Builds the canonical path text for a token sequence.
///
/// The result tokenizes back into `tokens`.
///
/// # Examples
///
/// ```
/// use jpath::{Token, render};
///
/// let tokens = vec![Token::key("user"), Token::key("x.y"), Token::index(2)];
/// assert_eq!(render(&tokens), r#"user["x.y"][2]"#);
/// ```
pub fn render(tokens: &[Token]) -> String {
    let mut path = String::new();
    for token in tokens {
        if let Token::Key(name) = token
            && Token::is_bare(name)
            && !path.is_empty()
        {
            path.push('.');
        }
        path.push_str(&token.to_string());
    }
    path
}
