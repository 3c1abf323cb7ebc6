/// A malformed path.
///
/// `offset` is the byte position in the path text where the problem was
/// detected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid jpath: {kind} at offset {offset}")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub offset: usize,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, offset: usize) -> Self {
        SyntaxError { kind, offset }
    }
}

/// What went wrong while tokenizing a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxErrorKind {
    /// Leading, trailing or doubled `.`
    #[error("empty key segment")]
    EmptyKey,

    /// `[` with no matching `]`
    #[error("missing closing ']'")]
    UnterminatedBracket,

    /// `[]` or `[   ]`
    #[error("empty array index")]
    EmptyIndex,

    /// `[+1]` or `[-1]`
    #[error("array index must not be signed")]
    SignedIndex,

    /// Anything other than decimal digits inside `[...]`
    #[error("bad array index inside []")]
    InvalidIndex,

    /// Digits that do not fit the index width
    #[error("array index out of range")]
    IndexOverflow,

    /// `["abc` with no closing quote
    #[error("missing closing '\"' in quoted key")]
    UnterminatedQuote,

    /// `["abc\` at end of input
    #[error("dangling escape in quoted key")]
    DanglingEscape,

    /// `["abc"` not followed by `]`
    #[error("missing ']' after quoted key")]
    MissingBracketAfterQuote,
}

/// A write through a path that could not be carried out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WriteError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// Padding an array up to `index` would exceed what can be allocated
    #[error("cannot grow array to hold index {index}")]
    Capacity { index: usize },
}
