pub mod cli;
pub mod error;
pub mod extract;
pub mod lexer;
pub mod token;
pub mod traverse;
pub mod tree;
pub mod value;

pub use error::{SyntaxError, SyntaxErrorKind, WriteError};
pub use lexer::{Lexer, tokenize};
pub use token::{Token, render};
pub use traverse::{get, get_or_create, resolve, set, vivify};
pub use tree::{Kind, Tree};
pub use value::Value;
