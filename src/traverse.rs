//! Reading and writing through paths.
//!
//! Two contracts share one token walk:
//!
//! - **Read** ([`get`], [`resolve`]) borrows the tree immutably and reports any
//!   failure, including a malformed path, as `None`.
//! - **Write** ([`get_or_create`], [`vivify`], [`set`]) borrows the tree
//!   mutably and never fails on shape. A node of the wrong kind is replaced by
//!   an empty container of the right kind, missing members are inserted as
//!   null and short arrays are padded with nulls. Whatever the replaced node
//!   held is discarded. A write fails only on a malformed path or an index
//!   too large to allocate.
//!
//! ```
//! use jpath::{get, set};
//! use serde_json::json;
//!
//! let mut doc = json!({"a": 5});
//! assert!(set(&mut doc, "a.b", json!(1)));
//! assert_eq!(doc, json!({"a": {"b": 1}}));
//! assert_eq!(get(&doc, "a.b"), Some(&json!(1)));
//! ```

use tracing::{debug, trace};

use crate::error::WriteError;
use crate::lexer::tokenize;
use crate::token::Token;
use crate::tree::{Kind, Tree};

/// Follows `tokens` from `root` without touching the tree.
pub fn resolve<'t, N: Tree>(root: &'t N, tokens: &[Token]) -> Option<&'t N> {
    let mut cursor = root;
    for token in tokens {
        cursor = match token {
            Token::Key(key) => cursor.member(key)?,
            Token::Index(index) => cursor.element(*index)?,
        };
    }
    Some(cursor)
}

/// Looks up the node at `path`.
///
/// Bad syntax and missing data are indistinguishable: both are `None`.
pub fn get<'t, N: Tree>(root: &'t N, path: &str) -> Option<&'t N> {
    trace!(path, "get");
    match tokenize(path) {
        Ok(tokens) => resolve(root, &tokens),
        Err(err) => {
            debug!(path, %err, "unparseable path read as not found");
            None
        }
    }
}

/// Notes a write step about to discard a node of the wrong kind.
fn note_replacement<N: Tree>(node: &N, want: Kind) {
    let found = node.kind();
    if found != want && found != Kind::Null {
        debug!(%found, %want, "discarding mismatched node on write path");
    }
}

/// Pads `items` with nulls so `index` is in bounds.
///
/// The allocation is attempted up front so an index too large to hold is an
/// error rather than an abort.
fn grow_to<N: Tree>(items: &mut Vec<N>, index: usize) -> Result<(), WriteError> {
    let needed = index.checked_add(1).ok_or(WriteError::Capacity { index })?;
    if items.len() < needed {
        items
            .try_reserve(needed - items.len())
            .map_err(|_| WriteError::Capacity { index })?;
        items.resize_with(needed, N::null);
    }
    Ok(())
}

/// Follows `tokens` from `root`, creating whatever is missing, and returns
/// the target node.
///
/// Repeating the walk on the same tree creates nothing new and lands on the
/// same node. The only failure is an array that cannot grow to the requested
/// index; containers created before that step stay in the tree.
pub fn vivify<'t, N: Tree>(root: &'t mut N, tokens: &[Token]) -> Result<&'t mut N, WriteError> {
    let mut cursor = root;
    for token in tokens {
        cursor = match token {
            Token::Key(key) => {
                note_replacement(cursor, Kind::Object);
                cursor.member_or_replace(key)
            }
            Token::Index(index) => {
                note_replacement(cursor, Kind::Array);
                let items = cursor.elements_or_replace();
                grow_to(items, *index)?;
                &mut items[*index]
            }
        };
    }
    Ok(cursor)
}

/// Returns the node at `path`, creating containers and null placeholders
/// along the way.
///
/// A malformed path is rejected before the tree is touched.
pub fn get_or_create<'t, N: Tree>(root: &'t mut N, path: &str) -> Result<&'t mut N, WriteError> {
    trace!(path, "get_or_create");
    let tokens = tokenize(path)?;
    vivify(root, &tokens)
}

/// Writes `value` at `path`, returning whether the write happened.
pub fn set<N: Tree>(root: &mut N, path: &str, value: N) -> bool {
    match get_or_create(root, path) {
        Ok(slot) => {
            *slot = value;
            true
        }
        Err(err) => {
            debug!(path, %err, "set failed");
            false
        }
    }
}
