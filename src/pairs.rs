//! Shared bidirectional pair-map primitives.
//!
//! Every component of the signal path (entrywheel, rotors, reflector) owns
//! an ordered sequence of two-sided pairs and resolves symbols through the
//! same lookup contract: scan for the unique pair whose selected side equals
//! the query value and return the other side.

use crate::error::{Component, EnigmaError};

/// Which side of a pair a lookup matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    /// Match the first element; return the second.
    Left,
    /// Match the second element; return the first.
    Right,
}

/// Finds the unique pair whose `side` element equals `value` and returns
/// the other element.
///
/// # Errors
/// Returns [`EnigmaError::SymbolNotFound`] when no pair matches, or when
/// more than one does. A duplicate match means the map is malformed and
/// must not be silently resolved to either candidate.
pub(crate) fn partner<'a, T>(
    pairs: &'a [(T, T)],
    side: Side,
    value: &T,
    component: Component,
) -> Result<&'a T, EnigmaError>
where
    T: PartialEq,
{
    let mut found: Option<&'a T> = None;
    for (left, right) in pairs {
        let (key, other) = match side {
            Side::Left => (left, right),
            Side::Right => (right, left),
        };
        if key == value {
            if found.is_some() {
                return Err(EnigmaError::SymbolNotFound(component));
            }
            found = Some(other);
        }
    }
    found.ok_or(EnigmaError::SymbolNotFound(component))
}

/// Zips two parallel symbol arrays into a pair sequence, preserving order.
///
/// # Errors
/// Returns [`EnigmaError::MismatchedPairArrays`] when the arrays differ
/// in length.
pub(crate) fn zip_pairs<T>(left: Vec<T>, right: Vec<T>) -> Result<Vec<(T, T)>, EnigmaError> {
    if left.len() != right.len() {
        return Err(EnigmaError::MismatchedPairArrays {
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(left.into_iter().zip(right).collect())
}
