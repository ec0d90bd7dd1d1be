//! Entrywheel: the static first and last stage of the signal path.
//!
//! Maps between plugboard-facing symbols and rotor-facing symbols through
//! a fixed two-sided pair table. Unlike a rotor it carries no position
//! state, so both directions are plain pair lookups.

use crate::error::{Component, EnigmaError};
use crate::pairs::{self, Side};

/// Static two-sided map between plugboard-side and rotor-side symbols.
///
/// Each pair is `(plugboard-side, rotor-side)`. Every side value must
/// appear in at most one pair for lookups to resolve; duplicates surface
/// as [`EnigmaError::SymbolNotFound`] at lookup time.
///
/// # Examples
///
/// ```
/// use rotorcrypt::Entrywheel;
///
/// let entrywheel = Entrywheel::from_arrays(vec!['a', 'b', 'c'], vec!['b', 'c', 'a']).unwrap();
/// assert_eq!(entrywheel.from_plugboard(&'a').unwrap(), 'b');
/// assert_eq!(entrywheel.from_rotor(&'b').unwrap(), 'a');
/// ```
#[derive(Debug, Clone)]
pub struct Entrywheel<T> {
    pairs: Vec<(T, T)>,
}

impl<T> Entrywheel<T>
where
    T: PartialEq + Clone,
{
    /// Creates an entrywheel from explicit `(plugboard, rotor)` pairs.
    pub fn new(pairs: Vec<(T, T)>) -> Self {
        Entrywheel { pairs }
    }

    /// Creates an entrywheel by zipping parallel plugboard-side and
    /// rotor-side arrays positionally.
    ///
    /// # Errors
    /// Returns [`EnigmaError::MismatchedPairArrays`] when the arrays differ
    /// in length.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::Entrywheel;
    ///
    /// assert!(Entrywheel::from_arrays(vec![0, 1], vec![1, 0]).is_ok());
    /// assert!(Entrywheel::from_arrays(vec![0, 1], vec![1]).is_err());
    /// ```
    pub fn from_arrays(plugboard: Vec<T>, rotor: Vec<T>) -> Result<Self, EnigmaError> {
        Ok(Entrywheel {
            pairs: pairs::zip_pairs(plugboard, rotor)?,
        })
    }

    /// Maps a symbol coming from the plugboard to its rotor-side partner.
    ///
    /// # Errors
    /// Returns [`EnigmaError::SymbolNotFound`] when the symbol matches no
    /// pair's plugboard side, or more than one.
    pub fn from_plugboard(&self, symbol: &T) -> Result<T, EnigmaError> {
        pairs::partner(&self.pairs, Side::Left, symbol, Component::Entrywheel).cloned()
    }

    /// Maps a symbol coming from the rotor bank to its plugboard-side
    /// partner.
    ///
    /// # Errors
    /// Returns [`EnigmaError::SymbolNotFound`] when the symbol matches no
    /// pair's rotor side, or more than one.
    pub fn from_rotor(&self, symbol: &T) -> Result<T, EnigmaError> {
        pairs::partner(&self.pairs, Side::Right, symbol, Component::Entrywheel).cloned()
    }

    /// Returns the `(plugboard, rotor)` pairs in insertion order.
    pub fn pairs(&self) -> &[(T, T)] {
        &self.pairs
    }
}
