//! Rotor: the stepping substitution stage of the signal path.
//!
//! A rotor owns a fixed wiring table of `(entrywheel-side, reflector-side)`
//! pairs, a mutable position, and a set of notch positions. The ordered
//! entrywheel-side values of the wiring define the rotor's symbol domain and
//! a cyclic index space; the position offsets every lookup against that
//! space, which models the physical rotation of the wiring core relative to
//! its casing.

use crate::error::{Component, EnigmaError};
use crate::pairs::{self, Side};

/// Position-aware substitution stage with notch-triggered stepping.
///
/// Symbols travel through the rotor twice per keypress: inward
/// ([`from_entrywheel`](Self::from_entrywheel)) on the way to the reflector
/// and outward ([`from_reflector`](Self::from_reflector)) on the way back.
/// Both traversals shift the symbol by the current position before the pair
/// lookup and shift the result back afterwards.
///
/// # Examples
///
/// ```
/// use rotorcrypt::Rotor;
///
/// let mut rotor = Rotor::from_arrays(
///     0,
///     vec![0],
///     vec![0, 1, 2, 3, 4],
///     vec![4, 3, 2, 1, 0],
/// )
/// .unwrap();
///
/// assert_eq!(rotor.from_entrywheel(&0).unwrap(), 4);
/// rotor.step();
/// assert_eq!(rotor.from_entrywheel(&0).unwrap(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Rotor<T> {
    /// Wiring as `(entrywheel-side, reflector-side)` pairs. The
    /// entrywheel-side projection is the rotor's domain.
    pairs: Vec<(T, T)>,
    position: usize,
    home: usize,
    notches: Vec<usize>,
}

impl<T> Rotor<T>
where
    T: PartialEq + Clone,
{
    /// Creates a rotor from explicit `(entrywheel, reflector)` pairs.
    ///
    /// `position` is normalized modulo the pair count, keeping the
    /// `[0, len)` invariant without rejecting larger starting offsets.
    ///
    /// # Errors
    /// Returns [`EnigmaError::EmptyRotor`] when `pairs` is empty and
    /// [`EnigmaError::EmptyNotchSet`] when `notches` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::Rotor;
    ///
    /// let rotor = Rotor::new(0, vec![0], vec![(0, 2), (1, 0), (2, 3), (3, 1)]).unwrap();
    /// assert_eq!(rotor.position(), 0);
    ///
    /// assert!(Rotor::new(0, vec![], vec![(0, 1), (1, 0)]).is_err());
    /// ```
    pub fn new(
        position: usize,
        notches: Vec<usize>,
        pairs: Vec<(T, T)>,
    ) -> Result<Self, EnigmaError> {
        if pairs.is_empty() {
            return Err(EnigmaError::EmptyRotor);
        }
        if notches.is_empty() {
            return Err(EnigmaError::EmptyNotchSet);
        }
        let position = position % pairs.len();
        Ok(Rotor {
            pairs,
            position,
            home: position,
            notches,
        })
    }

    /// Creates a rotor by zipping parallel entrywheel-side and
    /// reflector-side arrays positionally, then validating as
    /// [`new`](Self::new) does.
    ///
    /// # Errors
    /// Returns [`EnigmaError::MismatchedPairArrays`] when the arrays differ
    /// in length, plus the construction errors of [`new`](Self::new).
    pub fn from_arrays(
        position: usize,
        notches: Vec<usize>,
        entrywheel: Vec<T>,
        reflector: Vec<T>,
    ) -> Result<Self, EnigmaError> {
        Self::new(position, notches, pairs::zip_pairs(entrywheel, reflector)?)
    }

    /// Index of `symbol` in the domain (the entrywheel-side projection).
    fn domain_index(&self, symbol: &T) -> Result<usize, EnigmaError> {
        self.pairs
            .iter()
            .position(|(entrywheel, _)| entrywheel == symbol)
            .ok_or(EnigmaError::SymbolNotFound(Component::Rotor))
    }

    /// Shifts a symbol inward by the current position: the wiring contact
    /// that a casing-relative symbol actually reaches.
    fn shift_in(&self, symbol: &T) -> Result<&T, EnigmaError> {
        let index = self.domain_index(symbol)?;
        Ok(&self.pairs[(index + self.position) % self.pairs.len()].0)
    }

    /// Shifts a symbol outward by the current position: the inverse of
    /// [`shift_in`](Self::shift_in).
    fn shift_out(&self, symbol: &T) -> Result<&T, EnigmaError> {
        let index = self.domain_index(symbol)?;
        let len = self.pairs.len();
        Ok(&self.pairs[(index + len - self.position) % len].0)
    }

    /// Maps a symbol coming from the entrywheel side towards the reflector.
    ///
    /// Shifts the symbol inward by the current position, looks up the
    /// reflector-side partner of the shifted entrywheel-side value, and
    /// shifts the result back outward.
    ///
    /// # Errors
    /// Returns [`EnigmaError::SymbolNotFound`] when the symbol, the shifted
    /// value, or the looked-up partner falls outside the rotor's domain —
    /// all of which indicate a domain violation by the caller or a
    /// malformed wiring.
    pub fn from_entrywheel(&self, symbol: &T) -> Result<T, EnigmaError> {
        let shifted = self.shift_in(symbol)?;
        let partner = pairs::partner(&self.pairs, Side::Left, shifted, Component::Rotor)?;
        Ok(self.shift_out(partner)?.clone())
    }

    /// Maps a symbol coming back from the reflector towards the entrywheel.
    ///
    /// Symmetric to [`from_entrywheel`](Self::from_entrywheel): shifts
    /// inward, looks up the entrywheel-side partner of the shifted
    /// reflector-side value, shifts the result back outward.
    ///
    /// # Errors
    /// Returns [`EnigmaError::SymbolNotFound`] under the same conditions as
    /// [`from_entrywheel`](Self::from_entrywheel).
    pub fn from_reflector(&self, symbol: &T) -> Result<T, EnigmaError> {
        let shifted = self.shift_in(symbol)?;
        let partner = pairs::partner(&self.pairs, Side::Right, shifted, Component::Rotor)?;
        Ok(self.shift_out(partner)?.clone())
    }

    /// True when the current position sits on a notch: the mechanical
    /// condition under which the adjacent rotor is allowed to advance.
    pub fn allow_next_to_step(&self) -> bool {
        self.notches.contains(&self.position)
    }

    /// Advances the position by one, wrapping modulo the domain length.
    pub fn step(&mut self) {
        self.position = (self.position + 1) % self.pairs.len();
    }

    /// Returns the rotor to its starting position.
    pub fn reset(&mut self) {
        self.position = self.home;
    }

    /// Current position in `[0, len)`.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Notch positions, as given at construction.
    pub fn notches(&self) -> &[usize] {
        &self.notches
    }

    /// The `(entrywheel, reflector)` wiring pairs in insertion order.
    pub fn pairs(&self) -> &[(T, T)] {
        &self.pairs
    }
}
