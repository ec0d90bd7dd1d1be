//! Error types for the rotorcrypt library.

use std::fmt;

use thiserror::Error;

/// The pipeline stage whose pair map a failed lookup belongs to.
///
/// Carried inside [`EnigmaError::SymbolNotFound`] so callers can tell
/// which component rejected the symbol without changing how the error
/// is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// The entrywheel's plugboard/rotor pair map.
    Entrywheel,
    /// A rotor's entrywheel/reflector pair map.
    Rotor,
    /// The reflector's pair map.
    Reflector,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Entrywheel => write!(f, "entrywheel"),
            Component::Rotor => write!(f, "rotor"),
            Component::Reflector => write!(f, "reflector"),
        }
    }
}

/// Errors produced by the rotorcrypt library.
///
/// Two categories: [`SymbolNotFound`](EnigmaError::SymbolNotFound) is a
/// runtime precondition violation (symbol outside the configured domain,
/// or a malformed pair map with duplicate entries). Everything else is an
/// invalid-configuration error raised synchronously at construction, so an
/// invalid engine can never run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// A pair-map lookup matched zero entries, or more than one.
    ///
    /// A duplicate match indicates a malformed map; it is reported rather
    /// than silently resolved to one of the candidates.
    #[error("symbol not found in {0} pair map")]
    SymbolNotFound(Component),
    /// Parallel construction arrays have different lengths.
    #[error("unable to create pairs: array lengths do not match ({left} vs {right})")]
    MismatchedPairArrays {
        /// Length of the first array.
        left: usize,
        /// Length of the second array.
        right: usize,
    },
    /// A flat reflector map has an odd number of symbols.
    #[error("reflector map has an unpaired symbol (flat map length {len} is odd)")]
    UnpairedReflectorSymbol {
        /// Length of the offending flat map.
        len: usize,
    },
    /// A rotor was constructed without any notch positions.
    #[error("rotor requires at least one notch position")]
    EmptyNotchSet,
    /// A rotor was constructed without any pairs.
    #[error("rotor requires at least one pair")]
    EmptyRotor,
    /// An enigma was constructed without any rotors.
    #[error("enigma requires at least one rotor")]
    NoRotors,
}
