//! rotorcrypt generic rotor substitution-cipher engine.
//!
//! rotorcrypt is a reversible substitution cipher modeled on the historical
//! Enigma machine, generic over the symbol type. A signal passes through a
//! plugboard-facing entrywheel, an ordered bank of stepping rotors, and an
//! involutive reflector, then back out through the rotors and entrywheel.
//!
//! The crate provides the full signal path and the rotor-stepping state
//! machine, including the double-stepping anomaly of real Enigma models.
//! Alphabet parsing, configuration loading, and persistence are left to the
//! caller, who hands the engine fully-parsed pair lists and position/notch
//! indices.
//!
//! # Architecture
//!
//! ```text
//! Entrywheel  (static two-sided map — plugboard side ↔ rotor side)
//!     ↓
//! Rotor bank  (position-shifted pair maps, notch-triggered stepping)
//!     ↓ forward / ↑ reverse
//! Reflector   (fixed involutive pairing — turns the signal around)
//! ```
//!
//! # Examples
//!
//! Cipher a sequence of symbols:
//!
//! ```
//! use rotorcrypt::{Enigma, Entrywheel, Reflector, Rotor};
//!
//! let mut enigma = Enigma::new(
//!     Entrywheel::new(vec![(0, 0), (1, 1), (2, 2), (3, 3)]),
//!     Reflector::new(vec![(0, 1), (2, 3)]),
//!     vec![Rotor::new(0, vec![0], vec![(0, 2), (1, 0), (2, 3), (3, 1)]).unwrap()],
//! )
//! .unwrap();
//!
//! let ciphered: Result<Vec<_>, _> = enigma.run_iter(vec![0, 1, 2, 3]).collect();
//! assert_eq!(ciphered.unwrap(), vec![1, 3, 3, 1]);
//! ```
//!
//! Self-reciprocity: a twin engine starting from the same rotor positions
//! deciphers what the first one ciphered:
//!
//! ```
//! use rotorcrypt::{Enigma, Entrywheel, Reflector, Rotor};
//!
//! fn machine() -> Enigma<char> {
//!     let alphabet: Vec<char> = ('a'..='f').collect();
//!     Enigma::new(
//!         Entrywheel::from_arrays(alphabet.clone(), alphabet.clone()).unwrap(),
//!         Reflector::from_flat_map(vec!['a', 'd', 'b', 'e', 'c', 'f']).unwrap(),
//!         vec![
//!             Rotor::from_arrays(0, vec![0], alphabet.clone(), vec!['c', 'a', 'e', 'b', 'f', 'd'])
//!                 .unwrap(),
//!             Rotor::from_arrays(0, vec![2], alphabet, vec!['f', 'd', 'b', 'e', 'a', 'c'])
//!                 .unwrap(),
//!         ],
//!     )
//!     .unwrap()
//! }
//!
//! let mut encoder = machine();
//! let ciphertext: String = encoder.run_iter("deadbeef".chars()).collect::<Result<_, _>>().unwrap();
//! assert_ne!(ciphertext, "deadbeef");
//!
//! let mut decoder = machine();
//! let plaintext: String = decoder.run_iter(ciphertext.chars()).collect::<Result<_, _>>().unwrap();
//! assert_eq!(plaintext, "deadbeef");
//! ```

#![deny(clippy::all)]

pub mod error;

mod enigma;
mod entrywheel;
pub(crate) mod pairs;
mod reflector;
mod rotor;

pub use enigma::Enigma;
pub use entrywheel::Entrywheel;
pub use error::{Component, EnigmaError};
pub use reflector::Reflector;
pub use rotor::Rotor;
