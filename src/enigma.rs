//! Enigma: the engine orchestrating the full signal path.
//!
//! Owns one entrywheel, an ordered rotor bank, and one reflector. Every
//! keypress first advances the rotor bank (key-press-then-encode ordering,
//! matching the physical machine), then threads the symbol through
//! entrywheel, rotors, reflector, and back out.

use crate::entrywheel::Entrywheel;
use crate::error::EnigmaError;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// Generic reversible substitution-cipher engine.
///
/// # Architecture
///
/// ```text
/// plugboard symbol
///     ↓ Entrywheel::from_plugboard
///     ↓ Rotor[0..n].from_entrywheel   (forward order)
///     ↓ Reflector::reflect
///     ↓ Rotor[n..0].from_reflector    (reverse order)
///     ↓ Entrywheel::from_rotor
/// ciphered symbol
/// ```
///
/// Rotor positions advance once before each symbol, so running the same
/// engine twice on the same symbol generally yields different outputs.
/// Two engines configured and positioned identically are self-reciprocal:
/// feeding a ciphertext through a fresh twin of the engine that produced
/// it restores the plaintext.
///
/// # Examples
///
/// ```
/// use rotorcrypt::{Enigma, Entrywheel, Reflector, Rotor};
///
/// let mut enigma = Enigma::new(
///     Entrywheel::new(vec![(0, 0), (1, 1), (2, 2), (3, 3)]),
///     Reflector::new(vec![(0, 1), (2, 3)]),
///     vec![Rotor::new(0, vec![0], vec![(0, 2), (1, 0), (2, 3), (3, 1)]).unwrap()],
/// )
/// .unwrap();
///
/// let ciphered: Result<Vec<_>, _> = enigma.run_iter(vec![0, 1, 2, 3]).collect();
/// assert_eq!(ciphered.unwrap(), vec![1, 3, 3, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct Enigma<T> {
    entrywheel: Entrywheel<T>,
    rotors: Vec<Rotor<T>>,
    reflector: Reflector<T>,
    double_stepping: bool,
}

impl<T> Enigma<T>
where
    T: PartialEq + Clone,
{
    /// Creates an engine with simple stepping: rotor 0 advances on every
    /// symbol, and each later rotor advances when its predecessor sits on
    /// a notch.
    ///
    /// # Errors
    /// Returns [`EnigmaError::NoRotors`] when `rotors` is empty.
    pub fn new(
        entrywheel: Entrywheel<T>,
        reflector: Reflector<T>,
        rotors: Vec<Rotor<T>>,
    ) -> Result<Self, EnigmaError> {
        Self::build(entrywheel, reflector, rotors, false)
    }

    /// Creates an engine with the historical double-stepping anomaly: a
    /// rotor sitting on its own notch advances together with its neighbor,
    /// provided a successor rotor exists. The last rotor never double-steps
    /// through this branch.
    ///
    /// Both policies are provided because real Enigma models used both,
    /// depending on the drive mechanism.
    ///
    /// # Errors
    /// Returns [`EnigmaError::NoRotors`] when `rotors` is empty.
    pub fn with_double_stepping(
        entrywheel: Entrywheel<T>,
        reflector: Reflector<T>,
        rotors: Vec<Rotor<T>>,
    ) -> Result<Self, EnigmaError> {
        Self::build(entrywheel, reflector, rotors, true)
    }

    /// Internal constructor shared by both stepping policies.
    fn build(
        entrywheel: Entrywheel<T>,
        reflector: Reflector<T>,
        rotors: Vec<Rotor<T>>,
        double_stepping: bool,
    ) -> Result<Self, EnigmaError> {
        if rotors.is_empty() {
            return Err(EnigmaError::NoRotors);
        }
        Ok(Enigma {
            entrywheel,
            rotors,
            reflector,
            double_stepping,
        })
    }

    /// Advances the rotor bank by one keypress.
    ///
    /// Every stepping decision is computed from the pre-step position
    /// snapshot and applied afterwards, so a rotor's own advancement never
    /// influences another rotor's decision within the same keypress.
    ///
    /// Exposed publicly so callers can advance state without encoding
    /// (e.g. to wind an engine forward to a starting position).
    pub fn step(&mut self) {
        let allow: Vec<bool> = self.rotors.iter().map(Rotor::allow_next_to_step).collect();
        let last = self.rotors.len() - 1;
        for (i, rotor) in self.rotors.iter_mut().enumerate() {
            let can_step = if self.double_stepping {
                i == 0 || allow[i - 1] || (allow[i] && i != last)
            } else {
                i == 0 || allow[i - 1]
            };
            if can_step {
                rotor.step();
            }
        }
    }

    /// Ciphers a single symbol.
    ///
    /// Steps the rotor bank first, then runs the symbol through the full
    /// signal path.
    ///
    /// # Errors
    /// Returns [`EnigmaError::SymbolNotFound`] when any stage's lookup
    /// fails; the error's component tag records which stage rejected the
    /// symbol. The rotor bank remains stepped even when the lookup fails,
    /// exactly as a physical machine advances on every keypress.
    pub fn run(&mut self, symbol: T) -> Result<T, EnigmaError> {
        self.step();
        let mut datum = self.entrywheel.from_plugboard(&symbol)?;
        for rotor in &self.rotors {
            datum = rotor.from_entrywheel(&datum)?;
        }
        datum = self.reflector.reflect(&datum)?;
        for rotor in self.rotors.iter().rev() {
            datum = rotor.from_reflector(&datum)?;
        }
        self.entrywheel.from_rotor(&datum)
    }

    /// Ciphers a sequence of symbols lazily.
    ///
    /// Produces one output per input in the same order, driving this
    /// engine's rotor state across the whole sequence without buffering.
    /// Each element observes the state mutations left by the previous one,
    /// so the iterator is single-pass by construction; restart by building
    /// a fresh engine or calling [`reset`](Self::reset) first.
    pub fn run_iter<'a, I>(
        &'a mut self,
        symbols: I,
    ) -> impl Iterator<Item = Result<T, EnigmaError>> + 'a
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        symbols.into_iter().map(move |symbol| self.run(symbol))
    }

    /// Returns every rotor to its starting position.
    ///
    /// After a reset the engine reproduces the exact output sequence it
    /// produced when freshly constructed.
    pub fn reset(&mut self) {
        for rotor in &mut self.rotors {
            rotor.reset();
        }
    }

    /// The entrywheel of this engine.
    pub fn entrywheel(&self) -> &Entrywheel<T> {
        &self.entrywheel
    }

    /// The rotor bank in signal order (entrywheel side first).
    pub fn rotors(&self) -> &[Rotor<T>] {
        &self.rotors
    }

    /// The reflector of this engine.
    pub fn reflector(&self) -> &Reflector<T> {
        &self.reflector
    }

    /// True when the double-stepping policy is active.
    pub fn double_stepping(&self) -> bool {
        self.double_stepping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Entrywheel (0,0)..(3,3); rotor pos 0, notch {0}, wiring
    /// (0,2),(1,0),(2,3),(3,1); reflector (0,1),(2,3).
    fn test_enigma() -> Enigma<i32> {
        Enigma::new(
            Entrywheel::new(vec![(0, 0), (1, 1), (2, 2), (3, 3)]),
            Reflector::new(vec![(0, 1), (2, 3)]),
            vec![Rotor::new(0, vec![0], vec![(0, 2), (1, 0), (2, 3), (3, 1)]).unwrap()],
        )
        .unwrap()
    }

    /// Three identity rotors over domain {0,1,2}, each with a notch at 2.
    fn three_rotor_bank(double_stepping: bool) -> Enigma<i32> {
        let map: Vec<i32> = (0..3).collect();
        let entrywheel = Entrywheel::from_arrays(map.clone(), map.clone()).unwrap();
        let reflector = Reflector::new(vec![(0, 1)]);
        let rotors: Vec<Rotor<i32>> = (0..3)
            .map(|_| Rotor::from_arrays(0, vec![2], map.clone(), map.clone()).unwrap())
            .collect();
        if double_stepping {
            Enigma::with_double_stepping(entrywheel, reflector, rotors).unwrap()
        } else {
            Enigma::new(entrywheel, reflector, rotors).unwrap()
        }
    }

    fn positions(enigma: &Enigma<i32>) -> Vec<usize> {
        enigma.rotors().iter().map(Rotor::position).collect()
    }

    #[test]
    fn test_requires_at_least_one_rotor() {
        let result = Enigma::new(
            Entrywheel::new(vec![(0, 0)]),
            Reflector::new(vec![(0, 1)]),
            Vec::new(),
        );
        assert_eq!(result.unwrap_err(), EnigmaError::NoRotors);
    }

    #[test]
    fn test_never_returns_input_as_output() {
        for symbol in 0..4 {
            let mut enigma = test_enigma();
            let result = enigma.run(symbol).unwrap();
            assert_ne!(result, symbol, "fixed point at symbol {}", symbol);
        }
    }

    #[test]
    fn test_ciphered_sequences() {
        let mut enigma = test_enigma();
        let ciphered: Result<Vec<_>, _> = enigma.run_iter(vec![0, 1, 2, 3]).collect();
        assert_eq!(ciphered.unwrap(), vec![1, 3, 3, 1]);

        let mut enigma = test_enigma();
        let ciphered: Result<Vec<_>, _> = enigma.run_iter(vec![3, 2, 1, 0]).collect();
        assert_eq!(ciphered.unwrap(), vec![2, 0, 0, 2]);
    }

    #[test]
    fn test_same_symbol_twice_differs() {
        let mut enigma = test_enigma();
        let first = enigma.run(0).unwrap();
        let second = enigma.run(0).unwrap();
        assert_ne!(
            first, second,
            "rotor state should advance between identical inputs"
        );
    }

    #[test]
    fn test_run_iter_is_lazy() {
        let mut enigma = test_enigma();
        let mut iter = enigma.run_iter(vec![0, 1, 2, 3]);
        assert_eq!(iter.next(), Some(Ok(1)));
        drop(iter);
        // Only one symbol was consumed, so only one keypress happened.
        assert_eq!(enigma.rotors()[0].position(), 1);
    }

    #[test]
    fn test_step_without_encoding() {
        let mut enigma = test_enigma();
        enigma.step();
        enigma.step();
        assert_eq!(enigma.rotors()[0].position(), 2);
    }

    #[test]
    fn test_out_of_domain_symbol_fails() {
        let mut enigma = test_enigma();
        assert!(enigma.run(4).is_err());
    }

    #[test]
    fn test_reset_reproduces_output() {
        let mut enigma = test_enigma();
        let first: Result<Vec<_>, _> = enigma.run_iter(vec![0, 1, 2, 3]).collect();
        enigma.reset();
        let second: Result<Vec<_>, _> = enigma.run_iter(vec![0, 1, 2, 3]).collect();
        assert_eq!(first.unwrap(), second.unwrap());
    }

    #[test]
    fn test_simple_stepping_positions() {
        let mut enigma = three_rotor_bank(false);
        let mut trace = Vec::new();
        for _ in 0..7 {
            enigma.step();
            trace.push(positions(&enigma));
        }
        assert_eq!(
            trace,
            vec![
                vec![1, 0, 0],
                vec![2, 0, 0],
                vec![0, 1, 0], // rotor 0 was on its notch
                vec![1, 1, 0],
                vec![2, 1, 0],
                vec![0, 2, 0],
                vec![1, 2, 1], // rotor 1 on its notch lets rotor 2 advance
            ]
        );
    }

    #[test]
    fn test_double_stepping_positions() {
        let mut enigma = three_rotor_bank(true);
        let mut trace = Vec::new();
        for _ in 0..7 {
            enigma.step();
            trace.push(positions(&enigma));
        }
        assert_eq!(
            trace,
            vec![
                vec![1, 0, 0],
                vec![2, 0, 0],
                vec![0, 1, 0],
                vec![1, 1, 0],
                vec![2, 1, 0],
                vec![0, 2, 0],
                // Rotor 1 sits on its own notch, so it advances together
                // with rotor 2 instead of waiting for rotor 0.
                vec![1, 0, 1],
            ]
        );
    }

    #[test]
    fn test_last_rotor_never_double_steps_alone() {
        // Two rotors, the second parked on its notch: with double stepping
        // the last rotor must not advance through its own-notch branch.
        let map: Vec<i32> = (0..3).collect();
        let entrywheel = Entrywheel::from_arrays(map.clone(), map.clone()).unwrap();
        let reflector = Reflector::new(vec![(0, 1)]);
        let rotors = vec![
            Rotor::from_arrays(0, vec![2], map.clone(), map.clone()).unwrap(),
            Rotor::from_arrays(2, vec![2], map.clone(), map.clone()).unwrap(),
        ];
        let mut enigma = Enigma::with_double_stepping(entrywheel, reflector, rotors).unwrap();
        enigma.step();
        assert_eq!(positions(&enigma), vec![1, 2]);
    }

    #[test]
    fn test_stepping_determinism() {
        let mut first = three_rotor_bank(true);
        let mut second = three_rotor_bank(true);
        for _ in 0..50 {
            first.step();
            second.step();
            assert_eq!(positions(&first), positions(&second));
        }
    }
}
