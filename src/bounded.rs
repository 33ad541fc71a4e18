use std::fmt;

use log::debug;

use crate::alphabet::Alphabet;
use crate::core::{BoundedConfig, Search};
use crate::error::{Error, Result};
use crate::fingerprint::{Bounded, Fingerprinter};

/// Karp-Rabin search over an explicit alphabet, hashing digit indices modulo
/// a prime.
///
/// Every pattern and text symbol must belong to the alphabet
/// (`Error::InvalidSymbol` otherwise), and a pattern longer than the text is
/// an error (`Error::PatternLongerThanText`) rather than "no match".
///
/// Immutable once built; a shared reference can serve any number of searches.
#[derive(Debug, Clone)]
pub struct KarpRabin {
    alphabet: Alphabet,
    fingerprinter: Bounded,
    pub config: BoundedConfig,
}

impl KarpRabin {
    /// Build with the default modulus.
    pub fn new(alphabet: &str) -> Result<KarpRabin> {
        KarpRabin::with_config(&BoundedConfig::default(), alphabet)
    }

    pub fn with_config(config: &BoundedConfig, alphabet: &str) -> Result<KarpRabin> {
        config.validate()?;
        let alphabet = Alphabet::with_modulus(alphabet, config.modulus)?;
        let fingerprinter = Bounded::new(alphabet.len() as u64, config.modulus)?;
        debug!(
            "karp-rabin: alphabet of {} symbols, modulus {}",
            alphabet.len(),
            config.modulus
        );
        Ok(KarpRabin {
            alphabet,
            fingerprinter,
            config: config.clone(),
        })
    }

    /// The base `b`: number of distinct alphabet symbols.
    pub fn base(&self) -> u64 {
        self.fingerprinter.base()
    }

    /// The modulus `q`.
    pub fn modulus(&self) -> u64 {
        self.fingerprinter.modulus()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Digit index of each symbol of `symbols`.
    pub fn digit_values(&self, symbols: &str) -> Result<Vec<u64>> {
        self.alphabet.digits(symbols)
    }
}

impl Search for KarpRabin {
    type Fingerprinter = Bounded;

    fn fingerprinter(&self) -> &Bounded {
        &self.fingerprinter
    }

    fn digits(&self, symbols: &str) -> Result<Vec<u64>> {
        self.alphabet.digits(symbols)
    }

    fn reject_long_pattern(&self, pattern_len: usize, text_len: usize) -> Result<()> {
        Err(Error::PatternLongerThanText {
            pattern_len,
            text_len,
        })
    }
}

impl fmt::Display for KarpRabin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbols: String = self.alphabet.symbols().iter().collect();
        write!(
            f,
            "KarpRabin(alphabet={:?}, b={}, q={})",
            symbols,
            self.base(),
            self.modulus()
        )
    }
}
