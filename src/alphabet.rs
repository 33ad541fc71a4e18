use ahash::AHashMap as HashMap;
use smallvec::SmallVec;

use crate::core::BoundedConfig;
use crate::error::{Error, Result};

/// An ordered set of symbols and their dense digit indices.
///
/// The digit of a symbol is the rank of its first occurrence among the
/// distinct symbols of the string the alphabet was built from, not its raw
/// index: in `"ABAB C"`, `' '` is digit 2. Later repeats are ignored so digits
/// stay dense. The base of the bounded fingerprint is the number of distinct
/// symbols, which must be strictly less than the modulus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: SmallVec<[char; 64]>,
    digits: HashMap<char, u64>,
}

impl Alphabet {
    /// Build an alphabet checked against the default modulus.
    pub fn new(symbols: &str) -> Result<Alphabet> {
        Alphabet::with_modulus(symbols, BoundedConfig::default().modulus)
    }

    pub fn with_modulus(symbols: &str, modulus: u64) -> Result<Alphabet> {
        let mut ordered: SmallVec<[char; 64]> = SmallVec::new();
        let mut digits = HashMap::new();
        for c in symbols.chars() {
            if !digits.contains_key(&c) {
                digits.insert(c, ordered.len() as u64);
                ordered.push(c);
            }
        }
        if ordered.is_empty() || ordered.len() as u64 >= modulus {
            return Err(Error::InvalidAlphabet {
                size: ordered.len(),
                modulus,
            });
        }
        Ok(Alphabet {
            symbols: ordered,
            digits,
        })
    }

    /// Number of distinct symbols; the base `b`.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in digit order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.digits.contains_key(&symbol)
    }

    pub fn digit(&self, symbol: char) -> Option<u64> {
        self.digits.get(&symbol).copied()
    }

    pub fn digit_map(&self) -> &HashMap<char, u64> {
        &self.digits
    }

    /// Translate `symbols` into digits, failing on the first symbol outside
    /// the alphabet.
    pub fn digits(&self, symbols: &str) -> Result<Vec<u64>> {
        symbols
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                self.digit(symbol)
                    .ok_or(Error::InvalidSymbol { symbol, position })
            })
            .collect()
    }
}
