use crate::error::{Error, Result};
use crate::fingerprint::{Fingerprinter, MAX_MODULUS};
use crate::scanner::{self, Windows};

/// Trait describing a Karp-Rabin search engine.
///
/// Implementors supply the fingerprint arithmetic, the translation of symbols
/// into digits, and their convention for patterns longer than the text. The
/// scan itself is shared.
pub trait Search {
    type Fingerprinter: Fingerprinter;

    fn fingerprinter(&self) -> &Self::Fingerprinter;

    /// Translate a symbol sequence into the digit values the fingerprint is
    /// computed over. Equal digits must mean equal symbols.
    fn digits(&self, symbols: &str) -> Result<Vec<u64>>;

    /// Called when the pattern is longer than the text. `Ok(())` reports a
    /// normal "no match"; an error aborts the search.
    fn reject_long_pattern(&self, pattern_len: usize, text_len: usize) -> Result<()>;

    /// Digit sequences for `(pattern, text)`, or `None` when the pattern is
    /// longer than the text and the engine reports that as "no match".
    fn prepare(&self, pattern: &str, text: &str) -> Result<Option<(Vec<u64>, Vec<u64>)>> {
        let pattern_len = pattern.chars().count();
        let text_len = text.chars().count();
        if pattern_len > text_len {
            self.reject_long_pattern(pattern_len, text_len)?;
            return Ok(None);
        }
        Ok(Some((self.digits(pattern)?, self.digits(text)?)))
    }

    /// Smallest offset where `pattern` occurs in `text`.
    fn find_first(&self, pattern: &str, text: &str) -> Result<Option<usize>> {
        Ok(self
            .prepare(pattern, text)?
            .and_then(|(p, t)| scanner::first(self.fingerprinter(), &p, &t)))
    }

    /// Whether `pattern` occurs anywhere in `text`. Stops at the first hit.
    fn contains(&self, pattern: &str, text: &str) -> Result<bool> {
        Ok(self
            .prepare(pattern, text)?
            .is_some_and(|(p, t)| scanner::any(self.fingerprinter(), &p, &t)))
    }

    /// Every offset where `pattern` occurs in `text`, ascending.
    fn find_all(&self, pattern: &str, text: &str) -> Result<Vec<usize>> {
        Ok(self
            .prepare(pattern, text)?
            .map(|(p, t)| scanner::all(self.fingerprinter(), &p, &t))
            .unwrap_or_default())
    }

    /// `(offset, fingerprint)` of every `window`-symbol window of `text`.
    fn fingerprints(&self, text: &str, window: usize) -> Result<Vec<(usize, u64)>> {
        let digits = self.digits(text)?;
        Ok(Windows::new(self.fingerprinter(), &digits, window).collect())
    }
}

/// Configuration for the wraparound regime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappingConfig {
    /// Multiplier applied per symbol; arithmetic wraps at 2^64.
    pub base: u64,
}

impl Default for WrappingConfig {
    fn default() -> Self {
        WrappingConfig { base: 103 }
    }
}

/// Configuration for the modulus-bounded regime. The base is not configured:
/// it is the size of the alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedConfig {
    /// Prime modulus `q`.
    pub modulus: u64,
}

impl Default for BoundedConfig {
    fn default() -> Self {
        BoundedConfig {
            modulus: 26_900_927,
        }
    }
}

impl BoundedConfig {
    pub fn validate(&self) -> Result<()> {
        if self.modulus < 2 || self.modulus > MAX_MODULUS {
            return Err(Error::InvalidModulus {
                modulus: self.modulus,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configs() {
        assert_eq!(WrappingConfig::default().base, 103);
        assert_eq!(BoundedConfig::default().modulus, 26_900_927);
        assert!(BoundedConfig::default().validate().is_ok());
    }

    #[test]
    fn modulus_bounds_are_checked() {
        assert!(BoundedConfig { modulus: 0 }.validate().is_err());
        assert!(BoundedConfig { modulus: 2 }.validate().is_ok());
        assert!(BoundedConfig { modulus: MAX_MODULUS }.validate().is_ok());
        assert_eq!(
            BoundedConfig { modulus: u64::MAX }.validate(),
            Err(Error::InvalidModulus { modulus: u64::MAX })
        );
    }
}
