use thiserror::Error;

/// Errors raised by the alphabet-validated search surfaces.
///
/// "No match", an empty pattern, or a pattern equal to the text are normal
/// outcomes and never show up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Alphabet size `b` must satisfy `0 < b < q`.
    #[error("alphabet of {size} symbols is invalid for modulus {modulus}")]
    InvalidAlphabet { size: usize, modulus: u64 },

    /// Modulus must be at least 2 and small enough that `q * q` fits in an `i64`.
    #[error("modulus {modulus} is out of range")]
    InvalidModulus { modulus: u64 },

    /// A pattern or text symbol has no digit in the configured alphabet.
    #[error("symbol {symbol:?} at position {position} is not in the alphabet")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("pattern of length {pattern_len} is longer than text of length {text_len}")]
    PatternLongerThanText { pattern_len: usize, text_len: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
