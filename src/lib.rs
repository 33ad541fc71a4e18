//! Karp-Rabin substring search.
//!
//! A pattern's fingerprint is compared against a fingerprint of every
//! same-length window of the text. Windows are advanced with an O(1) rolling
//! recurrence, and each fingerprint hit is verified symbol by symbol, so
//! results are always exact and expected running time is linear.
//!
//! Two arithmetic regimes share one scan loop:
//!
//! - [`WrappingSearch`] and the free functions [`find_first`], [`contains`]
//!   and [`find_all`] hash code points with a fixed base in wrapping u64
//!   arithmetic. They accept any text and never fail.
//! - [`KarpRabin`] hashes dense digit indices of an explicit [`Alphabet`]
//!   modulo a prime. It rejects foreign symbols and patterns longer than the
//!   text.
//!
//! Offsets count `char`s, not bytes.
pub mod alphabet;
pub mod bounded;
pub mod core;
pub mod error;
pub mod fingerprint;
pub mod fixture;
pub mod instrumentation;
pub mod scanner;
pub mod wrapping;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use crate::alphabet::Alphabet;
pub use crate::bounded::KarpRabin;
pub use crate::core::{BoundedConfig, Search, WrappingConfig};
pub use crate::error::{Error, Result};
pub use crate::fingerprint::{Bounded, Fingerprinter, Wrapping};
pub use crate::wrapping::{WrappingSearch, contains, find_all, find_first};

/// Build an alphabet checked against the default modulus.
pub fn build_alphabet(symbols: &str) -> Result<Alphabet> {
    Alphabet::new(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISAKA: &str = "What are you doing? asks Misaka as Misaka asks what you're doing.";

    #[test]
    fn dna_matches_including_end_of_text() {
        assert_eq!(find_first("TGCA", "ACTGCATGCAGTTTAG"), Some(2));
        assert_eq!(find_first("TAG", "ACTGCATGCAGTTTAG"), Some(13));
    }

    #[test]
    fn find_all_reports_every_occurrence() {
        assert_eq!(find_all("Misaka", MISAKA), vec![25, 35]);
        assert_eq!(find_all("Mikoto", MISAKA), Vec::<usize>::new());
    }

    #[test]
    fn single_symbol_and_identity() {
        assert_eq!(find_first("T", "T"), Some(0));
        assert_eq!(find_first(MISAKA, MISAKA), Some(0));
        assert_eq!(find_first("", "T"), Some(0));
    }

    #[test]
    fn non_ascii_pattern_inside_longer_text() {
        let text = "prefix ascii, then 日本語のテキスト and more";
        assert_eq!(find_first("本語のテキ", text), Some(20));
        let kr = KarpRabin::new("日本語のテキスト ").unwrap();
        let found = kr.find_first("本語のテキ", "日本語のテキスト 日本語");
        assert_eq!(found, Ok(Some(1)));
    }

    #[test]
    fn build_alphabet_rejects_empty() {
        assert!(build_alphabet("").is_err());
        assert_eq!(build_alphabet("AGCT").unwrap().len(), 4);
    }
}
