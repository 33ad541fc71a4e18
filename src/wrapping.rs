use crate::core::{Search, WrappingConfig};
use crate::error::Result;
use crate::fingerprint::Wrapping;
use crate::scanner;

/// Karp-Rabin search hashing raw code points with wraparound arithmetic.
///
/// Any `char` is a valid symbol, so this engine never fails: a pattern longer
/// than the text is reported as "no match".
#[derive(Debug, Clone)]
pub struct WrappingSearch {
    fingerprinter: Wrapping,
    pub config: WrappingConfig,
}

impl WrappingSearch {
    pub fn new() -> WrappingSearch {
        WrappingSearch::with_config(&WrappingConfig::default())
    }

    pub fn with_config(config: &WrappingConfig) -> WrappingSearch {
        WrappingSearch {
            fingerprinter: Wrapping::with_config(config),
            config: config.clone(),
        }
    }
}

impl Default for WrappingSearch {
    fn default() -> Self {
        WrappingSearch::new()
    }
}

impl Search for WrappingSearch {
    type Fingerprinter = Wrapping;

    fn fingerprinter(&self) -> &Wrapping {
        &self.fingerprinter
    }

    fn digits(&self, symbols: &str) -> Result<Vec<u64>> {
        Ok(code_points(symbols))
    }

    fn reject_long_pattern(&self, _pattern_len: usize, _text_len: usize) -> Result<()> {
        Ok(())
    }
}

fn code_points(symbols: &str) -> Vec<u64> {
    symbols.chars().map(|c| c as u64).collect()
}

// Stateless utilities over the default base. These return plain values:
// `None` / `false` / an empty vector when there is no match, including when
// the pattern is longer than the text.

/// Smallest offset (in symbols) where `pattern` occurs in `text`.
pub fn find_first(pattern: &str, text: &str) -> Option<usize> {
    scanner::first(&Wrapping::default(), &code_points(pattern), &code_points(text))
}

/// Whether `pattern` occurs in `text`.
pub fn contains(pattern: &str, text: &str) -> bool {
    scanner::any(&Wrapping::default(), &code_points(pattern), &code_points(text))
}

/// Every offset where `pattern` occurs in `text`, ascending.
pub fn find_all(pattern: &str, text: &str) -> Vec<usize> {
    scanner::all(&Wrapping::default(), &code_points(pattern), &code_points(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_functions_find_matches() {
        assert_eq!(find_first("TGCA", "ACTGCATGCAGTTTAG"), Some(2));
        assert_eq!(find_first("AAA", "ACTGCATGCAGTTTAG"), None);
        assert!(contains("TAG", "ACTGCATGCAGTTTAG"));
        assert_eq!(find_all("GCA", "ACTGCATGCAGTTTAG"), vec![3, 7]);
    }

    #[test]
    fn long_pattern_is_no_match() {
        assert_eq!(find_first("longer", "short"), None);
        assert!(!contains("longer", "short"));
        assert!(find_all("longer", "short").is_empty());
        let s = WrappingSearch::new();
        assert_eq!(s.find_first("longer", "short"), Ok(None));
        assert_eq!(s.find_all("longer", "short"), Ok(vec![]));
    }

    #[test]
    fn offsets_count_symbols_not_bytes() {
        assert_eq!(find_first("ü", "Grüße"), Some(2));
        assert_eq!(find_first("ße", "Grüße"), Some(3));
    }

    #[test]
    fn custom_base_still_exact() {
        let s = WrappingSearch::with_config(&WrappingConfig { base: 2 });
        assert_eq!(s.config.base, 2);
        assert_eq!(s.find_all("aab", "abaabaaab").unwrap(), vec![2, 6]);
    }
}
