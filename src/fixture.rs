// Deterministic text generation for tests, benches and the instrument binary.
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `len` symbols drawn uniformly from `alphabet`, seeded for reproducibility.
/// Empty when the alphabet is empty.
pub fn generate_text(seed: u64, len: usize, alphabet: &str) -> String {
    let symbols: Vec<char> = alphabet.chars().collect();
    if symbols.is_empty() {
        return String::new();
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| symbols[rng.gen_range(0..symbols.len())])
        .collect()
}

/// Overwrite `text` with `pattern` starting at symbol offset `at`. Symbols that
/// would run past the end of `text` are dropped.
pub fn plant(text: &str, pattern: &str, at: usize) -> String {
    let mut symbols: Vec<char> = text.chars().collect();
    for (i, c) in pattern.chars().enumerate() {
        if let Some(slot) = symbols.get_mut(at + i) {
            *slot = c;
        }
    }
    symbols.into_iter().collect()
}
