// Match scanner: slides an m-symbol window across the text one offset at a
// time, comparing its fingerprint with the pattern's and verifying every
// fingerprint hit symbol by symbol. Offsets run 0..=n-m inclusive, so the
// final window goes through the same path as every other.
//
// Fingerprint equality is only a pre-check. A hit that fails verification is
// a collision: it is counted, traced, and skipped. Expected running time is
// O(n + m); if an adversarial input makes every window collide the
// verification work degrades to O(n * m), but results stay exact.
use std::ops::ControlFlow;

use log::trace;

use crate::fingerprint::Fingerprinter;
use crate::instrumentation;

/// Iterator over `(offset, fingerprint)` for every window of a digit sequence.
///
/// The first window is hashed with Horner's rule; each later one is derived
/// from its predecessor with the O(1) rolling recurrence. Yields nothing when
/// the window is empty or longer than the text.
pub struct Windows<'a, F: Fingerprinter> {
    fingerprinter: &'a F,
    text: &'a [u64],
    len: usize,
    weight: u64,
    hash: u64,
    next: usize,
}

impl<'a, F: Fingerprinter> Windows<'a, F> {
    pub fn new(fingerprinter: &'a F, text: &'a [u64], len: usize) -> Windows<'a, F> {
        let valid = len > 0 && len <= text.len();
        let (weight, hash) = if valid {
            (fingerprinter.weight(len), fingerprinter.fingerprint(&text[..len]))
        } else {
            (0, 0)
        };
        Windows {
            fingerprinter,
            text,
            len,
            weight,
            hash,
            next: if valid { 0 } else { usize::MAX },
        }
    }

    /// Last valid window offset, `n - m`.
    fn last_offset(&self) -> usize {
        self.text.len() - self.len
    }
}

impl<F: Fingerprinter> Iterator for Windows<'_, F> {
    type Item = (usize, u64);

    fn next(&mut self) -> Option<(usize, u64)> {
        let s = self.next;
        if s == usize::MAX || s > self.last_offset() {
            return None;
        }
        if s > 0 {
            self.hash = self.fingerprinter.roll(
                self.hash,
                self.weight,
                self.text[s - 1],
                self.text[s - 1 + self.len],
            );
            instrumentation::add_rolls(1);
        }
        self.next = s + 1;
        Some((s, self.hash))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.next == usize::MAX || self.next > self.last_offset() {
            0
        } else {
            self.last_offset() - self.next + 1
        };
        (remaining, Some(remaining))
    }
}

/// Compare a fingerprint hit against the pattern symbol by symbol.
fn verify(pattern: &[u64], window: &[u64]) -> bool {
    let same = pattern
        .iter()
        .zip(window)
        .take_while(|(a, b)| a == b)
        .count();
    instrumentation::add_symbols(std::cmp::min(same + 1, pattern.len()) as u64);
    same == pattern.len()
}

/// Drive the window across `text`, calling `on_match` for each verified
/// offset in ascending order until it breaks. Returns the break value, if any.
///
/// An empty pattern matches once, at offset 0, without any fingerprint work.
/// A pattern longer than the text never matches.
pub fn scan<F, B>(
    fingerprinter: &F,
    pattern: &[u64],
    text: &[u64],
    mut on_match: impl FnMut(usize) -> ControlFlow<B>,
) -> Option<B>
where
    F: Fingerprinter,
{
    let m = pattern.len();
    if m > text.len() {
        return None;
    }
    if m == 0 {
        instrumentation::add_matches(1);
        return on_match(0).break_value();
    }

    let target = fingerprinter.fingerprint(pattern);
    for (s, hash) in Windows::new(fingerprinter, text, m) {
        instrumentation::add_windows(1);
        if hash != target {
            continue;
        }
        instrumentation::add_hits(1);
        if !verify(pattern, &text[s..s + m]) {
            instrumentation::add_collisions(1);
            trace!("fingerprint collision at offset {} (hash {})", s, hash);
            continue;
        }
        instrumentation::add_matches(1);
        if let ControlFlow::Break(b) = on_match(s) {
            return Some(b);
        }
    }
    None
}

/// Smallest verified match offset.
pub fn first<F: Fingerprinter>(fingerprinter: &F, pattern: &[u64], text: &[u64]) -> Option<usize> {
    scan(fingerprinter, pattern, text, ControlFlow::Break)
}

/// Whether any verified match exists; stops at the first one.
pub fn any<F: Fingerprinter>(fingerprinter: &F, pattern: &[u64], text: &[u64]) -> bool {
    scan(fingerprinter, pattern, text, |_| ControlFlow::Break(())).is_some()
}

/// All verified match offsets, ascending. Empty when there are none.
pub fn all<F: Fingerprinter>(fingerprinter: &F, pattern: &[u64], text: &[u64]) -> Vec<usize> {
    let mut out = Vec::new();
    scan(fingerprinter, pattern, text, |s| {
        out.push(s);
        ControlFlow::<()>::Continue(())
    });
    out
}
