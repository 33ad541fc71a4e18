// Fingerprint arithmetic: the Horner accumulation used to hash a whole window
// and the O(1) recurrence used to slide it by one symbol.
//
// Two back-ends share the `Fingerprinter` capability so the scan loop in
// `crate::scanner` is written once:
//
// - `Wrapping` hashes raw symbol codes with a fixed base and lets u64
//   arithmetic wrap (mod 2^64). Accumulation and rolling wrap identically, so
//   a rolled fingerprint always equals a freshly computed one even though the
//   values overflow.
// - `Bounded` hashes dense digit indices modulo an explicit prime `q`, with
//   the base `b` (alphabet size) strictly below `q`. All values stay in
//   `[0, q)`; intermediates are bounded by `q * q`, which the modulus check
//   keeps inside an i64.
use crate::core::{BoundedConfig, WrappingConfig};
use crate::error::{Error, Result};

/// Largest modulus for which `q * q` still fits in an `i64`.
pub const MAX_MODULUS: u64 = 3_037_000_499;

/// Arithmetic back-end for rolling polynomial fingerprints over digit values.
pub trait Fingerprinter {
    /// Radix of the positional number system the fingerprint is written in.
    fn base(&self) -> u64;

    /// `base^(m-1)`: the contribution of the leading symbol of an `m`-symbol
    /// window. Vacuous (zero) for `m == 0`.
    fn weight(&self, m: usize) -> u64;

    /// One Horner step: `acc * base + digit`.
    fn extend(&self, acc: u64, digit: u64) -> u64;

    /// Slide a window fingerprint one position right: drop `leading`, append
    /// `trailing`.
    fn roll(&self, hash: u64, weight: u64, leading: u64, trailing: u64) -> u64;

    /// Fingerprint of a whole window via Horner's rule.
    fn fingerprint(&self, digits: &[u64]) -> u64 {
        digits.iter().fold(0, |acc, &d| self.extend(acc, d))
    }
}

/// Fixed-width wraparound fingerprints over symbol code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wrapping {
    base: u64,
}

impl Wrapping {
    pub fn new(base: u64) -> Wrapping {
        Wrapping { base }
    }

    pub fn with_config(config: &WrappingConfig) -> Wrapping {
        Wrapping::new(config.base)
    }
}

impl Default for Wrapping {
    fn default() -> Self {
        Wrapping::with_config(&WrappingConfig::default())
    }
}

impl Fingerprinter for Wrapping {
    #[inline]
    fn base(&self) -> u64 {
        self.base
    }

    fn weight(&self, m: usize) -> u64 {
        if m == 0 {
            return 0;
        }
        (1..m).fold(1u64, |w, _| w.wrapping_mul(self.base))
    }

    #[inline]
    fn extend(&self, acc: u64, digit: u64) -> u64 {
        acc.wrapping_mul(self.base).wrapping_add(digit)
    }

    #[inline]
    fn roll(&self, hash: u64, weight: u64, leading: u64, trailing: u64) -> u64 {
        self.base
            .wrapping_mul(hash.wrapping_sub(weight.wrapping_mul(leading)))
            .wrapping_add(trailing)
    }
}

/// Modulus-bounded fingerprints over dense digit indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounded {
    base: i64,
    modulus: i64,
}

impl Bounded {
    /// Build the arithmetic for base `b` (the alphabet size) and modulus `q`.
    /// Requires `2 <= q <= MAX_MODULUS` and `0 < b < q`.
    pub fn new(base: u64, modulus: u64) -> Result<Bounded> {
        BoundedConfig { modulus }.validate()?;
        if base == 0 || base >= modulus {
            return Err(Error::InvalidAlphabet {
                size: base as usize,
                modulus,
            });
        }
        Ok(Bounded {
            base: base as i64,
            modulus: modulus as i64,
        })
    }

    pub fn modulus(&self) -> u64 {
        self.modulus as u64
    }

    /// Reduce into `[0, q)`. `%` keeps the sign of the dividend, so a negative
    /// remainder is lifted by one modulus.
    #[inline]
    fn reduce(&self, value: i64) -> i64 {
        let r = value % self.modulus;
        if r < 0 { r + self.modulus } else { r }
    }

    /// Fingerprint straight from the definition,
    /// `sum(d[i] * b^(m-1-i)) mod q`, without Horner's rule or rolling.
    pub fn direct(&self, digits: &[u64]) -> u64 {
        let mut power = 1i64;
        let mut sum = 0i64;
        for &d in digits.iter().rev() {
            sum = self.reduce(sum + self.reduce(d as i64 * power % self.modulus));
            power = power * self.base % self.modulus;
        }
        sum as u64
    }
}

impl Fingerprinter for Bounded {
    #[inline]
    fn base(&self) -> u64 {
        self.base as u64
    }

    fn weight(&self, m: usize) -> u64 {
        if m == 0 {
            return 0;
        }
        let w = (1..m).fold(1i64 % self.modulus, |w, _| w * self.base % self.modulus);
        w as u64
    }

    #[inline]
    fn extend(&self, acc: u64, digit: u64) -> u64 {
        self.reduce(acc as i64 * self.base % self.modulus + digit as i64) as u64
    }

    #[inline]
    fn roll(&self, hash: u64, weight: u64, leading: u64, trailing: u64) -> u64 {
        // hash - weight*leading may be negative; renormalize before scaling.
        let removed = self.reduce(hash as i64 - weight as i64 * leading as i64);
        let shifted = removed * self.base % self.modulus;
        self.reduce(shifted + trailing as i64) as u64
    }
}
