// Lightweight instrumentation for counting scan hotspots in development.
// Counters are thread-local `Cell`s, so there is no locking in the hot path
// and concurrent searches on different threads do not disturb each other.
use std::cell::Cell;

thread_local! {
    static WINDOWS: Cell<u64> = const { Cell::new(0) };
    static ROLLS: Cell<u64> = const { Cell::new(0) };
    static HITS: Cell<u64> = const { Cell::new(0) };
    static COLLISIONS: Cell<u64> = const { Cell::new(0) };
    static SYMBOLS: Cell<u64> = const { Cell::new(0) };
    static MATCHES: Cell<u64> = const { Cell::new(0) };
}

/// Snapshot of the calling thread's counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    /// Window fingerprints compared against the pattern fingerprint.
    pub windows: u64,
    /// Applications of the rolling recurrence.
    pub rolls: u64,
    /// Windows whose fingerprint equalled the pattern's.
    pub hits: u64,
    /// Hits rejected by verification.
    pub collisions: u64,
    /// Symbol comparisons made while verifying hits.
    pub symbols: u64,
    /// Verified matches.
    pub matches: u64,
}

pub fn reset_counters() {
    WINDOWS.with(|c| c.set(0));
    ROLLS.with(|c| c.set(0));
    HITS.with(|c| c.set(0));
    COLLISIONS.with(|c| c.set(0));
    SYMBOLS.with(|c| c.set(0));
    MATCHES.with(|c| c.set(0));
}

pub fn counters_snapshot() -> Counters {
    Counters {
        windows: WINDOWS.with(|c| c.get()),
        rolls: ROLLS.with(|c| c.get()),
        hits: HITS.with(|c| c.get()),
        collisions: COLLISIONS.with(|c| c.get()),
        symbols: SYMBOLS.with(|c| c.get()),
        matches: MATCHES.with(|c| c.get()),
    }
}

fn bump(counter: &'static std::thread::LocalKey<Cell<u64>>, n: u64) {
    counter.with(|c| c.set(c.get().wrapping_add(n)));
}

pub fn add_windows(n: u64) {
    bump(&WINDOWS, n);
}
pub fn add_rolls(n: u64) {
    bump(&ROLLS, n);
}
pub fn add_hits(n: u64) {
    bump(&HITS, n);
}
pub fn add_collisions(n: u64) {
    bump(&COLLISIONS, n);
}
pub fn add_symbols(n: u64) {
    bump(&SYMBOLS, n);
}
pub fn add_matches(n: u64) {
    bump(&MATCHES, n);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_zeroes_every_counter() {
        add_windows(3);
        add_collisions(2);
        add_symbols(7);
        assert_eq!(counters_snapshot().windows, 3);
        reset_counters();
        assert_eq!(counters_snapshot(), Counters::default());
    }
}
