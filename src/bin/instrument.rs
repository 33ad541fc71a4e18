use std::time::Instant;

use karp_rabin::fixture::{generate_text, plant};
use karp_rabin::instrumentation::{counters_snapshot, reset_counters};
use karp_rabin::{KarpRabin, Search, WrappingSearch};

const DNA: &str = "AGCT";

fn run_case<S: Search>(
    name: &str,
    engine: &S,
    pattern: &str,
    text: &str,
) -> karp_rabin::Result<()> {
    reset_counters();
    let t0 = Instant::now();
    let found = engine.find_all(pattern, text)?;
    let dur = t0.elapsed();
    let c = counters_snapshot();
    println!(
        "{}: m={} time={:?} found={} windows={} rolls={} hits={} collisions={} symbols={}",
        name,
        pattern.chars().count(),
        dur,
        found.len(),
        c.windows,
        c.rolls,
        c.hits,
        c.collisions,
        c.symbols
    );
    Ok(())
}

fn main() -> karp_rabin::Result<()> {
    let wrapping = WrappingSearch::new();
    let bounded = KarpRabin::new(DNA)?;

    for &m in &[4usize, 16, 64] {
        let pattern = generate_text(1, m, DNA);
        let mut text = generate_text(42, 1_000_000, DNA);
        for at in (0..1_000_000).step_by(100_000) {
            text = plant(&text, &pattern, at);
        }
        run_case("wrapping", &wrapping, &pattern, &text)?;
        run_case("bounded", &bounded, &pattern, &text)?;
    }
    Ok(())
}
