//! Running-totals walkthrough: eager scan, infinite lazy scan, and
//! independent traversals of one adapter.

use scanfold::{lazy, LazySequence, ScanExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Eager: all partial sums of a finite input, at once.
    let deposits = [120, 45, 300, 80];
    let balances = deposits.scan_eager(0, |acc, x| acc + x);
    println!("balances after each deposit: {balances:?}");

    // Lazy: running totals of 1, 2, 3, ... - an infinite sequence.
    // prefix() cuts it down before we materialize anything.
    let running = lazy(1u64..).scan(0u64, |acc, x| acc + x);
    let first_ten: Vec<u64> = running.fresh_iter().take(10).collect();
    println!("first ten triangular-ish totals: {first_ten:?}");

    // The adapter is re-iterable: every traversal starts over.
    let replay: Vec<u64> = (&running).into_iter().take(3).collect();
    println!("replayed from the start: {replay:?}");

    // Chaining stays lazy; string accumulators work the same way.
    let greetings = lazy(["a", "b", "c"])
        .scan(String::new(), |acc, x| acc + x)
        .prefix(4);
    for p in &greetings {
        println!("prefix: {p:?}");
    }

    Ok(())
}
