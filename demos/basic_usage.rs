// ============================================================================
// Basic Usage Example
// ============================================================================

use tick_ladder::prelude::*;

#[cfg(feature = "logging")]
fn init_logging() {
    if let Err(e) = tick_ladder::utils::init_logging(tracing::Level::DEBUG) {
        eprintln!("{}", e);
    }
}

#[cfg(not(feature = "logging"))]
fn init_logging() {}

fn main() {
    init_logging();

    println!("=== Tick Ladder Example ===\n");

    // Classify a handful of raw prices
    println!("Classifying prices...");
    for price in [1.0104, 1.0532, 3.57, 7.33, 214.0] {
        let (rounded, tick_size, index) = tick_ladder::classify(price).into_parts();
        println!(
            "  {:>8} -> rounded {:>7}  tick {:>5}  index {:>3}",
            price, rounded, tick_size, index
        );
    }

    // Move prices along the ladder
    println!("\nShifting prices...");
    for (price, ticks) in [(1.01, 5), (2.10, -12), (99.0, 3)] {
        println!(
            "  {} shifted {:+} ticks -> {:.2}",
            price,
            ticks,
            tick_ladder::shift(price, ticks)
        );
    }

    println!("\nDistances...");
    for (a, b) in [(1.01, 1.06), (2.10, 1.93), (5.0, 50.0)] {
        println!("  {} <-> {}: {} ticks", a, b, tick_ladder::distance(a, b));
    }

    // Strict table reports out-of-domain input instead of guessing
    println!("\n=== Strict Table ===");
    let table = TickTable::strict();
    for price in [-1.0, 0.5, f64::NAN, 1500.0, 42.0] {
        match table.classify(price) {
            Ok(c) => match c.rounded_decimal() {
                Ok(d) => println!("  {} -> {} (index {})", price, d, c.index),
                Err(e) => println!("  {} -> {}", price, e),
            },
            Err(e) => println!("  {} rejected: {}", price, e),
        }
    }

    println!("\nCurrency rounding: 10.9274 -> {}", tick_ladder::round_size(10.9274));
}
