//! Unique Patterns Example
//!
//! Demonstrates wrapping generators so their results never repeat.
//! Shows practical patterns including:
//! - Drawing random values without repeats
//! - Excluding reserved values
//! - Per-argument deduplication
//! - Saving a store and resuming from it
//! - Handling exhausted budgets

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use unique_callback::prelude::*;

// ==================== Random Draws ====================

/// Example 1: Draw every face of a die exactly once
fn example_random_draws() {
    println!("\n=== Example 1: Random Draws ===");

    let mut rng = StdRng::seed_from_u64(1);
    let mut roll = unique(
        move |()| rng.random_range(1..=6u8),
        UniqueOptions::new().with_max_retries(1_000),
    );

    for _ in 0..6 {
        match roll.call(()) {
            Ok(face) => println!("  Rolled {}", face),
            Err(e) => println!("  Failed: {}", e),
        }
    }

    // every face is used up now
    match roll.call(()) {
        Ok(face) => println!("Unexpected seventh face: {}", face),
        Err(e) => println!("Seventh roll: {}", e),
    }
}

// ==================== Exclusion ====================

/// Example 2: Never hand out reserved user names
fn example_exclusion() {
    println!("\n=== Example 2: Exclusion ===");

    let candidates = ["root", "admin", "alice", "bob"];
    let mut i = 0;
    let mut next_name = unique(
        move |()| {
            let name = candidates[i % candidates.len()].to_string();
            i += 1;
            name
        },
        UniqueOptions::new().with_excludes(["root".to_string(), "admin".to_string()]),
    );

    for _ in 0..2 {
        if let Ok(name) = next_name.call(()) {
            println!("  Assigned {}", name);
        }
    }
}

// ==================== Per-Argument Dedup ====================

/// Example 3: Results are unique per argument list
fn example_per_argument() {
    println!("\n=== Example 3: Per-Argument Dedup ===");

    let mut rng = StdRng::seed_from_u64(2);
    let mut seat = unique(
        move |_row: char| rng.random_range(1..=3u8),
        UniqueOptions::new().with_max_retries(100),
    );

    for row in ['A', 'A', 'B', 'B'] {
        if let Ok(n) = seat.call(row) {
            println!("  Row {} seat {}", row, n);
        }
    }
}

// ==================== Resuming ====================

/// Example 4: Persist the store and seed a new wrapper with it
fn example_resume() {
    println!("\n=== Example 4: Resuming From a Store ===");

    let mut counter = 0u32;
    let mut ticket = unique(
        move |()| {
            counter += 1;
            counter % 5
        },
        UniqueOptions::new(),
    );
    for _ in 0..3 {
        let _ = ticket.call(());
    }

    let saved = match serde_json::to_string(ticket.store()) {
        Ok(json) => json,
        Err(e) => {
            println!("Could not save store: {}", e);
            return;
        }
    };
    println!("  Saved store: {}", saved);

    let store: Store<u32> = match serde_json::from_str(&saved) {
        Ok(store) => store,
        Err(e) => {
            println!("Could not load store: {}", e);
            return;
        }
    };

    let mut counter = 0u32;
    let mut resumed = unique(
        move |()| {
            counter += 1;
            counter % 5
        },
        UniqueOptions::new().with_store(store),
    );
    match resumed.call(()) {
        Ok(n) => println!("  First ticket after resume: {}", n),
        Err(e) => println!("  Resume failed: {}", e),
    }
}

// ==================== Budgets ====================

/// Example 5: What an exhausted budget looks like
fn example_budgets() {
    println!("\n=== Example 5: Budgets ===");

    let mut stuck = unique(|()| 0, UniqueOptions::new().with_max_retries(3));
    let _ = stuck.call(());
    match stuck.call(()) {
        Err(e) if e.is_retry_budget() => println!("  Retry budget: {}", e),
        other => println!("  Unexpected: {:?}", other),
    }

    let mut slow = unique(
        |()| {
            std::thread::sleep(std::time::Duration::from_millis(5));
            0
        },
        UniqueOptions::new().with_max_time_ms(1).with_exclude(0),
    );
    match slow.call(()) {
        Err(e) if e.is_time_budget() => println!("  Time budget: {}", e),
        other => println!("  Unexpected: {:?}", other),
    }
}

fn main() {
    println!("Unique Patterns");
    println!("===============");

    example_random_draws();
    example_exclusion();
    example_per_argument();
    example_resume();
    example_budgets();

    println!("\nAll examples completed.");
}
