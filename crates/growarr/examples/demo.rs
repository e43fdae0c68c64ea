//! growarr demo: fill an array past its starting capacity, remove one
//! element from the middle, then release it.
//!
//! Demonstrates:
//!   1. Initializing with capacity 10
//!   2. Appending 0..19 (two doublings)
//!   3. Reading back size and contents
//!   4. Removing position 10 (shrinks capacity by one)
//!   5. Releasing the buffer
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example demo

use growarr::{ArrayError, GrowableArray, ShrinkOutcome};
use tracing_subscriber::EnvFilter;

const CAPACITY: usize = 10;
const COUNT: i32 = 20;
const REMOVE_AT: isize = 10;

fn print_elements(arr: &GrowableArray) {
    let line: Vec<String> = arr.as_slice().iter().map(|v| v.to_string()).collect();
    println!("{}", line.join(" "));
}

fn main() -> Result<(), ArrayError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut arr = GrowableArray::initialize(CAPACITY)?;
    for i in 0..COUNT {
        arr.append(i)?;
    }

    println!("Number of elements: {}", arr.size());
    println!(
        "Capacity: {} slots ({} bytes)",
        arr.capacity(),
        arr.memory_bytes()
    );
    println!("Elements are:");
    print_elements(&arr);

    println!("Now removing element from position {REMOVE_AT}:");
    let removal = arr.remove(REMOVE_AT)?;
    if let ShrinkOutcome::Failed(e) = &removal.shrink {
        eprintln!("shrink skipped: {e}");
    }
    println!("Removed {}; elements after removal:", removal.value);
    print_elements(&arr);

    arr.release();
    Ok(())
}
