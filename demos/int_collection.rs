//! Integer Collection Walkthrough
//!
//! Builds a unique `TypedCollection<i32>`, then shows strict and lenient
//! bulk inserts side by side.
//!
//! Run with `RUST_LOG=warn cargo run --example int_collection` to see the
//! warnings emitted for skipped items.

use tola_coll::prelude::*;
use tracing_subscriber::EnvFilter;

type IntCollection = TypedCollection<i32>;

fn main() -> tola_coll::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    // =========================================================================
    // Seeding & Iteration
    // =========================================================================

    let coll = IntCollection::from_items([1, 2, 3, 4, 5, 26])?;
    println!("forward:  {:?}", coll.iter().collect::<Vec<_>>());
    println!("reversed: {:?}", coll.reversed().collect::<Vec<_>>());
    println!("contains 26: {}", coll.contains(&26));

    // =========================================================================
    // Strict Extend
    // =========================================================================

    let mut strict = IntCollection::new();
    match strict.extend_candidates(candidates![1, 2, 3, "This is a string", 5, 26]) {
        Ok(()) => println!("strict: all added"),
        Err(err) => println!("strict: stopped with `{err}`, kept {:?}", strict.as_slice()),
    }

    // =========================================================================
    // Lenient Extend
    // =========================================================================

    let mut lenient = IntCollection::new();
    let report = lenient.extend_candidates_lenient(candidates![1, 2, 2, "x", 5, 26]);
    println!("lenient: kept {:?}", lenient.as_slice());
    for skipped in report.skipped() {
        println!("  skipped {skipped}");
    }

    // =========================================================================
    // Concatenation
    // =========================================================================

    let combined = (coll + IntCollection::from_items([6, 8])?)?;
    let combined = (combined + 10)?;
    println!("combined: {:?}", combined.as_slice());

    match combined + 26 {
        Ok(_) => println!("26 added twice?"),
        Err(err) => println!("combined + 26: {err}"),
    }

    Ok(())
}
