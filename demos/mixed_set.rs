//! Union Item Sets
//!
//! A collection whose permitted types are `i32`, `String` and `bool`,
//! declared once with `#[derive(ItemSet)]` and once with `item_set!`.

use tola_coll::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, ItemSet)]
enum Scalar {
    Int(i32),
    Text(String),
    Flag(bool),
}

item_set! {
    /// The same permitted types, variants named after them.
    enum Shorthand { i32, String, bool }
}

fn main() -> tola_coll::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    println!("Scalar permits:    {:?}", Scalar::PERMITTED);
    println!("Shorthand permits: {:?}", Shorthand::PERMITTED);

    let mut coll = TypedCollection::<Scalar>::new();
    coll.append(26)?;
    coll.append(String::from("Once"))?;
    coll.append(true)?;

    let report = coll.extend_candidates_lenient(candidates![
        String::from("upon"),
        2.5_f64,
        false,
        26,
    ]);
    println!("kept: {:?}", coll.as_slice());
    for skipped in report.skipped() {
        println!("  skipped {skipped}");
    }

    if let Err(err) = coll.append_candidate(Candidate::new('c')) {
        println!("append 'c': {err}");
    }

    let coll = (Scalar::Int(7) + coll)?;
    println!("last: {:?}", coll.reversed().next());

    let mut short = TypedCollection::<Shorthand>::non_unique();
    short.extend([Shorthand::I32(1), Shorthand::Bool(true), Shorthand::I32(1)])?;
    println!("shorthand: {:?}", short.as_slice());

    Ok(())
}
