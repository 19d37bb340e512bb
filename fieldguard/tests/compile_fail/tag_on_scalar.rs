//! Test: Using a tag on a scalar type should fail.
//!
//! Tags like `#[guard(Numeric)]` apply to string fields. A numeric value has
//! to be held as a `String` to be sanitized and validated.

use fieldguard::Guarded;

#[derive(Guarded)]
struct Record {
    // ERROR: scalar fields cannot carry a tag
    #[guard(Numeric)]
    amount: f64,
}

fn main() {}
