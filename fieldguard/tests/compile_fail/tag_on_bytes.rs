//! Test: Using a tag on a non-string container should fail.
//!
//! Raw bytes are not a `GuardedValue`. Decode them into a `String` first.

use fieldguard::Guarded;

#[derive(Guarded)]
struct Record {
    // ERROR: Vec<u8> doesn't implement GuardedValue
    #[guard(Phone)]
    phone: Vec<u8>,
}

fn main() {}
