//! Test: Using #[guard] on an external type that doesn't implement GuardedRecord.
//!
//! External types like `std::time::SystemTime` don't implement `GuardedRecord`.
//! Use no annotation to leave them alone, or wrap them in a newtype.

use fieldguard::Guarded;
use std::time::SystemTime;

#[derive(Guarded)]
#[guard(skip_debug)]
struct Record {
    // ERROR: SystemTime doesn't implement GuardedRecord
    // Remove #[guard] to leave it untouched
    #[guard]
    timestamp: SystemTime,
}

fn main() {}
