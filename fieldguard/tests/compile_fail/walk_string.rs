//! Test: Using bare #[guard] on a string field should fail.
//!
//! Bare `#[guard]` walks into a nested record. A string field needs a tag
//! such as `#[guard(TaxId)]`.

use fieldguard::Guarded;

#[derive(Guarded)]
struct Record {
    // ERROR: String doesn't implement GuardedRecord
    // Use #[guard(TaxId)] to tag it instead
    #[guard]
    ssn: String,
}

fn main() {}
