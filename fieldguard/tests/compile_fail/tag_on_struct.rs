//! Test: Using a tag on a nested record should fail.
//!
//! Tags like `#[guard(PaymentCard)]` are for leaf values (String, etc.).
//! For struct types that derive Guarded, use `#[guard]` instead to walk into them.

use fieldguard::Guarded;

#[derive(Guarded)]
struct Billing {
    #[guard(PaymentCard)]
    card: String,
}

#[derive(Guarded)]
struct Order {
    // ERROR: Billing is a struct, not a GuardedValue
    // Should use #[guard] instead to walk into it
    #[guard(PaymentCard)]
    billing: Billing,
}

fn main() {}
