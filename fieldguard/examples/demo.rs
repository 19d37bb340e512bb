//! Runs both passes over a record of hostile inputs and prints each stage.
//!
//! ```sh
//! cargo run -p fieldguard --example demo
//! ```

use fieldguard::{sanitize, validate, Guarded};

#[derive(Guarded)]
struct Applicant {
    #[guard(TaxId)]
    ssn: String,
    #[guard(PaymentCard)]
    card: String,
    #[guard(Phone)]
    phone: String,
    #[guard(Numeric)]
    number: String,
    #[guard(PaymentCard)]
    card_invalid: String,
    #[guard(TaxId)]
    tin_null: Option<String>,
}

impl Applicant {
    fn dump(&self) {
        println!("SSN: '{}'", self.ssn);
        println!("Card: '{}'", self.card);
        println!("CardInvalid: '{}'", self.card_invalid);
        println!("Phone: '{}'", self.phone);
        println!("Number: '{}'", self.number);
        println!("TinNull: '{}'", self.tin_null.as_deref().unwrap_or_default());
    }
}

fn main() {
    let mut applicant = Applicant {
        ssn: "  123-45-6789<script>alert(1)</script>".into(),
        card: "4111 1111 1111 1111".into(),
        phone: "(415) 555-2671 OR '1'='1'".into(),
        number: " +12.34e-1; DROP TABLE users;".into(),
        card_invalid: "1234-5678-9012-3456".into(),
        tin_null: None,
    };

    println!("Original object:");
    applicant.dump();

    println!("\n--- Sanitizing ---\n");
    print!("{}", sanitize(&mut applicant));
    println!("Object after sanitize:");
    applicant.dump();

    println!("\n--- Validating ---\n");
    print!("{}", validate(&mut applicant));
    println!("Object after validate:");
    applicant.dump();
}
