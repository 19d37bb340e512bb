//! End-to-end tests for the public sanitize/validate API.
//!
//! These tests exercise the integration of:
//! - `Guarded` derive discovery,
//! - the per-tag sanitize filters and validate checks, and
//! - the reports each pass returns.

use fieldguard::{discover, sanitize, validate, FieldResultItem, Guarded, Pass, Tag};

#[derive(Guarded)]
struct Reference {
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

fn reference() -> Reference {
    Reference {
        ssn: "  123-45-6789<script>alert(1)</script>".into(),
        card: "4111 1111 1111 1111".into(),
        phone: "(415) 555-2671 OR '1'='1'".into(),
        number: " +12.34e-1; DROP TABLE users;".into(),
        card_invalid: "1234-5678-9012-3456".into(),
        tin_null: None,
    }
}

#[test]
fn test_reference_record_sanitize() {
    let mut record = reference();
    let report = sanitize(&mut record);

    assert_eq!(report.pass(), Pass::Sanitize);
    assert!(!report.all_valid());

    assert_eq!(record.ssn, "123-45-67891");
    assert_eq!(record.card, "4111111111111111");
    assert_eq!(record.phone, "415555267111");
    assert_eq!(record.number, "+12.34e-1Ee");
    assert_eq!(record.card_invalid, "1234567890123456");
    assert_eq!(record.tin_null.as_deref(), Some(""));

    // Every field needed cleanup.
    let expected = [
        ("ssn", false),
        ("card", false),
        ("phone", false),
        ("number", false),
        ("card_invalid", false),
        ("tin_null", true),
    ];
    assert_eq!(report.len(), expected.len());
    for (item, (name, empty)) in report.iter().zip(expected) {
        assert_eq!(item, &FieldResultItem::new(name, empty, false));
    }
}

#[test]
fn test_reference_record_validate_after_sanitize() {
    let mut record = reference();
    let _ = sanitize(&mut record);
    let report = validate(&mut record);

    assert_eq!(report.pass(), Pass::Validate);
    let outcome: Vec<_> = report
        .iter()
        .map(|item| (item.field_name.as_str(), item.empty, item.valid))
        .collect();
    assert_eq!(
        outcome,
        vec![
            ("ssn", false, false),
            ("card", false, true),
            ("phone", false, false),
            ("number", false, false),
            ("card_invalid", false, false),
            ("tin_null", true, false),
        ]
    );

    // 12 digits: not a phone number, so nothing is rewritten.
    assert_eq!(record.phone, "415555267111");

    let err = report.into_result().unwrap_err();
    assert_eq!(
        err.fields(),
        ["ssn", "phone", "number", "card_invalid", "tin_null"]
    );
}

#[test]
fn test_sanitize_is_idempotent() {
    let mut record = reference();
    let _ = sanitize(&mut record);
    let snapshot = (
        record.ssn.clone(),
        record.card.clone(),
        record.phone.clone(),
        record.number.clone(),
    );

    let second = sanitize(&mut record);
    assert!(second.all_valid());
    assert_eq!(
        snapshot,
        (record.ssn, record.card, record.phone, record.number)
    );
}

#[test]
fn test_clean_record_passes_both() {
    let mut record = Reference {
        ssn: "P123-45-6789".into(),
        card: "4111111111111111".into(),
        phone: "14155552671".into(),
        number: "-1.5e3".into(),
        card_invalid: "4222222222222".into(),
        tin_null: Some("123456789".into()),
    };

    assert!(sanitize(&mut record).all_valid());
    assert!(validate(&mut record).all_valid());
    assert_eq!(record.phone, "14155552671");
}

#[test]
fn test_validate_without_sanitize_reads_raw_values() {
    #[derive(Guarded)]
    struct Raw {
        #[guard(PaymentCard)]
        card: String,
        #[guard(TaxId)]
        tin: String,
        #[guard(Numeric)]
        amount: String,
    }

    let mut raw = Raw {
        card: "4111 1111 1111 1111".into(),
        tin: "p 123 45 6789".into(),
        amount: "  42.5\t".into(),
    };
    let report = validate(&mut raw);
    assert!(report.all_valid());

    // Validation never rewrites these tags.
    assert_eq!(raw.card, "4111 1111 1111 1111");
    assert_eq!(raw.tin, "p 123 45 6789");
    assert_eq!(raw.amount, "  42.5\t");
}

#[test]
fn test_phone_normalization_happens_only_in_validate() {
    #[derive(Guarded)]
    struct Contact {
        #[guard(Phone)]
        phone: String,
    }

    let mut contact = Contact {
        phone: "(415) 555-2671".into(),
    };

    let sanitized = sanitize(&mut contact);
    assert_eq!(contact.phone, "4155552671");
    assert!(!sanitized.all_valid());

    let validated = validate(&mut contact);
    assert_eq!(contact.phone, "14155552671");
    assert!(validated.all_valid());

    // Now 11 digits with the country code: left alone.
    let again = validate(&mut contact);
    assert_eq!(contact.phone, "14155552671");
    assert!(again.all_valid());
}

#[test]
fn test_validate_reports_empty_before_normalization() {
    #[derive(Guarded)]
    struct Contact {
        #[guard(Phone)]
        phone: Option<String>,
    }

    let mut contact = Contact { phone: None };
    let report = validate(&mut contact);
    assert_eq!(report.get("phone"), Some(&FieldResultItem::new("phone", true, false)));
    assert_eq!(contact.phone, None);
}

#[test]
fn test_untagged_fields_are_ignored() {
    #[derive(Guarded)]
    struct Mixed {
        name: String,
        age: u32,
        #[guard(Phone)]
        phone: String,
    }

    let mut mixed = Mixed {
        name: "Ada <admin>".into(),
        age: 36,
        phone: "555".into(),
    };
    let report = sanitize(&mut mixed);
    assert_eq!(report.len(), 1);
    assert_eq!(mixed.name, "Ada <admin>");
    assert_eq!(mixed.age, 36);
}

#[test]
fn test_absent_record_yields_empty_reports() {
    let mut missing: Option<Reference> = None;
    let sanitized = sanitize(&mut missing);
    let validated = validate(&mut missing);
    assert!(sanitized.is_empty() && sanitized.all_valid());
    assert!(validated.is_empty() && validated.all_valid());
}

#[test]
fn test_present_option_record_is_walked() {
    let mut present = Some(reference());
    let report = sanitize(&mut present);
    assert_eq!(report.len(), 6);
    assert_eq!(present.unwrap().card, "4111111111111111");
}

#[test]
fn test_record_without_tags() {
    #[derive(Guarded)]
    struct Plain {
        note: String,
    }

    let report = validate(&mut Plain { note: "x".into() });
    assert!(report.is_empty());
    assert!(report.all_valid());
}

#[test]
fn test_discover_lists_tags_in_declaration_order() {
    let mut record = reference();
    let tags: Vec<_> = discover(&mut record)
        .iter()
        .map(|field| (field.name().to_string(), field.tag()))
        .collect();
    assert_eq!(
        tags,
        vec![
            ("ssn".to_string(), Tag::TaxId),
            ("card".to_string(), Tag::PaymentCard),
            ("phone".to_string(), Tag::Phone),
            ("number".to_string(), Tag::Numeric),
            ("card_invalid".to_string(), Tag::PaymentCard),
            ("tin_null".to_string(), Tag::TaxId),
        ]
    );
}

#[test]
fn test_report_display_lists_every_field() {
    let mut record = reference();
    let report = sanitize(&mut record);
    let rendered = report.to_string();
    assert!(rendered.starts_with("AllValid: false\n"));
    assert!(rendered.contains("- tin_null: Empty=true, Valid=false\n"));
    assert_eq!(rendered.lines().count(), 7);
}
