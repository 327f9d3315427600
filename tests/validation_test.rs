use bank_account::{is_amount_valid, is_email_valid};

#[test]
fn test_valid_emails() {
    for email in [
        "a@b.com",
        "abc-d@mail.com",
        "abc.def@mail.com",
        "abc_def@mail.com",
        "josé@correo.es",
        "abc.def@mail.cc",
        "abc.def@mail-archive.com",
        "abc.def@mail.org",
        "abc@mail.com",
        "abc123@mail.com",
        "abc-efg@mail.com",
        "abc@mail24.com",
        "abc@email-service.com",
    ] {
        assert!(is_email_valid(email), "{email} should be valid");
    }
}

#[test]
fn test_invalid_email_structure() {
    for email in [
        "",
        "test",
        "test@em@ail.com",
        "test.email@com",
        "@.",
        "@test.com",
        "test@email.",
        "test@.com",
    ] {
        assert!(!is_email_valid(email), "{email:?} should be invalid");
    }
}

#[test]
fn test_invalid_local_parts() {
    for email in [
        "abc-@mail.com",
        "abc..def@mail.com",
        ".abc@mail.com",
        "-abc@mail.com",
        "abc--efg@mail.com",
        "abc#def@mail.com",
        "abc#efg@mail.com",
        "x²@mail.com",
        "a½@mail.com",
    ] {
        assert!(!is_email_valid(email), "{email} should be invalid");
    }
}

#[test]
fn test_invalid_domains() {
    for email in [
        "abc.def@mail.c",
        "abc.def@mail#archive.com",
        "abc.def@mail",
        "abc.def@mail..com",
        "abc@-mail.com",
        "abc@mail-.com",
        "abc@mail#service.com",
        "abe@email",
        "abe@email.",
        "a@m¹.com",
        "abc@mail.ⅻⅻ",
    ] {
        assert!(!is_email_valid(email), "{email} should be invalid");
    }
}

#[test]
fn test_positive_amounts() {
    assert!(is_amount_valid(100.0));
    assert!(is_amount_valid(50.5));
    assert!(is_amount_valid(50.55));
    assert!(!is_amount_valid(50.505));
}

#[test]
fn test_negative_amounts() {
    assert!(!is_amount_valid(-100.0));
    assert!(!is_amount_valid(-10.1));
    assert!(!is_amount_valid(-10.11));
    assert!(!is_amount_valid(-10.111));
}

#[test]
fn test_zero_and_near_zero_amounts() {
    assert!(!is_amount_valid(0.0));
    assert!(is_amount_valid(0.01));
    assert!(!is_amount_valid(0.001));
}

#[test]
fn test_boundary_amounts() {
    assert!(is_amount_valid(999999999.99));
    assert!(is_amount_valid(f64::MAX));
    // Smallest positive subnormal
    assert!(!is_amount_valid(f64::from_bits(1)));
    assert!(!is_amount_valid(f64::MIN));
    assert!(!is_amount_valid(f64::NEG_INFINITY));
}

#[test]
fn test_non_finite_amounts() {
    assert!(!is_amount_valid(f64::INFINITY));
    assert!(!is_amount_valid(f64::NAN));
}

#[test]
fn test_representation_artifacts() {
    // 0.1 + 0.2 is 0.30000000000000004 in binary floating point
    assert!(!is_amount_valid(0.1 + 0.2));
    assert!(is_amount_valid(0.3));
    // 1.15 * 100 is 114.99999999999999, yet 1.15 has two decimals
    assert!(is_amount_valid(1.15));
}
