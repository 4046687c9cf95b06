//! Published check-digit vectors every validator must agree with.

use secid_core::{
    compute_cusip_check_digit, compute_isin_check_digit, compute_sedol_check_digit,
    is_valid_cusip, is_valid_isin, is_valid_sedol, IdentifierScheme,
};

struct Vector {
    scheme: IdentifierScheme,
    identifier: &'static str,
    valid: bool,
}

const fn vector(scheme: IdentifierScheme, identifier: &'static str, valid: bool) -> Vector {
    Vector {
        scheme,
        identifier,
        valid,
    }
}

fn vectors() -> Vec<Vector> {
    use IdentifierScheme::{Cusip, Isin, Sedol};

    vec![
        vector(Cusip, "222386AA2", true),
        vector(Cusip, "31397JYY4", true),
        vector(Cusip, "31397JYY5", false),
        vector(Cusip, "3137A96Y7", true),
        vector(Cusip, "3136A45X3", true),
        vector(Cusip, "31397NCJ2", true),
        vector(Cusip, "00800*AA0", true),
        vector(Cusip, "00800@AA8", true),
        vector(Cusip, "00800#AA6", true),
        vector(Cusip, "037833100", true),
        vector(Cusip, "38259P508", true),
        vector(Cusip, "594918104", true),
        vector(Sedol, "B000009", true),
        vector(Sedol, "0263494", true),
        vector(Sedol, "B0YBKJ7", true),
        vector(Sedol, "B0YBLH2", true),
        vector(Sedol, "2936921", true),
        vector(Sedol, "CCCBDD4", false),
        vector(Isin, "US9311421039", true),
        vector(Isin, "US9311421038", false),
        vector(Isin, "US0378331005", true),
        vector(Isin, "GB0002634946", true),
        vector(Isin, "AU0000XVGZA3", true),
        vector(Isin, "DE000BAY0017", true),
    ]
}

#[test]
fn validators_match_published_vectors() {
    for case in vectors() {
        let actual = match case.scheme {
            IdentifierScheme::Cusip => is_valid_cusip(case.identifier),
            IdentifierScheme::Sedol => is_valid_sedol(case.identifier),
            IdentifierScheme::Isin => is_valid_isin(case.identifier),
        };
        assert_eq!(
            actual, case.valid,
            "{} '{}': validity",
            case.scheme, case.identifier
        );
    }
}

#[test]
fn computed_check_digit_completes_every_valid_vector() {
    for case in vectors().into_iter().filter(|case| case.valid) {
        let computed = match case.scheme {
            IdentifierScheme::Cusip => compute_cusip_check_digit(case.identifier),
            IdentifierScheme::Sedol => compute_sedol_check_digit(case.identifier),
            IdentifierScheme::Isin => compute_isin_check_digit(case.identifier),
        }
        .unwrap_or_else(|error| panic!("{} '{}': {error}", case.scheme, case.identifier));

        let last = case.identifier.chars().last().expect("non-empty vector");
        assert_eq!(
            char::from(b'0' + computed),
            last,
            "{} '{}': check digit",
            case.scheme,
            case.identifier
        );
    }
}

#[test]
fn detection_agrees_with_vector_scheme() {
    for case in vectors() {
        let detected = IdentifierScheme::detect(case.identifier);
        let expected = case.valid.then_some(case.scheme);
        assert_eq!(detected, expected, "'{}': detected scheme", case.identifier);
    }
}
