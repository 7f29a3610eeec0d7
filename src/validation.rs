use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;

use crate::error::ApiError;

pub const MIN_PASSWORD_LEN: usize = 8;

pub fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Mobile numbers are carried as strings of exactly 11 digits.
pub fn is_valid_mobile_no(mobile_no: &str) -> bool {
    mobile_no.len() == 11 && mobile_no.chars().all(|c| c.is_ascii_digit())
}

pub fn is_valid_password(password: &str) -> bool {
    password.len() >= MIN_PASSWORD_LEN
}

pub fn parse_workout_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::validation("Invalid Workout ID"))
}

pub fn parse_user_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::validation("Invalid user ID"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("two@@signs.com"));
        assert!(!is_valid_email("spaces in@local.com"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("@no-local.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn mobile_number_must_be_eleven_digits() {
        assert!(is_valid_mobile_no("12345678901"));
        assert!(!is_valid_mobile_no("1234567890")); // 10
        assert!(!is_valid_mobile_no("123456789012")); // 12
        assert!(!is_valid_mobile_no("1234567890a"));
        assert!(!is_valid_mobile_no(""));
    }

    #[test]
    fn password_length_boundary() {
        assert!(!is_valid_password("short"));
        assert!(!is_valid_password("seven77"));
        assert!(is_valid_password("eight888"));
        assert!(is_valid_password("longenough"));
    }

    #[test]
    fn workout_id_must_be_a_uuid() {
        assert!(parse_workout_id("b7cdb986-93ec-4f22-9a3e-74a1c5d7c1cd").is_ok());
        let err = parse_workout_id("not-a-uuid").unwrap_err();
        assert_eq!(err.to_string(), "Invalid Workout ID");
    }
}
