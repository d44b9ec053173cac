//! Field validation for student records.
//!
//! These checks are the single source of truth for what a well-formed student
//! looks like. The creation policy runs all three on create; the edit command
//! runs the name and age checks before touching the store.
//!
//! Valid fields:
//! - `id`: non-empty (whitespace alone does not count)
//! - `name`: non-empty, no digits (`0`-`9`)
//! - `age`: strictly positive
//!
//! The id and name checks hand back the trimmed value, which is what gets
//! stored. `" 1"` and `"1"` are the same key.

use thiserror::Error;

/// Validates a student id.
///
/// ```
/// use roster::validation::validate_id;
///
/// assert_eq!(validate_id(" A-17 "), Ok("A-17"));
/// assert!(validate_id("").is_err());
/// assert!(validate_id("   ").is_err());
/// ```
pub fn validate_id(id: &str) -> Result<&str, FieldError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(FieldError::EmptyId);
    }
    Ok(id)
}

/// Validates a student name.
///
/// ```
/// use roster::validation::validate_name;
///
/// assert_eq!(validate_name("Ana"), Ok("Ana"));
/// assert_eq!(validate_name("  Ana María "), Ok("Ana María"));
///
/// assert!(validate_name("").is_err());
/// assert!(validate_name("R2D2").is_err());
/// ```
pub fn validate_name(name: &str) -> Result<&str, FieldError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FieldError::EmptyName);
    }

    if let Some(digit) = name.chars().find(char::is_ascii_digit) {
        return Err(FieldError::DigitInName(digit));
    }

    Ok(name)
}

/// Validates a student age.
pub fn validate_age(age: i32) -> Result<(), FieldError> {
    if age <= 0 {
        return Err(FieldError::NonPositiveAge(age));
    }
    Ok(())
}

/// Parses raw text into an age, then validates it.
///
/// Presentation layers receive ages as text; a value that is not an integer
/// is rejected the same way a non-positive one is.
pub fn parse_age(raw: &str) -> Result<i32, FieldError> {
    let age = raw
        .trim()
        .parse::<i32>()
        .map_err(|_| FieldError::AgeNotNumeric(raw.to_string()))?;
    validate_age(age)?;
    Ok(age)
}

/// Error type for field validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("id cannot be empty")]
    EmptyId,

    #[error("name cannot be empty")]
    EmptyName,

    #[error("name cannot contain digits, found '{0}'")]
    DigitInName(char),

    #[error("age must be greater than zero, got {0}")]
    NonPositiveAge(i32),

    #[error("age must be a whole number, got '{0}'")]
    AgeNotNumeric(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ids() {
        assert!(validate_id("1").is_ok());
        assert!(validate_id("L00123").is_ok());
        assert_eq!(validate_id(" padded "), Ok("padded"));
    }

    #[test]
    fn test_invalid_blank_ids() {
        assert_eq!(validate_id(""), Err(FieldError::EmptyId));
        assert_eq!(validate_id(" \t"), Err(FieldError::EmptyId));
    }

    #[test]
    fn test_valid_names() {
        assert!(validate_name("Carlos").is_ok());
        assert!(validate_name("Ana María").is_ok());
        assert!(validate_name("O'Brien-Smith").is_ok());
    }

    #[test]
    fn test_name_is_trimmed_but_inner_spaces_kept() {
        assert_eq!(validate_name("\tAna  María \n"), Ok("Ana  María"));
    }

    #[test]
    fn test_invalid_empty_name() {
        assert_eq!(validate_name(""), Err(FieldError::EmptyName));
        assert_eq!(validate_name("   "), Err(FieldError::EmptyName));
    }

    #[test]
    fn test_invalid_name_with_digits() {
        assert_eq!(validate_name("Ana2"), Err(FieldError::DigitInName('2')));
        assert_eq!(validate_name("7"), Err(FieldError::DigitInName('7')));
        assert_eq!(
            validate_name("Carlos 5th"),
            Err(FieldError::DigitInName('5'))
        );
    }

    #[test]
    fn test_age_bounds() {
        assert!(validate_age(1).is_ok());
        assert!(validate_age(120).is_ok());
        assert_eq!(validate_age(0), Err(FieldError::NonPositiveAge(0)));
        assert_eq!(validate_age(-4), Err(FieldError::NonPositiveAge(-4)));
    }

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age("22"), Ok(22));
        assert_eq!(parse_age(" 30 "), Ok(30));
        assert_eq!(
            parse_age("twenty"),
            Err(FieldError::AgeNotNumeric("twenty".to_string()))
        );
        assert_eq!(
            parse_age("2.5"),
            Err(FieldError::AgeNotNumeric("2.5".to_string()))
        );
        assert_eq!(parse_age("0"), Err(FieldError::NonPositiveAge(0)));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FieldError::EmptyName.to_string(), "name cannot be empty");
        assert_eq!(
            FieldError::DigitInName('3').to_string(),
            "name cannot contain digits, found '3'"
        );
    }
}
