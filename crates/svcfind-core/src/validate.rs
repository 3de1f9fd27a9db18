//! Input validation shared by the search form and the visit recorder.
//!
//! Rules run locally before any network call: a search or a visit submission
//! never reaches the wire with inputs that fail here.

use std::fmt;

use thiserror::Error;

/// Lowest postcode accepted anywhere in the system.
pub const POSTCODE_MIN: u32 = 100_000;
/// Highest postcode accepted anywhere in the system.
pub const POSTCODE_MAX: u32 = 999_999;
/// Upper bound of the optional age filter.
pub const AGE_MAX: u8 = 99;

/// A locally detected input violation. Carries the first rule that failed;
/// callers surface the message as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("postcode {0:?} is not a valid number")]
    MalformedPostcode(String),

    #[error("postcode {0} is outside the valid range 100000-999999")]
    PostcodeOutOfRange(u32),

    #[error("age {0} is outside the valid range 0-99")]
    AgeOutOfRange(u8),

    #[error("service id must not be empty")]
    MissingServiceId,

    #[error("latitude {latitude} / longitude {longitude} is not a usable position")]
    CoordinateOutOfRange { latitude: f64, longitude: f64 },
}

/// A validated six-digit postcode.
///
/// Only values in `100000..=999999` exist; anything else fails
/// [`Postcode::parse`]. On the wire postcodes travel as text, so [`fmt::Display`]
/// is the canonical serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Postcode(u32);

impl Postcode {
    /// Parses a postcode from user-entered text, trimming surrounding
    /// whitespace first.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedPostcode`] when the text is not a
    /// number and [`ValidationError::PostcodeOutOfRange`] when it parses but
    /// falls outside `100000..=999999`.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        let value: u32 = trimmed
            .parse()
            .map_err(|_| ValidationError::MalformedPostcode(trimmed.to_owned()))?;
        if !(POSTCODE_MIN..=POSTCODE_MAX).contains(&value) {
            return Err(ValidationError::PostcodeOutOfRange(value));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Checks the optional age filter against the accepted `0..=99` range.
///
/// # Errors
///
/// Returns [`ValidationError::AgeOutOfRange`] when `age` exceeds [`AGE_MAX`].
pub fn validate_age(age: u8) -> Result<(), ValidationError> {
    if age > AGE_MAX {
        return Err(ValidationError::AgeOutOfRange(age));
    }
    Ok(())
}

/// Validates the raw search form inputs, failing on the first violated rule.
///
/// The postcode is checked before the age filter, matching the order the form
/// presents the fields.
///
/// # Errors
///
/// Propagates the first [`ValidationError`] from [`Postcode::parse`] or
/// [`validate_age`].
pub fn validate_search(postcode: &str, age: Option<u8>) -> Result<Postcode, ValidationError> {
    let parsed = Postcode::parse(postcode)?;
    if let Some(age) = age {
        validate_age(age)?;
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_postcode_inside_the_range() {
        let postcode = Postcode::parse("100123").unwrap();
        assert_eq!(postcode.as_u32(), 100_123);
        assert_eq!(postcode.to_string(), "100123");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let postcode = Postcode::parse("  999999 ").unwrap();
        assert_eq!(postcode.as_u32(), 999_999);
    }

    #[test]
    fn rejects_five_digit_postcodes() {
        assert_eq!(
            Postcode::parse("99999"),
            Err(ValidationError::PostcodeOutOfRange(99_999))
        );
    }

    #[test]
    fn rejects_seven_digit_postcodes() {
        assert_eq!(
            Postcode::parse("1000000"),
            Err(ValidationError::PostcodeOutOfRange(1_000_000))
        );
    }

    #[test]
    fn rejects_non_numeric_postcodes() {
        assert_eq!(
            Postcode::parse("1001ab"),
            Err(ValidationError::MalformedPostcode("1001ab".to_owned()))
        );
        assert_eq!(
            Postcode::parse(""),
            Err(ValidationError::MalformedPostcode(String::new()))
        );
    }

    #[test]
    fn accepts_range_boundaries() {
        assert!(Postcode::parse("100000").is_ok());
        assert!(Postcode::parse("999999").is_ok());
    }

    #[test]
    fn age_filter_accepts_zero_through_ninety_nine() {
        assert!(validate_age(0).is_ok());
        assert!(validate_age(99).is_ok());
        assert_eq!(validate_age(100), Err(ValidationError::AgeOutOfRange(100)));
    }

    #[test]
    fn search_checks_postcode_before_age() {
        let err = validate_search("abc", Some(200)).unwrap_err();
        assert_eq!(err, ValidationError::MalformedPostcode("abc".to_owned()));
    }

    #[test]
    fn search_without_an_age_filter_skips_the_age_rule() {
        assert!(validate_search("100115", None).is_ok());
    }
}
