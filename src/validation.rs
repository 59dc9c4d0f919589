//! Field-level invariant checks for the join entities and Power updates.
//!
//! Checks run before any row is written and short-circuit on the first
//! failing field; the message of that failure is what the API surfaces.
//! Foreign-key existence is checked in the repositories, inside the same
//! transaction as the insert, and reported through the same error type.

use thiserror::Error;

pub const ALLOWED_STRENGTHS: [&str; 3] = ["Strong", "Weak", "Average"];

pub const MIN_DESCRIPTION_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Strength must be one of the following values: 'Strong', 'Weak', 'Average'.")]
    InvalidStrength,

    #[error("Rating must be between 1 and 5.")]
    RatingOutOfRange,

    #[error("Description must be at least 20 characters long.")]
    DescriptionTooShort,

    #[error("Hero does not exist.")]
    UnknownHero,

    #[error("Power does not exist.")]
    UnknownPower,

    #[error("Episode does not exist.")]
    UnknownEpisode,

    #[error("Guest does not exist.")]
    UnknownGuest,
}

/// Case-sensitive membership check against the allowed strength set.
pub fn validate_strength(value: &str) -> Result<&str, ValidationError> {
    if ALLOWED_STRENGTHS.contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::InvalidStrength)
    }
}

pub fn validate_rating(value: i32) -> Result<i32, ValidationError> {
    if (1..=5).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::RatingOutOfRange)
    }
}

/// Length is counted in characters, not bytes.
pub fn validate_description(value: &str) -> Result<&str, ValidationError> {
    if value.chars().count() < MIN_DESCRIPTION_LEN {
        Err(ValidationError::DescriptionTooShort)
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_strength() {
        assert!(validate_strength("Strong").is_ok());
        assert!(validate_strength("Weak").is_ok());
        assert!(validate_strength("Average").is_ok());
        assert_eq!(
            validate_strength("strong"),
            Err(ValidationError::InvalidStrength)
        );
        assert_eq!(
            validate_strength("Mediocre"),
            Err(ValidationError::InvalidStrength)
        );
        assert_eq!(validate_strength(""), Err(ValidationError::InvalidStrength));
    }

    #[test]
    fn test_validate_rating_boundaries() {
        assert_eq!(validate_rating(0), Err(ValidationError::RatingOutOfRange));
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(3).is_ok());
        assert!(validate_rating(5).is_ok());
        assert_eq!(validate_rating(6), Err(ValidationError::RatingOutOfRange));
        assert_eq!(validate_rating(-4), Err(ValidationError::RatingOutOfRange));
    }

    #[test]
    fn test_validate_description() {
        assert_eq!(
            validate_description("too short"),
            Err(ValidationError::DescriptionTooShort)
        );
        // Exactly 20 characters is accepted.
        assert!(validate_description("exactly--20--chars!!").is_ok());
        assert!(validate_description("gives the wielder super-human strengths").is_ok());
        // Multi-byte characters count once each.
        assert!(validate_description("ヒーローはとても強い力を持っているのです").is_ok());
    }

    #[test]
    fn test_error_messages_match_api_contract() {
        assert_eq!(
            ValidationError::DescriptionTooShort.to_string(),
            "Description must be at least 20 characters long."
        );
        assert_eq!(
            ValidationError::InvalidStrength.to_string(),
            "Strength must be one of the following values: 'Strong', 'Weak', 'Average'."
        );
        assert_eq!(
            ValidationError::RatingOutOfRange.to_string(),
            "Rating must be between 1 and 5."
        );
        assert_eq!(ValidationError::UnknownHero.to_string(), "Hero does not exist.");
    }
}
