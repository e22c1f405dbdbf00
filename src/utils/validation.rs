use chrono::NaiveDateTime;

use crate::core::model::TIMESTAMP_FORMAT;
use crate::utils::error::{FilterError, Result};

/// Rejects an empty or whitespace-only district before any store access.
pub fn validate_district(district: &str) -> Result<&str> {
    let trimmed = district.trim();
    if trimmed.is_empty() {
        return Err(FilterError::Validation {
            message: "Please enter a district name.".to_string(),
        });
    }
    Ok(trimmed)
}

/// Parses the window start in the fixed `yyyy-MM-dd HH:mm:ss` form.
pub fn parse_window_start(raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).map_err(|_| {
        FilterError::Validation {
            message: "Enter a valid start date in yyyy-MM-dd HH:mm:ss format.".to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_district() {
        assert_eq!(validate_district("North").unwrap(), "North");
        assert_eq!(validate_district("  North  ").unwrap(), "North");
        assert!(validate_district("").is_err());
        assert!(validate_district("   ").is_err());
        assert!(validate_district("\t\n").is_err());
    }

    #[test]
    fn test_parse_window_start() {
        let parsed = parse_window_start("2024-01-01 10:00:00").unwrap();
        assert_eq!(parsed.format(TIMESTAMP_FORMAT).to_string(), "2024-01-01 10:00:00");

        // Surrounding whitespace is tolerated, format deviations are not.
        assert!(parse_window_start(" 2024-01-01 10:00:00 ").is_ok());
        assert!(parse_window_start("01/01/2024 10:00").is_err());
        assert!(parse_window_start("2024-01-01T10:00:00").is_err());
        assert!(parse_window_start("not a date").is_err());
        assert!(parse_window_start("").is_err());
    }
}
