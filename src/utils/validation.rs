use crate::utils::error::{CinemaError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CinemaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// An exclusive interval `(lower, upper)` must contain at least one integer.
pub fn validate_bounds(field_name: &str, lower: Option<i64>, upper: Option<i64>) -> Result<()> {
    if let (Some(lower), Some(upper)) = (lower, upper) {
        if upper.saturating_sub(lower) < 2 {
            return Err(CinemaError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format!("({}, {})", lower, upper),
                reason: "Exclusive bounds leave no age inside the band".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_unique_names<'a, I>(field_name: &str, names: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(CinemaError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.to_string(),
                reason: "Duplicate band name".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("bands.name", "Barnpris").is_ok());
        assert!(validate_non_empty_string("bands.name", "").is_err());
        assert!(validate_non_empty_string("bands.name", "   ").is_err());
    }

    #[test]
    fn test_validate_bounds() {
        assert!(validate_bounds("bands.bounds", Some(0), Some(5)).is_ok());
        assert!(validate_bounds("bands.bounds", None, Some(5)).is_ok());
        assert!(validate_bounds("bands.bounds", Some(65), None).is_ok());
        assert!(validate_bounds("bands.bounds", None, None).is_ok());
        assert!(validate_bounds("bands.bounds", Some(4), Some(5)).is_err());
        assert!(validate_bounds("bands.bounds", Some(19), Some(0)).is_err());
    }

    #[test]
    fn test_validate_unique_names() {
        assert!(validate_unique_names("bands.name", ["a", "b"]).is_ok());
        assert!(validate_unique_names("bands.name", ["a", "b", "a"]).is_err());
    }
}
