use crate::utils::error::{HotelSystemError, Result};
use chrono::NaiveDate;
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HotelSystemError::validation(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_email(field_name: &str, email: &str) -> Result<()> {
    validate_non_empty_string(field_name, email)?;

    match email.trim().split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        Some(_) => Err(HotelSystemError::validation(
            field_name,
            format!("'{}' needs text on both sides of '@'", email),
        )),
        None => Err(HotelSystemError::validation(
            field_name,
            format!("'{}' is missing the '@' separator", email),
        )),
    }
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(HotelSystemError::validation(
            field_name,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_non_negative_amount(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(HotelSystemError::validation(
            field_name,
            "Value must be a finite number",
        ));
    }
    if value < 0.0 {
        return Err(HotelSystemError::validation(
            field_name,
            format!("Value must not be negative, got {}", value),
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(HotelSystemError::validation(
            field_name,
            format!("Value {} must be between {} and {}", value, min, max),
        ));
    }
    Ok(())
}

/// Fails on `end_field` unless `start` is strictly before `end`.
pub fn validate_date_order(end_field: &str, start: NaiveDate, end: NaiveDate) -> Result<()> {
    if start >= end {
        return Err(HotelSystemError::validation(
            end_field,
            format!("{} must be after {}", end, start),
        ));
    }
    Ok(())
}

pub fn parse_iso_date(field_name: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
        HotelSystemError::validation(
            field_name,
            format!("'{}' is not a YYYY-MM-DD date: {}", value, e),
        )
    })
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(HotelSystemError::validation(field_name, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(HotelSystemError::validation(
            field_name,
            "Path contains null bytes",
        ));
    }

    Ok(())
}

pub fn validate_file_extensions(
    field_name: &str,
    files: &[&str],
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    for file in files {
        match std::path::Path::new(file)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            Some(extension) if allowed_set.contains(extension) => {}
            Some(extension) => {
                return Err(HotelSystemError::validation(
                    field_name,
                    format!(
                        "Unsupported file extension '{}' in {}. Allowed extensions: {}",
                        extension,
                        file,
                        allowed_extensions.join(", ")
                    ),
                ));
            }
            None => {
                return Err(HotelSystemError::validation(
                    field_name,
                    format!("{} has no extension or is not a valid file name", file),
                ));
            }
        }
    }

    Ok(())
}
