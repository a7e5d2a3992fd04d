//! Field-level validation rules shared by the registration and login forms.
//!
//! DESIGN
//! ======
//! Each rule is a pure function returning `Err(message)` with the exact text
//! rendered under the input. Drafts compose these rules without
//! short-circuiting so every invalid field is reported at once.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;
use time::Date;
use time::macros::format_description;

// Patterns are literals; `None` only if the regex engine rejects them, in
// which case every check fails closed.
static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").ok());
static PHONE_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[0-9]{10}$").ok());
static PHONE_SEPARATORS_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[\s-]").ok());

fn matches(re: &LazyLock<Option<Regex>>, value: &str) -> bool {
    re.as_ref().is_some_and(|re| re.is_match(value))
}

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_PASSWORD_CHARS: usize = 8;

pub fn name(value: &str) -> Result<(), &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("Name is required");
    }
    if trimmed.chars().count() < MIN_NAME_CHARS {
        return Err("Name must be at least 2 characters");
    }
    Ok(())
}

pub fn email(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err("Email is required");
    }
    if !matches(&EMAIL_RE, value) {
        return Err("Please enter a valid email");
    }
    Ok(())
}

/// Strip spaces and hyphens, then require exactly ten ASCII digits.
#[must_use]
pub fn is_ten_digit_phone(value: &str) -> bool {
    let Some(separators) = PHONE_SEPARATORS_RE.as_ref() else {
        return false;
    };
    let digits = separators.replace_all(value, "");
    matches(&PHONE_RE, &digits)
}

pub fn phone(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err("Phone number is required");
    }
    if !is_ten_digit_phone(value) {
        return Err("Please enter a valid 10-digit phone number");
    }
    Ok(())
}

pub fn emergency_phone(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err("Emergency contact is required");
    }
    if !is_ten_digit_phone(value) {
        return Err("Please enter a valid 10-digit phone number");
    }
    Ok(())
}

/// Lowercase, uppercase, and digit must each appear at least once.
#[must_use]
pub fn has_required_classes(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
}

pub fn password(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err("Password is required");
    }
    if value.chars().count() < MIN_PASSWORD_CHARS {
        return Err("Password must be at least 8 characters");
    }
    if !has_required_classes(value) {
        return Err("Password must contain uppercase, lowercase, and number");
    }
    Ok(())
}

pub fn confirm_password(password: &str, confirm: &str) -> Result<(), &'static str> {
    if confirm.is_empty() {
        return Err("Please confirm your password");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    Ok(())
}

/// Non-blank after trimming, otherwise `message`.
pub fn required(value: &str, message: &'static str) -> Result<(), &'static str> {
    if value.trim().is_empty() { Err(message) } else { Ok(()) }
}

pub fn experience_years(value: &str) -> Result<(), &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("Driving experience is required");
    }
    match trimmed.parse::<f64>() {
        Ok(years) if years.is_finite() && years >= 0.0 => Ok(()),
        _ => Err("Please enter a valid number of years"),
    }
}

/// Parse an HTML date input value (`YYYY-MM-DD`).
#[must_use]
pub fn parse_date(value: &str) -> Option<Date> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]")).ok()
}

/// Date of birth must parse and lie strictly before `today`.
pub fn date_of_birth(value: &str, today: Date) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("Date of birth is required");
    }
    match parse_date(value) {
        Some(dob) if dob < today => Ok(()),
        _ => Err("Please enter a valid date of birth"),
    }
}

/// Parse a coordinate and check it lies in the closed interval `[-limit, limit]`.
fn coordinate(value: &str, limit: f64, missing: &'static str, out_of_range: &'static str) -> Result<f64, &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(missing);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if (-limit..=limit).contains(&v) => Ok(v),
        _ => Err(out_of_range),
    }
}

pub fn latitude(value: &str) -> Result<f64, &'static str> {
    coordinate(value, 90.0, "Latitude is required", "Latitude must be between -90 and 90")
}

pub fn longitude(value: &str) -> Result<f64, &'static str> {
    coordinate(value, 180.0, "Longitude is required", "Longitude must be between -180 and 180")
}

/// Split a comma-separated list, dropping blank entries.
#[must_use]
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
