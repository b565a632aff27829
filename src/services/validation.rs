//! Field rules shared by the domain services. Every check returns
//! `AppError::ValidationFailed` with a message naming the offending field.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::AppError;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("email pattern"));

static SKILL_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9 _-]+$").expect("skill name pattern"));

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_TEAM_SIZE: i64 = 1;
pub const MAX_TEAM_SIZE: i64 = 20;

fn invalid(message: impl Into<String>) -> AppError {
    AppError::ValidationFailed(message.into())
}

/// Trimmed length of `value` must fall within `min..=max` characters.
pub fn length_between(field: &str, value: &str, min: usize, max: usize) -> Result<(), AppError> {
    let len = value.trim().chars().count();
    if len == 0 {
        return Err(invalid(format!("{field} is required")));
    }
    if len < min || len > max {
        return Err(invalid(format!(
            "{field} must be between {min} and {max} characters"
        )));
    }
    Ok(())
}

pub fn required(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(invalid(format!("{field} is required")));
    }
    Ok(())
}

pub fn positive_id(field: &str, id: i64) -> Result<(), AppError> {
    if id <= 0 {
        return Err(invalid(format!("{field} must be a positive number")));
    }
    Ok(())
}

pub fn user_name(name: &str) -> Result<(), AppError> {
    length_between("Name", name, 2, 100)
}

pub fn email(email: &str) -> Result<(), AppError> {
    required("Email", email)?;
    if !EMAIL_RE.is_match(email.trim()) {
        return Err(invalid("Email format is invalid"));
    }
    Ok(())
}

pub fn password(password: &str) -> Result<(), AppError> {
    required("Password", password)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(invalid(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

pub fn skill_name(name: &str) -> Result<(), AppError> {
    length_between("Skill name", name, 2, 100)?;
    if !SKILL_NAME_RE.is_match(name.trim()) {
        return Err(invalid(
            "Skill name may only contain letters, numbers, spaces, hyphens and underscores",
        ));
    }
    Ok(())
}

pub fn hackathon_title(title: &str) -> Result<(), AppError> {
    length_between("Title", title, 3, 200)
}

pub fn date_order(start: NaiveDate, end: NaiveDate) -> Result<(), AppError> {
    if start > end {
        return Err(invalid("Start date must not be after end date"));
    }
    Ok(())
}

pub fn team_size(size: i64) -> Result<(), AppError> {
    if !(MIN_TEAM_SIZE..=MAX_TEAM_SIZE).contains(&size) {
        return Err(invalid(format!(
            "Max team size must be between {MIN_TEAM_SIZE} and {MAX_TEAM_SIZE}"
        )));
    }
    Ok(())
}

pub fn team_name(name: &str) -> Result<(), AppError> {
    length_between("Team name", name, 2, 100)
}

pub fn email_key(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_needs_local_part_and_domain() {
        assert!(email("alice@example.com").is_ok());
        assert!(email("  bob@uni.edu.in ").is_ok());
        assert!(email("alice@example").is_ok());
        assert!(email("alice@localhost").is_ok());
        assert!(email("alice.example.com").is_err());
        assert!(email("alice@").is_err());
        assert!(email("a b@example.com").is_err());
        assert!(email("").is_err());
    }

    #[test]
    fn skill_names_reject_punctuation() {
        assert!(skill_name("Rust").is_ok());
        assert!(skill_name("Machine-Learning_101").is_ok());
        assert!(skill_name("Node JS").is_ok());
        assert!(skill_name("C++").is_err());
        assert!(skill_name("R").is_err());
    }

    #[test]
    fn length_is_counted_after_trimming() {
        assert!(user_name(" A ").is_err());
        assert!(user_name("Al").is_ok());
        assert!(user_name(&"x".repeat(101)).is_err());
        assert!(hackathon_title("Hk").is_err());
        assert!(hackathon_title("Hack").is_ok());
    }

    #[test]
    fn team_size_bounds_are_inclusive() {
        assert!(team_size(1).is_ok());
        assert!(team_size(20).is_ok());
        assert!(team_size(0).is_err());
        assert!(team_size(21).is_err());
    }

    #[test]
    fn start_may_equal_end() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert!(date_order(day, day).is_ok());
        assert!(date_order(day, day.pred_opt().unwrap()).is_err());
    }

    #[test]
    fn short_passwords_are_rejected() {
        assert!(password("12345").is_err());
        assert!(password("123456").is_ok());
        assert!(matches!(
            password("      "),
            Err(AppError::ValidationFailed(ref m)) if m == "Password is required"
        ));
    }

    #[test]
    fn team_names_are_length_checked() {
        assert!(team_name("Rocketeers").is_ok());
        assert!(team_name("AB").is_ok());
        assert!(team_name("").is_err());
        assert!(team_name(" A ").is_err());
        assert!(team_name(&"t".repeat(101)).is_err());
    }

    #[test]
    fn ids_must_be_positive() {
        assert!(positive_id("Team ID", 1).is_ok());
        assert!(matches!(
            positive_id("Team ID", 0),
            Err(AppError::ValidationFailed(_))
        ));
    }
}
