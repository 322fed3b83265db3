use std::sync::LazyLock;
use regex::Regex;
use crate::domain::models::rsvp::{MealChoice, RsvpForm};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Checks a single RSVP field. `form` supplies the context for fields whose
/// rules depend on other answers (the meal is only required for a "yes").
pub fn validate_field(field: &str, value: &str, form: &RsvpForm) -> Option<String> {
    match field {
        "name" => validate_name(value),
        "email" => {
            if value.trim().is_empty() {
                Some("Email is required".to_string())
            } else if !is_valid_email(value) {
                Some("Please enter a valid email address".to_string())
            } else {
                None
            }
        }
        "attending" => match value {
            "yes" | "no" => None,
            _ => Some("Please let us know if you can attend".to_string()),
        },
        "mealChoice" => {
            let value = value.trim();
            if form.attending != "yes" {
                None
            } else if value.is_empty() {
                Some("Please select a meal choice".to_string())
            } else if MealChoice::parse(value).is_none() {
                Some("Please select a meal from the menu".to_string())
            } else {
                None
            }
        }
        _ => None,
    }
}

pub fn validate_name(value: &str) -> Option<String> {
    let trimmed = value.trim();
    let len = trimmed.chars().count();
    if trimmed.is_empty() {
        Some("Name is required".to_string())
    } else if len < NAME_MIN_CHARS {
        Some(format!("Name must be at least {} characters", NAME_MIN_CHARS))
    } else if len > NAME_MAX_CHARS {
        Some(format!("Name must be at most {} characters", NAME_MAX_CHARS))
    } else {
        None
    }
}

/// Validates the required fields in a fixed order (name, email, attending)
/// and reports the first failure.
pub fn validate_required(form: &RsvpForm) -> Result<(), String> {
    let checks = [
        ("name", form.name.as_str()),
        ("email", form.email.as_str()),
        ("attending", form.attending.as_str()),
    ];

    for (field, value) in checks {
        if let Some(err) = validate_field(field, value, form) {
            return Err(err);
        }
    }
    Ok(())
}
