use thiserror::Error;

/// Field-level rule violations for stored records.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },
    #[error("{field} must be at most {max} characters, got {actual}")]
    TooLong { field: &'static str, max: usize, actual: usize },
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
    #[error("invalid price: {0}")]
    InvalidPrice(f64),
    #[error("invalid file name: {0}")]
    InvalidFileName(String),
}

/// Checks a required text field against its maximum length in characters.
pub fn check_text(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(())
}

/// A deliberately small email check: one `@`, a non-empty local part and a
/// dotted domain, no whitespace.
pub fn check_email(value: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidEmail(value.to_string());

    if value.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(invalid());
    }
    Ok(())
}

pub fn check_price(price: f64) -> Result<(), ValidationError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidPrice(price))
    }
}
