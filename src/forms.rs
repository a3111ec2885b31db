//! Form Validation

use thiserror::Error;

pub const MAX_LABEL_LEN: usize = 120;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Name is required")]
    Required,
    #[error("Name must be at most {} characters", MAX_LABEL_LEN)]
    TooLong,
}

/// Trimmed label, or why it cannot be saved
pub fn validate_label(input: &str) -> Result<String, FormError> {
    let label = input.trim();
    if label.is_empty() {
        return Err(FormError::Required);
    }
    if label.chars().count() > MAX_LABEL_LEN {
        return Err(FormError::TooLong);
    }
    Ok(label.to_string())
}
