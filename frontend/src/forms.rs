//! Search form validation.

use thiserror::Error;

/// Why a search form submission was blocked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Nothing but whitespace was entered.
    #[error("Please enter a search term.")]
    EmptySearch,
}

/// Guard for the search form's submit event.
///
/// Returns the value to submit unchanged, or [`FormError::EmptySearch`]
/// when it is blank.
pub fn validate_search_submission(value: &str) -> Result<&str, FormError> {
    if value.trim().is_empty() {
        return Err(FormError::EmptySearch);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_submission_is_blocked() {
        assert_eq!(validate_search_submission("  \t"), Err(FormError::EmptySearch));
        assert_eq!(
            FormError::EmptySearch.to_string(),
            "Please enter a search term."
        );
    }

    #[test]
    fn value_is_submitted_untrimmed() {
        assert_eq!(validate_search_submission(" rust "), Ok(" rust "));
    }
}
