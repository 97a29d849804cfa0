use std::fmt;

/// Cost model error types
#[derive(Debug, Clone, PartialEq)]
pub enum CpsError {
    /// No platform records supplied
    EmptyInput,
    /// Negative or non-finite cost attribute, or non-positive search volume
    InvalidInput(String),
    /// Sweep range with min >= max, step <= 0, or non-finite bounds
    InvalidRange(String),
}

impl fmt::Display for CpsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Empty input: at least one platform is required"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InvalidRange(msg) => write!(f, "Invalid range: {}", msg),
        }
    }
}

impl std::error::Error for CpsError {}

impl CpsError {
    /// Stable identifier for machine-readable error output
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::InvalidInput(_) => "invalid_input",
            Self::InvalidRange(_) => "invalid_range",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CpsError::InvalidInput("search volume must be positive".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid input: search volume must be positive"
        );
        assert_eq!(
            CpsError::EmptyInput.to_string(),
            "Empty input: at least one platform is required"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(CpsError::EmptyInput.kind(), "empty_input");
        assert_eq!(CpsError::InvalidInput("x".to_string()).kind(), "invalid_input");
        assert_eq!(CpsError::InvalidRange("x".to_string()).kind(), "invalid_range");
    }
}
