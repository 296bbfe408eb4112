use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct CodeQuestError {
    pub code: String,
    pub message: String,
}

impl CodeQuestError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn display_includes_code_and_message() {
        let error = CodeQuestError::new("VALIDATE_UNKNOWN_CHALLENGE", "Zone inconnue.");
        assert_eq!(
            error.to_string(),
            "VALIDATE_UNKNOWN_CHALLENGE: Zone inconnue."
        );
    }
}
