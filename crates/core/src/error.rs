use std::fmt;

/// Ordered, human-readable messages produced by a rejected record.
///
/// Displays as the messages joined by newlines, which is also the body the
/// API sends back on a 400.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationFailure {
    messages: Vec<String>,
}

impl ValidationFailure {
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages.join("\n"))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(ValidationFailure),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_displays_newline_joined_messages() {
        let failure = ValidationFailure::new(vec!["first".into(), "second".into()]);
        assert_eq!(failure.to_string(), "first\nsecond");
    }

    #[test]
    fn core_error_prefixes_validation_messages() {
        let err = CoreError::Validation(ValidationFailure::new(vec!["too short".into()]));
        assert_eq!(err.to_string(), "Validation failed: too short");
    }

    #[test]
    fn empty_failure_reports_empty() {
        assert!(ValidationFailure::default().is_empty());
        assert_eq!(ValidationFailure::default().to_string(), "");
    }
}
