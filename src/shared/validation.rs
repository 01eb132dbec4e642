/// Every rule a payload broke, reported together.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{}", .0.join("; "))]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(message: impl Into<String>) -> Self {
        Self(vec![message.into()])
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn into_messages(self) -> Vec<String> {
        self.0
    }

    /// `Ok(value)` when no rule was broken.
    pub fn finish<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.0.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    pub fn require_text(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(format!("{field} should not be empty"));
        }
    }

    pub fn require_length(&mut self, field: &str, value: &str, min: usize, max: usize) {
        let len = value.trim().chars().count();
        if len < min {
            self.push(format!("{field} must be at least {min} characters"));
        } else if len > max {
            self.push(format!("{field} must be at most {max} characters"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_all_broken_rules() {
        let mut errors = ValidationErrors::new();
        errors.require_text("title", "   ");
        errors.require_length("subject", "Hi", 3, 100);

        assert_eq!(
            errors.messages(),
            &[
                "title should not be empty".to_string(),
                "subject must be at least 3 characters".to_string(),
            ]
        );
        assert!(errors.finish(()).is_err());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let mut errors = ValidationErrors::new();
        errors.require_length("name", "Zoë", 2, 3);

        assert!(errors.is_empty());
    }
}
