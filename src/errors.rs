use thiserror::Error;

/// What went wrong with a single field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    #[error("required field is missing")]
    Missing,
    /// Wrong type, value outside an enumeration, malformed timestamp or
    /// handle. The message names what was expected and what was found.
    #[error("{message}")]
    Invalid { message: String },
}

/// Raised when a raw frontmatter mapping cannot become a typed record.
///
/// Construction is all-or-nothing, so the first offending field aborts it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field '{field}': {kind}")]
pub struct ValidationError {
    pub field: String,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, kind: ValidationErrorKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, ValidationErrorKind::Missing)
    }

    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            field,
            ValidationErrorKind::Invalid {
                message: message.into(),
            },
        )
    }

    /// Prefixes the field path, used when a nested mapping fails.
    pub fn nested_in(mut self, parent: &str) -> Self {
        self.field = if self.field.is_empty() {
            parent.to_string()
        } else {
            format!("{parent}.{}", self.field)
        };
        self
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for ValidationError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        // The root path prints as ".".
        let path = match err.path().to_string() {
            root if root == "." => String::new(),
            path => path,
        };
        let message = err.into_inner().to_string();
        // A missing field is reported against the struct that lacks it.
        let missing = message
            .strip_prefix("missing field `")
            .and_then(|rest| rest.strip_suffix('`'))
            .map(str::to_string);
        match missing {
            Some(name) if path.is_empty() => Self::missing(name),
            Some(name) => Self::missing(format!("{path}.{name}")),
            None => Self::invalid(path, message),
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Speaker {
        name: String,
        links: Vec<String>,
    }

    fn decode(value: serde_json::Value) -> ValidationError {
        let decoded: Result<Speaker, _> = serde_path_to_error::deserialize(&value);
        decoded.map_err(ValidationError::from).unwrap_err()
    }

    #[test]
    fn display_names_field_and_message() {
        let err = ValidationError::invalid("published", "expected a boolean, got string");
        let text = err.to_string();
        assert!(text.starts_with("field 'published':"));
        assert!(text.contains("boolean"));
    }

    #[test]
    fn nested_prefixes_parent_path() {
        let err = ValidationError::missing("mastodon").nested_in("social");
        assert_eq!(err.field, "social.mastodon");
        assert_eq!(ValidationError::missing("").nested_in("[3]").field, "[3]");
    }

    #[test]
    fn serde_missing_field_becomes_missing() {
        let err = decode(json!({ "links": [] }));
        assert_eq!(err, ValidationError::missing("name"));
    }

    #[test]
    fn serde_type_error_keeps_path_and_message() {
        let err = decode(json!({ "name": "Ada", "links": ["a", 7] }));
        assert_eq!(err.field, "links[1]");
        match err.kind {
            ValidationErrorKind::Invalid { message } => {
                assert!(message.contains("expected a string"), "{message}")
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }
}
