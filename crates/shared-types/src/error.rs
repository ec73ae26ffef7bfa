use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    NotFound,
    Forbidden,
    ValidationError,
    Storage,
    Config,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Storage => write!(f, "Storage"),
            AppErrorKind::Config => write!(f, "Config"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured error shared by the engine and the UI.
///
/// Field errors are kept in a sorted map so the first reported field is
/// stable across runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub field_errors: BTreeMap<String, String>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: BTreeMap::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Forbidden, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: BTreeMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Storage, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Config, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InternalError, message)
    }

    /// Error message for a single form field, if any.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.field_errors.get(name).map(String::as_str)
    }

    /// One-line message suitable for a toast.
    ///
    /// Validation errors surface the first field message instead of the
    /// generic summary.
    pub fn toast_message(&self) -> String {
        match self.kind {
            AppErrorKind::ValidationError => self
                .field_errors
                .values()
                .next()
                .cloned()
                .unwrap_or_else(|| self.message.clone()),
            _ => self.message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::storage(format!("malformed preference data: {err}"))
    }
}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = BTreeMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_error_has_correct_kind() {
        let err = AppError::not_found("missing page");
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, "missing page");
        assert!(err.field_errors.is_empty());
    }

    #[test]
    fn forbidden_is_distinct_from_not_found() {
        assert_ne!(AppError::forbidden("x").kind, AppError::not_found("x").kind);
    }

    #[test]
    fn validation_toast_uses_first_field_message() {
        let mut fields = BTreeMap::new();
        fields.insert("subject".to_string(), "Subject is too short".to_string());
        fields.insert("customer_email".to_string(), "Enter a valid e-mail".to_string());
        let err = AppError::validation("Validation failed", fields);
        assert_eq!(err.toast_message(), "Enter a valid e-mail");
        assert_eq!(err.field("subject"), Some("Subject is too short"));
        assert_eq!(err.field("missing"), None);
    }

    #[test]
    fn toast_message_falls_back_to_summary() {
        let err = AppError::validation("Validation failed", BTreeMap::new());
        assert_eq!(err.toast_message(), "Validation failed");
        assert_eq!(AppError::storage("disk full").toast_message(), "disk full");
    }

    #[test]
    fn io_error_maps_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AppError = io.into();
        assert_eq!(err.kind, AppErrorKind::Storage);
        assert!(err.message.contains("denied"));
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::config("bad default_role");
        assert_eq!(format!("{}", err), "Config: bad default_role");
    }
}
