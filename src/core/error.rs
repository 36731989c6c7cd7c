use thiserror::Error;

/// Rejected construction input. Callers fall back to defaults rather than
/// surfacing these to the page.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown ease `{0}`")]
    UnknownEase(String),
    #[error("`{name}` must be a finite positive number, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("malformed options: {0}")]
    Malformed(String),
}
