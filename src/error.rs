//! Unified error types for intake, generation, and configuration.

use std::fmt;

// ---------------------------------------------------------------------------
// FormError
// ---------------------------------------------------------------------------

/// Errors raised while editing or completing the design form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormError {
    /// A field value was rejected by its input rules.
    InvalidField { field: &'static str, reason: String },
    /// Submission attempted before every field was populated.
    Incomplete(Vec<&'static str>),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidField { field, reason } => write!(f, "invalid {field}: {reason}"),
            Self::Incomplete(missing) => {
                write!(f, "form incomplete, missing: {}", missing.join(", "))
            }
        }
    }
}

impl std::error::Error for FormError {}

// ---------------------------------------------------------------------------
// SubmitError
// ---------------------------------------------------------------------------

/// Errors from submitting a design request to the design service.
#[derive(Debug)]
pub enum SubmitError {
    /// Network / reqwest-level error.
    Http(reqwest::Error),
    /// Non-2xx status from the design endpoint.
    Status { code: u16, body: String },
    /// The endpoint answered 2xx with a body that is not JSON.
    InvalidResponse(String),
    /// The form could not be turned into a request.
    Form(FormError),
}

impl SubmitError {
    /// HTTP status code, when the failure came from a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "http: {e}"),
            Self::Status { code, body } if body.is_empty() => write!(f, "status {code}"),
            Self::Status { code, body } => write!(f, "status {code}: {body}"),
            Self::InvalidResponse(msg) => write!(f, "invalid response: {msg}"),
            Self::Form(e) => write!(f, "form: {e}"),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<reqwest::Error> for SubmitError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<FormError> for SubmitError {
    fn from(e: FormError) -> Self {
        Self::Form(e)
    }
}

// ---------------------------------------------------------------------------
// GenerateError
// ---------------------------------------------------------------------------

/// Failure of a design generator to produce a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The generator could not build a design from the payload.
    Failed(String),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed(msg) => write!(f, "design generation failed: {msg}"),
        }
    }
}

impl std::error::Error for GenerateError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}
