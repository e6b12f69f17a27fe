use thiserror::Error;

/// Custom error type for authentication, allow us to differentiate between errors.
///
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Bad parameter {0}")]
    BadParam(String),
    #[error("No credentials configured for {0}")]
    NoCredentials(String),
    #[error("HTTP Error: {0}")]
    HTTP(String),
    #[error("Credentials rejected for {0}")]
    Rejected(String),
    #[error("Unknown error.")]
    Unknown,
}

/// Everything the rendering service can throw back at us during submission.
///
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("HTTP Error: {0}")]
    HTTP(String),
    #[error("Submission rejected with status {0}")]
    Rejected(u16),
    #[error("Quota exceeded")]
    Quota,
    #[error("No route defined for {0}")]
    NoRoute(String),
}
