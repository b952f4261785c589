use miette::Diagnostic;
use thiserror::Error;

/// Main error type for zeplin-cli operations
#[derive(Error, Diagnostic, Debug)]
pub enum ZeplinError {
    #[error("IO error: {0}")]
    #[diagnostic(code(zeplin::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(zeplin::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid screen URL: {message}")]
    #[diagnostic(
        code(zeplin::url),
        help("Expected https://app.zeplin.io/project/{{projectId}}/screen/{{screenId}}")
    )]
    InvalidUrl { message: String },

    #[error("{message}")]
    #[diagnostic(code(zeplin::api))]
    Api { status: u16, message: String },

    #[error("HTTP error: {message}")]
    #[diagnostic(code(zeplin::http))]
    Http { message: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(zeplin::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(zeplin::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Encode error: {message}")]
    #[diagnostic(code(zeplin::encode))]
    Encode { message: String },

    #[error("Prompt error: {message}")]
    #[diagnostic(code(zeplin::prompt))]
    Prompt { message: String },
}

impl ZeplinError {
    /// Build an API error with the user-facing message for `status`.
    pub fn api(status: u16) -> Self {
        let message = match status {
            401 => "Authentication failed. Check ZEPLIN_TOKEN.".to_string(),
            403 => "You do not have permission to access this resource.".to_string(),
            404 => "Screen not found. Check the URL.".to_string(),
            _ => format!("API request failed (status {})", status),
        };
        Self::Api { status, message }
    }
}

impl From<reqwest::Error> for ZeplinError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => Self::api(status.as_u16()),
            None => Self::Http {
                message: e.to_string(),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ZeplinError>;
