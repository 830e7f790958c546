//! Error types for the knowledge service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for knowledge service operations
pub type Result<T> = std::result::Result<T, Error>;

/// Remediation shown when Google answers HTTP 400, which means the sheet is not shared publicly
pub const NOT_PUBLIC_MESSAGE: &str =
    "Connection failed: make sure the sheet is shared as \
     \"Anyone with the link can view\" and try again.";

/// Knowledge service errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input did not contain any recognizable spreadsheet link
    #[error("{0}")]
    InvalidSource(String),

    /// Worksheet discovery failed for a workbook
    #[error(
        "Unable to list worksheets, make sure the spreadsheet is public or published: \
         {message}"
    )]
    Discovery {
        spreadsheet_id: String,
        status: Option<u16>,
        message: String,
    },

    /// Tabular export answered with a non-success status
    #[error("HTTP {status}")]
    Fetch { url: String, status: u16 },

    /// Fewer than two rows (header plus data)
    #[error("Worksheet has no data rows")]
    EmptyData,

    /// Nothing to fetch after discovery
    #[error("No worksheet links to fetch")]
    NoEndpoints,

    /// Every endpoint failed
    #[error("Could not read any worksheet")]
    NoTableReadable { not_public: bool },

    /// Invalid request input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML config error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a discovery error
    pub fn discovery(
        spreadsheet_id: impl Into<String>,
        status: Option<u16>,
        message: impl Into<String>,
    ) -> Self {
        Self::Discovery {
            spreadsheet_id: spreadsheet_id.into(),
            status,
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP 400 from Google means the resource is not readable without sign-in
    pub fn is_not_public(&self) -> bool {
        match self {
            Error::Fetch { status, .. } => *status == 400,
            Error::Discovery { status, .. } => *status == Some(400),
            Error::NoTableReadable { not_public } => *not_public,
            _ => false,
        }
    }
}

/// Human-readable status line for a failed connect or refresh
pub fn connection_failure_message(err: &Error) -> String {
    if err.is_not_public() {
        NOT_PUBLIC_MESSAGE.to_string()
    } else {
        format!("Connection failed: {}", err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            Error::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            Error::InvalidSource(_) => (StatusCode::BAD_REQUEST, "invalid_source"),
            Error::Discovery { .. } => (StatusCode::BAD_GATEWAY, "discovery_error"),
            Error::Fetch { .. } => (StatusCode::BAD_GATEWAY, "fetch_error"),
            Error::EmptyData => (StatusCode::UNPROCESSABLE_ENTITY, "empty_data"),
            Error::NoEndpoints => (StatusCode::BAD_REQUEST, "no_endpoints"),
            Error::NoTableReadable { .. } => (StatusCode::BAD_GATEWAY, "no_table_readable"),
            Error::InvalidInput(_) => (StatusCode::BAD_REQUEST, "invalid_input"),
            Error::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "io_error"),
            Error::Toml(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            Error::Http(_) => (StatusCode::BAD_GATEWAY, "http_error"),
            Error::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let message = if self.is_not_public() {
            NOT_PUBLIC_MESSAGE.to_string()
        } else {
            self.to_string()
        };

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
