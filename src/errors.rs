use astra::Response;
// errors.rs
use crate::prediction::InputError;
use std::fmt;

/// Errors originating from either the server logic
/// (routing, bad input, etc.) or the startup loads (dataset, model, config).
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    InvalidInput(InputError),
    DataError(String),
    ModelError(String),
    ConfigError(String),
    XlsxError(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) | ServerError::InvalidInput(_) => 400,
            _ => 500,
        }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::InvalidInput(err) => write!(f, "Invalid input: {err}"),
            ServerError::DataError(msg) => write!(f, "Dataset Error: {msg}"),
            ServerError::ModelError(msg) => write!(f, "Model Error: {msg}"),
            ServerError::ConfigError(msg) => write!(f, "Config Error: {msg}"),
            ServerError::XlsxError(msg) => write!(f, "Spreadsheet Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServerError::InvalidInput(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InputError> for ServerError {
    fn from(err: InputError) -> Self {
        ServerError::InvalidInput(err)
    }
}
