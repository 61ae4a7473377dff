use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;
use std::io;
use std::time::Duration;

/// Per-request failures. The listener keeps serving after returning one.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    InvalidRequest(String),
}

impl AppError {
    /// Message sent to the client in the `error` field.
    pub fn message(&self) -> &str {
        match self {
            AppError::NotFound(msg) | AppError::InvalidRequest(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.message(),
        })
    }
}

/// Process-level failures. All of them end the process.
#[derive(Debug)]
pub enum ServerError {
    ListenerStart(io::Error),
    Listener(io::Error),
    Signal(io::Error),
    ShutdownTimeout(Duration),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::ListenerStart(e) => write!(f, "Error starting server: {}", e),
            ServerError::Listener(e) => write!(f, "Server stopped unexpectedly: {}", e),
            ServerError::Signal(e) => write!(f, "Failed to install signal handlers: {}", e),
            ServerError::ShutdownTimeout(grace) => write!(
                f,
                "Server forced to shutdown: in-flight requests still running after {}s",
                grace.as_secs_f64()
            ),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServerError::ListenerStart(e) | ServerError::Listener(e) | ServerError::Signal(e) => {
                Some(e)
            }
            ServerError::ShutdownTimeout(_) => None,
        }
    }
}
