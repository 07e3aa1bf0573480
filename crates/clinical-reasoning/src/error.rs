use crate::config::ConfigError;
use crate::engine::KnowledgeBaseError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Knowledge(KnowledgeBaseError),
    Input(serde_json::Error),
    /// An intake file could not be opened.
    IntakeRead {
        path: PathBuf,
        source: std::io::Error,
    },
    /// An intake file is not JSON, or its top level is neither a list nor a request.
    IntakeParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// An assessment could not be rendered as JSON.
    Render(serde_json::Error),
}

impl AppError {
    pub fn intake_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IntakeRead {
            path: path.into(),
            source,
        }
    }

    pub fn intake_parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::IntakeParse {
            path: path.into(),
            source,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Input(_) | AppError::IntakeParse { .. } => StatusCode::BAD_REQUEST,
            AppError::IntakeRead { .. } => StatusCode::NOT_FOUND,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Knowledge(_)
            | AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Knowledge(err) => write!(f, "knowledge base error: {}", err),
            AppError::Input(err) => write!(f, "invalid symptom input: {}", err),
            AppError::IntakeRead { path, source } => {
                write!(f, "cannot open symptom intake {}: {}", path.display(), source)
            }
            AppError::IntakeParse { path, source } => write!(
                f,
                "symptom intake {} is not usable (line {}, column {}): {}",
                path.display(),
                source.line(),
                source.column(),
                source
            ),
            AppError::Render(err) => write!(f, "failed to render assessment: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Knowledge(err) => Some(err),
            AppError::Input(err) => Some(err),
            AppError::IntakeRead { source, .. } => Some(source),
            AppError::IntakeParse { source, .. } => Some(source),
            AppError::Render(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<KnowledgeBaseError> for AppError {
    fn from(value: KnowledgeBaseError) -> Self {
        Self::Knowledge(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Input(value)
    }
}
