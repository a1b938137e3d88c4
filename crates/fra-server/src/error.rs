//! Error types for the HTTP layer

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use fra_dashboard::DashboardError;
use std::path::PathBuf;
use tracing::{error, warn};

/// Configuration could not be loaded
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File unreadable
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File is not a valid configuration
    #[error("invalid config {path}: {source}")]
    Parse {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },

    /// Configuration could not be rendered
    #[error("failed to render config: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Error returned by a route; rendered as `{"error": "..."}`
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Shell or backend failure
    #[error(transparent)]
    Dashboard(#[from] DashboardError),

    /// Request body or query could not be read
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    /// HTTP status for this error
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Dashboard(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            Self::Dashboard(err) if err.is_invalid_input() => StatusCode::BAD_REQUEST,
            Self::Dashboard(err) if err.is_conflict() => StatusCode::CONFLICT,
            Self::Dashboard(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<fra_core::CoreError> for ApiError {
    fn from(err: fra_core::CoreError) -> Self {
        Self::Dashboard(err.into())
    }
}

impl From<fra_atlas::AtlasError> for ApiError {
    fn from(err: fra_atlas::AtlasError) -> Self {
        Self::Dashboard(err.into())
    }
}

impl From<fra_data::DataError> for ApiError {
    fn from(err: fra_data::DataError) -> Self {
        Self::Dashboard(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(error = %self, %status, "request rejected");
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Result type alias for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use fra_core::CoreError;
    use fra_data::DataError;

    #[test]
    fn status_mapping() {
        let missing = ApiError::from(DataError::VillageNotFound(99));
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let bad = ApiError::from(CoreError::UnknownLanguage("xx".into()));
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

        let io = ApiError::from(DashboardError::Preference {
            path: "theme".into(),
            source: std::io::Error::other("read-only"),
        });
        assert_eq!(io.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let stale = ApiError::from(DashboardError::StaleDigitization);
        assert_eq!(stale.status(), StatusCode::CONFLICT);

        let exhausted = ApiError::from(DataError::SequenceExhausted("IFR-MP-".into()));
        assert_eq!(exhausted.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
