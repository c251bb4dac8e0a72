use axum::{
    Json,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::use_cases::auth::signup::SignupError;
use crate::application::use_cases::bookings::accept_booking::AcceptBookingError;
use crate::application::use_cases::bookings::cancel_booking::CancelBookingError;
use crate::application::use_cases::bookings::complete_booking::CompleteBookingError;
use crate::application::use_cases::hostels::create_hostel::CreateHostelError;

/// Operational error surfaced to the client as `{status, message}`.
/// Anything that is not an anticipated failure bubbles up as Internal and
/// is reported generically.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            ApiError::Internal(e) => {
                tracing::error!(error = ?e, "unhandled_error");
                "Something went very wrong!".to_string()
            }
            other => other.to_string(),
        };
        let body = ErrorBody {
            status: if status.is_server_error() {
                "error"
            } else {
                "fail"
            },
            message,
        };
        (status, Json(body)).into_response()
    }
}

/// Router fallback for unmatched paths.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Can't find {} on this server!", uri.path()))
}

impl From<SignupError> for ApiError {
    fn from(e: SignupError) -> Self {
        match e {
            SignupError::Other(inner) => ApiError::Internal(inner),
            known => ApiError::BadRequest(known.to_string()),
        }
    }
}

impl From<AcceptBookingError> for ApiError {
    fn from(e: AcceptBookingError) -> Self {
        match e {
            AcceptBookingError::Other(inner) => ApiError::Internal(inner),
            known => ApiError::BadRequest(known.to_string()),
        }
    }
}

impl From<CompleteBookingError> for ApiError {
    fn from(e: CompleteBookingError) -> Self {
        match e {
            CompleteBookingError::Other(inner) => ApiError::Internal(inner),
            known => ApiError::BadRequest(known.to_string()),
        }
    }
}

impl From<CancelBookingError> for ApiError {
    fn from(e: CancelBookingError) -> Self {
        match e {
            CancelBookingError::Other(inner) => ApiError::Internal(inner),
            known => ApiError::BadRequest(known.to_string()),
        }
    }
}

impl From<CreateHostelError> for ApiError {
    fn from(e: CreateHostelError) -> Self {
        match e {
            CreateHostelError::Other(inner) => ApiError::Internal(inner),
            known => ApiError::BadRequest(known.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(resp: Response) -> serde_json::Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn client_errors_render_fail_with_message() {
        let resp = ApiError::BadRequest("Passwords do not match".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(body["status"], "fail");
        assert_eq!(body["message"], "Passwords do not match");
    }

    #[tokio::test]
    async fn internal_errors_render_error_without_detail() {
        let resp = ApiError::Internal(anyhow::anyhow!("pool exhausted")).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(resp).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Something went very wrong!");
    }

    #[tokio::test]
    async fn fallback_names_the_requested_path() {
        let err = not_found("/api/v1/nope".parse::<Uri>().unwrap()).await;
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        let body = body_json(err.into_response()).await;
        assert_eq!(body["message"], "Can't find /api/v1/nope on this server!");
    }
}
