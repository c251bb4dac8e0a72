use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::ports::booking_repository::BookingRow;
use crate::application::use_cases::auth::get_profile::GetProfile;
use crate::application::use_cases::auth::signup::{Signup, SignupRequest};
use crate::application::use_cases::bookings::accept_booking::{AcceptBooking, AcceptOutcome};
use crate::application::use_cases::bookings::list_hostel_bookings::ListHostelBookings;
use crate::application::use_cases::bookings::list_my_bookings::ListCleanerBookings;
use crate::bootstrap::app_context::AppContext;
use crate::domain::accounts::Role;
use crate::domain::bookings::BookingStatus;
use crate::presentation::http::auth::{
    AuthResponse, Bearer, ProfileResponse, authenticate, token_response,
};
use crate::presentation::http::error::ApiError;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupBody {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub hostel_name: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupBody {
    pub(crate) fn into_request(self, role: Role) -> SignupRequest {
        SignupRequest {
            role,
            name: self.name,
            email: self.email,
            phone_number: self.phone_number,
            hostel_name: self.hostel_name,
            password: self.password,
            confirm_password: self.confirm_password,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingResponse {
    pub id: Uuid,
    pub student_id: Uuid,
    pub hostel_id: Uuid,
    pub cleaner_id: Option<Uuid>,
    pub status: BookingStatus,
    pub note: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<BookingRow> for BookingResponse {
    fn from(row: BookingRow) -> Self {
        BookingResponse {
            id: row.id,
            student_id: row.student_id,
            hostel_id: row.hostel_id,
            cleaner_id: row.cleaner_id,
            status: row.status,
            note: row.note,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingListResponse {
    pub status: &'static str,
    pub bookings: Vec<BookingResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct BookingIdQuery {
    #[serde(rename = "bookingID")]
    pub booking_id: Uuid,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/signup", post(cleaner_signup))
        .route("/getAllBookings", get(get_all_bookings))
        .route("/acceptBooking", post(accept_booking))
        .route("/getMyBookings", get(get_my_bookings))
        .route("/getMyProfile", get(get_my_profile))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/v1/cleaner/signup", tag = "Cleaner", request_body = SignupBody, security(()), responses(
    (status = 201, body = AuthResponse)
))]
pub async fn cleaner_signup(
    State(ctx): State<AppContext>,
    Json(body): Json<SignupBody>,
) -> Result<(StatusCode, HeaderMap, Json<AuthResponse>), ApiError> {
    let accounts = ctx.account_repo();
    let hostels = ctx.hostel_repo();
    let uc = Signup {
        accounts: accounts.as_ref(),
        hostels: hostels.as_ref(),
    };
    let account = uc.execute(&body.into_request(Role::Cleaner)).await?;
    token_response(&ctx.cfg, StatusCode::CREATED, account)
}

/// Hostel-wide work queue the cleaner can pick from.
#[utoipa::path(get, path = "/api/v1/cleaner/getAllBookings", tag = "Cleaner", responses(
    (status = 200, body = BookingListResponse)
))]
pub async fn get_all_bookings(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<BookingListResponse>, ApiError> {
    let identity = authenticate(&ctx.cfg, bearer)?.require(Role::Cleaner)?;
    let accounts = ctx.account_repo();
    let bookings = ctx.booking_repo();
    let uc = ListHostelBookings {
        accounts: accounts.as_ref(),
        bookings: bookings.as_ref(),
    };
    let rows = uc
        .execute(identity.account_id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Cleaner not found".into()))?;
    Ok(Json(BookingListResponse {
        status: "success",
        bookings: rows.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(post, path = "/api/v1/cleaner/acceptBooking", tag = "Cleaner",
    params(("bookingID" = Uuid, Query, description = "Booking to accept")),
    responses((status = 200, body = MessageResponse)))]
pub async fn accept_booking(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Query(q): Query<BookingIdQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let identity = authenticate(&ctx.cfg, bearer)?.require(Role::Cleaner)?;
    let bookings = ctx.booking_repo();
    let uc = AcceptBooking {
        bookings: bookings.as_ref(),
    };
    let message = match uc.execute(q.booking_id, identity.account_id).await? {
        AcceptOutcome::Assigned => "Booking accepted successfully",
        AcceptOutcome::AlreadyAssigned => "Booking has already been accepted",
    };
    Ok(Json(MessageResponse {
        status: "success",
        message,
    }))
}

#[utoipa::path(get, path = "/api/v1/cleaner/getMyBookings", tag = "Cleaner", responses(
    (status = 200, body = BookingListResponse)
))]
pub async fn get_my_bookings(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<BookingListResponse>, ApiError> {
    let identity = authenticate(&ctx.cfg, bearer)?.require(Role::Cleaner)?;
    let bookings = ctx.booking_repo();
    let uc = ListCleanerBookings {
        bookings: bookings.as_ref(),
    };
    let rows = uc.execute(identity.account_id).await?;
    Ok(Json(BookingListResponse {
        status: "success",
        bookings: rows.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(get, path = "/api/v1/cleaner/getMyProfile", tag = "Cleaner", responses(
    (status = 200, body = ProfileResponse)
))]
pub async fn get_my_profile(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<ProfileResponse>, ApiError> {
    let identity = authenticate(&ctx.cfg, bearer)?.require(Role::Cleaner)?;
    let accounts = ctx.account_repo();
    let uc = GetProfile {
        accounts: accounts.as_ref(),
    };
    let row = uc
        .execute(identity.account_id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Cleaner not found".into()))?;
    Ok(Json(ProfileResponse {
        status: "success",
        user: row.into(),
    }))
}
