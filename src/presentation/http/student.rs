use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::application::use_cases::auth::get_profile::GetProfile;
use crate::application::use_cases::auth::signup::Signup;
use crate::application::use_cases::bookings::cancel_booking::{CancelBooking, CancelOutcome};
use crate::application::use_cases::bookings::create_booking::CreateBooking;
use crate::application::use_cases::bookings::list_my_bookings::ListStudentBookings;
use crate::bootstrap::app_context::AppContext;
use crate::domain::accounts::Role;
use crate::presentation::http::auth::{
    AuthResponse, Bearer, ProfileResponse, authenticate, token_response,
};
use crate::presentation::http::cleaner::{
    BookingIdQuery, BookingListResponse, BookingResponse, MessageResponse, SignupBody,
};
use crate::presentation::http::error::ApiError;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBookingBody {
    pub note: Option<String>,
}

#[derive(Debug, serde::Serialize, ToSchema)]
pub struct BookingCreatedResponse {
    pub status: &'static str,
    pub booking: BookingResponse,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/signup", post(student_signup))
        .route("/createBooking", post(create_booking))
        .route("/cancelBooking", post(cancel_booking))
        .route("/getMyBookings", get(get_my_bookings))
        .route("/getMyProfile", get(get_my_profile))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/v1/student/signup", tag = "Student", request_body = SignupBody, security(()), responses(
    (status = 201, body = AuthResponse)
))]
pub async fn student_signup(
    State(ctx): State<AppContext>,
    Json(body): Json<SignupBody>,
) -> Result<(StatusCode, HeaderMap, Json<AuthResponse>), ApiError> {
    let accounts = ctx.account_repo();
    let hostels = ctx.hostel_repo();
    let uc = Signup {
        accounts: accounts.as_ref(),
        hostels: hostels.as_ref(),
    };
    let account = uc.execute(&body.into_request(Role::Student)).await?;
    token_response(&ctx.cfg, StatusCode::CREATED, account)
}

#[utoipa::path(post, path = "/api/v1/student/createBooking", tag = "Student", request_body = CreateBookingBody, responses(
    (status = 201, body = BookingCreatedResponse)
))]
pub async fn create_booking(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Json(body): Json<CreateBookingBody>,
) -> Result<(StatusCode, Json<BookingCreatedResponse>), ApiError> {
    let identity = authenticate(&ctx.cfg, bearer)?.require(Role::Student)?;
    let accounts = ctx.account_repo();
    let bookings = ctx.booking_repo();
    let uc = CreateBooking {
        accounts: accounts.as_ref(),
        bookings: bookings.as_ref(),
    };
    let booking = uc
        .execute(identity.account_id, body.note.as_deref())
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Student not found".into()))?;
    Ok((
        StatusCode::CREATED,
        Json(BookingCreatedResponse {
            status: "success",
            booking: booking.into(),
        }),
    ))
}

#[utoipa::path(post, path = "/api/v1/student/cancelBooking", tag = "Student",
    params(("bookingID" = uuid::Uuid, Query, description = "Booking to cancel")),
    responses((status = 200, body = MessageResponse)))]
pub async fn cancel_booking(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Query(q): Query<BookingIdQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let identity = authenticate(&ctx.cfg, bearer)?.require(Role::Student)?;
    let bookings = ctx.booking_repo();
    let uc = CancelBooking {
        bookings: bookings.as_ref(),
    };
    let message = match uc.execute(q.booking_id, identity.account_id).await? {
        CancelOutcome::Cancelled => "Booking cancelled successfully",
        CancelOutcome::AlreadyCancelled => "Booking has already been cancelled",
    };
    Ok(Json(MessageResponse {
        status: "success",
        message,
    }))
}

#[utoipa::path(get, path = "/api/v1/student/getMyBookings", tag = "Student", responses(
    (status = 200, body = BookingListResponse)
))]
pub async fn get_my_bookings(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<BookingListResponse>, ApiError> {
    let identity = authenticate(&ctx.cfg, bearer)?.require(Role::Student)?;
    let bookings = ctx.booking_repo();
    let uc = ListStudentBookings {
        bookings: bookings.as_ref(),
    };
    let rows = uc.execute(identity.account_id).await?;
    Ok(Json(BookingListResponse {
        status: "success",
        bookings: rows.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(get, path = "/api/v1/student/getMyProfile", tag = "Student", responses(
    (status = 200, body = ProfileResponse)
))]
pub async fn get_my_profile(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<ProfileResponse>, ApiError> {
    let identity = authenticate(&ctx.cfg, bearer)?.require(Role::Student)?;
    let accounts = ctx.account_repo();
    let uc = GetProfile {
        accounts: accounts.as_ref(),
    };
    let row = uc
        .execute(identity.account_id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Student not found".into()))?;
    Ok(Json(ProfileResponse {
        status: "success",
        user: row.into(),
    }))
}
