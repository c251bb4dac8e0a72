use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};

use crate::application::use_cases::auth::get_profile::GetProfile;
use crate::application::use_cases::auth::signup::Signup;
use crate::application::use_cases::bookings::complete_booking::{CompleteBooking, CompleteOutcome};
use crate::application::use_cases::bookings::list_hostel_bookings::ListHostelBookings;
use crate::bootstrap::app_context::AppContext;
use crate::domain::accounts::Role;
use crate::presentation::http::auth::{
    AuthResponse, Bearer, ProfileResponse, authenticate, token_response,
};
use crate::presentation::http::cleaner::{
    BookingIdQuery, BookingListResponse, MessageResponse, SignupBody,
};
use crate::presentation::http::error::ApiError;

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/signup", post(supervisor_signup))
        .route("/getAllBookings", get(get_all_bookings))
        .route("/completeBooking", post(complete_booking))
        .route("/getMyProfile", get(get_my_profile))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/v1/supervisor/signup", tag = "Supervisor", request_body = SignupBody, security(()), responses(
    (status = 201, body = AuthResponse)
))]
pub async fn supervisor_signup(
    State(ctx): State<AppContext>,
    Json(body): Json<SignupBody>,
) -> Result<(StatusCode, HeaderMap, Json<AuthResponse>), ApiError> {
    let accounts = ctx.account_repo();
    let hostels = ctx.hostel_repo();
    let uc = Signup {
        accounts: accounts.as_ref(),
        hostels: hostels.as_ref(),
    };
    let account = uc.execute(&body.into_request(Role::Supervisor)).await?;
    token_response(&ctx.cfg, StatusCode::CREATED, account)
}

/// Oversight view over the supervisor's hostel queue.
#[utoipa::path(get, path = "/api/v1/supervisor/getAllBookings", tag = "Supervisor", responses(
    (status = 200, body = BookingListResponse)
))]
pub async fn get_all_bookings(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<BookingListResponse>, ApiError> {
    let identity = authenticate(&ctx.cfg, bearer)?.require(Role::Supervisor)?;
    let accounts = ctx.account_repo();
    let bookings = ctx.booking_repo();
    let uc = ListHostelBookings {
        accounts: accounts.as_ref(),
        bookings: bookings.as_ref(),
    };
    let rows = uc
        .execute(identity.account_id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Supervisor not found".into()))?;
    Ok(Json(BookingListResponse {
        status: "success",
        bookings: rows.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(post, path = "/api/v1/supervisor/completeBooking", tag = "Supervisor",
    params(("bookingID" = uuid::Uuid, Query, description = "Booking to mark completed")),
    responses((status = 200, body = MessageResponse)))]
pub async fn complete_booking(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Query(q): Query<BookingIdQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    authenticate(&ctx.cfg, bearer)?.require(Role::Supervisor)?;
    let bookings = ctx.booking_repo();
    let uc = CompleteBooking {
        bookings: bookings.as_ref(),
    };
    let message = match uc.execute(q.booking_id).await? {
        CompleteOutcome::Completed => "Booking marked as completed",
        CompleteOutcome::AlreadyCompleted => "Booking has already been completed",
    };
    Ok(Json(MessageResponse {
        status: "success",
        message,
    }))
}

#[utoipa::path(get, path = "/api/v1/supervisor/getMyProfile", tag = "Supervisor", responses(
    (status = 200, body = ProfileResponse)
))]
pub async fn get_my_profile(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<ProfileResponse>, ApiError> {
    let identity = authenticate(&ctx.cfg, bearer)?.require(Role::Supervisor)?;
    let accounts = ctx.account_repo();
    let uc = GetProfile {
        accounts: accounts.as_ref(),
    };
    let row = uc
        .execute(identity.account_id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Supervisor not found".into()))?;
    Ok(Json(ProfileResponse {
        status: "success",
        user: row.into(),
    }))
}
