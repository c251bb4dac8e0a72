use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::ports::hostel_repository::HostelRow;
use crate::application::use_cases::hostels::create_hostel::CreateHostel;
use crate::application::use_cases::hostels::list_hostels::ListHostels;
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::error::ApiError;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateHostelBody {
    pub name: String,
    pub abbreviated_name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HostelResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "abbreviatedName")]
    pub abbreviated_name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<HostelRow> for HostelResponse {
    fn from(row: HostelRow) -> Self {
        HostelResponse {
            id: row.id,
            name: row.name,
            abbreviated_name: row.abbreviated_name,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HostelCreatedResponse {
    pub status: &'static str,
    pub hostel: HostelResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HostelListResponse {
    pub status: &'static str,
    pub hostels: Vec<HostelResponse>,
}

// Both endpoints are public: hostels must exist before anyone can sign up.
pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/createHostel", post(create_hostel))
        .route("/getAllHostels", get(get_all_hostels))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/v1/hostel/createHostel", tag = "Hostel", request_body = CreateHostelBody, security(()), responses(
    (status = 201, body = HostelCreatedResponse)
))]
pub async fn create_hostel(
    State(ctx): State<AppContext>,
    Json(body): Json<CreateHostelBody>,
) -> Result<(StatusCode, Json<HostelCreatedResponse>), ApiError> {
    let hostels = ctx.hostel_repo();
    let uc = CreateHostel {
        hostels: hostels.as_ref(),
    };
    let hostel = uc.execute(&body.name, &body.abbreviated_name).await?;
    Ok((
        StatusCode::CREATED,
        Json(HostelCreatedResponse {
            status: "success",
            hostel: hostel.into(),
        }),
    ))
}

#[utoipa::path(get, path = "/api/v1/hostel/getAllHostels", tag = "Hostel", security(()), responses(
    (status = 200, body = HostelListResponse)
))]
pub async fn get_all_hostels(
    State(ctx): State<AppContext>,
) -> Result<Json<HostelListResponse>, ApiError> {
    let hostels = ctx.hostel_repo();
    let uc = ListHostels {
        hostels: hostels.as_ref(),
    };
    let rows = uc.execute().await?;
    Ok(Json(HostelListResponse {
        status: "success",
        hostels: rows.into_iter().map(Into::into).collect(),
    }))
}
