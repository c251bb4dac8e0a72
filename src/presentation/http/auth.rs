use crate::application::ports::account_repository::AccountRow;
use crate::application::use_cases::auth::get_profile::GetProfile;
use crate::application::use_cases::auth::login::{Login as LoginUc, LoginRequest as LoginDto};
use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::config::Config;
use crate::domain::accounts::Role;
use crate::presentation::http::error::ApiError;
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountResponse {
    pub id: Uuid,
    pub role: Role,
    pub name: String,
    pub email: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub hostel_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<AccountRow> for AccountResponse {
    fn from(row: AccountRow) -> Self {
        AccountResponse {
            id: row.id,
            role: row.role,
            name: row.name,
            email: row.email,
            phone_number: row.phone_number,
            hostel_id: row.hostel_id,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub status: &'static str,
    pub token: String,
    pub user: AccountResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub status: &'static str,
    pub user: AccountResponse,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub exp: usize,
}

/// Authenticated caller, resolved from the token and passed to handlers as a
/// plain value.
#[derive(Debug, Clone, Copy)]
pub struct Identity {
    pub account_id: Uuid,
    pub role: Role,
}

impl Identity {
    pub fn require(self, role: Role) -> Result<Identity, ApiError> {
        if self.role == role {
            Ok(self)
        } else {
            Err(ApiError::Unauthorized(
                "You do not have permission to perform this action".into(),
            ))
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/v1/auth/login", tag = "Auth", request_body = LoginRequest, security(()), responses(
    (status = 200, body = AuthResponse)
))]
pub async fn login(
    State(ctx): State<AppContext>,
    Json(req): Json<LoginRequest>,
) -> Result<(StatusCode, HeaderMap, Json<AuthResponse>), ApiError> {
    let repo = ctx.account_repo();
    let uc = LoginUc {
        accounts: repo.as_ref(),
    };
    let dto = LoginDto {
        email: req.email.clone(),
        password: req.password.clone(),
    };
    let account = uc
        .execute(&dto)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Incorrect email or password".into()))?;
    token_response(&ctx.cfg, StatusCode::OK, account)
}

#[utoipa::path(get, path = "/api/v1/auth/me", tag = "Auth", responses((status = 200, body = ProfileResponse)))]
pub async fn me(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<ProfileResponse>, ApiError> {
    let identity = authenticate(&ctx.cfg, bearer)?;
    let repo = ctx.account_repo();
    let uc = GetProfile {
        accounts: repo.as_ref(),
    };
    let row = uc
        .execute(identity.account_id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Account not found".into()))?;
    Ok(Json(ProfileResponse {
        status: "success",
        user: row.into(),
    }))
}

/// Issues the token, sets the HttpOnly cookie and shapes the success body.
/// Shared by login and the three role signups.
pub(crate) fn token_response(
    cfg: &Config,
    code: StatusCode,
    account: AccountRow,
) -> Result<(StatusCode, HeaderMap, Json<AuthResponse>), ApiError> {
    let token = issue_token(cfg, account.id, account.role)?;
    let mut headers = HeaderMap::new();
    let secure = cfg
        .frontend_url
        .as_deref()
        .map(|u| u.starts_with("https://"))
        .unwrap_or(false);
    let cookie = build_access_cookie(&token, cfg.jwt_expires_secs, secure);
    headers.insert(
        axum::http::header::SET_COOKIE,
        axum::http::HeaderValue::from_str(&cookie)
            .unwrap_or(axum::http::HeaderValue::from_static("")),
    );
    Ok((
        code,
        headers,
        Json(AuthResponse {
            status: "success",
            token,
            user: account.into(),
        }),
    ))
}

pub(crate) fn issue_token(cfg: &Config, account_id: Uuid, role: Role) -> Result<String, ApiError> {
    let now = chrono::Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: account_id.to_string(),
        role,
        exp: now + (cfg.jwt_expires_secs as usize),
    };
    let token = jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(cfg.jwt_secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(anyhow::anyhow!(e)))?;
    Ok(token)
}

// --- Bearer extractor & JWT utils ---
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

pub struct Bearer(pub String);

#[axum::async_trait]
impl<S> FromRequestParts<S> for Bearer
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // 1) Prefer Authorization header if present
        if let Some(auth) = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
        {
            if let Some(t) = auth.strip_prefix("Bearer ") {
                return Ok(Bearer(t.to_string()));
            }
        }

        // 2) Fallback to HttpOnly cookie `access_token`
        if let Some(cookie_hdr) = parts
            .headers
            .get(axum::http::header::COOKIE)
            .and_then(|v| v.to_str().ok())
        {
            if let Some(token) = get_cookie(cookie_hdr, "access_token") {
                return Ok(Bearer(token));
            }
        }

        Err(ApiError::Unauthorized(
            "You are not logged in! Please log in to get access".into(),
        ))
    }
}

pub(crate) fn authenticate(cfg: &Config, bearer: Bearer) -> Result<Identity, ApiError> {
    let data = jsonwebtoken::decode::<Claims>(
        &bearer.0,
        &DecodingKey::from_secret(cfg.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| ApiError::Unauthorized("Invalid or expired token".into()))?;
    let account_id = Uuid::parse_str(&data.claims.sub)
        .map_err(|_| ApiError::Unauthorized("Invalid or expired token".into()))?;
    Ok(Identity {
        account_id,
        role: data.claims.role,
    })
}

// --- Cookie helpers & logout ---

fn get_cookie(cookie_header: &str, name: &str) -> Option<String> {
    for part in cookie_header.split(';') {
        let kv = part.trim();
        if let Some((k, v)) = kv.split_once('=') {
            if k.trim() == name {
                return Some(v.trim().to_string());
            }
        }
    }
    None
}

fn build_access_cookie(token: &str, max_age_secs: i64, secure: bool) -> String {
    // Note: SameSite=Lax for typical same-site SPA/API setups.
    let secure_attr = if secure { "; Secure" } else { "" };
    format!(
        "access_token={}; HttpOnly{}; Path=/; Max-Age={}; SameSite=Lax",
        token,
        secure_attr,
        max_age_secs.max(0)
    )
}

#[utoipa::path(post, path = "/api/v1/auth/logout", tag = "Auth", responses((status = 204)))]
pub async fn logout(State(ctx): State<AppContext>) -> Result<(HeaderMap, StatusCode), ApiError> {
    // Clear cookie by setting it expired
    let mut headers = HeaderMap::new();
    let secure = ctx
        .cfg
        .frontend_url
        .as_deref()
        .map(|u| u.starts_with("https://"))
        .unwrap_or(false);
    let cookie = if secure {
        "access_token=; HttpOnly; Secure; Path=/; Max-Age=0; SameSite=Lax"
    } else {
        "access_token=; HttpOnly; Path=/; Max-Age=0; SameSite=Lax"
    };
    headers.insert(
        axum::http::header::SET_COOKIE,
        axum::http::HeaderValue::from_str(cookie)
            .unwrap_or(axum::http::HeaderValue::from_static("")),
    );
    Ok((headers, StatusCode::NO_CONTENT))
}
