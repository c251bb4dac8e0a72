use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::extract::MatchedPath;
use dotenvy::dotenv;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use api::bootstrap::app_context::{AppContext, AppServices};
use api::bootstrap::config::Config;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
        paths(
            api::presentation::http::auth::login,
            api::presentation::http::auth::logout,
            api::presentation::http::auth::me,
            api::presentation::http::student::student_signup,
            api::presentation::http::student::create_booking,
            api::presentation::http::student::cancel_booking,
            api::presentation::http::student::get_my_bookings,
            api::presentation::http::student::get_my_profile,
            api::presentation::http::cleaner::cleaner_signup,
            api::presentation::http::cleaner::get_all_bookings,
            api::presentation::http::cleaner::accept_booking,
            api::presentation::http::cleaner::get_my_bookings,
            api::presentation::http::cleaner::get_my_profile,
            api::presentation::http::supervisor::supervisor_signup,
            api::presentation::http::supervisor::get_all_bookings,
            api::presentation::http::supervisor::complete_booking,
            api::presentation::http::supervisor::get_my_profile,
            api::presentation::http::hostel::create_hostel,
            api::presentation::http::hostel::get_all_hostels,
            api::presentation::http::health::health,
        ),
        components(schemas(
            api::domain::accounts::Role,
            api::domain::bookings::BookingStatus,
            api::presentation::http::auth::LoginRequest,
            api::presentation::http::auth::AuthResponse,
            api::presentation::http::auth::AccountResponse,
            api::presentation::http::auth::ProfileResponse,
            api::presentation::http::cleaner::SignupBody,
            api::presentation::http::cleaner::BookingResponse,
            api::presentation::http::cleaner::BookingListResponse,
            api::presentation::http::cleaner::MessageResponse,
            api::presentation::http::student::CreateBookingBody,
            api::presentation::http::student::BookingCreatedResponse,
            api::presentation::http::hostel::CreateHostelBody,
            api::presentation::http::hostel::HostelResponse,
            api::presentation::http::hostel::HostelCreatedResponse,
            api::presentation::http::hostel::HostelListResponse,
            api::presentation::http::error::ErrorBody,
            api::presentation::http::health::HealthResp,
        )),
        tags(
            (name = "Auth", description = "Authentication"),
            (name = "Student", description = "Student signup and bookings"),
            (name = "Cleaner", description = "Cleaner signup and work queue"),
            (name = "Supervisor", description = "Supervisor oversight"),
            (name = "Hostel", description = "Hostel records"),
            (name = "Health", description = "System health checks")
        )
    )]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "api=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(?cfg, "Starting hostel cleaning backend");

    // Database
    let pool = api::infrastructure::db::connect_pool(&cfg.database_url).await?;
    api::infrastructure::db::migrate(&pool).await?;

    let account_repo = Arc::new(
        api::infrastructure::db::repositories::account_repository_sqlx::SqlxAccountRepository::new(
            pool.clone(),
        ),
    );
    let hostel_repo = Arc::new(
        api::infrastructure::db::repositories::hostel_repository_sqlx::SqlxHostelRepository::new(
            pool.clone(),
        ),
    );
    let booking_repo = Arc::new(
        api::infrastructure::db::repositories::booking_repository_sqlx::SqlxBookingRepository::new(
            pool.clone(),
        ),
    );

    let services = AppServices::new(account_repo, hostel_repo, booking_repo);
    let ctx = AppContext::new(cfg.clone(), services);

    // Build CORS
    let cors = if let Some(origin) = cfg.frontend_url.clone() {
        match HeaderValue::from_str(&origin) {
            Ok(v) => CorsLayer::new()
                .allow_origin(v)
                .allow_methods([http::Method::GET, http::Method::POST, http::Method::OPTIONS])
                .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
                .allow_credentials(true),
            Err(_) => CorsLayer::new()
                .allow_origin(AllowOrigin::mirror_request())
                .allow_methods([http::Method::GET, http::Method::POST, http::Method::OPTIONS])
                .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
                .allow_credentials(true),
        }
    } else if cfg.is_production {
        // FRONTEND_URL is mandatory in production (enforced earlier); deny all as fallback
        CorsLayer::new()
            .allow_origin(AllowOrigin::exact(HeaderValue::from_static("http://invalid")))
            .allow_methods([http::Method::GET, http::Method::POST, http::Method::OPTIONS])
            .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
    } else {
        // Development convenience
        CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_methods([http::Method::GET, http::Method::POST, http::Method::OPTIONS])
            .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
            .allow_credentials(true)
    };

    // Build API router; the request pipeline is assembled once, here.
    let app = Router::new()
        .nest(
            "/api/v1",
            api::presentation::http::health::routes(pool.clone()),
        )
        .nest(
            "/api/v1/auth",
            api::presentation::http::auth::routes(ctx.clone()),
        )
        .nest(
            "/api/v1/student",
            api::presentation::http::student::routes(ctx.clone()),
        )
        .nest(
            "/api/v1/cleaner",
            api::presentation::http::cleaner::routes(ctx.clone()),
        )
        .nest(
            "/api/v1/supervisor",
            api::presentation::http::supervisor::routes(ctx.clone()),
        )
        .nest(
            "/api/v1/hostel",
            api::presentation::http::hostel::routes(ctx.clone()),
        )
        .merge(SwaggerUi::new("/api/v1/docs").url("/api/v1/openapi.json", ApiDoc::openapi()))
        .fallback(api::presentation::http::error::not_found)
        .layer(cors)
        .layer(DefaultBodyLimit::max(cfg.body_max_bytes))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
