// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{error, info};
use uni_apply_api::{
    ApiError, ApplicationInfo, AuthenticatedActor, DemoApplication, GetProgressResponse,
    GetTimelineResponse, ListApplicationsResponse, Role, SubmitApplicationRequest,
    SubmitApplicationResponse, UpdateStatusRequest, UpdateStatusResponse, authenticate_stub,
    demo_applications, get_application, get_progress, get_timeline, list_applications,
    submit_application, update_status,
};
use uni_apply_domain::{ApplicationForm, ApplicationStatus};
use uni_apply_persistence::{PersistenceError, SqlitePersistence};

/// Uni Apply Server - HTTP server for the university application portal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Seed this many demo applications at startup
    #[arg(long)]
    seed_demo: Option<usize>,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for applications and timeline events.
    persistence: Arc<Mutex<SqlitePersistence>>,
}

/// API request for submitting an application.
///
/// This includes authentication information in addition to the form data.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct SubmitApplicationApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The caller-assigned application identifier.
    application_id: String,
    /// The form data gathered so far.
    form: ApplicationForm,
}

/// API request for moving an application to a new status.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct UpdateStatusApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The status to move to. Legacy vocabulary is accepted.
    new_status: String,
    /// Optional reviewer note explaining the change.
    note: Option<String>,
}

/// Query parameters carrying actor identity for read endpoints.
#[derive(Debug, Deserialize)]
struct ActorQuery {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::AuthenticationFailed { .. } => Self {
                status: StatusCode::UNAUTHORIZED,
                message: err.to_string(),
            },
            ApiError::Unauthorized { .. } => Self {
                status: StatusCode::FORBIDDEN,
                message: err.to_string(),
            },
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
        }
    }
}

/// Parses a role string into a `Role`.
fn parse_role(role_str: &str) -> Result<Role, HttpError> {
    match role_str {
        "student" => Ok(Role::Student),
        "admin" => Ok(Role::Admin),
        "agent" => Ok(Role::Agent),
        _ => Err(HttpError {
            status: StatusCode::BAD_REQUEST,
            message: format!("Invalid role: {role_str}"),
        }),
    }
}

/// Authenticates an actor from the wire identity fields.
fn authenticate(actor_id: &str, actor_role: &str) -> Result<AuthenticatedActor, HttpError> {
    let role: Role = parse_role(actor_role)?;
    authenticate_stub(actor_id.to_string(), role)
        .map_err(|err| HttpError::from(ApiError::from(err)))
}

/// Handler for submitting a new application.
async fn handle_submit_application(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<SubmitApplicationApiRequest>,
) -> Result<Json<SubmitApplicationResponse>, HttpError> {
    info!(
        application_id = %request.application_id,
        actor_id = %request.actor_id,
        "Received submit application request"
    );

    let actor: AuthenticatedActor = authenticate(&request.actor_id, &request.actor_role)?;
    let api_request: SubmitApplicationRequest = SubmitApplicationRequest {
        application_id: request.application_id,
        form: request.form,
    };

    let mut persistence = app_state.persistence.lock().await;
    let response: SubmitApplicationResponse = submit_application(
        &mut persistence,
        api_request,
        &actor,
        OffsetDateTime::now_utc(),
    )?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for moving an application to a new status.
async fn handle_update_status(
    AxumState(app_state): AxumState<AppState>,
    Path(application_id): Path<String>,
    Json(request): Json<UpdateStatusApiRequest>,
) -> Result<Json<UpdateStatusResponse>, HttpError> {
    info!(
        application_id = %application_id,
        actor_id = %request.actor_id,
        new_status = %request.new_status,
        "Received update status request"
    );

    let actor: AuthenticatedActor = authenticate(&request.actor_id, &request.actor_role)?;
    let api_request: UpdateStatusRequest = UpdateStatusRequest {
        new_status: request.new_status,
        note: request.note,
    };

    let mut persistence = app_state.persistence.lock().await;
    let response: UpdateStatusResponse = update_status(
        &mut persistence,
        &application_id,
        api_request,
        &actor,
        OffsetDateTime::now_utc(),
    )?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for retrieving a single application.
async fn handle_get_application(
    AxumState(app_state): AxumState<AppState>,
    Path(application_id): Path<String>,
    Query(query): Query<ActorQuery>,
) -> Result<Json<ApplicationInfo>, HttpError> {
    let actor: AuthenticatedActor = authenticate(&query.actor_id, &query.actor_role)?;

    let mut persistence = app_state.persistence.lock().await;
    let response: ApplicationInfo = get_application(&mut persistence, &application_id, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for listing all applications.
async fn handle_list_applications(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ActorQuery>,
) -> Result<Json<ListApplicationsResponse>, HttpError> {
    let actor: AuthenticatedActor = authenticate(&query.actor_id, &query.actor_role)?;

    let mut persistence = app_state.persistence.lock().await;
    let response: ListApplicationsResponse = list_applications(&mut persistence, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for retrieving an application timeline.
async fn handle_get_timeline(
    AxumState(app_state): AxumState<AppState>,
    Path(application_id): Path<String>,
    Query(query): Query<ActorQuery>,
) -> Result<Json<GetTimelineResponse>, HttpError> {
    let actor: AuthenticatedActor = authenticate(&query.actor_id, &query.actor_role)?;

    let mut persistence = app_state.persistence.lock().await;
    let response: GetTimelineResponse = get_timeline(
        &mut persistence,
        &application_id,
        &actor,
        OffsetDateTime::now_utc(),
    )?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for retrieving form completion progress.
async fn handle_get_progress(
    AxumState(app_state): AxumState<AppState>,
    Path(application_id): Path<String>,
    Query(query): Query<ActorQuery>,
) -> Result<Json<GetProgressResponse>, HttpError> {
    let actor: AuthenticatedActor = authenticate(&query.actor_id, &query.actor_role)?;

    let mut persistence = app_state.persistence.lock().await;
    let response: GetProgressResponse = get_progress(&mut persistence, &application_id, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/applications", post(handle_submit_application))
        .route("/applications", get(handle_list_applications))
        .route("/applications/{application_id}", get(handle_get_application))
        .route(
            "/applications/{application_id}/status",
            post(handle_update_status),
        )
        .route(
            "/applications/{application_id}/timeline",
            get(handle_get_timeline),
        )
        .route(
            "/applications/{application_id}/progress",
            get(handle_get_progress),
        )
        .with_state(app_state)
}

/// Seeds the database with demo applications.
///
/// Each demo application travels through the normal submit and update
/// pipeline so its timeline reflects a real history.
fn seed_demo_data(
    persistence: &mut SqlitePersistence,
    count: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let seeder: AuthenticatedActor =
        AuthenticatedActor::new(String::from("demo-seeder"), Role::Agent);
    let now: OffsetDateTime = OffsetDateTime::now_utc();
    let mut rng = rand::rng();
    let demos: Vec<DemoApplication> = demo_applications(count, &mut rng);

    for demo in demos {
        let application_id: String = demo.request.application_id.clone();
        submit_application(persistence, demo.request, &seeder, now)?;

        if demo.target_status != ApplicationStatus::Submitted {
            update_status(
                persistence,
                &application_id,
                UpdateStatusRequest {
                    new_status: demo.target_status.as_str().to_string(),
                    note: Some(String::from("Seeded demo transition")),
                },
                &seeder,
                now,
            )?;
        }
    }

    info!(count, "Seeded demo applications");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Uni Apply Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let mut persistence: SqlitePersistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqlitePersistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqlitePersistence::new_in_memory()?
    };

    if let Some(count) = args.seed_demo {
        seed_demo_data(&mut persistence, count)?;
    }

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
