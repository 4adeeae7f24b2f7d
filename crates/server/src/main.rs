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

mod session;

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use shift_room_api::{
    ApiError, CreateRoomRequest, CyclePreferenceRequest, JoinRoomRequest, PreferenceResponse, Role,
    RoomUpdate, RoomView, Session, SessionResponse, SetShiftBoundRequest, SharedStore,
    SuggestSwapRequest, ToggleHolidayRequest, VerifyAdminRequest, analyze_fairness, create_room,
    cycle_preference, generate_schedule, get_room, join_room, restart, scheduling_tips,
    set_shift_bound, share, submit_preferences, suggest_swap, toggle_holiday,
    verify_admin_password,
};
use shift_room_domain::{Preference, RoomId};
use shift_room_persistence::{KeyValueStore, RoomStore, SqliteStore};
use shift_room_solver::{
    DEFAULT_ASSISTANT_MODEL, DEFAULT_BASE_URL, DEFAULT_RESPONSE_LANGUAGE, DEFAULT_SCHEDULE_MODEL,
    DEFAULT_THINKING_BUDGET, GeminiSolver, SchedulingTips, Solver, SolverConfig,
};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::session::{SessionRegistry, SessionUser};

/// Shift Room Server - HTTP server for collaborative shift scheduling
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Gemini API key. Solver endpoints are disabled without one.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    gemini_api_key: Option<String>,

    /// Gemini API root
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    gemini_base_url: String,

    /// Model used to generate and review schedules
    #[arg(long, default_value = DEFAULT_SCHEDULE_MODEL)]
    schedule_model: String,

    /// Model used for swap suggestions and tips
    #[arg(long, default_value = DEFAULT_ASSISTANT_MODEL)]
    assistant_model: String,

    /// Language of notes, analyses and tips
    #[arg(long, default_value = DEFAULT_RESPONSE_LANGUAGE)]
    response_language: String,

    /// Reasoning token budget for schedule generation
    #[arg(long, default_value_t = DEFAULT_THINKING_BUDGET)]
    thinking_budget: u32,
}

impl Args {
    fn solver_config(&self) -> Option<SolverConfig> {
        let api_key: &str = self.gemini_api_key.as_deref()?.trim();
        if api_key.is_empty() {
            return None;
        }
        Some(SolverConfig {
            api_key: api_key.to_string(),
            base_url: self.gemini_base_url.clone(),
            schedule_model: self.schedule_model.clone(),
            assistant_model: self.assistant_model.clone(),
            response_language: self.response_language.clone(),
            thinking_budget: self.thinking_budget,
        })
    }
}

/// Storage backend chosen at startup.
type Backend = Box<dyn KeyValueStore>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Room snapshots.
    store: SharedStore<Backend>,
    /// The schedule solver, when configured.
    solver: Option<Arc<dyn Solver>>,
    /// Live client sessions.
    sessions: SessionRegistry,
}

/// Response to room creation and joins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionApiResponse {
    /// Bearer token for later requests.
    session_token: String,
    #[serde(flatten)]
    session: SessionResponse,
    /// Set when the room could not be saved.
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
}

/// Response to a room edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UpdateResponse {
    room: RoomView,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
}

/// Response to an admin password check.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct VerifyAdminResponse {
    valid: bool,
}

/// A free-text solver answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TextResponse {
    text: String,
}

/// The caller's own session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WhoAmIResponse {
    room_id: RoomId,
    name: String,
    role: Role,
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
        let status: StatusCode = match &err {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::WrongPassword => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::ValidationFailure { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::SolverFailure { .. } => StatusCode::BAD_GATEWAY,
            ApiError::PersistenceFailure { .. } => {
                error!(error = %err, "Persistence error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

fn warning_of<T>(update: &RoomUpdate<T>) -> Option<String> {
    update.save_error.as_ref().map(ToString::to_string)
}

fn update_response(update: &RoomUpdate) -> UpdateResponse {
    UpdateResponse {
        room: RoomView::from(&update.room),
        warning: warning_of(update),
    }
}

async fn session_response(
    app_state: &AppState,
    update: &RoomUpdate<Session>,
) -> SessionApiResponse {
    let session: &Session = &update.output;
    let session_token: String = app_state.sessions.issue(session.clone()).await;
    SessionApiResponse {
        session_token,
        session: SessionResponse {
            room_id: session.room_id().clone(),
            name: session.name().to_string(),
            role: session.role(),
            room: RoomView::from(&update.room),
        },
        warning: warning_of(update),
    }
}

fn require_solver(app_state: &AppState) -> Result<Arc<dyn Solver>, HttpError> {
    app_state.solver.clone().ok_or_else(|| HttpError {
        status: StatusCode::SERVICE_UNAVAILABLE,
        message: String::from("No solver is configured on this server"),
    })
}

/// Handler for POST `/rooms`.
async fn handle_create_room(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateRoomRequest>,
) -> Result<Json<SessionApiResponse>, HttpError> {
    info!(name = %req.name, "Handling create_room request");
    let update: RoomUpdate<Session> = {
        let mut store = app_state.store.lock().await;
        create_room(&mut *store, &req)?
    };
    Ok(Json(session_response(&app_state, &update).await))
}

/// Handler for GET `/rooms/{room_id}`.
async fn handle_get_room(
    AxumState(app_state): AxumState<AppState>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomView>, HttpError> {
    let mut store = app_state.store.lock().await;
    let room = get_room(&mut *store, &RoomId::new(room_id))?;
    drop(store);
    Ok(Json(RoomView::from(&room)))
}

/// Handler for POST `/rooms/{room_id}/join`.
async fn handle_join_room(
    AxumState(app_state): AxumState<AppState>,
    Path(room_id): Path<String>,
    Json(req): Json<JoinRoomRequest>,
) -> Result<Json<SessionApiResponse>, HttpError> {
    info!(room_id = %room_id, name = %req.name, "Handling join request");
    let update: RoomUpdate<Session> = {
        let mut store = app_state.store.lock().await;
        join_room(&mut *store, &RoomId::new(room_id), &req)?
    };
    Ok(Json(session_response(&app_state, &update).await))
}

/// Handler for POST `/rooms/{room_id}/verify_admin`.
async fn handle_verify_admin(
    AxumState(app_state): AxumState<AppState>,
    Path(room_id): Path<String>,
    Json(req): Json<VerifyAdminRequest>,
) -> Result<Json<VerifyAdminResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let valid: bool = verify_admin_password(&mut *store, &RoomId::new(room_id), &req)?;
    drop(store);
    Ok(Json(VerifyAdminResponse { valid }))
}

/// Handler for GET `/session`.
async fn handle_whoami(SessionUser(session, _token): SessionUser) -> Json<WhoAmIResponse> {
    Json(WhoAmIResponse {
        room_id: session.room_id().clone(),
        name: session.name().to_string(),
        role: session.role(),
    })
}

/// Handler for POST `/session/logout`.
async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(session, token): SessionUser,
) -> StatusCode {
    info!(room_id = %session.room_id(), name = session.name(), "Logging out");
    app_state.sessions.revoke(&token).await;
    StatusCode::NO_CONTENT
}

/// Handler for POST `/preferences/cycle`.
async fn handle_cycle_preference(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(session, _token): SessionUser,
    Json(req): Json<CyclePreferenceRequest>,
) -> Result<Json<PreferenceResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let update: RoomUpdate<Preference> = cycle_preference(&mut *store, &session, &req)?;
    drop(store);
    Ok(Json(PreferenceResponse::from(&update)))
}

/// Handler for POST `/preferences/submit`.
async fn handle_submit_preferences(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(session, _token): SessionUser,
) -> Result<Json<UpdateResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let update: RoomUpdate = submit_preferences(&mut *store, &session)?;
    drop(store);
    Ok(Json(update_response(&update)))
}

/// Handler for POST `/constraints/bound`.
async fn handle_set_shift_bound(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(session, _token): SessionUser,
    Json(req): Json<SetShiftBoundRequest>,
) -> Result<Json<UpdateResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let update: RoomUpdate = set_shift_bound(&mut *store, &session, &req)?;
    drop(store);
    Ok(Json(update_response(&update)))
}

/// Handler for POST `/constraints/holiday`.
async fn handle_toggle_holiday(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(session, _token): SessionUser,
    Json(req): Json<ToggleHolidayRequest>,
) -> Result<Json<UpdateResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let update: RoomUpdate = toggle_holiday(&mut *store, &session, &req)?;
    drop(store);
    Ok(Json(update_response(&update)))
}

/// Handler for POST `/schedule/generate`.
async fn handle_generate_schedule(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(session, _token): SessionUser,
) -> Result<Json<UpdateResponse>, HttpError> {
    let solver: Arc<dyn Solver> = require_solver(&app_state)?;
    info!(room_id = %session.room_id(), "Handling generate_schedule request");
    let update: RoomUpdate = generate_schedule(&app_state.store, solver, &session).await?;
    Ok(Json(update_response(&update)))
}

/// Handler for POST `/schedule/restart`.
async fn handle_restart(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(session, _token): SessionUser,
) -> Result<Json<UpdateResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let update: RoomUpdate = restart(&mut *store, &session)?;
    drop(store);
    Ok(Json(update_response(&update)))
}

/// Handler for GET `/schedule/fairness`.
async fn handle_analyze_fairness(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(session, _token): SessionUser,
) -> Result<Json<TextResponse>, HttpError> {
    let solver: Arc<dyn Solver> = require_solver(&app_state)?;
    let text: String =
        analyze_fairness(&app_state.store, solver.as_ref(), session.room_id()).await?;
    Ok(Json(TextResponse { text }))
}

/// Handler for POST `/schedule/swap`.
async fn handle_suggest_swap(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(session, _token): SessionUser,
    Json(req): Json<SuggestSwapRequest>,
) -> Result<Json<TextResponse>, HttpError> {
    let solver: Arc<dyn Solver> = require_solver(&app_state)?;
    let text: String = suggest_swap(&app_state.store, solver.as_ref(), &session, &req).await?;
    Ok(Json(TextResponse { text }))
}

/// Handler for GET `/tips`.
async fn handle_scheduling_tips(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<SchedulingTips>, HttpError> {
    let solver: Arc<dyn Solver> = require_solver(&app_state)?;
    Ok(Json(scheduling_tips(solver.as_ref()).await?))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/rooms", post(handle_create_room))
        .route("/rooms/{room_id}", get(handle_get_room))
        .route("/rooms/{room_id}/join", post(handle_join_room))
        .route("/rooms/{room_id}/verify_admin", post(handle_verify_admin))
        .route("/session", get(handle_whoami))
        .route("/session/logout", post(handle_logout))
        .route("/preferences/cycle", post(handle_cycle_preference))
        .route("/preferences/submit", post(handle_submit_preferences))
        .route("/constraints/bound", post(handle_set_shift_bound))
        .route("/constraints/holiday", post(handle_toggle_holiday))
        .route("/schedule/generate", post(handle_generate_schedule))
        .route("/schedule/restart", post(handle_restart))
        .route("/schedule/fairness", get(handle_analyze_fairness))
        .route("/schedule/swap", post(handle_suggest_swap))
        .route("/tips", get(handle_scheduling_tips))
        .with_state(app_state)
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

    info!("Initializing Shift Room Server");

    // Initialize storage (in-memory or file-based based on CLI argument)
    let backend: Backend = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Box::new(SqliteStore::new_with_file(db_path)?)
    } else {
        info!("Using in-memory database");
        Box::new(SqliteStore::new_in_memory()?)
    };

    let solver: Option<Arc<dyn Solver>> = match args.solver_config() {
        Some(config) => {
            info!(
                schedule_model = %config.schedule_model,
                assistant_model = %config.assistant_model,
                "Solver configured"
            );
            Some(Arc::new(GeminiSolver::new(config)?))
        }
        None => {
            warn!("No Gemini API key given; solver endpoints are disabled");
            None
        }
    };

    let app_state: AppState = AppState {
        store: share(RoomStore::new(backend)),
        solver,
        sessions: SessionRegistry::default(),
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
