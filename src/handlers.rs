use crate::errors::AppError;
use crate::models::{ActivitySet, ActivityType, CategoryRequest, SessionResponse, TypeRequest};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form, Json,
};
use tracing::debug;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock().await;
    Html(render_index(
        state.activities.get(),
        &session,
        state.support_url.as_deref(),
    ))
}

pub async fn get_state(State(state): State<AppState>) -> Json<SessionResponse> {
    let session = state.session.lock().await;
    Json(state.snapshot(&session))
}

pub async fn get_categories(State(state): State<AppState>) -> Result<Json<ActivitySet>, AppError> {
    let activities = state.activities.get().ok_or_else(AppError::loading)?;
    Ok(Json(activities.clone()))
}

pub async fn generate(State(state): State<AppState>) -> Result<Json<SessionResponse>, AppError> {
    apply_generate(&state).await.map(Json)
}

pub async fn select_type(
    State(state): State<AppState>,
    Json(payload): Json<TypeRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let activity_type = parse_type(&payload.activity_type)?;
    apply_select_type(&state, activity_type, false).await.map(Json)
}

pub async fn toggle_category(
    State(state): State<AppState>,
    Json(payload): Json<CategoryRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    apply_toggle_category(&state, &payload.name).await.map(Json)
}

pub async fn toggle_table(State(state): State<AppState>) -> Result<Json<SessionResponse>, AppError> {
    apply_toggle_table(&state).await.map(Json)
}

pub async fn generate_form(State(state): State<AppState>) -> Result<Redirect, AppError> {
    apply_generate(&state).await?;
    Ok(Redirect::to("/"))
}

pub async fn select_type_form(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Redirect, AppError> {
    let activity_type = parse_type(&kind)?;
    apply_select_type(&state, activity_type, true).await?;
    Ok(Redirect::to("/"))
}

pub async fn toggle_category_form(
    State(state): State<AppState>,
    Form(payload): Form<CategoryRequest>,
) -> Result<Redirect, AppError> {
    apply_toggle_category(&state, &payload.name).await?;
    Ok(Redirect::to("/"))
}

pub async fn toggle_table_form(State(state): State<AppState>) -> Result<Redirect, AppError> {
    apply_toggle_table(&state).await?;
    Ok(Redirect::to("/"))
}

async fn apply_generate(state: &AppState) -> Result<SessionResponse, AppError> {
    let activities = state.activities.get().ok_or_else(AppError::loading)?;
    let mut session = state.session.lock().await;
    session.generate(activities);
    debug!(
        active_type = %session.active_type,
        category = ?session.selected_category,
        activity = %session.current_activity,
        "generated activity"
    );
    Ok(state.snapshot(&session))
}

async fn apply_select_type(
    state: &AppState,
    activity_type: ActivityType,
    generate: bool,
) -> Result<SessionResponse, AppError> {
    let activities = state.activities.get().ok_or_else(AppError::loading)?;
    let mut session = state.session.lock().await;
    session.select_type(activity_type);
    if generate {
        session.generate(activities);
    }
    Ok(state.snapshot(&session))
}

async fn apply_toggle_category(state: &AppState, name: &str) -> Result<SessionResponse, AppError> {
    let activities = state.activities.get().ok_or_else(AppError::loading)?;
    if !activities.contains_category(name) {
        return Err(AppError::bad_request(format!("unknown category '{name}'")));
    }

    let mut session = state.session.lock().await;
    session.toggle_category(name);
    Ok(state.snapshot(&session))
}

async fn apply_toggle_table(state: &AppState) -> Result<SessionResponse, AppError> {
    state.activities.get().ok_or_else(AppError::loading)?;
    let mut session = state.session.lock().await;
    session.toggle_table();
    Ok(state.snapshot(&session))
}

fn parse_type(raw: &str) -> Result<ActivityType, AppError> {
    raw.parse().map_err(AppError::bad_request)
}
