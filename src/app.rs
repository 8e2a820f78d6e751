use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/generate", post(handlers::generate_form))
        .route("/type/:kind", post(handlers::select_type_form))
        .route("/category", post(handlers::toggle_category_form))
        .route("/table/toggle", post(handlers::toggle_table_form))
        .route("/api/state", get(handlers::get_state))
        .route("/api/categories", get(handlers::get_categories))
        .route("/api/generate", post(handlers::generate))
        .route("/api/type", post(handlers::select_type))
        .route("/api/category", post(handlers::toggle_category))
        .route("/api/table", post(handlers::toggle_table))
        .with_state(state)
}
