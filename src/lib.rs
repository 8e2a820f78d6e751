pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod picker;
pub mod selection;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use picker::pick_activity;
pub use state::AppState;
pub use storage::{load_activity_set, resolve_data_paths};
