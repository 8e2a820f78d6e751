use crate::models::{ActivitySet, SessionResponse};
use crate::selection::SelectionState;
use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
}

impl LoadPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            LoadPhase::Loading => "loading",
            LoadPhase::Ready => "ready",
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub activities: Arc<OnceCell<ActivitySet>>,
    pub session: Arc<Mutex<SelectionState>>,
    pub support_url: Option<String>,
}

impl AppState {
    pub fn new(support_url: Option<String>) -> Self {
        Self {
            activities: Arc::new(OnceCell::new()),
            session: Arc::new(Mutex::new(SelectionState::default())),
            support_url,
        }
    }

    pub fn with_activities(activities: ActivitySet) -> Self {
        let state = Self::new(None);
        state.mark_ready(activities);
        state
    }

    pub fn phase(&self) -> LoadPhase {
        if self.activities.initialized() {
            LoadPhase::Ready
        } else {
            LoadPhase::Loading
        }
    }

    pub fn mark_ready(&self, activities: ActivitySet) {
        if self.activities.set(activities).is_err() {
            warn!("activities already loaded, ignoring second load");
            return;
        }
        info!("activities ready");
    }

    pub fn snapshot(&self, session: &SelectionState) -> SessionResponse {
        SessionResponse {
            status: self.phase().as_str().to_string(),
            active_type: session.active_type,
            selected_category: session.selected_category.clone(),
            current_activity: session.current_activity.clone(),
            show_table: session.show_table,
        }
    }
}
