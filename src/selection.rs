use crate::models::{ActivitySet, ActivityType};
use crate::picker::pick_activity;
use rand::Rng;

pub const PLACEHOLDER: &str = "Click a button for an idea!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub active_type: ActivityType,
    pub selected_category: Option<String>,
    pub current_activity: String,
    pub show_table: bool,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            active_type: ActivityType::default(),
            selected_category: None,
            current_activity: PLACEHOLDER.to_string(),
            show_table: false,
        }
    }
}

impl SelectionState {
    pub fn generate(&mut self, activities: &ActivitySet) -> &str {
        self.generate_with(&mut rand::thread_rng(), activities)
    }

    pub fn generate_with<R: Rng + ?Sized>(&mut self, rng: &mut R, activities: &ActivitySet) -> &str {
        self.current_activity = pick_activity(
            rng,
            self.active_type,
            self.selected_category.as_deref(),
            &activities.leisure,
            &activities.productive,
        );
        &self.current_activity
    }

    pub fn select_type(&mut self, activity_type: ActivityType) {
        self.active_type = activity_type;
    }

    pub fn toggle_category(&mut self, name: &str) -> Option<&str> {
        if self.selected_category.as_deref() == Some(name) {
            self.selected_category = None;
        } else {
            self.selected_category = Some(name.to_string());
        }
        self.selected_category.as_deref()
    }

    pub fn toggle_table(&mut self) -> bool {
        self.show_table = !self.show_table;
        self.show_table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use rand::{rngs::StdRng, SeedableRng};

    fn activities() -> ActivitySet {
        ActivitySet {
            leisure: vec![Category {
                name: "Outdoors".into(),
                activities: vec!["Walk".into(), "Hike".into()],
            }],
            productive: vec![Category {
                name: "Home".into(),
                activities: vec!["Clean".into()],
            }],
        }
    }

    #[test]
    fn starts_with_placeholder() {
        let state = SelectionState::default();
        assert_eq!(state.current_activity, PLACEHOLDER);
        assert_eq!(state.active_type, ActivityType::Leisure);
        assert!(state.selected_category.is_none());
        assert!(!state.show_table);
    }

    #[test]
    fn toggling_same_category_twice_clears_it() {
        let mut state = SelectionState::default();
        assert_eq!(state.toggle_category("Outdoors"), Some("Outdoors"));
        assert_eq!(state.toggle_category("Outdoors"), None);
        assert!(state.selected_category.is_none());
    }

    #[test]
    fn toggling_other_category_replaces_selection() {
        let mut state = SelectionState::default();
        state.toggle_category("Outdoors");
        assert_eq!(state.toggle_category("Home"), Some("Home"));
    }

    #[test]
    fn generate_stores_pick_for_selected_category() {
        let mut state = SelectionState::default();
        state.toggle_category("Home");
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(state.generate_with(&mut rng, &activities()), "Clean");
        assert_eq!(state.current_activity, "Clean");
    }

    #[test]
    fn generate_follows_active_type() {
        let mut state = SelectionState::default();
        state.select_type(ActivityType::Productive);
        assert_eq!(state.generate(&activities()), "Clean");
    }

    #[test]
    fn toggle_table_flips_visibility() {
        let mut state = SelectionState::default();
        assert!(state.toggle_table());
        assert!(!state.toggle_table());
    }
}
