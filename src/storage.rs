use crate::errors::LoadError;
use crate::models::{ActivitySet, ActivityType, Category, CategoryFile};
use crate::picker::default_activities;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, info, warn};

#[derive(Debug, Clone)]
pub struct DataPaths {
    pub leisure: PathBuf,
    pub productive: PathBuf,
}

pub fn resolve_data_paths() -> DataPaths {
    let leisure = env::var("APP_LEISURE_PATH").unwrap_or_else(|_| "data/activities.json".into());
    let productive = env::var("APP_PRODUCTIVE_PATH")
        .unwrap_or_else(|_| "data/productive-activities.json".into());

    DataPaths {
        leisure: PathBuf::from(leisure),
        productive: PathBuf::from(productive),
    }
}

pub fn default_category(activity_type: ActivityType) -> Category {
    Category {
        name: "Default".to_string(),
        activities: default_activities(activity_type)
            .iter()
            .map(|activity| activity.to_string())
            .collect(),
    }
}

pub async fn load_activity_set(paths: &DataPaths) -> ActivitySet {
    let (leisure, productive) = tokio::join!(
        load_categories(&paths.leisure, ActivityType::Leisure),
        load_categories(&paths.productive, ActivityType::Productive),
    );

    info!(
        leisure = leisure.len(),
        productive = productive.len(),
        "activity categories loaded"
    );

    ActivitySet {
        leisure,
        productive,
    }
}

pub async fn load_categories(path: &Path, activity_type: ActivityType) -> Vec<Category> {
    match read_category_file(path).await {
        Ok(file) => file.categories,
        Err(err) => {
            if err.is_not_found() {
                warn!("{activity_type} activities unavailable, using defaults: {err}");
            } else {
                error!("{activity_type} activities unavailable, using defaults: {err}");
            }
            vec![default_category(activity_type)]
        }
    }
}

async fn read_category_file(path: &Path) -> Result<CategoryFile, LoadError> {
    let bytes = fs::read(path).await.map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(label: &str, contents: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = env::temp_dir();
        path.push(format!("activity_generator_{label}_{}_{nanos}.json", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn loads_categories_in_file_order() {
        let path = temp_file(
            "valid",
            r#"{ "categories": [
                { "name": "Outdoors", "activities": ["Walk", "Hike"] },
                { "name": "Indoors", "activities": ["Read"] }
            ] }"#,
        );

        let categories = load_categories(&path, ActivityType::Leisure).await;
        let _ = std::fs::remove_file(&path);

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Outdoors");
        assert_eq!(categories[0].activities, vec!["Walk", "Hike"]);
        assert_eq!(categories[1].name, "Indoors");
    }

    #[tokio::test]
    async fn empty_category_list_is_not_a_failure() {
        let path = temp_file("empty", r#"{ "categories": [] }"#);
        let categories = load_categories(&path, ActivityType::Productive).await;
        let _ = std::fs::remove_file(&path);
        assert!(categories.is_empty());
    }

    #[tokio::test]
    async fn malformed_file_falls_back_to_default() {
        let path = temp_file("malformed", "<html>not json</html>");
        let categories = load_categories(&path, ActivityType::Productive).await;
        let _ = std::fs::remove_file(&path);
        assert_eq!(categories, vec![default_category(ActivityType::Productive)]);
    }

    #[tokio::test]
    async fn missing_categories_field_falls_back_to_default() {
        let path = temp_file("legacy", r#"{ "activities": ["Walk"] }"#);
        let categories = load_categories(&path, ActivityType::Leisure).await;
        let _ = std::fs::remove_file(&path);
        assert_eq!(categories, vec![default_category(ActivityType::Leisure)]);
    }

    #[tokio::test]
    async fn failed_load_yields_one_default_category_per_type() {
        let mut missing = env::temp_dir();
        missing.push("activity_generator_does_not_exist");
        let paths = DataPaths {
            leisure: missing.join("activities.json"),
            productive: missing.join("productive-activities.json"),
        };

        let set = load_activity_set(&paths).await;

        assert_eq!(set.leisure.len(), 1);
        assert_eq!(set.leisure[0].name, "Default");
        assert_eq!(
            set.leisure[0].activities,
            vec!["Take a walk", "Read a book", "Try a recipe"]
        );
        assert_eq!(set.productive.len(), 1);
        assert_eq!(set.productive[0].name, "Default");
        assert_eq!(
            set.productive[0].activities,
            vec!["Organize workspace", "Update resume", "Learn new skill"]
        );
    }
}
