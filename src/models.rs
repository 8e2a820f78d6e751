use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    #[default]
    Leisure,
    Productive,
}

impl ActivityType {
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityType::Leisure => "leisure",
            ActivityType::Productive => "productive",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityType::Leisure => "Leisure",
            ActivityType::Productive => "Productive",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "leisure" => Ok(ActivityType::Leisure),
            "productive" => Ok(ActivityType::Productive),
            other => Err(format!("unknown activity type '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryFile {
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivitySet {
    pub leisure: Vec<Category>,
    pub productive: Vec<Category>,
}

impl ActivitySet {
    pub fn categories(&self, activity_type: ActivityType) -> &[Category] {
        match activity_type {
            ActivityType::Leisure => &self.leisure,
            ActivityType::Productive => &self.productive,
        }
    }

    pub fn contains_category(&self, name: &str) -> bool {
        self.leisure
            .iter()
            .chain(&self.productive)
            .any(|category| category.name == name)
    }
}

#[derive(Debug, Deserialize)]
pub struct TypeRequest {
    #[serde(rename = "type")]
    pub activity_type: String,
}

#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub status: String,
    pub active_type: ActivityType,
    pub selected_category: Option<String>,
    pub current_activity: String,
    pub show_table: bool,
}
