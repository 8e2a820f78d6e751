use crate::models::{ActivityType, Category};
use rand::Rng;

pub const NO_MATCH_FALLBACK: [&str; 1] = ["No activities found for this category"];
pub const LEISURE_DEFAULTS: [&str; 3] = ["Take a walk", "Read a book", "Try a recipe"];
pub const PRODUCTIVE_DEFAULTS: [&str; 3] =
    ["Organize workspace", "Update resume", "Learn new skill"];

pub fn default_activities(activity_type: ActivityType) -> &'static [&'static str] {
    match activity_type {
        ActivityType::Leisure => &LEISURE_DEFAULTS,
        ActivityType::Productive => &PRODUCTIVE_DEFAULTS,
    }
}

/// Picks one activity uniformly at random.
///
/// A selected category is looked up across both lists; otherwise the list for
/// `active_type` is used. An empty pool falls back to a fixed list, so this
/// never fails.
pub fn pick_activity<R: Rng + ?Sized>(
    rng: &mut R,
    active_type: ActivityType,
    selected_category: Option<&str>,
    leisure: &[Category],
    productive: &[Category],
) -> String {
    let candidates: Vec<&Category> = match selected_category {
        Some(name) => leisure
            .iter()
            .chain(productive)
            .filter(|category| category.name == name)
            .collect(),
        None => match active_type {
            ActivityType::Leisure => leisure.iter().collect(),
            ActivityType::Productive => productive.iter().collect(),
        },
    };

    let pool: Vec<&str> = candidates
        .iter()
        .flat_map(|category| category.activities.iter().map(String::as_str))
        .collect();

    if pool.is_empty() {
        let fallback: &[&str] = if selected_category.is_some() {
            &NO_MATCH_FALLBACK
        } else {
            default_activities(active_type)
        };
        return choose(rng, fallback).to_string();
    }

    choose(rng, &pool).to_string()
}

fn choose<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}
