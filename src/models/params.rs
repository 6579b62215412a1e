//! Query-parameter DTOs for the NutriTrack API
//!
//! These structures are serialized twice with the same serde derives: into
//! the request query string, and into the canonical cache key.

use chrono::NaiveDate;
use serde::Serialize;

/// Query parameters for the menus endpoint (GET /menus)
#[derive(Debug, Clone, Serialize)]
pub struct MenuQuery {
    /// Date the menus are served on
    pub date: NaiveDate,
}

/// Query parameters for the meal plan endpoint (GET /meal-plans)
#[derive(Debug, Clone, Serialize)]
pub struct MealPlanQuery {
    /// First day of the planned week
    pub week_of: NaiveDate,
}
