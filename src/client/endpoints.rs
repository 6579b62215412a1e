//! Endpoint Methods
//!
//! Typed wrappers over the cached fetch path, one per API resource.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::models::{MealPlan, MealPlanQuery, Menu, MenuQuery, UserProfile};

use super::NutritionClient;

// == Resource Paths ==
/// Menus resource path
pub const MENUS_ENDPOINT: &str = "/menus";
/// Meal plans resource path
pub const MEAL_PLANS_ENDPOINT: &str = "/meal-plans";
/// Current-user profile resource path
pub const PROFILE_ENDPOINT: &str = "/users/me";

// == Per-Endpoint TTLs ==
// Menus use the configured default; plans and profiles change rarely within
// a session and stay cached longer.
const MEAL_PLAN_TTL: Duration = Duration::from_secs(600);
const PROFILE_TTL: Duration = Duration::from_secs(900);

impl NutritionClient {
    /// Fetches the menus served on the queried date.
    pub async fn menus(&self, query: &MenuQuery) -> Result<Vec<Menu>> {
        let value = self.get_cached(MENUS_ENDPOINT, Some(query), None).await?;
        decode(value)
    }

    /// Fetches the meal plan for the queried week.
    pub async fn meal_plan(&self, query: &MealPlanQuery) -> Result<MealPlan> {
        let value = self
            .get_cached(MEAL_PLANS_ENDPOINT, Some(query), Some(MEAL_PLAN_TTL))
            .await?;
        decode(value)
    }

    /// Fetches the authenticated user's profile.
    pub async fn profile(&self) -> Result<UserProfile> {
        let value = self
            .get_cached::<()>(PROFILE_ENDPOINT, None, Some(PROFILE_TTL))
            .await?;
        decode(value)
    }
}

/// Decodes a cached JSON payload into the requested DTO.
fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
}
