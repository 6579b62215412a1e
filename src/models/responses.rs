//! Response DTOs for the NutriTrack API
//!
//! Defines the structure of API response bodies. Responses are cached as raw
//! JSON and decoded into these types on the way out of the cache.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A menu offered on a given date (GET /menus)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    /// Menu identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Date the menu is served on
    pub date: NaiveDate,
    /// Items on the menu
    pub items: Vec<MenuItem>,
}

/// A single dish on a menu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    /// Item identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Energy in kilocalories
    pub calories: u32,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
}

/// A user's meal plan for one week (GET /meal-plans)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlan {
    /// Plan identifier
    pub id: String,
    /// First day of the planned week
    pub week_of: NaiveDate,
    /// Planned meals, in no guaranteed order
    pub meals: Vec<PlannedMeal>,
}

/// One planned meal within a meal plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedMeal {
    /// Day the meal is planned for
    pub date: NaiveDate,
    /// Which meal of the day this is
    pub slot: MealSlot,
    /// Recipe or dish name
    pub recipe: String,
    /// Energy in kilocalories
    pub calories: u32,
}

/// Meal of the day a planned meal belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

/// The authenticated user's profile (GET /users/me)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// User identifier
    pub id: String,
    /// Display name
    pub display_name: String,
    /// Contact email
    pub email: String,
    /// Daily nutrition targets
    pub targets: NutritionTargets,
}

/// Daily nutrition targets configured by the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionTargets {
    /// Energy target in kilocalories
    pub calories: u32,
    /// Protein target in grams
    pub protein_g: f64,
    /// Carbohydrate target in grams
    pub carbs_g: f64,
    /// Fat target in grams
    pub fat_g: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_deserialize() {
        let json = r#"{
            "id": "menu-1",
            "name": "Monday lunch",
            "date": "2024-01-01",
            "items": [
                {"id": "item-1", "name": "Lentil soup", "calories": 320,
                 "protein_g": 18.0, "carbs_g": 40.5, "fat_g": 8.2}
            ]
        }"#;
        let menu: Menu = serde_json::from_str(json).unwrap();
        assert_eq!(menu.id, "menu-1");
        assert_eq!(menu.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(menu.items.len(), 1);
        assert_eq!(menu.items[0].calories, 320);
    }

    #[test]
    fn test_meal_plan_deserialize() {
        let json = r#"{
            "id": "plan-7",
            "week_of": "2024-03-04",
            "meals": [
                {"date": "2024-03-04", "slot": "breakfast", "recipe": "Oatmeal", "calories": 350},
                {"date": "2024-03-04", "slot": "dinner", "recipe": "Grilled salmon", "calories": 520}
            ]
        }"#;
        let plan: MealPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.meals.len(), 2);
        assert_eq!(plan.meals[0].slot, MealSlot::Breakfast);
        assert_eq!(plan.meals[1].slot, MealSlot::Dinner);
    }

    #[test]
    fn test_meal_slot_serialize_lowercase() {
        let json = serde_json::to_string(&MealSlot::Snack).unwrap();
        assert_eq!(json, r#""snack""#);
    }

    #[test]
    fn test_user_profile_deserialize() {
        let json = r#"{
            "id": "user-42",
            "display_name": "Alex",
            "email": "alex@example.com",
            "targets": {"calories": 2200, "protein_g": 120.0, "carbs_g": 250.0, "fat_g": 70.0}
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.display_name, "Alex");
        assert_eq!(profile.targets.calories, 2200);
    }
}
