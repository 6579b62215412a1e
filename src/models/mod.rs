//! Request and response models for the NutriTrack API
//!
//! This module defines the DTOs (Data Transfer Objects) used for query
//! parameters and for deserializing API response bodies.

pub mod params;
pub mod responses;

// Re-export commonly used types
pub use params::{MealPlanQuery, MenuQuery};
pub use responses::{
    MealPlan, MealSlot, Menu, MenuItem, NutritionTargets, PlannedMeal, UserProfile,
};
