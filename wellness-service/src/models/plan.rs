//! Retrieval candidates and the wellness plan response schema.
//!
//! The plan schema is the explicit contract for the generation service's
//! structured output: the model response is deserialized into these types
//! before anything is returned to the caller, so a missing section or a shape
//! mismatch is a generation failure rather than a passthrough.

use serde::{Deserialize, Serialize};

/// A food retrieved from the vector index. Request-scoped, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodCandidate {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub score: f32,
}

/// The full personalized wellness guide returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellnessPlan {
    pub user_profile: PlanUserProfile,
    pub food_guidelines: FoodGuidelines,
    pub nutrient_guidelines: NutrientGuidelines,
    pub meal_timing: MealTiming,
    pub portion_guidelines: PortionGuidelines,
    pub lifestyle_recommendations: LifestyleRecommendations,
    pub dosha_alerts: Vec<DoshaAlert>,
    pub flexibility_options: FlexibilityOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanUserProfile {
    /// e.g. "Pitta-dominant".
    pub dosha: String,
    pub secondary_doshas: Vec<String>,
    pub allergies: Vec<String>,
    pub preferences: Vec<String>,
    pub cuisine: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodGuidelines {
    pub grains: FoodCategory,
    pub vegetables: FoodCategory,
    pub fruits: FoodCategory,
    pub proteins: FoodCategory,
    pub dairy: FoodCategory,
    pub spices: SpiceGuidelines,
    pub beverages: BeverageGuidelines,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodCategory {
    pub can_eat: Vec<String>,
    pub avoid: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpiceGuidelines {
    pub can_use: Vec<String>,
    pub avoid: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeverageGuidelines {
    pub can_drink: Vec<String>,
    pub avoid: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientGuidelines {
    pub carbohydrates: MacroRange,
    pub proteins: MacroRange,
    pub fats: MacroRange,
    pub hydration: Hydration,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroRange {
    /// e.g. "40-50%".
    pub suggested_range_percent: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hydration {
    /// e.g. "2-3".
    pub water_intake_liters: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealTiming {
    pub breakfast: String,
    pub lunch: String,
    pub snack: String,
    pub dinner: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortionGuidelines {
    pub grains: String,
    pub vegetables: String,
    pub fruits: String,
    pub proteins: String,
    pub fats: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifestyleRecommendations {
    pub exercise: String,
    pub sleep: String,
    pub mental_health: String,
    pub detox: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoshaAlert {
    pub dosha: String,
    pub alert: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlexibilityOptions {
    pub food_rotation: String,
    pub seasonal_adjustments: String,
    pub spice_variations: String,
}
