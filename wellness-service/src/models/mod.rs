pub mod plan;
pub mod profile;

pub use plan::{
    BeverageGuidelines, DoshaAlert, FlexibilityOptions, FoodCandidate, FoodCategory,
    FoodGuidelines, Hydration, LifestyleRecommendations, MacroRange, MealTiming,
    NutrientGuidelines, PlanUserProfile, PortionGuidelines, SpiceGuidelines, WellnessPlan,
};
pub use profile::{
    Agni, Ama, DietPreferences, DietRequest, DietType, Dosha, DoshaScores, Environment, Goals,
    Health, Profile, Season,
};
