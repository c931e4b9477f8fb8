//! Incoming wellness profile: the request body of `POST /generate-diet-plan`.
//!
//! Field names follow the public API contract (camelCase); enums reject
//! unknown values at deserialization, numeric ranges are enforced with
//! `validator`.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// The three constitutional axes of the Ayurvedic model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    /// Capitalized name as it appears in prompts and plan output.
    pub fn name(&self) -> &'static str {
        match self {
            Dosha::Vata => "Vata",
            Dosha::Pitta => "Pitta",
            Dosha::Kapha => "Kapha",
        }
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-axis dosha scores. Scores are bounded to 1..=10.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DoshaScores {
    #[validate(range(min = 1, max = 10, message = "dosha score must be between 1 and 10"))]
    pub vata: i32,
    #[validate(range(min = 1, max = 10, message = "dosha score must be between 1 and 10"))]
    pub pitta: i32,
    #[validate(range(min = 1, max = 10, message = "dosha score must be between 1 and 10"))]
    pub kapha: i32,
}

impl DoshaScores {
    pub fn get(&self, dosha: Dosha) -> i32 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    /// Doshas ordered by score, highest first. Ties keep vata/pitta/kapha order.
    pub fn ranked(&self) -> [Dosha; 3] {
        let mut scored = [
            (Dosha::Vata, self.vata),
            (Dosha::Pitta, self.pitta),
            (Dosha::Kapha, self.kapha),
        ];
        scored.sort_by_key(|(_, score)| -score);
        [scored[0].0, scored[1].0, scored[2].0]
    }
}

/// Baseline (prakriti) and current (vikriti) constitution.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Profile {
    #[validate(nested)]
    pub prakriti: DoshaScores,
    #[validate(nested)]
    pub vikriti: DoshaScores,
}

/// Digestive fire strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Agni {
    Strong,
    Weak,
    Variable,
}

impl fmt::Display for Agni {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Agni::Strong => "strong",
            Agni::Weak => "weak",
            Agni::Variable => "variable",
        })
    }
}

/// Toxin accumulation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ama {
    Low,
    Moderate,
    High,
}

impl fmt::Display for Ama {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Ama::Low => "low",
            Ama::Moderate => "moderate",
            Ama::High => "high",
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    pub agni: Agni,
    pub ama: Ama,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietType {
    Vegetarian,
    Vegan,
    Eggetarian,
    #[serde(rename = "non-vegetarian")]
    NonVegetarian,
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DietType::Vegetarian => "vegetarian",
            DietType::Vegan => "vegan",
            DietType::Eggetarian => "eggetarian",
            DietType::NonVegetarian => "non-vegetarian",
        })
    }
}

/// Dietary constraints and satmaya (cuisine familiarity).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DietPreferences {
    pub diet_type: DietType,
    /// Hard exclusion terms, matched against index metadata.
    #[serde(default)]
    pub allergies: Vec<String>,
    #[validate(length(min = 1, message = "at least one cuisine is required"))]
    pub cuisine: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Monsoon,
    Autumn,
    Winter,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Monsoon => "monsoon",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Environment {
    pub season: Season,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Goals {
    #[validate(length(min = 1, message = "primary goal cannot be empty"))]
    pub primary_goal: String,
}

/// The main request body, nesting all profile sections.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DietRequest {
    #[validate(nested)]
    pub profile: Profile,
    pub health: Health,
    #[validate(nested)]
    pub diet_preferences: DietPreferences,
    pub environment: Environment,
    #[validate(nested)]
    pub goals: Goals,
}
