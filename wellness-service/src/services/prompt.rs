//! Prompt construction: merges the profile and retrieved candidates into the
//! generation request, including the strict JSON structure the model must
//! fill in. Pure function, no side effects.

use crate::models::{DietRequest, FoodCandidate};
use serde_json::json;

/// Build the generation prompt for a profile and its retrieved candidates.
pub fn build_plan_prompt(request: &DietRequest, candidates: &[FoodCandidate]) -> String {
    let ranked = request.profile.vikriti.ranked();
    let primary = ranked[0];
    let secondary: Vec<&str> = ranked[1..].iter().map(|d| d.name()).collect();

    let allergies = if request.diet_preferences.allergies.is_empty() {
        "None".to_string()
    } else {
        request.diet_preferences.allergies.join(", ")
    };

    let inspiration: Vec<serde_json::Value> = candidates
        .iter()
        .map(|c| json!({ "name": c.name, "category": c.category }))
        .collect();

    // Pre-filled skeleton of the plan schema; empty fields are for the model.
    let structure = json!({
        "user_profile": {
            "dosha": format!("{}-dominant", primary.name()),
            "secondary_doshas": secondary,
            "allergies": request.diet_preferences.allergies,
            "preferences": [request.diet_preferences.diet_type.to_string()],
            "cuisine": request.diet_preferences.cuisine,
        },
        "food_guidelines": {
            "grains": { "can_eat": [], "avoid": [], "notes": "" },
            "vegetables": { "can_eat": [], "avoid": [], "notes": "" },
            "fruits": { "can_eat": [], "avoid": [], "notes": "" },
            "proteins": { "can_eat": [], "avoid": [], "notes": "" },
            "dairy": { "can_eat": [], "avoid": [], "notes": "" },
            "spices": { "can_use": [], "avoid": [], "notes": "" },
            "beverages": { "can_drink": [], "avoid": [] },
        },
        "nutrient_guidelines": {
            "carbohydrates": { "suggested_range_percent": "40-50%", "notes": "" },
            "proteins": { "suggested_range_percent": "20-25%", "notes": "" },
            "fats": { "suggested_range_percent": "20-25%", "notes": "" },
            "hydration": { "water_intake_liters": "2-3", "notes": "" },
        },
        "meal_timing": {
            "breakfast": "7-9 AM",
            "lunch": "12-2 PM (main meal)",
            "snack": "3-4 PM",
            "dinner": "6-8 PM (light meal)",
            "notes": "",
        },
        "portion_guidelines": {
            "grains": "1-2 cups cooked per meal",
            "vegetables": "1-2 cups per meal",
            "fruits": "1 serving per snack",
            "proteins": "half to 1 cup cooked legumes per meal",
            "fats": "1-2 tsp per meal",
        },
        "lifestyle_recommendations": {
            "exercise": "",
            "sleep": "",
            "mental_health": "",
            "detox": "",
        },
        "dosha_alerts": [
            { "dosha": "Vata", "alert": "" },
            { "dosha": "Pitta", "alert": "" },
            { "dosha": "Kapha", "alert": "" },
        ],
        "flexibility_options": {
            "food_rotation": "",
            "seasonal_adjustments": "",
            "spice_variations": "",
        },
    });

    format!(
        "You are an expert Ayurvedic consultant. Generate a comprehensive, \
         personalized wellness guide based on the user's profile.\n\
         The output MUST be a single, valid JSON object conforming to the \
         specified structure. Do not include any text outside the JSON object.\n\
         \n\
         USER PROFILE:\n\
         - Primary Imbalance (Vikriti): {primary}\n\
         - Secondary Imbalances: {secondary}\n\
         - Allergies: {allergies}\n\
         - Dietary Preference: {diet_type}\n\
         - Cuisine Preference (Satmaya): {cuisine}\n\
         - Current Season: {season}\n\
         - Digestion (Agni): {agni}, Toxins (Ama): {ama}\n\
         - Primary Goal: {goal}\n\
         \n\
         RECOMMENDED FOODS FOR INSPIRATION:\n\
         Base the \"can_eat\" suggestions on this list of foods, pre-selected \
         as highly suitable for the user. Distribute them into the correct \
         categories.\n\
         {inspiration}\n\
         \n\
         INSTRUCTIONS:\n\
         1. Analyze the profile to determine the dominant dosha and overall health picture.\n\
         2. Populate every field of the JSON structure with expert Ayurvedic advice.\n\
         3. The food_guidelines must contain specific \"can_eat\" and \"avoid\" lists; use the inspiration list for \"can_eat\".\n\
         4. All \"notes\" fields should contain concise, actionable advice.\n\
         5. The dosha_alerts should warn specifically about the user's imbalances.\n\
         \n\
         JSON OUTPUT STRUCTURE (Strict):\n\
         {structure}",
        primary = primary.name(),
        secondary = secondary.join(", "),
        allergies = allergies,
        diet_type = request.diet_preferences.diet_type,
        cuisine = request.diet_preferences.cuisine.join(", "),
        season = request.environment.season,
        agni = request.health.agni,
        ama = request.health.ama,
        goal = request.goals.primary_goal,
        inspiration = serde_json::to_string_pretty(&inspiration).unwrap_or_default(),
        structure = serde_json::to_string_pretty(&structure).unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Agni, Ama, DietPreferences, DietType, DoshaScores, Environment, Goals, Health, Profile,
        Season,
    };

    fn sample_request() -> DietRequest {
        DietRequest {
            profile: Profile {
                prakriti: DoshaScores {
                    vata: 4,
                    pitta: 3,
                    kapha: 3,
                },
                vikriti: DoshaScores {
                    vata: 7,
                    pitta: 5,
                    kapha: 2,
                },
            },
            health: Health {
                agni: Agni::Variable,
                ama: Ama::Low,
            },
            diet_preferences: DietPreferences {
                diet_type: DietType::Vegan,
                allergies: vec!["Gluten".to_string()],
                cuisine: vec!["South Indian".to_string()],
            },
            environment: Environment {
                season: Season::Summer,
            },
            goals: Goals {
                primary_goal: "Better sleep".to_string(),
            },
        }
    }

    fn candidates() -> Vec<FoodCandidate> {
        vec![
            FoodCandidate {
                id: "food-1".to_string(),
                name: "Moong Dal Khichdi".to_string(),
                category: Some("Grains".to_string()),
                score: 0.92,
            },
            FoodCandidate {
                id: "food-2".to_string(),
                name: "Steamed Okra".to_string(),
                category: Some("Vegetables".to_string()),
                score: 0.88,
            },
        ]
    }

    #[test]
    fn prompt_names_primary_and_secondary_doshas() {
        let prompt = build_plan_prompt(&sample_request(), &candidates());

        assert!(prompt.contains("Primary Imbalance (Vikriti): Vata"));
        assert!(prompt.contains("Pitta, Kapha"));
    }

    #[test]
    fn prompt_embeds_candidate_inspiration_list() {
        let prompt = build_plan_prompt(&sample_request(), &candidates());

        assert!(prompt.contains("Moong Dal Khichdi"));
        assert!(prompt.contains("Steamed Okra"));
    }

    #[test]
    fn prompt_carries_constraints_and_schema() {
        let prompt = build_plan_prompt(&sample_request(), &candidates());

        assert!(prompt.contains("Gluten"));
        assert!(prompt.contains("vegan"));
        assert!(prompt.contains("South Indian"));
        assert!(prompt.contains("food_guidelines"));
        assert!(prompt.contains("dosha_alerts"));
        assert!(prompt.contains("valid JSON object"));
    }

    #[test]
    fn empty_allergy_list_reads_as_none() {
        let mut request = sample_request();
        request.diet_preferences.allergies.clear();

        let prompt = build_plan_prompt(&request, &candidates());

        assert!(prompt.contains("Allergies: None"));
    }
}
