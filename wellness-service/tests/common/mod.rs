use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use wellness_service::config::{GeminiSettings, PineconeSettings, WellnessConfig};
use wellness_service::models::{
    BeverageGuidelines, DoshaAlert, FlexibilityOptions, FoodCandidate, FoodCategory,
    FoodGuidelines, Hydration, LifestyleRecommendations, MacroRange, MealTiming,
    NutrientGuidelines, PlanUserProfile, PortionGuidelines, SpiceGuidelines, WellnessPlan,
};
use wellness_service::services::providers::{EmbeddingProvider, FoodIndex, PlanProvider};
use wellness_service::startup::Application;

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    pub async fn spawn(
        embedder: Arc<dyn EmbeddingProvider>,
        index: Arc<dyn FoodIndex>,
        generator: Arc<dyn PlanProvider>,
    ) -> Self {
        // Use random port for testing (port 0)
        let config = WellnessConfig {
            common: CoreConfig {
                port: 0,
                environment: "dev".to_string(),
            },
            gemini: GeminiSettings {
                api_key: "test-key".to_string(),
                text_model: "gemini-2.0-flash".to_string(),
                embedding_model: "text-embedding-004".to_string(),
            },
            pinecone: PineconeSettings {
                api_key: "test-key".to_string(),
                index_host: "http://127.0.0.1:1".to_string(),
                top_k: 15,
            },
        };

        let app = Application::with_providers(config, embedder, index, generator)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }
}

/// A complete, valid request body.
pub fn sample_request() -> serde_json::Value {
    serde_json::json!({
        "profile": {
            "prakriti": { "vata": 7, "pitta": 3, "kapha": 2 },
            "vikriti": { "vata": 7, "pitta": 8, "kapha": 2 }
        },
        "health": { "agni": "weak", "ama": "moderate" },
        "dietPreferences": {
            "dietType": "vegetarian",
            "allergies": ["Dairy", "Gluten"],
            "cuisine": ["North Indian", "South Indian"]
        },
        "environment": { "season": "winter" },
        "goals": { "primaryGoal": "Improve digestion and reduce bloating" }
    })
}

pub fn sample_candidates() -> Vec<FoodCandidate> {
    vec![
        FoodCandidate {
            id: "food-1".to_string(),
            name: "Moong Dal Khichdi".to_string(),
            category: Some("Grains".to_string()),
            score: 0.91,
        },
        FoodCandidate {
            id: "food-2".to_string(),
            name: "Cooked Beetroot".to_string(),
            category: Some("Vegetables".to_string()),
            score: 0.87,
        },
        FoodCandidate {
            id: "food-3".to_string(),
            name: "Stewed Apples".to_string(),
            category: Some("Fruits".to_string()),
            score: 0.84,
        },
    ]
}

pub fn sample_plan() -> WellnessPlan {
    WellnessPlan {
        user_profile: PlanUserProfile {
            dosha: "Pitta-dominant".to_string(),
            secondary_doshas: vec!["Vata".to_string(), "Kapha".to_string()],
            allergies: vec!["Dairy".to_string(), "Gluten".to_string()],
            preferences: vec!["vegetarian".to_string()],
            cuisine: vec!["North Indian".to_string(), "South Indian".to_string()],
        },
        food_guidelines: FoodGuidelines {
            grains: FoodCategory {
                can_eat: vec!["Moong Dal Khichdi".to_string()],
                avoid: vec!["Corn".to_string()],
                notes: "Favor soft, well-cooked grains.".to_string(),
            },
            vegetables: FoodCategory {
                can_eat: vec!["Cooked Beetroot".to_string()],
                avoid: vec!["Raw onion".to_string()],
                notes: "Cooked over raw.".to_string(),
            },
            fruits: FoodCategory {
                can_eat: vec!["Stewed Apples".to_string()],
                avoid: vec!["Sour citrus".to_string()],
                notes: "Sweet and ripe only.".to_string(),
            },
            proteins: FoodCategory {
                can_eat: vec!["Mung beans".to_string()],
                avoid: vec!["Red lentils in excess".to_string()],
                notes: "Small, regular portions.".to_string(),
            },
            dairy: FoodCategory {
                can_eat: vec![],
                avoid: vec!["All dairy".to_string()],
                notes: "Excluded due to allergy.".to_string(),
            },
            spices: SpiceGuidelines {
                can_use: vec!["Coriander".to_string(), "Fennel".to_string()],
                avoid: vec!["Cayenne".to_string()],
                notes: "Cooling spices only.".to_string(),
            },
            beverages: BeverageGuidelines {
                can_drink: vec!["Warm water".to_string()],
                avoid: vec!["Iced drinks".to_string()],
            },
        },
        nutrient_guidelines: NutrientGuidelines {
            carbohydrates: MacroRange {
                suggested_range_percent: "40-50%".to_string(),
                notes: "Whole grains preferred.".to_string(),
            },
            proteins: MacroRange {
                suggested_range_percent: "20-25%".to_string(),
                notes: "Plant-based.".to_string(),
            },
            fats: MacroRange {
                suggested_range_percent: "20-25%".to_string(),
                notes: "Ghee substitutes due to dairy allergy.".to_string(),
            },
            hydration: Hydration {
                water_intake_liters: "2-3".to_string(),
                notes: "Room temperature or warm.".to_string(),
            },
        },
        meal_timing: MealTiming {
            breakfast: "7-9 AM".to_string(),
            lunch: "12-2 PM (main meal)".to_string(),
            snack: "3-4 PM".to_string(),
            dinner: "6-8 PM (light meal)".to_string(),
            notes: "Lunch should be the largest meal.".to_string(),
        },
        portion_guidelines: PortionGuidelines {
            grains: "1-2 cups cooked per meal".to_string(),
            vegetables: "1-2 cups per meal".to_string(),
            fruits: "1 serving per snack".to_string(),
            proteins: "half to 1 cup cooked legumes per meal".to_string(),
            fats: "1-2 tsp per meal".to_string(),
        },
        lifestyle_recommendations: LifestyleRecommendations {
            exercise: "Gentle yoga in the morning.".to_string(),
            sleep: "In bed by 10 PM.".to_string(),
            mental_health: "Daily breathing practice.".to_string(),
            detox: "Light dinner once a week.".to_string(),
        },
        dosha_alerts: vec![
            DoshaAlert {
                dosha: "Pitta".to_string(),
                alert: "Avoid overheating and spicy food.".to_string(),
            },
            DoshaAlert {
                dosha: "Vata".to_string(),
                alert: "Keep regular meal times.".to_string(),
            },
            DoshaAlert {
                dosha: "Kapha".to_string(),
                alert: "No concerns at present.".to_string(),
            },
        ],
        flexibility_options: FlexibilityOptions {
            food_rotation: "Rotate grains weekly.".to_string(),
            seasonal_adjustments: "Lighter meals as summer approaches.".to_string(),
            spice_variations: "Swap fennel for cardamom occasionally.".to_string(),
        },
    }
}
