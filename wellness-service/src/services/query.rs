//! Query composition: turns a validated profile into the semantic search
//! string sent to the embedding model.
//!
//! Pure and deterministic: the same request always yields the same query.

use crate::models::{DietRequest, Dosha};

/// Pacifying food qualities for an elevated dosha.
fn pacifying_qualities(dosha: Dosha) -> &'static str {
    match dosha {
        Dosha::Vata => "warming, grounding and nourishing",
        Dosha::Pitta => "cooling and calming",
        Dosha::Kapha => "light, warming and stimulating",
    }
}

/// Compose the retrieval query for a profile.
///
/// The imbalance direction is the per-axis delta between vikriti and
/// prakriti; the dosha with the largest positive delta drives the corrective
/// wording. When no dosha is elevated above baseline the query is
/// maintenance-oriented and carries no corrective language.
pub fn compose_query(request: &DietRequest) -> String {
    let profile = &request.profile;
    let deltas = [
        (Dosha::Vata, profile.vikriti.vata - profile.prakriti.vata),
        (Dosha::Pitta, profile.vikriti.pitta - profile.prakriti.pitta),
        (Dosha::Kapha, profile.vikriti.kapha - profile.prakriti.kapha),
    ];

    // Strictly-greater comparison so ties resolve to the earlier axis.
    let mut imbalance: Option<(Dosha, i32)> = None;
    for (dosha, delta) in deltas {
        if delta > 0 && imbalance.map_or(true, |(_, best)| delta > best) {
            imbalance = Some((dosha, delta));
        }
    }

    let mut query = match imbalance {
        Some((dosha, _)) => format!(
            "A healing food with {} qualities to pacify an elevated {} dosha, \
             for a person whose goal is to '{}'.",
            pacifying_qualities(dosha),
            dosha.name(),
            request.goals.primary_goal,
        ),
        None => format!(
            "A balancing, nourishing food to maintain an already settled \
             constitution, for a person whose goal is to '{}'.",
            request.goals.primary_goal,
        ),
    };

    query.push_str(&format!(
        " The food should be suitable for {} digestion with {} ama during the {} season.",
        request.health.agni, request.health.ama, request.environment.season,
    ));

    if !request.diet_preferences.cuisine.is_empty() {
        query.push_str(&format!(
            " The person is accustomed to and prefers {} cuisine.",
            request.diet_preferences.cuisine.join(", "),
        ));
    }

    query
}
