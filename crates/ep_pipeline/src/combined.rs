//! Combined recommendation: survey scores blended with exploration-activity
//! performance averages.
//!
//! After the survey, students work through per-track exploration activities
//! whose performance scores are recorded elsewhere. The final standing
//! blends the survey's normalized elective scores (weight 0.6) with the
//! per-elective average of activity scores (weight 0.4); tracks with no
//! recorded activity average 0. How an individual activity is scored is
//! outside this engine; callers pass the averages in.

use ep_core::{Elective, ElectiveScores, NormalizedScores, ScoringRules};
use serde::Serialize;

/// Blend weights for the final standing (survey vs activities).
const SURVEY_WEIGHT: f64 = 0.6;
const ACTIVITY_WEIGHT: f64 = 0.4;

/// Final standing across survey and activities.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedRecommendation {
    pub recommended: Elective,
    /// Per-elective blended score, rounded to one decimal.
    pub final_scores: ElectiveScores,
    /// 0..=100, same gap rule as the survey confidence.
    pub confidence: u32,
}

/// Blend normalized survey scores with per-elective activity averages.
pub fn combine_with_activities(
    survey: &NormalizedScores,
    activity_averages: &ElectiveScores,
    rules: &ScoringRules,
) -> CombinedRecommendation {
    let mut final_scores = ElectiveScores::new();
    for (elective, points) in survey.iter() {
        let blended = points as f64 * SURVEY_WEIGHT
            + activity_averages.get(elective) * ACTIVITY_WEIGHT;
        final_scores.set(elective, (blended * 10.0).round() / 10.0);
    }

    // First elective in canonical order wins a tie on the blended score.
    let recommended = Elective::ALL
        .into_iter()
        .max_by(|&a, &b| {
            final_scores
                .get(a)
                .partial_cmp(&final_scores.get(b))
                .unwrap_or(core::cmp::Ordering::Equal)
                .then(b.index().cmp(&a.index()))
        })
        .expect("three electives");

    let mut sorted: Vec<f64> = final_scores.iter().map(|(_, s)| s).collect();
    sorted.sort_by(|a, b| b.partial_cmp(a).unwrap_or(core::cmp::Ordering::Equal));
    let gap = sorted[0] - sorted[1];
    let confidence = (rules.confidence_base + gap * rules.confidence_slope)
        .round()
        .clamp(0.0, 100.0) as u32;

    CombinedRecommendation { recommended, final_scores, confidence }
}
