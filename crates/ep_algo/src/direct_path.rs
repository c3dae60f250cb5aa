//! Direct scorer path: per-question elective weights applied to the raw
//! answer value, independent of the trait aggregation.
//!
//! Questions without a direct-mapping entry contribute nothing here while
//! still feeding the RIASEC path; that asymmetry is a property of the rule
//! set, not of this function. The scale factor keeps this path comparable
//! to the RIASEC path after blending.

use ep_core::{AnswerSheet, ElectiveScores, ScoringRules};

/// Accumulate `mapping_weight × answer × scale` per elective.
pub fn score_by_direct_mapping(sheet: &AnswerSheet, rules: &ScoringRules) -> ElectiveScores {
    let mut scores = ElectiveScores::new();
    for (index, question) in rules.questions.iter().enumerate() {
        let Some(mapping) = rules.direct_mapping_of(question.id) else {
            continue;
        };
        let answer = sheet.get(index).value() as f64;
        for (elective, &weight) in mapping.iter() {
            scores.add(elective, weight * answer * rules.direct_scale);
        }
    }
    scores
}
