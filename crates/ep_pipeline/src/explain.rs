//! Qualitative explanation of a resolved recommendation.
//!
//! Reasoning sentences are selected by which traits sit in the student's
//! top two; the sentence bank is fixed per elective. An empty list is a
//! legitimate outcome (no matching trait condition) and callers must
//! render it gracefully.

use ep_core::{Elective, NormalizedScores, TraitCode, TraitScores};

/// Gap under which a Multimedia win also suggests the Mobile track.
const CROSS_TRACK_GAP: i64 = 10;

/// The `n` highest traits with rounded scores and descriptive names.
pub(crate) fn top_traits(traits: &TraitScores, n: usize) -> Vec<super::TopTrait> {
    traits
        .ranked()
        .into_iter()
        .take(n)
        .map(|(trait_code, score)| super::TopTrait {
            trait_code,
            score: score.round() as u32,
            name: trait_code.descriptive_name().to_string(),
        })
        .collect()
}

/// Reasoning sentences for a resolved recommendation.
pub(crate) fn reasoning_for(
    recommended: Elective,
    traits: &TraitScores,
    normalized: &NormalizedScores,
) -> Vec<String> {
    let ranked = traits.ranked();
    let top_two = [ranked[0].0, ranked[1].0];
    let in_top_two = |t: TraitCode| top_two.contains(&t);

    let mut reasons = Vec::new();
    match recommended {
        Elective::Mmgd => {
            if in_top_two(TraitCode::Artistic) {
                reasons.push(
                    "Your strong Artistic traits align perfectly with creative game and media development."
                        .to_string(),
                );
            }
            if in_top_two(TraitCode::Realistic) {
                reasons.push(
                    "Your Realistic approach suits hands-on game development and 3D modeling."
                        .to_string(),
                );
            }
            let gap = normalized.get(Elective::Mmgd) as i64
                - normalized.get(Elective::MobileDev) as i64;
            if gap < CROSS_TRACK_GAP {
                reasons.push(
                    "You also show interest in Mobile Development - consider combining game dev with mobile platforms."
                        .to_string(),
                );
            }
        }
        Elective::Itba => {
            if in_top_two(TraitCode::Investigative) {
                reasons.push(
                    "Your Investigative nature is ideal for data analysis and pattern recognition."
                        .to_string(),
                );
            }
            if in_top_two(TraitCode::Conventional) {
                reasons.push(
                    "Your Conventional traits help you excel at organizing and structuring data."
                        .to_string(),
                );
            }
            if in_top_two(TraitCode::Enterprising) {
                reasons.push(
                    "Your Enterprising mindset will help you translate data into business strategy."
                        .to_string(),
                );
            }
        }
        Elective::MobileDev => {
            if in_top_two(TraitCode::Realistic) {
                reasons.push(
                    "Your Realistic traits are perfect for hands-on mobile app development."
                        .to_string(),
                );
            }
            if in_top_two(TraitCode::Artistic) {
                reasons.push(
                    "Your Artistic side will help you create beautiful, user-friendly interfaces."
                        .to_string(),
                );
            }
            if in_top_two(TraitCode::Investigative) {
                reasons.push(
                    "Your Investigative skills will help you solve complex technical challenges."
                        .to_string(),
                );
            }
        }
    }
    reasons
}

/// The single sentence shown with a needs-tiebreak outcome.
pub(crate) fn even_distribution_sentence() -> String {
    "Your interests are evenly distributed across all electives. Please choose your preferred track."
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traits_with(entries: &[(TraitCode, f64)]) -> TraitScores {
        let mut traits = TraitScores::new();
        for &(t, score) in entries {
            traits.add(t, score);
        }
        traits
    }

    #[test]
    fn mmgd_artistic_and_cross_track() {
        let traits = traits_with(&[
            (TraitCode::Artistic, 33.9),
            (TraitCode::Investigative, 17.6),
            (TraitCode::Realistic, 15.8),
        ]);
        let mut normalized = NormalizedScores::new();
        normalized.set(Elective::Mmgd, 73);
        normalized.set(Elective::Itba, 58);
        normalized.set(Elective::MobileDev, 68);
        let reasons = reasoning_for(Elective::Mmgd, &traits, &normalized);
        assert_eq!(reasons.len(), 2);
        assert!(reasons[0].contains("Artistic"));
        assert!(reasons[1].contains("Mobile Development"));
    }

    #[test]
    fn itba_two_matching_traits() {
        let traits = traits_with(&[
            (TraitCode::Investigative, 31.5),
            (TraitCode::Enterprising, 12.5),
            (TraitCode::Conventional, 11.5),
        ]);
        let mut normalized = NormalizedScores::new();
        normalized.set(Elective::Itba, 86);
        normalized.set(Elective::MobileDev, 46);
        normalized.set(Elective::Mmgd, 34);
        let reasons = reasoning_for(Elective::Itba, &traits, &normalized);
        // Investigative and Enterprising are top-two; Conventional is not.
        assert_eq!(reasons.len(), 2);
        assert!(reasons[0].contains("Investigative"));
        assert!(reasons[1].contains("Enterprising"));
    }

    #[test]
    fn no_matching_trait_yields_empty_list() {
        let traits = traits_with(&[(TraitCode::Social, 30.0), (TraitCode::Artistic, 25.0)]);
        let mut normalized = NormalizedScores::new();
        normalized.set(Elective::Itba, 80);
        normalized.set(Elective::Mmgd, 40);
        normalized.set(Elective::MobileDev, 40);
        assert!(reasoning_for(Elective::Itba, &traits, &normalized).is_empty());
    }

    #[test]
    fn top_traits_are_rounded_and_named() {
        let traits = traits_with(&[
            (TraitCode::Artistic, 28.2),
            (TraitCode::Investigative, 18.9),
            (TraitCode::Realistic, 15.9),
            (TraitCode::Enterprising, 7.5),
        ]);
        let top = top_traits(&traits, 3);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].trait_code, TraitCode::Artistic);
        assert_eq!(top[0].score, 28);
        assert_eq!(top[0].name, "Artistic (Creative, Design-oriented)");
        assert_eq!(top[2].score, 16);
    }
}
