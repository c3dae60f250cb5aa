//! Blender: one raw score per elective from the two scorer paths.

use ep_core::{ElectiveScores, ScoringRules};

/// `trait_share × riasec + direct_share × direct`, per elective.
pub fn blend(
    riasec: &ElectiveScores,
    direct: &ElectiveScores,
    rules: &ScoringRules,
) -> ElectiveScores {
    let mut blended = ElectiveScores::new();
    for (elective, riasec_score) in riasec.iter() {
        blended.set(
            elective,
            riasec_score * rules.trait_share + direct.get(elective) * rules.direct_share,
        );
    }
    blended
}

#[cfg(test)]
mod tests {
    use super::*;
    use ep_core::Elective;

    #[test]
    fn sixty_forty_split() {
        let rules = ScoringRules::default();
        let mut riasec = ElectiveScores::new();
        let mut direct = ElectiveScores::new();
        riasec.set(Elective::Mmgd, 100.0);
        direct.set(Elective::Mmgd, 50.0);
        let blended = blend(&riasec, &direct, &rules);
        assert!((blended.get(Elective::Mmgd) - 80.0).abs() < 1e-9);
        assert_eq!(blended.get(Elective::Itba), 0.0);
    }
}
