//! The scoring rules value object.
//!
//! Everything the model "knows" lives here: the question list, the
//! per-elective trait weight vectors, the per-question direct elective
//! mapping, the importance multipliers, the synergy rules, and the model
//! constants. Rules are loaded once (built-in default or an external JSON
//! rule set via `ep_io`) and are read-only for the life of the process;
//! no scoring call mutates them.
//!
//! The built-in tables must be reproduced exactly: the normalizer divides
//! by per-elective ceilings derived from these numbers, so any drift
//! silently reshapes every recommendation.

use std::collections::BTreeMap;

use crate::codes::{Elective, TraitCode};
use crate::errors::CoreError;

/// One survey question: stable id, prompt text, and the trait it loads on.
#[derive(Clone, Debug, PartialEq)]
pub struct SurveyQuestion {
    pub id: u8,
    pub text: String,
    pub trait_code: TraitCode,
}

/// A per-elective table with exactly one entry per track.
#[derive(Clone, Debug, PartialEq)]
pub struct ElectiveTable<T>([T; 3]);

impl<T> ElectiveTable<T> {
    pub fn new(mmgd: T, itba: T, mobile_dev: T) -> Self {
        ElectiveTable([mmgd, itba, mobile_dev])
    }

    #[inline]
    pub fn get(&self, elective: Elective) -> &T {
        &self.0[elective.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Elective, &T)> {
        Elective::ALL.iter().map(move |&e| (e, self.get(e)))
    }
}

/// Weight vector over the six traits for one elective.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraitWeights([f64; 6]);

impl TraitWeights {
    /// Weights in canonical trait order (R, I, A, S, E, C).
    pub fn new(r: f64, i: f64, a: f64, s: f64, e: f64, c: f64) -> Self {
        TraitWeights([r, i, a, s, e, c])
    }

    #[inline]
    pub fn get(&self, trait_code: TraitCode) -> f64 {
        self.0[trait_code.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (TraitCode, f64)> + '_ {
        TraitCode::ALL.iter().map(move |&t| (t, self.get(t)))
    }
}

/// Bonus awarded when a trait pair's average clears the synergy threshold.
/// A self-pair (`(A, A)`) means the single trait is a strong enough signal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SynergyRule {
    pub pair: (TraitCode, TraitCode),
    pub bonus: f64,
}

/// The complete, immutable rule set driving one scoring run.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoringRules {
    /// 21 questions, positionally aligned with answer sheets.
    pub questions: Vec<SurveyQuestion>,
    /// Per-elective trait weight vectors (the RIASEC scorer path).
    pub trait_weights: ElectiveTable<TraitWeights>,
    /// Per-question, per-elective weights (the direct scorer path).
    /// Questions absent from this table contribute nothing to that path.
    pub direct_mapping: BTreeMap<u8, ElectiveTable<f64>>,
    /// Per-question importance multipliers; absent ids default to 1.0.
    pub importance: BTreeMap<u8, f64>,
    /// Per-elective synergy rules.
    pub synergies: ElectiveTable<Vec<SynergyRule>>,

    /// Direct-path scale factor keeping both paths comparable post-blend.
    pub direct_scale: f64,
    /// Blend share of the RIASEC path.
    pub trait_share: f64,
    /// Blend share of the direct-mapping path.
    pub direct_share: f64,
    /// Trait-pair average must exceed this for any synergy bonus.
    pub synergy_threshold: f64,
    /// Trait-pair average at which the full synergy bonus applies.
    pub synergy_ceiling: f64,
    /// Normalized top-vs-second gap below which all scores are forced equal.
    pub near_tie_margin: u32,
    /// Flat bonus added to the elective chosen on the tiebreaker screen.
    pub tiebreak_bonus: u32,
    /// Confidence = clamp(base + gap * slope, 0, 100).
    pub confidence_base: f64,
    pub confidence_slope: f64,
}

impl ScoringRules {
    /// Importance multiplier for a question id (1.0 when not listed).
    #[inline]
    pub fn importance_of(&self, question_id: u8) -> f64 {
        self.importance.get(&question_id).copied().unwrap_or(1.0)
    }

    /// Direct-mapping entry for a question id, if the table has one.
    #[inline]
    pub fn direct_mapping_of(&self, question_id: u8) -> Option<&ElectiveTable<f64>> {
        self.direct_mapping.get(&question_id)
    }

    /// Domain validation for alternate rule sets. The built-in default
    /// passes by construction; external files go through this after parse.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.questions.len() != crate::answers::QUESTION_COUNT {
            return Err(CoreError::InvalidRules("question count must be 21"));
        }
        let mut seen = std::collections::BTreeSet::new();
        for q in &self.questions {
            if q.id == 0 {
                return Err(CoreError::InvalidRules("question id 0 is reserved"));
            }
            if !seen.insert(q.id) {
                return Err(CoreError::DuplicateQuestionId(q.id));
            }
        }
        for (_, weights) in self.trait_weights.iter() {
            for (_, w) in weights.iter() {
                if !w.is_finite() || w < 0.0 {
                    return Err(CoreError::InvalidRules("trait weight must be finite and >= 0"));
                }
            }
        }
        for (id, table) in &self.direct_mapping {
            if !seen.contains(id) {
                return Err(CoreError::InvalidRules("direct mapping references unknown question"));
            }
            for (_, &w) in table.iter() {
                if !w.is_finite() || w < 0.0 {
                    return Err(CoreError::InvalidRules("direct weight must be finite and >= 0"));
                }
            }
        }
        for (id, &m) in &self.importance {
            if !seen.contains(id) {
                return Err(CoreError::InvalidRules("importance references unknown question"));
            }
            if !m.is_finite() || m <= 0.0 {
                return Err(CoreError::InvalidRules("importance must be finite and > 0"));
            }
        }
        for (_, rules) in self.synergies.iter() {
            for rule in rules {
                if !rule.bonus.is_finite() || rule.bonus < 0.0 {
                    return Err(CoreError::InvalidRules("synergy bonus must be finite and >= 0"));
                }
            }
        }
        if self.direct_scale <= 0.0 || !self.direct_scale.is_finite() {
            return Err(CoreError::InvalidRules("direct scale must be finite and > 0"));
        }
        if (self.trait_share + self.direct_share - 1.0).abs() > 1e-9 {
            return Err(CoreError::InvalidRules("blend shares must sum to 1"));
        }
        if self.synergy_ceiling <= self.synergy_threshold {
            return Err(CoreError::InvalidRules("synergy ceiling must exceed threshold"));
        }
        Ok(())
    }
}

impl Default for ScoringRules {
    /// The reference rule set, digit-for-digit.
    fn default() -> Self {
        use TraitCode::{Artistic as A, Conventional as C, Enterprising as E};
        use TraitCode::{Investigative as I, Realistic as R, Social as S};

        let q = |id: u8, text: &str, trait_code: TraitCode| SurveyQuestion {
            id,
            text: text.to_string(),
            trait_code,
        };
        let questions = vec![
            q(1, "I enjoy creating digital content like animations, videos, or games.", A),
            q(2, "I like experimenting with new ideas and creative solutions.", A),
            q(3, "I enjoy designing interfaces or interactive experiences.", A),
            q(4, "I enjoy collaborating on creative projects with others.", S),
            q(5, "I like finding innovative solutions to problems.", I),
            q(6, "I enjoy creating digital artwork or media.", A),
            q(7, "I like designing products or experiences for users.", A),
            q(8, "I like analyzing data to find patterns or solve problems.", I),
            q(9, "I enjoy organizing information and working with structured data.", C),
            q(10, "I like improving systems or processes to make them work better.", C),
            q(11, "I enjoy planning and strategizing for projects.", E),
            q(12, "I like making decisions based on data and trends.", E),
            q(13, "I enjoy evaluating information to make recommendations.", I),
            q(14, "I like using logic and analysis to solve business problems.", I),
            q(15, "I enjoy coding, testing, and building functional software.", R),
            q(16, "I like building apps or software that people use on devices.", R),
            q(17, "I enjoy hands-on technical projects or experiments.", R),
            q(18, "I like learning new technologies and exploring how they work.", I),
            q(19, "I enjoy designing functional user interfaces.", A),
            q(20, "I like troubleshooting technical problems.", R),
            q(21, "I enjoy combining creativity with technical skills to make apps.", A),
        ];

        // Weight vectors in canonical trait order (R, I, A, S, E, C).
        let trait_weights = ElectiveTable::new(
            TraitWeights::new(2.0, 1.0, 5.0, 1.0, 1.0, 0.5), // MMGD: Artistic primary
            TraitWeights::new(0.5, 5.0, 1.0, 1.0, 3.0, 4.0), // ITBA: Investigative primary
            TraitWeights::new(5.0, 3.0, 2.0, 1.0, 1.0, 1.0), // MobileDev: Realistic primary
        );

        // Per-question (MMGD, ITBA, MobileDev) direct weights.
        let mut direct_mapping = BTreeMap::new();
        let mut dm = |id: u8, mmgd: f64, itba: f64, mobile: f64| {
            direct_mapping.insert(id, ElectiveTable::new(mmgd, itba, mobile));
        };
        dm(1, 1.5, 0.2, 0.5);
        dm(2, 1.3, 0.8, 0.9);
        dm(3, 1.2, 0.3, 1.4);
        dm(4, 1.0, 0.8, 0.9);
        dm(5, 0.8, 1.2, 1.1);
        dm(6, 1.5, 0.2, 0.4);
        dm(7, 1.3, 0.5, 1.3);
        dm(8, 0.2, 1.8, 0.4);
        dm(9, 0.1, 1.7, 0.5);
        dm(10, 0.3, 1.6, 0.6);
        dm(11, 0.3, 1.7, 0.5);
        dm(12, 0.2, 1.8, 0.4);
        dm(13, 0.2, 1.8, 0.4);
        dm(14, 0.2, 1.9, 0.4);
        dm(15, 0.5, 0.4, 1.6);
        dm(16, 0.3, 0.2, 1.7);
        dm(17, 0.7, 0.3, 1.5);
        dm(18, 0.6, 0.8, 1.4);
        dm(19, 0.9, 0.2, 1.5);
        dm(20, 0.4, 0.5, 1.4);
        dm(21, 1.1, 0.3, 1.5);

        let importance: BTreeMap<u8, f64> = [
            (1, 1.5),
            (2, 1.0),
            (3, 1.3),
            (4, 1.0),
            (5, 1.0),
            (6, 1.5),
            (7, 1.3),
            (8, 1.5),
            (9, 1.3),
            (10, 1.0),
            (11, 1.0),
            (12, 1.5),
            (13, 1.3),
            (14, 1.5),
            (15, 1.5),
            (16, 1.5),
            (17, 1.0),
            (18, 1.0),
            (19, 1.3),
            (20, 1.3),
            (21, 1.5),
        ]
        .into_iter()
        .collect();

        let rule = |t1: TraitCode, t2: TraitCode, bonus: f64| SynergyRule { pair: (t1, t2), bonus };
        let synergies = ElectiveTable::new(
            vec![rule(A, R, 15.0), rule(A, A, 10.0)],
            vec![rule(I, C, 15.0), rule(I, E, 12.0), rule(C, E, 10.0)],
            vec![rule(R, A, 15.0), rule(R, I, 12.0), rule(R, R, 10.0)],
        );

        ScoringRules {
            questions,
            trait_weights,
            direct_mapping,
            importance,
            synergies,
            direct_scale: 8.0,
            trait_share: 0.6,
            direct_share: 0.4,
            synergy_threshold: 15.0,
            synergy_ceiling: 25.0,
            near_tie_margin: 5,
            tiebreak_bonus: 5,
            confidence_base: 50.0,
            confidence_slope: 2.0,
        }
    }
}
