//! ep_core — Core types, scoring rules, and deterministic tie RNG.
//!
//! This crate is **I/O-free**. It defines the stable types/APIs used across
//! the engine (`ep_io`, `ep_algo`, `ep_pipeline`, `ep_report`, `ep_cli`):
//!
//! - Code domains: `TraitCode` (RIASEC), `Elective`
//! - Validated survey input: `Answer`, `AnswerSheet`
//! - Exact-key score maps: `TraitScores`, `ElectiveScores`, `NormalizedScores`
//! - The immutable rules value object: `ScoringRules`
//! - Seedable RNG (ChaCha20) for **ties only**: `TieRng`, `TiePolicy`
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]

pub mod errors {
    use core::fmt;

    /// Minimal error set for core-domain validation & parsing.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub enum CoreError {
        /// A single Likert value outside 1..=5.
        ValueOutOfRange(u8),
        /// A sheet slot held an out-of-range value.
        AnswerOutOfRange { index: usize, value: u8 },
        /// Sheet length differed from the fixed question count.
        WrongAnswerCount { expected: usize, got: usize },
        /// Unrecognized trait code letter.
        UnknownTraitCode,
        /// Unrecognized elective code.
        UnknownElectiveCode,
        /// Unrecognized tie policy name.
        UnknownTiePolicy,
        /// A rules table violated a domain invariant.
        InvalidRules(&'static str),
        /// Two questions shared an id.
        DuplicateQuestionId(u8),
    }

    impl fmt::Display for CoreError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                CoreError::ValueOutOfRange(v) => write!(f, "answer value out of range: {v}"),
                CoreError::AnswerOutOfRange { index, value } => {
                    write!(f, "answer {index} out of range: {value}")
                }
                CoreError::WrongAnswerCount { expected, got } => {
                    write!(f, "expected {expected} answers, got {got}")
                }
                CoreError::UnknownTraitCode => write!(f, "unknown trait code"),
                CoreError::UnknownElectiveCode => write!(f, "unknown elective code"),
                CoreError::UnknownTiePolicy => write!(f, "unknown tie policy"),
                CoreError::InvalidRules(k) => write!(f, "invalid rules: {k}"),
                CoreError::DuplicateQuestionId(id) => write!(f, "duplicate question id: {id}"),
            }
        }
    }

    impl std::error::Error for CoreError {}
}

pub mod answers;
pub mod codes;
pub mod rng;
pub mod rules;
pub mod scores;

pub use answers::{Answer, AnswerSheet, QUESTION_COUNT};
pub use codes::{Elective, TraitCode};
pub use errors::CoreError;
pub use rng::{TiePolicy, TieRng};
pub use rules::{ElectiveTable, ScoringRules, SurveyQuestion, SynergyRule, TraitWeights};
pub use scores::{ElectiveScores, NormalizedScores, TraitScores};
