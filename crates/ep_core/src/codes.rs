//! Code domains: RIASEC trait letters and elective track codes.
//!
//! Both domains are closed: every map keyed by them has exactly 6 (traits)
//! or exactly 3 (electives) entries by construction. Wire forms match the
//! stored survey/recommendation documents (`"R"`…`"C"`, `"MMGD"`, `"ITBA"`,
//! `"MobileDev"`).

use core::fmt;
use core::str::FromStr;

use crate::errors::CoreError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the six RIASEC personality traits (Holland Codes taxonomy).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TraitCode {
    #[cfg_attr(feature = "serde", serde(rename = "R"))]
    Realistic,
    #[cfg_attr(feature = "serde", serde(rename = "I"))]
    Investigative,
    #[cfg_attr(feature = "serde", serde(rename = "A"))]
    Artistic,
    #[cfg_attr(feature = "serde", serde(rename = "S"))]
    Social,
    #[cfg_attr(feature = "serde", serde(rename = "E"))]
    Enterprising,
    #[cfg_attr(feature = "serde", serde(rename = "C"))]
    Conventional,
}

impl TraitCode {
    /// Canonical order; also the tie order when ranking equal trait scores.
    pub const ALL: [TraitCode; 6] = [
        TraitCode::Realistic,
        TraitCode::Investigative,
        TraitCode::Artistic,
        TraitCode::Social,
        TraitCode::Enterprising,
        TraitCode::Conventional,
    ];

    /// Single-letter wire code.
    pub fn letter(self) -> &'static str {
        match self {
            TraitCode::Realistic => "R",
            TraitCode::Investigative => "I",
            TraitCode::Artistic => "A",
            TraitCode::Social => "S",
            TraitCode::Enterprising => "E",
            TraitCode::Conventional => "C",
        }
    }

    /// Descriptive name shown alongside top-trait rankings.
    pub fn descriptive_name(self) -> &'static str {
        match self {
            TraitCode::Realistic => "Realistic (Hands-on, Technical)",
            TraitCode::Investigative => "Investigative (Analytical, Problem-solving)",
            TraitCode::Artistic => "Artistic (Creative, Design-oriented)",
            TraitCode::Social => "Social (Collaborative, People-focused)",
            TraitCode::Enterprising => "Enterprising (Leadership, Strategic)",
            TraitCode::Conventional => "Conventional (Organized, Detail-oriented)",
        }
    }

    /// Stable index into `[_; 6]` tables.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            TraitCode::Realistic => 0,
            TraitCode::Investigative => 1,
            TraitCode::Artistic => 2,
            TraitCode::Social => 3,
            TraitCode::Enterprising => 4,
            TraitCode::Conventional => 5,
        }
    }
}

impl fmt::Display for TraitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

impl FromStr for TraitCode {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" => Ok(TraitCode::Realistic),
            "I" => Ok(TraitCode::Investigative),
            "A" => Ok(TraitCode::Artistic),
            "S" => Ok(TraitCode::Social),
            "E" => Ok(TraitCode::Enterprising),
            "C" => Ok(TraitCode::Conventional),
            _ => Err(CoreError::UnknownTraitCode),
        }
    }
}

/// One of the three elective tracks the engine recommends among.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Elective {
    #[cfg_attr(feature = "serde", serde(rename = "MMGD"))]
    Mmgd,
    #[cfg_attr(feature = "serde", serde(rename = "ITBA"))]
    Itba,
    #[cfg_attr(feature = "serde", serde(rename = "MobileDev"))]
    MobileDev,
}

impl Elective {
    /// Canonical order; doubles as the deterministic tie-resolution order.
    pub const ALL: [Elective; 3] = [Elective::Mmgd, Elective::Itba, Elective::MobileDev];

    /// Wire code used in stored documents and CLI flags.
    pub fn code(self) -> &'static str {
        match self {
            Elective::Mmgd => "MMGD",
            Elective::Itba => "ITBA",
            Elective::MobileDev => "MobileDev",
        }
    }

    /// Full track name for report surfaces.
    pub fn label(self) -> &'static str {
        match self {
            Elective::Mmgd => "Multimedia & Game Development",
            Elective::Itba => "IT Business Analytics",
            Elective::MobileDev => "Mobile Development",
        }
    }

    /// Stable index into `[_; 3]` tables.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Elective::Mmgd => 0,
            Elective::Itba => 1,
            Elective::MobileDev => 2,
        }
    }
}

impl fmt::Display for Elective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Elective {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MMGD" => Ok(Elective::Mmgd),
            "ITBA" => Ok(Elective::Itba),
            "MobileDev" => Ok(Elective::MobileDev),
            _ => Err(CoreError::UnknownElectiveCode),
        }
    }
}
