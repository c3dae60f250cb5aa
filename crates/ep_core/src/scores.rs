//! Exact-key score maps.
//!
//! All three map types are arrays indexed by the closed code enums, so the
//! "exactly 6 trait keys / exactly 3 elective keys" invariant holds by
//! construction and iteration order is always canonical. Serialized form is
//! a string-keyed map matching the stored recommendation documents.

use crate::codes::{Elective, TraitCode};

/// Accumulated per-trait totals. Fresh (all-zero) at the start of every
/// scoring call; never persisted by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TraitScores([f64; 6]);

impl TraitScores {
    pub fn new() -> Self {
        TraitScores([0.0; 6])
    }

    #[inline]
    pub fn get(&self, trait_code: TraitCode) -> f64 {
        self.0[trait_code.index()]
    }

    #[inline]
    pub fn add(&mut self, trait_code: TraitCode, amount: f64) {
        self.0[trait_code.index()] += amount;
    }

    pub fn iter(&self) -> impl Iterator<Item = (TraitCode, f64)> + '_ {
        TraitCode::ALL.iter().map(move |&t| (t, self.get(t)))
    }

    /// All six traits sorted by score descending; equal scores keep the
    /// canonical R, I, A, S, E, C order (stable sort).
    pub fn ranked(&self) -> [(TraitCode, f64); 6] {
        let mut entries: [(TraitCode, f64); 6] =
            core::array::from_fn(|i| (TraitCode::ALL[i], self.0[i]));
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(core::cmp::Ordering::Equal));
        entries
    }
}

/// Per-elective floating scores (raw, blended, or synergy-adjusted forms).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElectiveScores([f64; 3]);

impl ElectiveScores {
    pub fn new() -> Self {
        ElectiveScores([0.0; 3])
    }

    #[inline]
    pub fn get(&self, elective: Elective) -> f64 {
        self.0[elective.index()]
    }

    #[inline]
    pub fn set(&mut self, elective: Elective, score: f64) {
        self.0[elective.index()] = score;
    }

    #[inline]
    pub fn add(&mut self, elective: Elective, amount: f64) {
        self.0[elective.index()] += amount;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Elective, f64)> + '_ {
        Elective::ALL.iter().map(move |&e| (e, self.get(e)))
    }
}

/// Per-elective normalized points. Integer 0..=100 out of the normalizer;
/// a resolved tiebreak may lift the chosen elective by the flat bonus.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NormalizedScores([u32; 3]);

impl NormalizedScores {
    pub fn new() -> Self {
        NormalizedScores([0; 3])
    }

    /// All three electives set to the same value (the forced-tie form).
    pub fn uniform(points: u32) -> Self {
        NormalizedScores([points; 3])
    }

    #[inline]
    pub fn get(&self, elective: Elective) -> u32 {
        self.0[elective.index()]
    }

    #[inline]
    pub fn set(&mut self, elective: Elective, points: u32) {
        self.0[elective.index()] = points;
    }

    #[inline]
    pub fn add(&mut self, elective: Elective, points: u32) {
        self.0[elective.index()] += points;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Elective, u32)> + '_ {
        Elective::ALL.iter().map(move |&e| (e, self.get(e)))
    }

    pub fn max(&self) -> u32 {
        *self.0.iter().max().expect("three entries")
    }

    /// Electives holding the maximum score, in canonical order.
    pub fn top_set(&self) -> Vec<Elective> {
        let max = self.max();
        Elective::ALL.iter().copied().filter(|&e| self.get(e) == max).collect()
    }

    /// Scores sorted descending (for gap computation).
    pub fn sorted_desc(&self) -> [u32; 3] {
        let mut sorted = self.0;
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted
    }
}

#[cfg(feature = "serde")]
mod serialize {
    //! Map-shaped serialization: `{"R": 12.5, …}` / `{"MMGD": 77, …}`.

    use super::{ElectiveScores, NormalizedScores, TraitScores};
    use serde::ser::{Serialize, SerializeMap, Serializer};

    impl Serialize for TraitScores {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(6))?;
            for (t, score) in self.iter() {
                map.serialize_entry(t.letter(), &score)?;
            }
            map.end()
        }
    }

    impl Serialize for ElectiveScores {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(3))?;
            for (e, score) in self.iter() {
                map.serialize_entry(e.code(), &score)?;
            }
            map.end()
        }
    }

    impl Serialize for NormalizedScores {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(3))?;
            for (e, points) in self.iter() {
                map.serialize_entry(e.code(), &points)?;
            }
            map.end()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_scores_start_at_zero() {
        let scores = TraitScores::new();
        for (_, score) in scores.iter() {
            assert_eq!(score, 0.0);
        }
    }

    #[test]
    fn ranked_breaks_ties_in_canonical_order() {
        let mut scores = TraitScores::new();
        scores.add(TraitCode::Artistic, 10.0);
        scores.add(TraitCode::Social, 10.0);
        scores.add(TraitCode::Conventional, 12.0);
        let ranked = scores.ranked();
        assert_eq!(ranked[0].0, TraitCode::Conventional);
        // A ties S at 10; A precedes S canonically.
        assert_eq!(ranked[1].0, TraitCode::Artistic);
        assert_eq!(ranked[2].0, TraitCode::Social);
    }

    #[test]
    fn top_set_is_canonically_ordered() {
        let mut scores = NormalizedScores::uniform(80);
        scores.set(Elective::Itba, 70);
        assert_eq!(scores.top_set(), vec![Elective::Mmgd, Elective::MobileDev]);
        assert_eq!(scores.sorted_desc(), [80, 80, 70]);
    }
}
