//! Seeded RNG for **ties only** (no OS entropy).
//!
//! The scoring pipeline is a pure function except for one branch: a
//! residual multi-way tie after the tiebreak bonus. That branch draws from
//! this RNG, seeded explicitly by the caller, so runs stay reproducible.
//! Unbiased range generation via rejection sampling; cross-platform stream
//! stability comes from the explicit ChaCha20 seeding.

use core::str::FromStr;

use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

use crate::errors::CoreError;

/// How a residual tie is settled once the tiebreak bonus still leaves more
/// than one elective at the top.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TiePolicy {
    /// First tied elective in canonical declaration order wins.
    DeterministicOrder,
    /// Uniform pick from the tied set using a seeded [`TieRng`].
    Random,
}

impl FromStr for TiePolicy {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deterministic" => Ok(TiePolicy::DeterministicOrder),
            "random" => Ok(TiePolicy::Random),
            _ => Err(CoreError::UnknownTiePolicy),
        }
    }
}

/// Newtype over ChaCha20Rng for tie-breaking.
#[derive(Clone, Debug)]
pub struct TieRng(ChaCha20Rng);

impl TieRng {
    /// Construct from a 64-bit seed. The mapping to the ChaCha20 32-byte
    /// seed is explicit: `seed.to_le_bytes()` into the first 8 bytes, the
    /// remaining 24 bytes zero. This avoids endianness ambiguity.
    pub fn from_seed_u64(seed: u64) -> Self {
        let mut seed32 = [0u8; 32];
        seed32[..8].copy_from_slice(&seed.to_le_bytes());
        TieRng(ChaCha20Rng::from_seed(seed32))
    }

    /// Unbiased index in `[0, n)` via rejection sampling; `None` if `n == 0`.
    pub fn choose_index(&mut self, n: usize) -> Option<usize> {
        if n == 0 {
            return None;
        }
        let n_u64 = n as u64;
        // Accept only draws below the largest multiple of n.
        let zone = u64::MAX - (u64::MAX % n_u64);
        loop {
            let x = self.0.next_u64();
            if x < zone {
                return Some((x % n_u64) as usize);
            }
        }
    }
}

impl Default for TieRng {
    fn default() -> Self {
        TieRng::from_seed_u64(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choose_zero_is_none() {
        let mut rng = TieRng::from_seed_u64(0xDEAD_BEEF_CAFE_BABE);
        assert_eq!(rng.choose_index(0), None);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = TieRng::from_seed_u64(123_456_789);
        let mut b = TieRng::from_seed_u64(123_456_789);
        for _ in 0..32 {
            assert_eq!(a.choose_index(10), b.choose_index(10));
        }
    }

    #[test]
    fn indices_stay_in_range() {
        let mut rng = TieRng::from_seed_u64(7);
        for _ in 0..64 {
            assert!(rng.choose_index(3).unwrap() < 3);
        }
    }

    #[test]
    fn policy_parses() {
        assert_eq!("deterministic".parse::<TiePolicy>().unwrap(), TiePolicy::DeterministicOrder);
        assert_eq!("random".parse::<TiePolicy>().unwrap(), TiePolicy::Random);
        assert!("coin-flip".parse::<TiePolicy>().is_err());
    }
}
