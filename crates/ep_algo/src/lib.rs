//! ep_algo — Pure scoring stages for the ElectiPath engine.
//!
//! Every function here is deterministic and I/O-free: `(inputs, &rules) ->
//! output`, no RNG, no shared state. The pipeline crate composes them in
//! order:
//!
//! answers → [`aggregate_traits`] → [`score_by_traits`]
//!                                  [`score_by_direct_mapping`]
//!         → [`blend`] → [`apply_synergy`] → [`normalize`]
//!
//! Tie resolution and result assembly live in `ep_pipeline`; this crate
//! stops at normalized per-elective points plus the forced-tie signal.

#![forbid(unsafe_code)]

pub mod aggregate;
pub mod blend;
pub mod direct_path;
pub mod normalize;
pub mod synergy;
pub mod trait_path;

pub use aggregate::aggregate_traits;
pub use blend::blend;
pub use direct_path::score_by_direct_mapping;
pub use normalize::{ceiling_scores, normalize, Normalization};
pub use synergy::apply_synergy;
pub use trait_path::score_by_traits;
