// Scoring — the pure computation core.
//
// Each submodule is an independent sub-computation over a CreatorProfile:
// engagement metrics, the weighted composite score, the authenticity rule
// chain, and the tier/platform rate card. `profile` orchestrates them into
// a complete ScoreResult.

pub mod authenticity;
pub mod composite;
pub mod engagement;
pub mod profile;
pub mod rates;
