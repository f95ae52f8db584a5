// Readiness scoring: static weight tables, snapshot computation and readiness bands.
// Scoring is pure; the same code runs for the client preview and the authoritative server score.

pub mod readiness;
pub mod snapshot;
pub mod tables;

pub use readiness::ReadinessLevel;
pub use snapshot::{compute_score_snapshot, ScoreSnapshot};
pub use tables::{weight_table, WeightTable};
