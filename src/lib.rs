pub mod input;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod tracing;

pub use model::curve::{CurveParams, CurvePoint};
pub use model::deviation::{DeviationResult, ScoreComparison};
pub use model::rows::{RawRow, ScoreRow};
pub use model::stats::AggregateStats;
pub use pipeline::session::{Analysis, Stage};
pub use pipeline::stage2_aggregate::aggregate;
pub use pipeline::stage3_curve::sample_normal_curve;
pub use pipeline::stage4_deviation::score_deviation;
