pub mod core;
pub mod error;
pub mod output;

pub use crate::core::analysis::{Analysis, AnalysisRecord, SummaryStatistics, analyze};
pub use crate::core::ballistics::{LaunchParameters, TimeSeries, TrajectorySample, generate};
pub use crate::error::ProjectileError;
