//! Analysis engine for determining the bump level from commits

pub mod bump_analyzer;

pub use bump_analyzer::{BumpAnalyzer, RangeAnalysis};
