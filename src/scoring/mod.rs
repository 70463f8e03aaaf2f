// Scoring — tiers, risk ladder, indicator rules, and the engine that ties
// them together.

pub mod engine;
pub mod risk;
pub mod rules;
pub mod tier;

pub use engine::{perform_analysis, AnalysisInput, AnalysisResult, Breakdown};
pub use risk::{determine_risk_level, RiskLevel};
pub use tier::{get_tier, Tier};
