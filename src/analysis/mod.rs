//! Market-analysis collaborators built on the domain kernel.

mod cache;
mod market;

pub use cache::{InvalidationPolicy, KeepForever, MarketDataCache, MaxAge};
pub use market::{best_line, evaluate_lines, AnalysisConfig, LineEvaluation};
