//! Performance reports for players of competitive games, built from their
//! recent matches.

pub mod analysis;
pub mod config;
pub mod game;
pub mod match_record;
pub mod player;
pub mod queue;
pub mod report;
pub mod riot;
pub mod riot_id;
pub mod service;

pub use analysis::{Analyzer, AnalyzerRegistry, PerformanceAnalysis};
pub use config::*;
pub use game::*;
pub use match_record::*;
pub use player::*;
pub use report::*;
pub use riot_id::*;
pub use service::*;
