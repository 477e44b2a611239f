//! Reduction of a player's recent matches to a compact performance summary.
//!
//! Every game gets its own [`Analyzer`]. The analyzers are pure: they do not
//! fetch, cache or keep anything between calls, so one instance can be shared
//! between threads and used for any number of players.

pub mod aggregate;
pub mod extract;
pub mod lol;
pub mod registry;
pub mod scoring;
pub mod trend;

use std::collections::BTreeMap;

use json::JsonValue;
use thiserror::Error;

pub use self::lol::LolAnalyzer;
pub use self::registry::AnalyzerRegistry;
pub use self::trend::Trend;
use crate::game::GameType;
use crate::match_record::MatchRecord;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError
{
    /// None of the supplied matches could be used, either because there were
    /// none or because the subject did not take part in any of them.
    #[error("no matches to analyze")]
    EmptyInput,
    #[error("game `{0}` is not supported")]
    UnsupportedGame(GameType),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Turns the matches of one player into a summary. One implementation exists
/// per game.
pub trait Analyzer: Send + Sync
{
    /// The game this analyzer understands.
    fn game(&self) -> GameType;

    /// Compute the summary for the player with the id `subject_id`. The
    /// matches must be ordered from oldest to newest, the trend is read off
    /// that order. Matches the subject did not play in are ignored.
    ///
    /// # Errors
    /// `AnalysisError::EmptyInput` if not a single usable match remains.
    fn compute_summary(
        &self,
        matches: &[MatchRecord],
        subject_id: &str,
    ) -> AnalysisResult<PerformanceAnalysis>;
}

/// Value of an auxiliary, game specific metric.
#[derive(Clone, Debug, PartialEq)]
pub enum MetricValue
{
    Number(f64),
    Count(usize),
    Text(String),
}

impl From<f64> for MetricValue
{
    fn from(value: f64) -> Self { Self::Number(value) }
}
impl From<usize> for MetricValue
{
    fn from(value: usize) -> Self { Self::Count(value) }
}
impl From<String> for MetricValue
{
    fn from(value: String) -> Self { Self::Text(value) }
}
impl From<&str> for MetricValue
{
    fn from(value: &str) -> Self { Self::Text(value.to_owned()) }
}

impl From<&MetricValue> for JsonValue
{
    fn from(value: &MetricValue) -> Self
    {
        match value {
            MetricValue::Number(number) => (*number).into(),
            MetricValue::Count(count) => (*count).into(),
            MetricValue::Text(text) => text.as_str().into(),
        }
    }
}

/// The summary of a player's recent performance.
#[derive(Clone, Debug, PartialEq)]
pub struct PerformanceAnalysis
{
    /// Percentage of matches won, between `0` and `100`.
    pub win_rate:       f64,
    pub avg_kda:        f64,
    /// Empty if no character was played often enough to be rated.
    pub best_character: String,
    pub weakest_area:   String,
    pub trend:          Trend,
    pub games_analyzed: usize,
    pub game_specific:  BTreeMap<String, MetricValue>,
}

impl PerformanceAnalysis
{
    pub fn metric(&self, key: &str) -> Option<&MetricValue> { self.game_specific.get(key) }

    /// Render the summary in the json layout consumers of the report expect.
    pub fn to_json(&self) -> JsonValue
    {
        let mut game_specific = JsonValue::new_object();
        for (key, value) in &self.game_specific {
            game_specific[key.as_str()] = value.into();
        }

        let mut json = JsonValue::new_object();
        json["win_rate"] = self.win_rate.into();
        json["avg_kda"] = self.avg_kda.into();
        json["best_character"] = self.best_character.as_str().into();
        json["weakest_area"] = self.weakest_area.as_str().into();
        json["trend_direction"] = self.trend.label().into();
        json["games_analyzed"] = self.games_analyzed.into();
        json["game_specific_data"] = game_specific;

        json
    }
}
