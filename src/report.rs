//! Assembly of what is handed to the user: the stats response and the daily
//! report built on top of it.

use chrono::{DateTime, SecondsFormat, Utc};
use json::JsonValue;

use crate::analysis::PerformanceAnalysis;
use crate::game::GameType;
use crate::match_record::MatchRecord;
use crate::player::Player;

/// A player's recent matches together with their analysis.
#[derive(Clone, Debug)]
pub struct PlayerStats
{
    pub player:   Player,
    /// Oldest first.
    pub matches:  Vec<MatchRecord>,
    pub analysis: PerformanceAnalysis,
}

fn match_json(record: &MatchRecord, player: &Player) -> JsonValue
{
    let won = record
        .participant(&player.id)
        .map_or(false, |participant| participant.win);
    let result = if won { "win" } else { "loss" };

    let mut json = JsonValue::new_object();
    json["id"] = record.id.as_str().into();
    json["player_id"] = player.id.as_str().into();
    json["game"] = player.game.tag().into();
    json["start_time"] = record
        .start_time
        .to_rfc3339_opts(SecondsFormat::Secs, true)
        .into();
    json["duration"] = record.duration_secs.into();
    json["game_mode"] = record.game_mode.as_str().into();
    json["result"] = result.into();

    json
}

impl PlayerStats
{
    pub fn to_json(&self) -> JsonValue
    {
        let matches: Vec<JsonValue> = self
            .matches
            .iter()
            .map(|record| match_json(record, &self.player))
            .collect();

        let mut json = JsonValue::new_object();
        json["player"] = self.player.to_json();
        json["match_count"] = self.matches.len().into();
        json["matches"] = matches.into();
        json["analysis"] = self.analysis.to_json();

        json
    }
}

/// Short, rule based commentary on an analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Insights
{
    pub performance_trend: String,
    pub recommendation:    String,
    pub improvement_focus: String,
    pub confidence:        String,
}

impl Insights
{
    /// Pick the commentary by win rate: above 60, above 40 or anything less.
    pub fn from_analysis(analysis: &PerformanceAnalysis) -> Self
    {
        let (trend, recommendation, focus) = if analysis.win_rate > 60.0 {
            (
                "You're on a winning streak! Your performance is above average.",
                "Keep playing your best champions and maintain this momentum.",
                "Consistency in your strong areas".to_owned(),
            )
        }
        else if analysis.win_rate > 40.0 {
            (
                "Your performance is steady with room for improvement.",
                "Focus on your weakest areas while maintaining your strengths.",
                analysis.weakest_area.clone(),
            )
        }
        else {
            (
                "Your recent performance suggests areas needing attention.",
                "Consider reviewing your gameplay fundamentals and champion choices.",
                format!("Basic mechanics and {}", analysis.weakest_area),
            )
        };

        Self {
            performance_trend: trend.to_owned(),
            recommendation:    recommendation.to_owned(),
            improvement_focus: focus,
            confidence:        "Medium".to_owned(),
        }
    }

    pub fn to_json(&self) -> JsonValue
    {
        let mut json = JsonValue::new_object();
        json["performance_trend"] = self.performance_trend.as_str().into();
        json["recommendation"] = self.recommendation.as_str().into();
        json["improvement_focus"] = self.improvement_focus.as_str().into();
        json["confidence"] = self.confidence.as_str().into();

        json
    }
}

/// The report shown to a player for one day.
#[derive(Clone, Debug)]
pub struct DailyReport
{
    pub player:      Player,
    pub game:        GameType,
    pub date:        DateTime<Utc>,
    pub performance: PerformanceAnalysis,
    pub insights:    Insights,
}

impl DailyReport
{
    pub fn new(stats: PlayerStats, date: DateTime<Utc>) -> Self
    {
        let insights = Insights::from_analysis(&stats.analysis);

        Self {
            game: stats.player.game,
            player: stats.player,
            date,
            performance: stats.analysis,
            insights,
        }
    }

    pub fn to_json(&self) -> JsonValue
    {
        let mut json = JsonValue::new_object();
        json["player"] = self.player.to_json();
        json["game"] = self.game.tag().into();
        json["date"] = self.date.to_rfc3339_opts(SecondsFormat::Secs, true).into();
        json["performance"] = self.performance.to_json();
        json["ai_insights"] = self.insights.to_json();

        json
    }
}
