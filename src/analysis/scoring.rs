//! Heuristics that rank the categorical sides of a player's matches.

use std::collections::BTreeMap;

use super::aggregate::Aggregate;
use super::extract::MatchPerformance;

/// A champion needs at least this many matches before it may be called the
/// best one.
pub const MIN_CHAMPION_GAMES: usize = 2;
const WIN_RATE_WEIGHT: f64 = 0.6;
const KDA_WEIGHT: f64 = 0.4;
/// KDA at which the KDA part of the score reaches its weight. Higher KDAs
/// keep adding to the score.
const KDA_SCALE: f64 = 5.0;

const MIN_CS_PER_MIN: f64 = 6.0;
const MIN_VISION_SCORE: f64 = 25.0;
const MIN_DAMAGE_SHARE: f64 = 20.0;

#[derive(Default)]
struct ChampionRecord
{
    games:     usize,
    wins:      usize,
    total_kda: f64,
}

impl ChampionRecord
{
    fn score(&self) -> f64
    {
        let win_rate = self.wins as f64 / self.games as f64;
        let avg_kda = self.total_kda / self.games as f64;

        win_rate * WIN_RATE_WEIGHT + (avg_kda / KDA_SCALE) * KDA_WEIGHT
    }
}

/// Find the champion the player performs best on, scored by a mix of win rate
/// and KDA. Champions with fewer than `MIN_CHAMPION_GAMES` matches are never
/// picked, no matter how well they went.
///
/// # Returns
/// The name of the best champion, or an empty string if none has enough
/// matches or a score above zero. On equal scores the alphabetically first
/// name wins.
pub fn best_champion(performances: &[MatchPerformance]) -> String
{
    let mut records: BTreeMap<&str, ChampionRecord> = BTreeMap::new();
    for perf in performances {
        let record = records.entry(perf.champion.as_str()).or_default();
        record.games += 1;
        record.total_kda += perf.kda;
        if perf.win {
            record.wins += 1;
        }
    }

    let mut best = "";
    let mut best_score = 0.0;
    for (champion, record) in records {
        if record.games < MIN_CHAMPION_GAMES {
            continue;
        }

        let score = record.score();
        if score > best_score {
            best_score = score;
            best = champion;
        }
    }

    best.to_owned()
}

/// The skill areas a player can be found lacking in, in the order they are
/// checked.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WeakArea
{
    CreepScore,
    Vision,
    DamageOutput,
    /// Nothing measurable stands out.
    MacroPlay,
}

impl WeakArea
{
    pub fn label(self) -> &'static str
    {
        match self {
            Self::CreepScore => "CS per minute",
            Self::Vision => "Vision score",
            Self::DamageOutput => "Damage output",
            Self::MacroPlay => "macro play and positioning",
        }
    }
}

/// The first area, in the order of `WeakArea`, where the averages fall below
/// their threshold.
pub fn weakest_area(aggregate: &Aggregate) -> WeakArea
{
    if aggregate.avg_cs_per_min < MIN_CS_PER_MIN {
        WeakArea::CreepScore
    }
    else if aggregate.avg_vision_score < MIN_VISION_SCORE {
        WeakArea::Vision
    }
    else if aggregate.avg_damage_share < MIN_DAMAGE_SHARE {
        WeakArea::DamageOutput
    }
    else {
        WeakArea::MacroPlay
    }
}

/// The role played in the most matches. On equal counts the role that shows
/// up first in `performances` wins.
///
/// # Returns
/// The role, or an empty string if there are no performances.
pub fn preferred_role(performances: &[MatchPerformance]) -> String
{
    // Kept in order of first appearance
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for perf in performances {
        match counts.iter().position(|(role, _)| *role == perf.role) {
            Some(index) => counts[index].1 += 1,
            None => counts.push((perf.role.as_str(), 1)),
        }
    }

    let mut preferred = "";
    let mut max_count = 0;
    for (role, count) in counts {
        if count > max_count {
            max_count = count;
            preferred = role;
        }
    }

    preferred.to_owned()
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EarlyGame
{
    Strong,
    Average,
    Weak,
}

impl EarlyGame
{
    pub fn label(self) -> &'static str
    {
        match self {
            Self::Strong => "Strong",
            Self::Average => "Average",
            Self::Weak => "Weak",
        }
    }
}

/// Rate the laning phase by the creep score the player would have at 15
/// minutes at their average pace.
pub fn early_game(aggregate: &Aggregate) -> EarlyGame
{
    let cs_at_15 = aggregate.avg_cs_per_min * 15.0;

    if cs_at_15 > 120.0 {
        EarlyGame::Strong
    }
    else if cs_at_15 > 80.0 {
        EarlyGame::Average
    }
    else {
        EarlyGame::Weak
    }
}
