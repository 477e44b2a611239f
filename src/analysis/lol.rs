use std::collections::BTreeMap;

use tracing::debug;

use super::aggregate::aggregate;
use super::extract::{extract, MatchPerformance};
use super::{scoring, trend, AnalysisResult, Analyzer, MetricValue, PerformanceAnalysis};
use crate::game::GameType;
use crate::match_record::MatchRecord;

/// Analyzer for League of Legends matches.
#[derive(Copy, Clone, Debug, Default)]
pub struct LolAnalyzer;

impl LolAnalyzer
{
    pub fn new() -> Self { Self }
}

impl Analyzer for LolAnalyzer
{
    fn game(&self) -> GameType { GameType::LeagueOfLegends }

    fn compute_summary(
        &self,
        matches: &[MatchRecord],
        subject_id: &str,
    ) -> AnalysisResult<PerformanceAnalysis>
    {
        let performances: Vec<MatchPerformance> = matches
            .iter()
            .filter_map(|record| extract(record, subject_id))
            .collect();
        debug!(
            supplied = matches.len(),
            usable = performances.len(),
            "extracted match performances"
        );

        let aggregate = aggregate(&performances)?;

        let mut game_specific = BTreeMap::new();
        let mut insert = |key: &str, value: MetricValue| {
            game_specific.insert(key.to_owned(), value);
        };
        insert("avg_cs_per_min", aggregate.avg_cs_per_min.into());
        insert("avg_damage_share", aggregate.avg_damage_share.into());
        insert("avg_vision_score", aggregate.avg_vision_score.into());
        insert("preferred_role", scoring::preferred_role(&performances).into());
        insert("champion_diversity", aggregate.champion_diversity.into());
        insert("ranked_games_ratio", aggregate.ranked_ratio.into());
        insert("avg_game_length", aggregate.avg_game_minutes.into());
        insert("multikill_frequency", aggregate.multi_kill_frequency.into());
        insert("objective_participation", aggregate.objective_participation.into());
        insert("early_game_performance", scoring::early_game(&aggregate).label().into());

        Ok(PerformanceAnalysis {
            win_rate: aggregate.win_rate,
            avg_kda: aggregate.avg_kda,
            best_character: scoring::best_champion(&performances),
            weakest_area: scoring::weakest_area(&aggregate).label().to_owned(),
            trend: trend::classify(&performances),
            games_analyzed: aggregate.games,
            game_specific,
        })
    }
}

#[cfg(test)]
mod tests
{
    use std::fs::File;
    use std::io::Read;

    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::analysis::{AnalysisError, Trend};
    use crate::match_record::{MultiKills, ObjectiveKills, Participant};
    use crate::riot::parse_match;

    const SUBJECT: &str = "subject-puuid";

    struct Game
    {
        champion: &'static str,
        win:      bool,
        kills:    u32,
        deaths:   u32,
        assists:  u32,
    }

    fn game(champion: &'static str, win: bool, kills: u32, deaths: u32, assists: u32) -> Game
    {
        Game {
            champion,
            win,
            kills,
            deaths,
            assists,
        }
    }

    /// A 30 minute ranked match where the subject has 6 cs per minute, 30
    /// vision score and a quarter of the team's damage.
    fn record(index: i64, game: &Game) -> MatchRecord
    {
        let subject = Participant {
            player_id: SUBJECT.to_owned(),
            team_id: 100,
            kills: game.kills,
            deaths: game.deaths,
            assists: game.assists,
            creep_score: 180,
            vision_score: 30,
            damage: 10_000,
            multi_kills: MultiKills::default(),
            objectives: ObjectiveKills {
                dragons: 1,
                barons: 0,
                turrets: 1,
            },
            champion: game.champion.to_owned(),
            role: "MIDDLE".to_owned(),
            win: game.win,
        };
        let teammate = Participant {
            player_id: "mate".to_owned(),
            team_id: 100,
            damage: 30_000,
            win: game.win,
            ..Default::default()
        };
        let enemy = Participant {
            player_id: "enemy".to_owned(),
            team_id: 200,
            damage: 45_000,
            win: !game.win,
            ..Default::default()
        };

        MatchRecord {
            id: format!("KR_{}", 7_000_000_000 + index),
            start_time: Utc.timestamp_opt(1_700_000_000, 0).unwrap() + Duration::hours(index),
            duration_secs: 1800,
            game_mode: "CLASSIC".to_owned(),
            queue_id: 420,
            ranked: true,
            participants: vec![subject, teammate, enemy],
        }
    }

    fn records(games: &[Game]) -> Vec<MatchRecord>
    {
        games
            .iter()
            .enumerate()
            .map(|(index, game)| record(index as i64, game))
            .collect()
    }

    fn close(a: f64, b: f64) -> bool { (a - b).abs() < 0.01 }

    #[test]
    fn empty_input()
    {
        let analyzer = LolAnalyzer::new();
        assert_eq!(
            analyzer.compute_summary(&[], SUBJECT),
            Err(AnalysisError::EmptyInput)
        );
    }

    #[test]
    fn subject_in_no_match_is_empty_input()
    {
        let matches = records(&[game("Ahri", true, 1, 1, 1)]);
        assert_eq!(
            LolAnalyzer.compute_summary(&matches, "someone-else"),
            Err(AnalysisError::EmptyInput)
        );
    }

    #[test]
    fn three_matches()
    {
        // KDAs 4.0, 1.0 and 6.0
        let matches = records(&[
            game("Ahri", true, 5, 2, 3),
            game("Ahri", false, 1, 3, 2),
            game("Zed", true, 10, 2, 2),
        ]);
        let analysis = LolAnalyzer.compute_summary(&matches, SUBJECT).unwrap();

        assert!(close(analysis.win_rate, 66.67));
        assert!(close(analysis.avg_kda, 3.67));
        assert_eq!(analysis.games_analyzed, 3);
        assert_eq!(analysis.trend, Trend::Stable);
        assert_eq!(analysis.best_character, "Ahri");
        assert_eq!(analysis.weakest_area, "macro play and positioning");
        assert_eq!(analysis.metric("champion_diversity"), Some(&MetricValue::Count(2)));
        assert_eq!(
            analysis.metric("preferred_role"),
            Some(&MetricValue::Text("MIDDLE".to_owned()))
        );
        assert_eq!(analysis.metric("avg_cs_per_min"), Some(&MetricValue::Number(6.0)));
        assert_eq!(analysis.metric("avg_damage_share"), Some(&MetricValue::Number(25.0)));
        assert_eq!(analysis.metric("avg_vision_score"), Some(&MetricValue::Number(30.0)));
        assert_eq!(analysis.metric("ranked_games_ratio"), Some(&MetricValue::Number(1.0)));
        assert_eq!(analysis.metric("avg_game_length"), Some(&MetricValue::Number(30.0)));
        assert_eq!(analysis.metric("multikill_frequency"), Some(&MetricValue::Number(0.0)));
        assert_eq!(
            analysis.metric("objective_participation"),
            Some(&MetricValue::Number(2.0))
        );
        assert_eq!(
            analysis.metric("early_game_performance"),
            Some(&MetricValue::Text("Average".to_owned()))
        );
    }

    #[test]
    fn fewer_than_three_matches()
    {
        let matches = records(&[game("Ahri", true, 1, 1, 1), game("Ahri", true, 1, 1, 1)]);
        let analysis = LolAnalyzer.compute_summary(&matches, SUBJECT).unwrap();

        assert_eq!(analysis.trend, Trend::InsufficientData);
        assert_eq!(analysis.win_rate, 100.0);
    }

    #[test]
    fn five_matches_on_one_champion()
    {
        let matches = records(&[
            game("Ahri", false, 2, 5, 3),
            game("Ahri", false, 1, 4, 6),
            game("Ahri", true, 6, 2, 8),
            game("Ahri", true, 9, 1, 4),
            game("Ahri", true, 4, 3, 10),
        ]);
        let analysis = LolAnalyzer.compute_summary(&matches, SUBJECT).unwrap();

        assert_eq!(analysis.best_character, "Ahri");
        assert_eq!(analysis.win_rate, 60.0);
        assert_eq!(analysis.trend, Trend::Improving);
    }

    #[test]
    fn skipped_matches_do_not_count()
    {
        let mut matches = records(&[
            game("Ahri", true, 1, 1, 1),
            game("Ahri", false, 1, 1, 1),
            game("Ahri", false, 1, 1, 1),
        ]);
        matches[1].participants.retain(|participant| participant.player_id != SUBJECT);
        matches[2].duration_secs = 0;

        let analysis = LolAnalyzer.compute_summary(&matches, SUBJECT).unwrap();
        assert_eq!(analysis.games_analyzed, 1);
        assert_eq!(analysis.win_rate, 100.0);
    }

    #[test]
    fn json_output()
    {
        let matches = records(&[game("Ahri", true, 1, 1, 1)]);
        let json = LolAnalyzer.compute_summary(&matches, SUBJECT).unwrap().to_json();

        assert_eq!(json["trend_direction"].as_str(), Some("Insufficient data"));
        assert_eq!(json["best_character"].as_str(), Some(""));
        assert_eq!(json["games_analyzed"].as_usize(), Some(1));
        assert_eq!(json["game_specific_data"]["preferred_role"].as_str(), Some("MIDDLE"));
    }

    #[test]
    fn analyze_downloaded_match()
    {
        let mut json = String::new();
        File::open("test_data/match_KR_7300000001.json")
            .expect("Unable to open test file")
            .read_to_string(&mut json)
            .expect("Unable to read file to string");
        let json = json::parse(&json).expect("Unable to parse json");
        let record = parse_match(&json).expect("Unable to read match");

        let analysis = LolAnalyzer
            .compute_summary(&[record], "puuid-hide-on-bush")
            .expect("Subject is in the match");

        assert_eq!(analysis.games_analyzed, 1);
        assert_eq!(analysis.win_rate, 100.0);
        // (9 + 7) / 2
        assert_eq!(analysis.avg_kda, 8.0);
        // 264 cs in 33 minutes
        assert_eq!(analysis.metric("avg_cs_per_min"), Some(&MetricValue::Number(8.0)));
        assert_eq!(analysis.metric("avg_damage_share"), Some(&MetricValue::Number(40.0)));
        assert_eq!(analysis.metric("ranked_games_ratio"), Some(&MetricValue::Number(1.0)));
        assert_eq!(analysis.metric("multikill_frequency"), Some(&MetricValue::Number(1.0)));
        assert_eq!(
            analysis.metric("objective_participation"),
            Some(&MetricValue::Number(3.0))
        );
        assert_eq!(analysis.weakest_area, "Vision score");
    }

    #[test]
    fn huge_counters_do_not_overflow()
    {
        let mut matches = records(&[game("Ahri", true, u32::MAX, 0, 1)]);
        matches[0].participants[0].objectives.dragons = u32::MAX;

        let analysis = LolAnalyzer.compute_summary(&matches, SUBJECT).unwrap();
        assert_eq!(analysis.avg_kda, u32::MAX as f64 + 1.0);
        assert_eq!(
            analysis.metric("objective_participation"),
            Some(&MetricValue::Number(u32::MAX as f64))
        );
    }
}
