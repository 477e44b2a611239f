use std::collections::HashSet;

use super::extract::MatchPerformance;
use super::{AnalysisError, AnalysisResult};

/// Plain summary statistics over all analyzed matches. All averages are
/// simple arithmetic means.
#[derive(Clone, Debug, PartialEq)]
pub struct Aggregate
{
    pub games:                   usize,
    pub wins:                    usize,
    /// `0` to `100`.
    pub win_rate:                f64,
    pub avg_kda:                 f64,
    pub avg_cs_per_min:          f64,
    /// `0` to `100`, like the per match damage share.
    pub avg_damage_share:        f64,
    pub avg_vision_score:        f64,
    pub avg_game_minutes:        f64,
    pub champion_diversity:      usize,
    /// `0` to `1`.
    pub ranked_ratio:            f64,
    /// Fraction of matches with at least one multi-kill, `0` to `1`.
    pub multi_kill_frequency:    f64,
    /// Objective kills per match. This is a count, not a rate.
    pub objective_participation: f64,
}

fn mean<F>(performances: &[MatchPerformance], field: F) -> f64
where
    F: Fn(&MatchPerformance) -> f64,
{
    performances.iter().map(field).sum::<f64>() / performances.len() as f64
}

fn fraction<F>(performances: &[MatchPerformance], predicate: F) -> f64
where
    F: Fn(&MatchPerformance) -> bool,
{
    performances.iter().filter(|perf| predicate(perf)).count() as f64 / performances.len() as f64
}

/// Fold the per match performances into summary statistics.
///
/// # Errors
/// `AnalysisError::EmptyInput` if `performances` is empty.
pub fn aggregate(performances: &[MatchPerformance]) -> AnalysisResult<Aggregate>
{
    if performances.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let games = performances.len();
    let wins = performances.iter().filter(|perf| perf.win).count();
    let champion_diversity = performances
        .iter()
        .map(|perf| perf.champion.as_str())
        .collect::<HashSet<_>>()
        .len();

    Ok(Aggregate {
        games,
        wins,
        win_rate: wins as f64 / games as f64 * 100.0,
        avg_kda: mean(performances, |perf| perf.kda),
        avg_cs_per_min: mean(performances, |perf| perf.cs_per_min),
        avg_damage_share: mean(performances, |perf| perf.damage_share),
        avg_vision_score: mean(performances, |perf| perf.vision_score as f64),
        avg_game_minutes: mean(performances, |perf| perf.minutes),
        champion_diversity,
        ranked_ratio: fraction(performances, |perf| perf.ranked),
        multi_kill_frequency: fraction(performances, |perf| perf.had_multi_kill),
        objective_participation: mean(performances, |perf| perf.objective_kills as f64),
    })
}

#[cfg(test)]
pub(crate) mod tests
{
    use proptest::prelude::*;

    use super::*;

    /// Performance with neutral values, tests override what they look at.
    pub(crate) fn perf(champion: &str, win: bool, kda: f64) -> MatchPerformance
    {
        MatchPerformance {
            kda,
            cs_per_min: 7.0,
            damage_share: 25.0,
            vision_score: 30,
            minutes: 30.0,
            ranked: true,
            champion: champion.to_owned(),
            role: "MIDDLE".to_owned(),
            win,
            had_multi_kill: false,
            objective_kills: 0,
        }
    }

    fn close(a: f64, b: f64) -> bool { (a - b).abs() < 0.01 }

    #[test]
    fn empty_input()
    {
        assert_eq!(aggregate(&[]), Err(AnalysisError::EmptyInput));
    }

    #[test]
    fn win_rate_and_kda()
    {
        let perfs = [
            perf("Ahri", true, 4.0),
            perf("Ahri", false, 1.0),
            perf("Ahri", true, 6.0),
        ];
        let aggregate = aggregate(&perfs).unwrap();

        assert_eq!(aggregate.games, 3);
        assert_eq!(aggregate.wins, 2);
        assert!(close(aggregate.win_rate, 66.67));
        assert!(close(aggregate.avg_kda, 3.67));
    }

    #[test]
    fn counts_and_ratios()
    {
        let mut first = perf("Ahri", true, 2.0);
        first.ranked = false;
        first.had_multi_kill = true;
        first.objective_kills = 3;
        let mut second = perf("Zed", false, 2.0);
        second.objective_kills = 1;
        let third = perf("Ahri", false, 2.0);
        let mut fourth = perf("ahri", true, 2.0);
        fourth.had_multi_kill = true;
        fourth.objective_kills = 4;

        let aggregate = aggregate(&[first, second, third, fourth]).unwrap();

        // Names are compared verbatim
        assert_eq!(aggregate.champion_diversity, 3);
        assert_eq!(aggregate.ranked_ratio, 0.75);
        assert_eq!(aggregate.multi_kill_frequency, 0.5);
        assert_eq!(aggregate.objective_participation, 2.0);
    }

    #[test]
    fn plain_means()
    {
        let mut first = perf("Ahri", true, 2.0);
        first.cs_per_min = 4.0;
        first.vision_score = 10;
        first.damage_share = 10.0;
        first.minutes = 20.0;
        let mut second = perf("Ahri", true, 2.0);
        second.cs_per_min = 8.0;
        second.vision_score = 40;
        second.damage_share = 30.0;
        second.minutes = 40.0;

        let aggregate = aggregate(&[first, second]).unwrap();
        assert_eq!(aggregate.avg_cs_per_min, 6.0);
        assert_eq!(aggregate.avg_vision_score, 25.0);
        assert_eq!(aggregate.avg_damage_share, 20.0);
        assert_eq!(aggregate.avg_game_minutes, 30.0);
    }

    fn arb_perf() -> impl Strategy<Value = MatchPerformance>
    {
        (
            any::<bool>(),
            0.0..20.0f64,
            0.0..12.0f64,
            0u32..100,
            prop::sample::select(vec!["Ahri", "Zed", "Lux"]),
        )
            .prop_map(|(win, kda, cs_per_min, vision_score, champion)| {
                let mut perf = perf(champion, win, kda);
                perf.cs_per_min = cs_per_min;
                perf.vision_score = vision_score;
                perf
            })
    }

    proptest! {
        #[test]
        fn win_rate_is_a_percentage(perfs in prop::collection::vec(arb_perf(), 1..20))
        {
            let aggregate = aggregate(&perfs).unwrap();
            let wins = perfs.iter().filter(|perf| perf.win).count();

            prop_assert!((0.0..=100.0).contains(&aggregate.win_rate));
            let expected = wins as f64 * 100.0 / perfs.len() as f64;
            prop_assert!((aggregate.win_rate - expected).abs() < 1e-9);
        }

        #[test]
        fn averages_ignore_order(perfs in prop::collection::vec(arb_perf(), 1..20))
        {
            let forward = aggregate(&perfs).unwrap();
            let mut reversed_perfs = perfs.clone();
            reversed_perfs.reverse();
            let reversed = aggregate(&reversed_perfs).unwrap();

            prop_assert!((forward.avg_kda - reversed.avg_kda).abs() < 1e-9);
            prop_assert!((forward.avg_cs_per_min - reversed.avg_cs_per_min).abs() < 1e-9);
            prop_assert!((forward.avg_vision_score - reversed.avg_vision_score).abs() < 1e-9);
            prop_assert_eq!(forward.win_rate, reversed.win_rate);
            prop_assert_eq!(forward.champion_diversity, reversed.champion_diversity);
        }
    }
}
