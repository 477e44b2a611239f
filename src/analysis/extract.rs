use tracing::debug;

use crate::match_record::MatchRecord;

/// The normalized numbers of a single match, seen from the subject. Exists
/// only for the duration of an analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchPerformance
{
    pub kda:             f64,
    /// Creep score per minute.
    pub cs_per_min:      f64,
    /// Share of the team's champion damage dealt by the subject, `0` to `100`.
    pub damage_share:    f64,
    pub vision_score:    u32,
    pub minutes:         f64,
    pub ranked:          bool,
    pub champion:        String,
    pub role:            String,
    pub win:             bool,
    pub had_multi_kill:  bool,
    pub objective_kills: u32,
}

/// (kills + assists) / deaths, where a death-less match counts as one death.
pub fn kda(kills: u32, deaths: u32, assists: u32) -> f64
{
    (kills as f64 + assists as f64) / deaths.max(1) as f64
}

/// Damage of the subject as a percentage of the team's total. `0` if the team
/// did not deal any damage at all.
pub fn damage_share(damage: u64, team_damage: u64) -> f64
{
    if team_damage == 0 {
        0.0
    }
    else {
        damage as f64 * 100.0 / team_damage as f64
    }
}

/// Derive the performance of the player `subject_id` in the match.
///
/// # Returns
/// `None` if the subject did not play in the match, or if the match has no
/// duration, in which case no per minute stats can be calculated. Such matches
/// are left out of the analysis entirely.
pub fn extract(record: &MatchRecord, subject_id: &str) -> Option<MatchPerformance>
{
    let Some(player) = record.participant(subject_id) else {
        debug!(match_id = %record.id, "subject not found in match, skipping");
        return None;
    };

    if record.duration_secs == 0 {
        debug!(match_id = %record.id, "match has no duration, skipping");
        return None;
    }

    let minutes = record.duration_minutes();

    Some(MatchPerformance {
        kda: kda(player.kills, player.deaths, player.assists),
        cs_per_min: player.creep_score as f64 / minutes,
        damage_share: damage_share(player.damage, record.team_damage(player.team_id)),
        vision_score: player.vision_score,
        minutes,
        ranked: record.ranked,
        champion: player.champion.clone(),
        role: player.role.clone(),
        win: player.win,
        had_multi_kill: player.multi_kills.any(),
        objective_kills: player.objectives.total(),
    })
}
