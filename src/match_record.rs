use chrono::{DateTime, Utc};

/// Number of multi-kill events of each size a participant scored in a match.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MultiKills
{
    pub double: u32,
    pub triple: u32,
    pub quadra: u32,
    pub penta:  u32,
}

impl MultiKills
{
    /// `true` if there was at least one multi-kill of any size.
    pub fn any(&self) -> bool
    {
        self.double > 0 || self.triple > 0 || self.quadra > 0 || self.penta > 0
    }
}

/// Epic monster and structure kills of a participant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectiveKills
{
    pub dragons: u32,
    pub barons:  u32,
    pub turrets: u32,
}

impl ObjectiveKills
{
    /// Saturates instead of overflowing on absurd counters.
    pub fn total(&self) -> u32
    {
        self.dragons
            .saturating_add(self.barons)
            .saturating_add(self.turrets)
    }
}

/// Everything one player did over the course of a match, as reported by the
/// provider. Names are passed through verbatim, the provider decides on case
/// and spelling.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Participant
{
    pub player_id:    String,
    pub team_id:      u32,
    pub kills:        u32,
    pub deaths:       u32,
    pub assists:      u32,
    /// Lane minions and neutral monsters killed.
    pub creep_score:  u32,
    pub vision_score: u32,
    /// Damage dealt to enemy champions.
    pub damage:       u64,
    pub multi_kills:  MultiKills,
    pub objectives:   ObjectiveKills,
    pub champion:     String,
    pub role:         String,
    pub win:          bool,
}

/// A completed match. Owned by whoever retrieved it, the analysis only reads
/// it.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchRecord
{
    pub id:            String,
    pub start_time:    DateTime<Utc>,
    pub duration_secs: u32,
    pub game_mode:     String,
    pub queue_id:      u16,
    pub ranked:        bool,
    pub participants:  Vec<Participant>,
}

impl MatchRecord
{
    /// Find the participant with the given player id, if that player took part
    /// in the match at all.
    pub fn participant(&self, player_id: &str) -> Option<&Participant>
    {
        self.participants
            .iter()
            .find(|participant| participant.player_id == player_id)
    }

    pub fn duration_minutes(&self) -> f64 { self.duration_secs as f64 / 60.0 }

    /// Sum of the champion damage of every participant on the given team,
    /// saturating at `u64::MAX`.
    pub fn team_damage(&self, team_id: u32) -> u64
    {
        self.participants
            .iter()
            .filter(|participant| participant.team_id == team_id)
            .fold(0, |total: u64, participant| total.saturating_add(participant.damage))
    }
}

#[cfg(test)]
mod tests
{
    use chrono::TimeZone;

    use super::*;

    fn participant(player_id: &str, team_id: u32, damage: u64) -> Participant
    {
        Participant {
            player_id: player_id.to_owned(),
            team_id,
            damage,
            ..Default::default()
        }
    }

    fn record() -> MatchRecord
    {
        MatchRecord {
            id:            "KR_1".to_owned(),
            start_time:    Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            duration_secs: 1800,
            game_mode:     "CLASSIC".to_owned(),
            queue_id:      420,
            ranked:        true,
            participants:  vec![
                participant("a", 100, 10_000),
                participant("b", 100, 30_000),
                participant("c", 200, 50_000),
            ],
        }
    }

    #[test]
    fn find_participant()
    {
        let record = record();
        assert_eq!(record.participant("b").map(|p| p.damage), Some(30_000));
        assert!(record.participant("nobody").is_none());
    }

    #[test]
    fn team_damage_only_counts_own_team()
    {
        let record = record();
        assert_eq!(record.team_damage(100), 40_000);
        assert_eq!(record.team_damage(200), 50_000);
        assert_eq!(record.team_damage(300), 0);
    }

    #[test]
    fn multi_kills_any()
    {
        assert!(!MultiKills::default().any());
        assert!(MultiKills {
            penta: 1,
            ..Default::default()
        }
        .any());
    }

    #[test]
    fn huge_counters_saturate()
    {
        let objectives = ObjectiveKills {
            dragons: u32::MAX,
            barons:  1,
            turrets: 1,
        };
        assert_eq!(objectives.total(), u32::MAX);

        let mut record = record();
        record.participants[0].damage = u64::MAX;
        assert_eq!(record.team_damage(100), u64::MAX);
    }

    #[test]
    fn duration_in_minutes()
    {
        assert_eq!(record().duration_minutes(), 30.0);
    }
}
