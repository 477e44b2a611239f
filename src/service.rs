//! League of Legends stats: a Riot id in, a player with an analysis of their
//! recent matches out.

use thiserror::Error;
use tracing::{debug, warn};

use crate::analysis::{AnalysisError, AnalyzerRegistry};
use crate::config::clamp_match_count;
use crate::game::GameType;
use crate::match_record::MatchRecord;
use crate::player::Player;
use crate::report::PlayerStats;
use crate::riot::{MatchQuery, QueryError, QueryResult, RiotClient};
use crate::riot_id::RiotId;

#[derive(Debug, Error)]
pub enum ServiceError
{
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

pub struct LolService
{
    client: RiotClient,
}

/// Download the matches behind `match_ids` with `fetch`. A match that fails
/// to download is left out. The result is ordered from oldest to newest.
fn collect_matches<F>(match_ids: &[String], mut fetch: F) -> Vec<MatchRecord>
where
    F: FnMut(&str) -> QueryResult<MatchRecord>,
{
    let mut matches: Vec<MatchRecord> = match_ids
        .iter()
        .filter_map(|id| match fetch(id) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(match_id = %id, error = %e, "skipping match");
                None
            },
        })
        .collect();
    matches.sort_by_key(|record| record.start_time);

    matches
}

impl LolService
{
    pub fn new(client: RiotClient) -> Self { Self { client } }

    pub fn client(&self) -> &RiotClient { &self.client }

    /// Resolve a Riot id to the player, with summoner level and region.
    pub fn player(&self, riot_id: &RiotId) -> QueryResult<Player>
    {
        let account = self.client.account_by_riot_id(riot_id)?;
        let summoner = self.client.summoner_by_puuid(&account.puuid)?;

        Ok(Player {
            id:        account.puuid,
            game_name: account.game_name,
            tag_line:  account.tag_line,
            game:      GameType::LeagueOfLegends,
            level:     Some(summoner.level),
            region:    Some(self.client.region()),
        })
    }

    /// The last `count` matches of the player, at least 1 and at most 10,
    /// oldest first.
    pub fn recent_matches(&self, puuid: &str, count: u8) -> QueryResult<Vec<MatchRecord>>
    {
        let count = clamp_match_count(count);
        let match_ids = self.client.match_ids(puuid, &MatchQuery::count(count))?;
        debug!(puuid, requested = count, found = match_ids.len(), "fetching matches");

        Ok(collect_matches(&match_ids, |id| self.client.match_detail(id)))
    }

    pub fn player_stats(
        &self,
        riot_id: &RiotId,
        count: u8,
        registry: &AnalyzerRegistry,
    ) -> Result<PlayerStats, ServiceError>
    {
        let analyzer = registry.get(GameType::LeagueOfLegends)?;
        let player = self.player(riot_id)?;
        let matches = self.recent_matches(&player.id, count)?;
        let analysis = analyzer.compute_summary(&matches, &player.id)?;

        Ok(PlayerStats {
            player,
            matches,
            analysis,
        })
    }
}
