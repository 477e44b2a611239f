use chrono::{DateTime, Utc};
use json::JsonValue;

use super::{QueryError, QueryResult};
use crate::match_record::{MatchRecord, MultiKills, ObjectiveKills, Participant};
use crate::queue;

fn str_field<'a>(json: &'a JsonValue, key: &'static str) -> QueryResult<&'a str>
{
    json[key].as_str().ok_or(QueryError::MissingField(key))
}

fn u32_field(json: &JsonValue, key: &'static str) -> QueryResult<u32>
{
    json[key].as_u32().ok_or(QueryError::MissingField(key))
}

/// Counters that older matches or some game modes leave out count as zero.
fn optional_u32_field(json: &JsonValue, key: &'static str) -> u32
{
    json[key].as_u32().unwrap_or(0)
}

fn participant_from_json(json: &JsonValue) -> QueryResult<Participant>
{
    let creep_score = optional_u32_field(json, "totalMinionsKilled")
        .saturating_add(optional_u32_field(json, "neutralMinionsKilled"));

    Ok(Participant {
        player_id: str_field(json, "puuid")?.to_owned(),
        team_id: u32_field(json, "teamId")?,
        kills: u32_field(json, "kills")?,
        deaths: u32_field(json, "deaths")?,
        assists: u32_field(json, "assists")?,
        creep_score,
        vision_score: optional_u32_field(json, "visionScore"),
        damage: json["totalDamageDealtToChampions"].as_u64().unwrap_or(0),
        multi_kills: MultiKills {
            double: optional_u32_field(json, "doubleKills"),
            triple: optional_u32_field(json, "tripleKills"),
            quadra: optional_u32_field(json, "quadraKills"),
            penta:  optional_u32_field(json, "pentaKills"),
        },
        objectives: ObjectiveKills {
            dragons: optional_u32_field(json, "dragonKills"),
            barons:  optional_u32_field(json, "baronKills"),
            turrets: optional_u32_field(json, "turretKills"),
        },
        champion: str_field(json, "championName")?.to_owned(),
        // Empty in modes without fixed positions, like ARAM
        role: json["teamPosition"].as_str().unwrap_or_default().to_owned(),
        win: json["win"].as_bool().ok_or(QueryError::MissingField("win"))?,
    })
}

/// Parse a match as returned by the match-v5 detail endpoint.
///
/// The duration is read as seconds. Matches played before patch 11.20 report
/// it in milliseconds, which is recognisable by the missing
/// `gameEndTimestamp`.
pub fn parse_match(json: &JsonValue) -> QueryResult<MatchRecord>
{
    let id = str_field(&json["metadata"], "matchId")?.to_owned();

    let info = &json["info"];
    let start_millis = info["gameStartTimestamp"]
        .as_i64()
        .ok_or(QueryError::MissingField("gameStartTimestamp"))?;
    let start_time: DateTime<Utc> = DateTime::from_timestamp_millis(start_millis)
        .ok_or(QueryError::MissingField("gameStartTimestamp"))?;

    let duration = info["gameDuration"]
        .as_u64()
        .ok_or(QueryError::MissingField("gameDuration"))?;
    let duration = if info["gameEndTimestamp"].is_null() {
        duration / 1000
    }
    else {
        duration
    };
    let duration_secs =
        u32::try_from(duration).map_err(|_| QueryError::MissingField("gameDuration"))?;

    let queue_id = info["queueId"]
        .as_u16()
        .ok_or(QueryError::MissingField("queueId"))?;

    let participants = info["participants"]
        .members()
        .map(participant_from_json)
        .collect::<QueryResult<Vec<_>>>()?;
    if participants.is_empty() {
        return Err(QueryError::MissingField("participants"));
    }

    Ok(MatchRecord {
        id,
        start_time,
        duration_secs,
        game_mode: str_field(info, "gameMode")?.to_owned(),
        queue_id,
        ranked: queue::is_ranked_queue(queue_id),
        participants,
    })
}

/// Parse the list of match ids returned by the match history endpoint.
pub fn parse_match_ids(json: &JsonValue) -> QueryResult<Vec<String>>
{
    if !json.is_array() {
        return Err(QueryError::MissingField("match ids"));
    }

    json.members()
        .map(|id| {
            id.as_str()
                .map(str::to_owned)
                .ok_or(QueryError::MissingField("match ids"))
        })
        .collect()
}
