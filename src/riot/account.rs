use json::JsonValue;

use super::{QueryError, QueryResult};

/// A Riot account, the link between a Riot id and the PUUID.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account
{
    pub puuid:     String,
    pub game_name: String,
    pub tag_line:  String,
}

/// The League of Legends profile of an account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summoner
{
    pub puuid: String,
    pub level: u32,
}

impl Account
{
    pub fn from_json(json: &JsonValue) -> QueryResult<Self>
    {
        let field = |key: &'static str| {
            json[key]
                .as_str()
                .map(str::to_owned)
                .ok_or(QueryError::MissingField(key))
        };

        Ok(Self {
            puuid:     field("puuid")?,
            game_name: field("gameName")?,
            tag_line:  field("tagLine")?,
        })
    }
}

impl Summoner
{
    pub fn from_json(json: &JsonValue) -> QueryResult<Self>
    {
        Ok(Self {
            puuid: json["puuid"]
                .as_str()
                .ok_or(QueryError::MissingField("puuid"))?
                .to_owned(),
            level: json["summonerLevel"]
                .as_u32()
                .ok_or(QueryError::MissingField("summonerLevel"))?,
        })
    }
}
