use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// All games a report can be requested for. Only some of them have an
/// analyzer registered at any time, see `AnalyzerRegistry`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GameType
{
    LeagueOfLegends,
    Valorant,
    CounterStrike2,
    Dota2,
}

impl GameType
{
    /// The short tag of the game as it is used in urls and in the json
    /// output.
    pub fn tag(self) -> &'static str
    {
        match self {
            Self::LeagueOfLegends => "lol",
            Self::Valorant => "valorant",
            Self::CounterStrike2 => "cs2",
            Self::Dota2 => "dota2",
        }
    }
}

impl fmt::Display for GameType
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.tag()) }
}

/// Returned when a string does not name any known game. Contains the string
/// that was tried.
#[derive(Debug, Error)]
#[error("Unknown game `{game}`")]
pub struct UnknownGameError
{
    game: String,
}

impl FromStr for GameType
{
    type Err = UnknownGameError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.trim().to_lowercase().as_str() {
            "lol" | "league" | "leagueoflegends" => Ok(Self::LeagueOfLegends),
            "valorant" | "val" => Ok(Self::Valorant),
            "cs2" => Ok(Self::CounterStrike2),
            "dota2" | "dota" => Ok(Self::Dota2),
            unknown => Err(UnknownGameError {
                game: unknown.to_string(),
            }),
        }
    }
}
