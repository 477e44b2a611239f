//! Handling of Riot ids. Players know each other by their `GameName#TagLine`,
//! while the API identifies them by an opaque PUUID that first has to be looked
//! up with the Riot id.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RiotId
{
    game_name: String,
    tag_line:  String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseRiotIdError
{
    #[error("missing '#' separator")]
    MissingSeparator,
    #[error("game name is empty")]
    EmptyGameName,
    #[error("tag line is empty")]
    EmptyTagLine,
}

impl RiotId
{
    /// Create a Riot id from its two parts. Surrounding whitespace is removed,
    /// but the parts are otherwise kept as they are.
    ///
    /// # Errors
    /// If either part is empty.
    pub fn new(game_name: &str, tag_line: &str) -> Result<Self, ParseRiotIdError>
    {
        let game_name = game_name.trim();
        let tag_line = tag_line.trim();

        if game_name.is_empty() {
            Err(ParseRiotIdError::EmptyGameName)
        }
        else if tag_line.is_empty() {
            Err(ParseRiotIdError::EmptyTagLine)
        }
        else {
            Ok(Self {
                game_name: game_name.to_owned(),
                tag_line:  tag_line.to_owned(),
            })
        }
    }

    pub fn game_name(&self) -> &str { &self.game_name }
    pub fn tag_line(&self) -> &str { &self.tag_line }
}

impl FromStr for RiotId
{
    type Err = ParseRiotIdError;

    /// Parse `GameName#TagLine`. Everything after the first `#` is the tag.
    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        let (game_name, tag_line) = s.split_once('#').ok_or(ParseRiotIdError::MissingSeparator)?;

        Self::new(game_name, tag_line)
    }
}

impl fmt::Display for RiotId
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}#{}", self.game_name, self.tag_line)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn parse()
    {
        let id: RiotId = "Hide on bush#KR1".parse().unwrap();
        assert_eq!(id.game_name(), "Hide on bush");
        assert_eq!(id.tag_line(), "KR1");
        assert_eq!(id.to_string(), "Hide on bush#KR1");
    }

    #[test]
    fn invalid()
    {
        assert_eq!("Hide on bush".parse::<RiotId>(), Err(ParseRiotIdError::MissingSeparator));
        assert_eq!("#KR1".parse::<RiotId>(), Err(ParseRiotIdError::EmptyGameName));
        assert_eq!("Faker#".parse::<RiotId>(), Err(ParseRiotIdError::EmptyTagLine));
        assert_eq!(" #  ".parse::<RiotId>(), Err(ParseRiotIdError::EmptyGameName));
    }

    #[test]
    fn splits_at_first_separator()
    {
        let id: RiotId = "Faker#KR#1".parse().unwrap();
        assert_eq!(id.game_name(), "Faker");
        assert_eq!(id.tag_line(), "KR#1");
    }
}
