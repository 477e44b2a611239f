use json::JsonValue;

use crate::game::GameType;
use crate::riot::Region;

/// A player as identified with the game's provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player
{
    /// The id the provider uses for the player, the PUUID for Riot games.
    pub id:        String,
    pub game_name: String,
    pub tag_line:  String,
    pub game:      GameType,
    pub level:     Option<u32>,
    pub region:    Option<Region>,
}

impl Player
{
    pub fn to_json(&self) -> JsonValue
    {
        let mut json = JsonValue::new_object();
        json["id"] = self.id.as_str().into();
        json["game_name"] = self.game_name.as_str().into();
        json["tag_line"] = self.tag_line.as_str().into();
        json["game"] = self.game.tag().into();
        if let Some(level) = self.level {
            json["level"] = level.into();
        }
        if let Some(region) = self.region {
            json["region"] = region.platform().into();
        }

        json
    }
}
