//! Multiplayer match data returned by `/get_match`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

use super::de;
use crate::Mode;

/// A multiplayer room and every game played in it.
#[derive(Clone, Debug, Deserialize)]
pub struct Match {
    /// `None` when the match id does not exist; the API then sends `"match": 0`.
    #[serde(rename = "match", deserialize_with = "match_info")]
    pub info: Option<MatchInfo>,

    #[serde(default)]
    pub games: Vec<Game>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MatchInfo {
    #[serde(deserialize_with = "de::from_str")]
    pub match_id: u64,

    pub name: String,

    #[serde(deserialize_with = "de::datetime")]
    pub start_time: NaiveDateTime,

    /// `None` while the room is still open.
    #[serde(default, deserialize_with = "de::option_datetime")]
    pub end_time: Option<NaiveDateTime>,
}

/// One beatmap played in a match.
#[derive(Clone, Debug, Deserialize)]
pub struct Game {
    #[serde(deserialize_with = "de::from_str")]
    pub game_id: u64,

    #[serde(deserialize_with = "de::datetime")]
    pub start_time: NaiveDateTime,

    /// `None` if the game was aborted or is still in progress.
    #[serde(default, deserialize_with = "de::option_datetime")]
    pub end_time: Option<NaiveDateTime>,

    #[serde(deserialize_with = "de::from_str")]
    pub beatmap_id: u64,

    #[serde(rename = "play_mode", deserialize_with = "de::from_str")]
    pub mode: Mode,

    /// Winning condition: 0 score, 1 accuracy, 2 combo, 3 score v2.
    #[serde(deserialize_with = "de::from_str")]
    pub scoring_type: u8,

    /// 0 head to head, 1 tag co-op, 2 team vs, 3 tag team vs.
    #[serde(deserialize_with = "de::from_str")]
    pub team_type: u8,

    /// Global mod bitmask.
    #[serde(deserialize_with = "de::from_str")]
    pub mods: u32,

    #[serde(default)]
    pub scores: Vec<GameScore>,
}

/// One player's result in a game.
#[derive(Clone, Debug, Deserialize)]
pub struct GameScore {
    #[serde(deserialize_with = "de::from_str")]
    pub slot: u8,

    /// 0 no team, 1 blue, 2 red.
    #[serde(deserialize_with = "de::from_str")]
    pub team: u8,

    #[serde(deserialize_with = "de::from_str")]
    pub user_id: u64,

    #[serde(deserialize_with = "de::from_str")]
    pub score: u64,

    #[serde(rename = "maxcombo", deserialize_with = "de::from_str")]
    pub max_combo: u32,

    #[serde(deserialize_with = "de::from_str")]
    pub count300: u32,

    #[serde(deserialize_with = "de::from_str")]
    pub count100: u32,

    #[serde(deserialize_with = "de::from_str")]
    pub count50: u32,

    #[serde(rename = "countmiss", deserialize_with = "de::from_str")]
    pub count_miss: u32,

    #[serde(deserialize_with = "de::flag")]
    pub perfect: bool,

    /// Whether the player passed the map.
    #[serde(deserialize_with = "de::flag")]
    pub pass: bool,

    /// Per-player mods when free mod is on.
    #[serde(default, rename = "enabled_mods", deserialize_with = "de::option_from_str")]
    pub mods: Option<u32>,
}

fn match_info<'de, D>(deserializer: D) -> Result<Option<MatchInfo>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_object() {
        serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom)
    } else {
        Ok(None)
    }
}
