//! Scores returned by `/get_scores`, `/get_user_best` and `/get_user_recent`.

use chrono::NaiveDateTime;
use serde::Deserialize;

use super::de;

/// A score on the leaderboard of one beatmap.
#[derive(Clone, Debug, Deserialize)]
pub struct Score {
    #[serde(deserialize_with = "de::from_str")]
    pub score_id: u64,

    #[serde(deserialize_with = "de::from_str")]
    pub user_id: u64,

    pub username: String,

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

    #[serde(rename = "countgeki", deserialize_with = "de::from_str")]
    pub count_geki: u32,

    #[serde(rename = "countkatu", deserialize_with = "de::from_str")]
    pub count_katu: u32,

    /// Full combo.
    #[serde(deserialize_with = "de::flag")]
    pub perfect: bool,

    /// Mod bitmask.
    #[serde(rename = "enabled_mods", deserialize_with = "de::from_str")]
    pub mods: u32,

    #[serde(deserialize_with = "de::datetime")]
    pub date: NaiveDateTime,

    /// Letter grade, e.g. `"SH"` or `"A"`.
    pub rank: String,

    #[serde(default, deserialize_with = "de::option_from_str")]
    pub pp: Option<f64>,

    #[serde(default, deserialize_with = "de::flag")]
    pub replay_available: bool,
}

/// A score from a user's best or recent plays.
///
/// Recent plays include failed attempts and carry neither a score id
/// nor pp.
#[derive(Clone, Debug, Deserialize)]
pub struct UserScore {
    #[serde(deserialize_with = "de::from_str")]
    pub beatmap_id: u64,

    #[serde(default, deserialize_with = "de::option_from_str")]
    pub score_id: Option<u64>,

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

    #[serde(rename = "countgeki", deserialize_with = "de::from_str")]
    pub count_geki: u32,

    #[serde(rename = "countkatu", deserialize_with = "de::from_str")]
    pub count_katu: u32,

    #[serde(deserialize_with = "de::flag")]
    pub perfect: bool,

    #[serde(rename = "enabled_mods", deserialize_with = "de::from_str")]
    pub mods: u32,

    #[serde(deserialize_with = "de::datetime")]
    pub date: NaiveDateTime,

    /// Letter grade. `"F"` for a failed play.
    pub rank: String,

    #[serde(default, deserialize_with = "de::option_from_str")]
    pub pp: Option<f64>,

    #[serde(default, deserialize_with = "de::flag")]
    pub replay_available: bool,
}

impl UserScore {
    pub fn is_fail(&self) -> bool {
        self.rank == "F"
    }
}
