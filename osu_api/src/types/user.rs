//! User profile returned by `/get_user`.

use chrono::NaiveDateTime;
use serde::Deserialize;

use super::de;

/// A player's profile in one game mode.
///
/// Statistics are `None` for accounts that have never played the mode.
#[derive(Clone, Debug, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "de::from_str")]
    pub user_id: u64,

    pub username: String,

    #[serde(deserialize_with = "de::datetime")]
    pub join_date: NaiveDateTime,

    /// Two-letter country code.
    pub country: String,

    #[serde(default, deserialize_with = "de::option_from_str")]
    pub playcount: Option<u64>,

    #[serde(default, deserialize_with = "de::option_from_str")]
    pub ranked_score: Option<u64>,

    #[serde(default, deserialize_with = "de::option_from_str")]
    pub total_score: Option<u64>,

    /// Global rank.
    #[serde(default, deserialize_with = "de::option_from_str")]
    pub pp_rank: Option<u64>,

    #[serde(default, deserialize_with = "de::option_from_str")]
    pub pp_country_rank: Option<u64>,

    #[serde(default, rename = "pp_raw", deserialize_with = "de::option_from_str")]
    pub pp: Option<f64>,

    #[serde(default, deserialize_with = "de::option_from_str")]
    pub level: Option<f64>,

    /// Accuracy in percent.
    #[serde(default, deserialize_with = "de::option_from_str")]
    pub accuracy: Option<f64>,

    #[serde(default, deserialize_with = "de::option_from_str")]
    pub count300: Option<u64>,

    #[serde(default, deserialize_with = "de::option_from_str")]
    pub count100: Option<u64>,

    #[serde(default, deserialize_with = "de::option_from_str")]
    pub count50: Option<u64>,

    #[serde(default, deserialize_with = "de::option_from_str")]
    pub total_seconds_played: Option<u64>,

    /// Recent profile events, as sent by the API.
    #[serde(default)]
    pub events: Vec<serde_json::Value>,
}

impl User {
    /// Link to the profile page.
    pub fn url(&self) -> String {
        format!("https://osu.ppy.sh/users/{}", self.user_id)
    }
}
