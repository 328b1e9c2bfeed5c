//! Beatmap metadata returned by `/get_beatmaps`.

use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::Deserialize;

use super::de;
use crate::Mode;

/// One difficulty of a beatmapset.
#[derive(Clone, Debug, Deserialize)]
pub struct Beatmap {
    #[serde(deserialize_with = "de::from_str")]
    pub beatmap_id: u64,

    #[serde(deserialize_with = "de::from_str")]
    pub beatmapset_id: u64,

    /// Ranking state of the set.
    #[serde(rename = "approved", deserialize_with = "de::from_str")]
    pub status: RankStatus,

    #[serde(deserialize_with = "de::datetime")]
    pub submit_date: NaiveDateTime,

    /// When the set was ranked, approved or loved. `None` otherwise.
    #[serde(default, deserialize_with = "de::option_datetime")]
    pub approved_date: Option<NaiveDateTime>,

    #[serde(deserialize_with = "de::datetime")]
    pub last_update: NaiveDateTime,

    pub artist: String,

    pub title: String,

    /// Difficulty name.
    pub version: String,

    /// Mapper's username.
    pub creator: String,

    #[serde(deserialize_with = "de::from_str")]
    pub creator_id: u64,

    #[serde(default, deserialize_with = "de::option_from_str")]
    pub bpm: Option<f64>,

    /// Star rating.
    #[serde(rename = "difficultyrating", deserialize_with = "de::from_str")]
    pub stars: f64,

    /// Circle size.
    #[serde(rename = "diff_size", deserialize_with = "de::from_str")]
    pub cs: f64,

    /// Overall difficulty.
    #[serde(rename = "diff_overall", deserialize_with = "de::from_str")]
    pub od: f64,

    /// Approach rate.
    #[serde(rename = "diff_approach", deserialize_with = "de::from_str")]
    pub ar: f64,

    /// HP drain.
    #[serde(rename = "diff_drain", deserialize_with = "de::from_str")]
    pub hp: f64,

    /// Seconds from first note to last note, breaks excluded.
    #[serde(deserialize_with = "de::from_str")]
    pub hit_length: u32,

    /// Seconds from first note to last note, breaks included.
    #[serde(deserialize_with = "de::from_str")]
    pub total_length: u32,

    #[serde(deserialize_with = "de::from_str")]
    pub mode: Mode,

    pub file_md5: String,

    #[serde(default, deserialize_with = "de::option_from_str")]
    pub max_combo: Option<u32>,

    #[serde(default, deserialize_with = "de::option_from_str")]
    pub playcount: Option<u64>,

    #[serde(default, deserialize_with = "de::option_from_str")]
    pub passcount: Option<u64>,

    #[serde(default)]
    pub tags: String,

    #[serde(default)]
    source: Option<String>,
}

impl Beatmap {
    /// Song source (game, anime, ...), if any.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref().filter(|s| !s.is_empty())
    }

    /// Link to the beatmap page.
    pub fn url(&self) -> String {
        format!(
            "https://osu.ppy.sh/beatmapsets/{}#{}/{}",
            self.beatmapset_id,
            mode_slug(self.mode),
            self.beatmap_id
        )
    }
}

fn mode_slug(mode: Mode) -> &'static str {
    match mode {
        Mode::Osu => "osu",
        Mode::Taiko => "taiko",
        Mode::Fruits => "fruits",
        Mode::Mania => "mania",
    }
}

/// Ranking state of a beatmapset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankStatus {
    Graveyard = -2,
    WorkInProgress = -1,
    Pending = 0,
    Ranked = 1,
    Approved = 2,
    Qualified = 3,
    Loved = 4,
}

impl RankStatus {
    /// Whether scores on the map award pp.
    pub fn gives_pp(&self) -> bool {
        matches!(self, RankStatus::Ranked | RankStatus::Approved)
    }
}

impl std::fmt::Display for RankStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RankStatus::Graveyard => "Graveyard",
                RankStatus::WorkInProgress => "WIP",
                RankStatus::Pending => "Pending",
                RankStatus::Ranked => "Ranked",
                RankStatus::Approved => "Approved",
                RankStatus::Qualified => "Qualified",
                RankStatus::Loved => "Loved",
            }
        )?;
        Ok(())
    }
}

impl FromStr for RankStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-2" => Ok(RankStatus::Graveyard),
            "-1" => Ok(RankStatus::WorkInProgress),
            "0" => Ok(RankStatus::Pending),
            "1" => Ok(RankStatus::Ranked),
            "2" => Ok(RankStatus::Approved),
            "3" => Ok(RankStatus::Qualified),
            "4" => Ok(RankStatus::Loved),
            _ => Err(()),
        }
    }
}
