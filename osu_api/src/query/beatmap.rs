use chrono::NaiveDateTime;

use crate::Parameters;

use super::{Mode, Query, UserRef};

/// Filters for `/get_beatmaps`.
#[derive(Clone, Default)]
pub struct BeatmapQuery {
    /// Only beatmaps ranked or loved since this UTC time.
    pub since: Option<NaiveDateTime>,
    pub beatmapset_id: Option<u64>,
    pub beatmap_id: Option<u64>,
    /// Only beatmaps created by this user.
    pub user: Option<UserRef>,
    pub mode: Option<Mode>,
    /// Include converted beatmaps. Only meaningful together with a non-osu mode.
    pub include_converted: Option<bool>,
    /// MD5 hash of the beatmap file.
    pub hash: Option<String>,
    /// Maximum number of results (the API caps this at 500).
    pub limit: Option<u32>,
    /// Mod bitmask applied to difficulty values.
    pub mods: Option<u32>,
}

impl Query for BeatmapQuery {
    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        if let Some(since) = &self.since {
            params.insert("since", since.format("%Y-%m-%d %H:%M:%S"));
        }
        if let Some(beatmapset_id) = self.beatmapset_id {
            params.insert("s", beatmapset_id);
        }
        if let Some(beatmap_id) = self.beatmap_id {
            params.insert("b", beatmap_id);
        }
        if let Some(user) = &self.user {
            user.add_to(&mut params);
        }
        if let Some(mode) = self.mode {
            params.insert("m", mode);
        }
        if let Some(include_converted) = self.include_converted {
            params.insert("a", include_converted as u8);
        }
        if let Some(hash) = &self.hash {
            params.insert("h", hash);
        }
        if let Some(limit) = self.limit {
            params.insert("limit", limit);
        }
        if let Some(mods) = self.mods {
            params.insert("mods", mods);
        }
        params
    }
}

impl BeatmapQuery {
    pub fn with_since(mut self, since: NaiveDateTime) -> Self {
        self.since = Some(since);
        self
    }

    pub fn with_beatmapset_id(mut self, beatmapset_id: u64) -> Self {
        self.beatmapset_id = Some(beatmapset_id);
        self
    }

    pub fn with_beatmap_id(mut self, beatmap_id: u64) -> Self {
        self.beatmap_id = Some(beatmap_id);
        self
    }

    pub fn with_user(mut self, user: impl Into<UserRef>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_converted(mut self, include_converted: bool) -> Self {
        self.include_converted = Some(include_converted);
        self
    }

    pub fn with_hash(mut self, hash: &str) -> Self {
        self.hash = Some(hash.to_string());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_mods(mut self, mods: u32) -> Self {
        self.mods = Some(mods);
        self
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::query::{BeatmapQuery, Mode, Query};

    #[test]
    fn test_beatmap_query() {
        let since = NaiveDate::from_ymd_opt(2013, 6, 22)
            .unwrap()
            .and_hms_opt(9, 46, 48)
            .unwrap();
        let params = BeatmapQuery::default()
            .with_since(since)
            .with_beatmapset_id(1)
            .with_beatmap_id(75)
            .with_user("peppy")
            .with_mode(Mode::Mania)
            .with_converted(true)
            .with_hash("a5b99395a42bd55bc5eb1d2411cbdf8b")
            .with_limit(10)
            .with_mods(64)
            .to_parameters();

        assert_eq!(params.get("since"), Some("2013-06-22 09:46:48"));
        assert_eq!(params.get("s"), Some("1"));
        assert_eq!(params.get("b"), Some("75"));
        assert_eq!(params.get("u"), Some("peppy"));
        assert_eq!(params.get("type"), Some("string"));
        assert_eq!(params.get("m"), Some("3"));
        assert_eq!(params.get("a"), Some("1"));
        assert_eq!(params.get("h"), Some("a5b99395a42bd55bc5eb1d2411cbdf8b"));
        assert_eq!(params.get("limit"), Some("10"));
        assert_eq!(params.get("mods"), Some("64"));
    }

    #[test]
    fn empty_query_has_no_parameters() {
        assert!(BeatmapQuery::default().to_parameters().is_empty());
    }
}
