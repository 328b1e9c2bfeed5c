use crate::Parameters;

use super::{Mode, Query, UserRef};

/// Filters for `/get_replay`.
///
/// Either a `score_id` alone, or a beatmap and user pair, identifies the
/// replay. The API is limited to 10 replay requests per minute.
#[derive(Clone, Default)]
pub struct ReplayQuery {
    pub beatmap_id: Option<u64>,
    pub user: Option<UserRef>,
    pub mode: Option<Mode>,
    pub score_id: Option<u64>,
    pub mods: Option<u32>,
}

impl Query for ReplayQuery {
    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        if let Some(beatmap_id) = self.beatmap_id {
            params.insert("b", beatmap_id);
        }
        if let Some(user) = &self.user {
            user.add_to(&mut params);
        }
        if let Some(mode) = self.mode {
            params.insert("m", mode);
        }
        if let Some(score_id) = self.score_id {
            params.insert("s", score_id);
        }
        if let Some(mods) = self.mods {
            params.insert("mods", mods);
        }
        params
    }
}

impl ReplayQuery {
    /// Replay of `user`'s score on `beatmap_id`.
    pub fn for_user(beatmap_id: u64, user: impl Into<UserRef>) -> Self {
        Self {
            beatmap_id: Some(beatmap_id),
            user: Some(user.into()),
            ..Default::default()
        }
    }

    /// Replay of one specific score.
    pub fn for_score(score_id: u64) -> Self {
        Self {
            score_id: Some(score_id),
            ..Default::default()
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_mods(mut self, mods: u32) -> Self {
        self.mods = Some(mods);
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{Mode, Query, ReplayQuery};

    #[test]
    fn test_replay_query_for_user() {
        let params = ReplayQuery::for_user(1816113, 124493u64)
            .with_mode(Mode::Osu)
            .with_mods(24)
            .to_parameters();
        assert_eq!(params.get("b"), Some("1816113"));
        assert_eq!(params.get("u"), Some("124493"));
        assert_eq!(params.get("type"), Some("id"));
        assert_eq!(params.get("m"), Some("0"));
        assert_eq!(params.get("mods"), Some("24"));
        assert_eq!(params.get("s"), None);
    }

    #[test]
    fn test_replay_query_for_score() {
        let params = ReplayQuery::for_score(2177560145).to_parameters();
        assert_eq!(params.get("s"), Some("2177560145"));
        assert_eq!(params.len(), 1);
    }
}
