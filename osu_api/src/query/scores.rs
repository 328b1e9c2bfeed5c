use crate::Parameters;

use super::{Mode, Query, UserRef};

/// Filters for `/get_scores`: the top scores on one beatmap.
#[derive(Clone)]
pub struct ScoresQuery {
    pub beatmap_id: u64,
    /// Only this user's score.
    pub user: Option<UserRef>,
    pub mode: Option<Mode>,
    /// Only scores set with exactly this mod bitmask.
    pub mods: Option<u32>,
    /// Maximum number of results (1 to 100).
    pub limit: Option<u32>,
}

impl Query for ScoresQuery {
    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new().with("b", self.beatmap_id);
        if let Some(user) = &self.user {
            user.add_to(&mut params);
        }
        if let Some(mode) = self.mode {
            params.insert("m", mode);
        }
        if let Some(mods) = self.mods {
            params.insert("mods", mods);
        }
        if let Some(limit) = self.limit {
            params.insert("limit", limit);
        }
        params
    }
}

impl ScoresQuery {
    pub fn new(beatmap_id: u64) -> Self {
        Self {
            beatmap_id,
            user: None,
            mode: None,
            mods: None,
            limit: None,
        }
    }

    pub fn with_user(mut self, user: impl Into<UserRef>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_mods(mut self, mods: u32) -> Self {
        self.mods = Some(mods);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Filters for `/get_user_best`.
#[derive(Clone)]
pub struct UserBestQuery {
    pub user: UserRef,
    pub mode: Option<Mode>,
    /// Maximum number of results (1 to 100).
    pub limit: Option<u32>,
}

impl Query for UserBestQuery {
    fn to_parameters(&self) -> Parameters {
        user_scores_parameters(&self.user, self.mode, self.limit)
    }
}

impl UserBestQuery {
    pub fn new(user: impl Into<UserRef>) -> Self {
        Self {
            user: user.into(),
            mode: None,
            limit: None,
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Filters for `/get_user_recent`.
#[derive(Clone)]
pub struct UserRecentQuery {
    pub user: UserRef,
    pub mode: Option<Mode>,
    /// Maximum number of results (1 to 50).
    pub limit: Option<u32>,
}

impl Query for UserRecentQuery {
    fn to_parameters(&self) -> Parameters {
        user_scores_parameters(&self.user, self.mode, self.limit)
    }
}

impl UserRecentQuery {
    pub fn new(user: impl Into<UserRef>) -> Self {
        Self {
            user: user.into(),
            mode: None,
            limit: None,
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

fn user_scores_parameters(user: &UserRef, mode: Option<Mode>, limit: Option<u32>) -> Parameters {
    let mut params = Parameters::new();
    user.add_to(&mut params);
    if let Some(mode) = mode {
        params.insert("m", mode);
    }
    if let Some(limit) = limit {
        params.insert("limit", limit);
    }
    params
}

#[cfg(test)]
mod tests {
    use crate::query::{Mode, Query, ScoresQuery, UserBestQuery, UserRecentQuery};

    #[test]
    fn test_scores_query() {
        let params = ScoresQuery::new(129891)
            .with_user("WubWoofWolf")
            .with_mode(Mode::Osu)
            .with_mods(72)
            .with_limit(50)
            .to_parameters();
        assert_eq!(params.get("b"), Some("129891"));
        assert_eq!(params.get("u"), Some("WubWoofWolf"));
        assert_eq!(params.get("type"), Some("string"));
        assert_eq!(params.get("m"), Some("0"));
        assert_eq!(params.get("mods"), Some("72"));
        assert_eq!(params.get("limit"), Some("50"));
    }

    #[test]
    fn scores_query_requires_only_beatmap() {
        let params = ScoresQuery::new(75).to_parameters();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("b"), Some("75"));
    }

    #[test]
    fn user_best_and_recent_share_shape() {
        let best = UserBestQuery::new(2u64)
            .with_mode(Mode::Fruits)
            .with_limit(5)
            .to_parameters();
        let recent = UserRecentQuery::new(2u64)
            .with_mode(Mode::Fruits)
            .with_limit(5)
            .to_parameters();
        assert_eq!(best, recent);
        assert_eq!(best.get("u"), Some("2"));
        assert_eq!(best.get("type"), Some("id"));
        assert_eq!(best.get("m"), Some("2"));
        assert_eq!(best.get("limit"), Some("5"));
    }
}
