//! The fixed set of API endpoints.

/// One remote operation of the osu! API v1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// Beatmap metadata, one entry per difficulty.
    Beatmaps,
    /// User profile.
    User,
    /// Top scores on a beatmap.
    Scores,
    /// A user's best scores.
    UserBest,
    /// A user's plays over the last 24 hours.
    UserRecent,
    /// Multiplayer match data.
    Match,
    /// Replay data of a single score.
    Replay,
}

impl Endpoint {
    /// Path appended to the base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Beatmaps => "/get_beatmaps",
            Endpoint::User => "/get_user",
            Endpoint::Scores => "/get_scores",
            Endpoint::UserBest => "/get_user_best",
            Endpoint::UserRecent => "/get_user_recent",
            Endpoint::Match => "/get_match",
            Endpoint::Replay => "/get_replay",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
