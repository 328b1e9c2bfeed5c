//! Typed models for API responses.
//!
//! The v1 API encodes nearly every number as a JSON string and booleans as
//! `"0"`/`"1"`. These models decode those into proper Rust types; use them
//! with [`Client::fetch`](crate::Client::fetch).
mod de;

mod beatmap;
pub use self::beatmap::{Beatmap, RankStatus};

mod user;
pub use self::user::User;

mod score;
pub use self::score::{Score, UserScore};

mod multiplayer;
pub use self::multiplayer::{Game, GameScore, Match, MatchInfo};

mod replay;
pub use self::replay::Replay;
