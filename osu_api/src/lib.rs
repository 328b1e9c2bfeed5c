//! Client for the osu! API v1.
//!
//! Every endpoint is a plain `GET` against `https://osu.ppy.sh/api` with the
//! API key passed as the `k` query parameter. Responses are returned as
//! decoded JSON, or decoded into the models in [`types`] via [`Client::fetch`].
mod client;
mod config;
mod endpoint;
mod errors;
mod params;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::config::{ClientOptions, DEFAULT_TIMEOUT_MS};
pub use self::endpoint::Endpoint;
pub use self::errors::Error;
pub use self::params::{Parameters, TOKEN_KEY};
pub use self::query::{
    BeatmapQuery, MatchQuery, Mode, Query, ReplayQuery, ScoresQuery, UserBestQuery, UserQuery,
    UserRecentQuery, UserRef,
};
