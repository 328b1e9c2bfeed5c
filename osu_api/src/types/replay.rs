//! Replay data returned by `/get_replay`.

use serde::Deserialize;

/// Replay of a single score.
#[derive(Clone, Debug, Deserialize)]
pub struct Replay {
    /// The replay's frame data, in the encoding named by `encoding`.
    pub content: String,

    /// Always `"base64"` in practice.
    pub encoding: String,
}
