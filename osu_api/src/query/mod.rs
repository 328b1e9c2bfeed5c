mod common;
pub use self::common::{Mode, Query, UserRef};

mod beatmap;
pub use self::beatmap::BeatmapQuery;

mod user;
pub use self::user::UserQuery;

mod scores;
pub use self::scores::{ScoresQuery, UserBestQuery, UserRecentQuery};

mod multiplayer;
pub use self::multiplayer::MatchQuery;

mod replay;
pub use self::replay::ReplayQuery;
