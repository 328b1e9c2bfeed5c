use crate::Parameters;

use super::{Mode, Query, UserRef};

/// Filters for `/get_user`.
#[derive(Clone)]
pub struct UserQuery {
    pub user: UserRef,
    pub mode: Option<Mode>,
    /// How many days of recent events to include (1 to 31).
    pub event_days: Option<u8>,
}

impl Query for UserQuery {
    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        self.user.add_to(&mut params);
        if let Some(mode) = self.mode {
            params.insert("m", mode);
        }
        if let Some(event_days) = self.event_days {
            params.insert("event_days", event_days);
        }
        params
    }
}

impl UserQuery {
    pub fn new(user: impl Into<UserRef>) -> Self {
        Self {
            user: user.into(),
            mode: None,
            event_days: None,
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_event_days(mut self, event_days: u8) -> Self {
        self.event_days = Some(event_days);
        self
    }
}
