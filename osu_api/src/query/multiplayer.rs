use crate::Parameters;

use super::Query;

/// Filters for `/get_match`.
#[derive(Clone, Copy)]
pub struct MatchQuery {
    pub match_id: u64,
}

impl Query for MatchQuery {
    fn to_parameters(&self) -> Parameters {
        Parameters::new().with("mp", self.match_id)
    }
}

impl MatchQuery {
    pub fn new(match_id: u64) -> Self {
        Self { match_id }
    }
}
