//! Query parameter mapping forwarded to the API.

use std::collections::BTreeMap;
use std::fmt::Display;

/// Query parameter carrying the API key.
pub const TOKEN_KEY: &str = "k";

/// Key/value filters for a single request.
///
/// Values of any [`Display`] type are stored as strings. Keys are kept
/// sorted so the resulting query string is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Parameters {
    pairs: BTreeMap<String, String>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn insert(&mut self, key: &str, value: impl Display) -> &mut Self {
        self.pairs.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with(mut self, key: &str, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copy of these parameters with the API key set under [`TOKEN_KEY`].
    /// A caller-supplied value under that key is overwritten.
    pub(crate) fn with_token(&self, token: &str) -> Parameters {
        let mut params = self.clone();
        if let Some(previous) = params.pairs.insert(TOKEN_KEY.to_string(), token.to_string()) {
            if previous != token {
                tracing::warn!(
                    "Caller-supplied `{}` parameter overwritten by client token",
                    TOKEN_KEY
                );
            }
        }
        params
    }
}

impl<K: AsRef<str>, V: Display> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Parameters::new();
        for (key, value) in iter {
            params.insert(key.as_ref(), value);
        }
        params
    }
}

impl<K: AsRef<str>, V: Display, const N: usize> From<[(K, V); N]> for Parameters {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Parameters, TOKEN_KEY};

    #[test]
    fn values_are_stringified() {
        let params = Parameters::new().with("b", 75).with("m", 0).with("u", "peppy");
        assert_eq!(params.get("b"), Some("75"));
        assert_eq!(params.get("m"), Some("0"));
        assert_eq!(params.get("u"), Some("peppy"));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn iteration_is_sorted_by_key() {
        let params = Parameters::from([("u", "2"), ("b", "1"), ("m", "3")]);
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "m", "u"]);
    }

    #[test]
    fn token_is_added_without_touching_original() {
        let params = Parameters::from([("u", "peppy")]);
        let signed = params.with_token("secret");
        assert_eq!(signed.get(TOKEN_KEY), Some("secret"));
        assert_eq!(signed.get("u"), Some("peppy"));
        assert_eq!(params.get(TOKEN_KEY), None);
    }

    #[test]
    fn token_overrides_caller_value() {
        let params = Parameters::from([("k", "forged"), ("u", "peppy")]);
        let signed = params.with_token("secret");
        assert_eq!(signed.get(TOKEN_KEY), Some("secret"));
        assert_eq!(signed.len(), 2);
    }
}
