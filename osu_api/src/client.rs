//! HTTP client for the osu! API v1.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::time::Instant;
use url::Url;

use crate::{ClientOptions, Endpoint, Error, Parameters, Query};

const BASE_API_URL: &str = "https://osu.ppy.sh/api";

/// HTTP client for the osu! API v1.
///
/// Holds the API key, the base URL and the request deadline; none of them
/// change after construction. Cloning is cheap and clones share the
/// underlying connection pool, so one client can serve any number of
/// concurrent calls.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    token: String,
    base_api_url: String,
    timeout: Duration,
}

impl Client {
    /// Creates a client for the production API.
    ///
    /// Fails with [`Error::MissingToken`] if `options.token` is empty.
    pub fn new(options: ClientOptions) -> Result<Self, Error> {
        Self::build(BASE_API_URL, options)
    }

    /// Shorthand for [`Client::new`] with the default timeout.
    pub fn with_token(token: &str) -> Result<Self, Error> {
        Self::new(ClientOptions::new(token))
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, options: ClientOptions) -> Result<Self, Error> {
        Self::build(base_url.trim_end_matches('/'), options)
    }

    fn build(base_url: &str, options: ClientOptions) -> Result<Self, Error> {
        if options.token.is_empty() {
            return Err(Error::MissingToken);
        }
        Url::parse(base_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", base_url, e);
            Error::InvalidBaseUrl(format!("{}: {}", base_url, e))
        })?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("osu_api/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(options.timeout())
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed(e.to_string())
            })?;
        Ok(Self {
            http,
            timeout: options.timeout(),
            token: options.token,
            base_api_url: base_url.to_string(),
        })
    }

    /// Deadline applied to every request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, endpoint: Endpoint, params: &Parameters) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, endpoint.path()).as_str())
            .map_err(|e| {
                tracing::error!("Invalid URL constructed: {}", e);
                Error::InvalidBaseUrl(e.to_string())
            })?;
        Ok(params.with_token(&self.token).add_to_url(&url))
    }

    /// Calls `endpoint` with `query` and decodes the body into `T`.
    ///
    /// The whole exchange, body included, must finish within
    /// [`Client::timeout`]. When the deadline passes the in-flight request
    /// is dropped, which closes its connection, and [`Error::Timeout`] is
    /// returned. A non-200 status is reported as soon as the headers arrive,
    /// even if the body never completes. Nothing is retried.
    pub async fn fetch<T, Q>(&self, endpoint: Endpoint, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query + ?Sized,
    {
        let params = query.to_parameters();
        if params.is_empty() {
            return Err(Error::MissingParameters);
        }
        let url = self.get_url(endpoint, &params)?;
        tracing::debug!(%endpoint, params = params.len(), "Sending request");

        // One deadline covers headers and body. Every wait below is bounded by
        // it and the timers are dropped with their futures on every path.
        let deadline = Instant::now() + self.timeout;
        let request = self
            .http
            .get(url)
            .header("accept", "application/json")
            .send();
        let resp = match tokio::time::timeout_at(deadline, request).await {
            Ok(resp) => resp.map_err(|e| self.transport_error(endpoint, e))?,
            Err(_) => return Err(self.timed_out(endpoint)),
        };

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            // The status is already known; the body is only a best-effort snippet.
            let body = match tokio::time::timeout_at(deadline, resp.text()).await {
                Ok(Ok(body)) => truncate_body(&body),
                _ => String::new(),
            };
            tracing::error!(%endpoint, "Request failed with status {}: {}", status, body);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = match tokio::time::timeout_at(deadline, resp.text()).await {
            Ok(body) => body.map_err(|e| self.transport_error(endpoint, e))?,
            Err(_) => return Err(self.timed_out(endpoint)),
        };

        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!(
                %endpoint,
                "Failed to parse response: {} | body: {}",
                e,
                truncate_body(&body)
            );
            Error::ParseFailed(e.to_string())
        })
    }

    fn timed_out(&self, endpoint: Endpoint) -> Error {
        tracing::warn!(
            %endpoint,
            "Request timed out after {}ms",
            self.timeout.as_millis()
        );
        Error::Timeout(self.timeout)
    }

    fn transport_error(&self, endpoint: Endpoint, e: reqwest::Error) -> Error {
        // Raised by the connect timeout set in `build`.
        if e.is_timeout() {
            tracing::warn!(%endpoint, "Connection timed out: {}", e);
            return Error::Timeout(self.timeout);
        }
        // Strip the URL so the API key never ends up in an error message.
        let e = e.without_url();
        tracing::error!(%endpoint, "Failed to get resource: {}", e);
        Error::RequestFailed(e.to_string())
    }

    /// Retrieves beatmap metadata, one entry per difficulty matching `query`.
    pub async fn get_beatmaps<Q: Query + ?Sized>(&self, query: &Q) -> Result<Value, Error> {
        self.fetch(Endpoint::Beatmaps, query).await
    }

    /// Retrieves a user's profile.
    pub async fn get_user<Q: Query + ?Sized>(&self, query: &Q) -> Result<Value, Error> {
        self.fetch(Endpoint::User, query).await
    }

    /// Retrieves the top scores on a beatmap.
    pub async fn get_scores<Q: Query + ?Sized>(&self, query: &Q) -> Result<Value, Error> {
        self.fetch(Endpoint::Scores, query).await
    }

    /// Retrieves a user's best scores.
    pub async fn get_user_best<Q: Query + ?Sized>(&self, query: &Q) -> Result<Value, Error> {
        self.fetch(Endpoint::UserBest, query).await
    }

    /// Retrieves a user's plays from the last 24 hours.
    pub async fn get_user_recent<Q: Query + ?Sized>(&self, query: &Q) -> Result<Value, Error> {
        self.fetch(Endpoint::UserRecent, query).await
    }

    /// Retrieves a multiplayer match and the scores of every game played in it.
    pub async fn get_match<Q: Query + ?Sized>(&self, query: &Q) -> Result<Value, Error> {
        self.fetch(Endpoint::Match, query).await
    }

    /// Retrieves replay data. The `content` key holds the base64-encoded replay.
    pub async fn get_replay<Q: Query + ?Sized>(&self, query: &Q) -> Result<Value, Error> {
        self.fetch(Endpoint::Replay, query).await
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_api_url", &self.base_api_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{truncate_body, Client};
    use crate::{ClientOptions, Endpoint, Error, Parameters, UserQuery};

    #[test]
    fn empty_token_is_rejected() {
        let err = Client::new(ClientOptions::new("")).unwrap_err();
        assert!(matches!(err, Error::MissingToken));
        assert!(err.is_config_error());
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = Client::with_base_url("not a url", ClientOptions::new("key")).unwrap_err();
        assert!(matches!(err, Error::InvalidBaseUrl(_)));
    }

    #[test]
    fn timeout_defaults_to_five_seconds() {
        let client = Client::with_token("key").unwrap();
        assert_eq!(client.timeout(), Duration::from_millis(5000));
        assert_eq!(client.base_url(), "https://osu.ppy.sh/api");

        let client = Client::new(ClientOptions::new("key").with_timeout_ms(15000)).unwrap();
        assert_eq!(client.timeout(), Duration::from_millis(15000));
    }

    #[test]
    fn url_carries_token_and_parameters() {
        let client = Client::with_token("secret").unwrap();
        let url = client
            .get_url(Endpoint::Beatmaps, &Parameters::from([("b", "75")]))
            .unwrap();
        insta::assert_snapshot!(url.to_string(), @"https://osu.ppy.sh/api/get_beatmaps?b=75&k=secret");
    }

    #[test]
    fn url_token_overrides_caller_value() {
        let client = Client::with_token("secret").unwrap();
        let params = Parameters::from([("k", "forged"), ("u", "peppy")]);
        let url = client.get_url(Endpoint::User, &params).unwrap();
        let keys: Vec<_> = url.query_pairs().filter(|(k, _)| k == "k").collect();
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].1, "secret");
    }

    #[test]
    fn url_from_typed_query() {
        let client = Client::with_base_url("http://localhost:8080/api/", ClientOptions::new("t"))
            .unwrap();
        let url = client
            .get_url(Endpoint::User, &crate::Query::to_parameters(&UserQuery::new("peppy")))
            .unwrap();
        insta::assert_snapshot!(url.to_string(), @"http://localhost:8080/api/get_user?k=t&type=string&u=peppy");
    }

    #[test]
    fn debug_hides_token() {
        let client = Client::with_token("super-secret").unwrap();
        assert!(!format!("{:?}", client).contains("super-secret"));
    }

    #[test]
    fn truncate_long_body() {
        let body = "x".repeat(2500);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
        assert_eq!(truncated.len(), 2000 + "...[truncated]".len());
        assert_eq!(truncate_body("short"), "short");
    }
}
