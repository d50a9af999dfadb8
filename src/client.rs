//! Main TcgClient

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::error::Error;
use crate::query::QueryBuilder;
use crate::query::RequestSpec;
use crate::registry::ModelRegistry;
use crate::response::Envelope;
use crate::response::decode_json;

/// Base URL of the hosted service.
pub const DEFAULT_BASE_URL: &str = "https://api.pokemontcg.io/v2/";

/// Environment variable [`TcgClient::from_env`] reads the API key from.
pub const API_KEY_ENV: &str = "POKEMONTCG_API_KEY";

const API_KEY_HEADER: &str = "X-Api-Key";

/// Client for the Pokémon TCG API.
///
/// The client is cheap to clone (uses `Arc` internally) and can be shared
/// across tasks safely. Each call to [`cards`](TcgClient::cards),
/// [`sets`](TcgClient::sets), or [`resource`](TcgClient::resource) hands out
/// a fresh query builder, so concurrent queries never share state.
///
/// # Example
///
/// ```ignore
/// use pokemon_tcg::TcgClient;
/// use pokemon_tcg::query::Predicate;
///
/// let client = TcgClient::from_env();
/// let card = client.cards().find("xy7-54").await?;
///
/// let page = client
///     .cards()
///     .filter("types", Predicate::or(["grass", "lightning"]))
///     .page_size(10)
///     .all()
///     .await?;
/// ```
#[derive(Clone)]
pub struct TcgClient {
    inner: Arc<TcgClientInner>,
}

struct TcgClientInner {
    base_url: String,
    api_key: Option<String>,
    http_client: Client,
    timeout: Option<Duration>,
    registry: ModelRegistry,
}

impl TcgClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> TcgClientBuilder {
        TcgClientBuilder::new()
    }

    /// Creates a client against the hosted service with no API key.
    ///
    /// Anonymous requests work but get tighter rate limits; prefer
    /// [`from_env`](TcgClient::from_env) or an explicit key for real use.
    pub fn new() -> Self {
        Self::with_key(None)
    }

    /// Creates a client against the hosted service, reading the API key from
    /// the `POKEMONTCG_API_KEY` environment variable when it is set.
    pub fn from_env() -> Self {
        Self::with_key(std::env::var(API_KEY_ENV).ok())
    }

    fn with_key(api_key: Option<String>) -> Self {
        Self {
            inner: Arc::new(TcgClientInner {
                base_url: DEFAULT_BASE_URL.to_string(),
                api_key,
                http_client: Client::new(),
                timeout: None,
                registry: ModelRegistry::standard(),
            }),
        }
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub(crate) fn registry(&self) -> &ModelRegistry {
        &self.inner.registry
    }

    /// Starts a query against the `cards` resource.
    pub fn cards(&self) -> QueryBuilder<'_> {
        self.resource("cards")
    }

    /// Starts a query against the `sets` resource.
    pub fn sets(&self) -> QueryBuilder<'_> {
        self.resource("sets")
    }

    /// Starts a query against an arbitrary resource.
    ///
    /// Records of resources without a registered model resolve to `None`;
    /// register a decoder on the [`ModelRegistry`] to type them.
    pub fn resource(&self, name: impl Into<String>) -> QueryBuilder<'_> {
        QueryBuilder::new(self, name.into())
    }

    /// Fetches the list of energy types the service knows.
    pub async fn types(&self) -> Result<Vec<String>, Error> {
        self.string_list("types").await
    }

    /// Fetches the list of card subtypes the service knows.
    pub async fn subtypes(&self) -> Result<Vec<String>, Error> {
        self.string_list("subtypes").await
    }

    /// Fetches the list of card supertypes the service knows.
    pub async fn supertypes(&self) -> Result<Vec<String>, Error> {
        self.string_list("supertypes").await
    }

    /// Fetches the list of rarities the service knows.
    pub async fn rarities(&self) -> Result<Vec<String>, Error> {
        self.string_list("rarities").await
    }

    async fn string_list(&self, resource: &str) -> Result<Vec<String>, Error> {
        let request = RequestSpec::get(resource);
        let response = self.send(&request).await?;
        let envelope: Envelope<Vec<String>> = decode_json(response).await?;
        Ok(envelope.data)
    }

    /// Executes one compiled request.
    ///
    /// Success statuses return the raw response for the caller to decode;
    /// everything else becomes an [`Error::Http`] carrying the body text.
    pub(crate) async fn send(&self, request: &RequestSpec) -> Result<reqwest::Response, Error> {
        let url = request.url(&self.inner.base_url);
        tracing::debug!(method = %request.method(), %url, "sending request");

        let mut outbound = self.inner.http_client.request(request.method().clone(), &url);

        if let Some(key) = &self.inner.api_key {
            outbound = outbound.header(API_KEY_HEADER, key);
        }

        if let Some(timeout) = self.inner.timeout {
            outbound = outbound.timeout(timeout);
        }

        let response = outbound.send().await?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), %url, "received response");

        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Error::http(status.as_u16(), body))
        }
    }
}

impl Default for TcgClient {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for constructing a [`TcgClient`].
///
/// Everything has a default: the hosted base URL, no API key, no request
/// timeout, a fresh HTTP client, and the standard model registry.
///
/// # Example
///
/// ```ignore
/// let client = TcgClient::builder()
///     .api_key("my-key")
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub struct TcgClientBuilder {
    base_url: String,
    api_key: Option<String>,
    timeout: Option<Duration>,
    http_client: Option<Client>,
    registry: Option<ModelRegistry>,
}

impl TcgClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: None,
            http_client: None,
            registry: None,
        }
    }

    /// Sets the base URL, for self-hosted instances or test servers.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the API key sent in the `X-Api-Key` header.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Replaces the standard model registry.
    pub fn registry(mut self, registry: ModelRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Builds the [`TcgClient`], validating the base URL.
    pub fn build(self) -> Result<TcgClient, Error> {
        Url::parse(&self.base_url)?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => Client::builder().build()?,
        };

        Ok(TcgClient {
            inner: Arc::new(TcgClientInner {
                base_url: self.base_url,
                api_key: self.api_key,
                http_client,
                timeout: self.timeout,
                registry: self.registry.unwrap_or_default(),
            }),
        })
    }
}

impl Default for TcgClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
