//! The AniList client, its builder, and request dispatch.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::actions::{ListActions, MediaActions, PeopleActions, StudioActions, UserActions};
use crate::auth::AuthContext;
use crate::error::{Error, Result};
use crate::query::{self, Identifier, Pagination, QueryRequest, ResourceKind, SearchKind};
use crate::request::{GraphqlRequest, GraphqlResponse};
use crate::types::{QueryResult, SearchPage};

/// The public AniList GraphQL endpoint.
pub const DEFAULT_URL: &str = "https://graphql.anilist.co";

const USER_AGENT: &str = concat!("anilist-rs/", env!("CARGO_PKG_VERSION"));

/// The main client for the AniList GraphQL API.
///
/// Each call builds one query, sends exactly one POST, and returns the
/// unwrapped root object or a single [`Error`]. There is no caching, retry,
/// or queuing; concurrent calls are independent and only share the
/// read-only [`AuthContext`].
///
/// # Example
///
/// ```no_run
/// use anilist::AniListClient;
///
/// # async fn example() -> anilist::Result<()> {
/// let client = AniListClient::new();
///
/// let bebop = client.media().anime(1).await?;
/// println!("{}", bebop["title"]["romaji"]);
///
/// let page = client.search("manga", "Berserk", None, None).await?;
/// println!("{} results", page["pageInfo"]["total"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AniListClient {
    http_client: Client,
    endpoint: String,
    auth: AuthContext,
}

impl AniListClient {
    /// Create an anonymous client for the public endpoint.
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
            endpoint: DEFAULT_URL.to_string(),
            auth: AuthContext::anonymous(),
        }
    }

    /// Create a client that authenticates every request with `token`.
    ///
    /// A blank token gives an anonymous client.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            auth: AuthContext::bearer(token),
            ..Self::new()
        }
    }

    /// Create a builder for custom client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The credential this client sends.
    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    /// The GraphQL endpoint requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Access anime and manga lookups.
    pub fn media(&self) -> MediaActions<'_> {
        MediaActions { client: self }
    }

    /// Access character and staff lookups.
    pub fn people(&self) -> PeopleActions<'_> {
        PeopleActions { client: self }
    }

    /// Access studio lookups.
    pub fn studios(&self) -> StudioActions<'_> {
        StudioActions { client: self }
    }

    /// Access user profiles, statistics and the authenticated viewer.
    pub fn users(&self) -> UserActions<'_> {
        UserActions { client: self }
    }

    /// Access users' anime and manga lists.
    pub fn lists(&self) -> ListActions<'_> {
        ListActions { client: self }
    }

    /// Fetch one entity of a kind named at runtime.
    ///
    /// `kind` is parsed with [`ResourceKind::from_str`](std::str::FromStr),
    /// e.g. `"anime"`, `"studio"` or `"manga-list"`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for an unknown kind or a bad identifier,
    /// before any request is sent.
    ///
    /// ```no_run
    /// # use anilist::AniListClient;
    /// # async fn example() -> anilist::Result<()> {
    /// let client = AniListClient::new();
    /// let studio = client.fetch("studio", "Madhouse").await?;
    /// let anime = client.fetch("anime", 1).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch(&self, kind: &str, ident: impl Into<Identifier>) -> Result<QueryResult> {
        let kind: ResourceKind = kind.parse()?;
        self.lookup(kind, ident.into()).await
    }

    /// Search AniList.
    ///
    /// `kind` is one of `anime`, `manga`, `character`, `staff` or `studio`.
    /// `page` defaults to 1 and `amount` to 5; AniList caps `amount` at 25.
    /// Returns the `Page` object, carrying `pageInfo` and the result list.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for an unsupported kind, a blank term, or a
    /// zero page/amount, before any request is sent.
    pub async fn search(
        &self,
        kind: &str,
        term: &str,
        page: Option<u32>,
        amount: Option<u32>,
    ) -> Result<QueryResult> {
        let kind: SearchKind = kind.parse()?;
        let request = query::search(kind, term, Pagination::new(page, amount))?;
        self.execute(&request).await
    }

    /// Like [`search`](Self::search), split into [`SearchPage`].
    pub async fn search_page(
        &self,
        kind: &str,
        term: &str,
        page: Option<u32>,
        amount: Option<u32>,
    ) -> Result<SearchPage> {
        let page = self.search(kind, term, page, amount).await?;
        SearchPage::from_page(page)
    }

    /// Send a request and return the unwrapped root object.
    ///
    /// # Errors
    ///
    /// - [`Error::Transport`] when the request fails or a non-2xx status
    ///   arrives without a GraphQL error envelope
    /// - [`Error::Api`] when the response carries a non-empty `errors` array,
    ///   even if some `data` came back as well
    /// - [`Error::MalformedResponse`] when the body is not a GraphQL envelope
    ///   or lacks the expected root field
    pub async fn execute(&self, request: &QueryRequest) -> Result<QueryResult> {
        self.dispatch(request, None).await
    }

    /// Like [`execute`](Self::execute), abandoning the call after `deadline`.
    ///
    /// The deadline is handed to the HTTP transport; an expired call fails
    /// with [`Error::Transport`].
    pub async fn execute_with_deadline(
        &self,
        request: &QueryRequest,
        deadline: Option<Duration>,
    ) -> Result<QueryResult> {
        self.dispatch(request, deadline).await
    }

    /// Like [`execute`](Self::execute), deserializing the root into `T`.
    ///
    /// # Errors
    ///
    /// As for [`execute`](Self::execute); a root that does not fit `T` is an
    /// [`Error::MalformedResponse`].
    pub async fn execute_as<T>(&self, request: &QueryRequest) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let value = self.execute(request).await?;
        serde_json::from_value(value).map_err(|e| {
            Error::MalformedResponse(format!("data.{} has an unexpected shape: {e}", request.root()))
        })
    }

    /// Build and send a lookup.
    pub(crate) async fn lookup(&self, kind: ResourceKind, ident: Identifier) -> Result<QueryResult> {
        let request = query::lookup(kind, &ident)?;
        self.execute(&request).await
    }

    /// Perform the round-trip and normalize the outcome.
    async fn dispatch(&self, request: &QueryRequest, deadline: Option<Duration>) -> Result<QueryResult> {
        debug!(
            root = request.root(),
            auth = ?self.auth.mode(),
            variables = ?request.variables().keys().collect::<Vec<_>>(),
            "Sending GraphQL query"
        );

        let body = GraphqlRequest {
            query: request.document(),
            variables: request.variables(),
        };

        let mut http_request = self
            .http_client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(&body);
        if let Some(token) = self.auth.token() {
            http_request = http_request.bearer_auth(token);
        }
        if let Some(deadline) = deadline {
            http_request = http_request.timeout(deadline);
        }

        let response = http_request.send().await.map_err(Error::transport)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(Error::transport)?;
        debug!(status = status.as_u16(), bytes = bytes.len(), "Received GraphQL response");

        let mut envelope: GraphqlResponse = match serde_json::from_slice(&bytes) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => return Err(Error::status_only(status.as_u16())),
            Err(e) => {
                return Err(Error::MalformedResponse(format!(
                    "response is not a GraphQL envelope: {e}"
                )));
            }
        };

        if let Some(errors) = envelope.take_errors() {
            warn!(
                status = status.as_u16(),
                count = errors.len(),
                first = %errors[0].message,
                "AniList returned errors"
            );
            return Err(Error::Api {
                status: status.as_u16(),
                errors,
            });
        }

        if !status.is_success() {
            return Err(Error::status_only(status.as_u16()));
        }

        envelope.take_root(request.root()).ok_or_else(|| {
            warn!(root = request.root(), "Response is missing the expected root field");
            Error::MalformedResponse(format!("response has no data.{}", request.root()))
        })
    }
}

impl Default for AniListClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating a customized [`AniListClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use anilist::AniListClient;
///
/// # fn example() -> anilist::Result<()> {
/// let client = AniListClient::builder()
///     .token("my-access-token")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    token: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http_client: Option<Client>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            token: None,
            timeout: None,
            user_agent: None,
            http_client: None,
        }
    }

    /// Set the GraphQL endpoint.
    ///
    /// Defaults to `https://graphql.anilist.co`.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the bearer token.
    ///
    /// Without one the client is anonymous and private data is refused by
    /// the server.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set an overall timeout for every request.
    ///
    /// No timeout is applied by default.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Override the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a preconfigured reqwest client.
    ///
    /// [`timeout`](Self::timeout) and [`user_agent`](Self::user_agent) are
    /// ignored when a client is supplied.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for an empty URL, a token that cannot be
    /// sent in an HTTP header, or settings the HTTP client rejects.
    pub fn build(self) -> Result<AniListClient> {
        if self.base_url.trim().is_empty() {
            return Err(Error::invalid("endpoint URL must not be empty"));
        }

        let auth = AuthContext::new(self.token);
        if let Some(token) = auth.token() {
            // Never echo the token in the error.
            HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
                Error::invalid("token contains characters not allowed in an HTTP header")
            })?;
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder()
                    .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build().map_err(Error::transport)?
            }
        };

        Ok(AniListClient {
            http_client,
            endpoint: self.base_url,
            auth,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
