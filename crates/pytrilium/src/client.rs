//! The Trilium client, its builder and the request dispatcher.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::instrument::WithSubscriber;
use tracing::{Dispatch, debug, warn};

use crate::actions::{
    AttachmentActions, AttributeActions, AuthActions, BranchActions, CalendarActions, NoteActions,
};
use crate::error::{Error, Result};
use crate::logging::LogConfig;
use crate::request::RequestBody;
use crate::response::ApiResponse;
use crate::retry::RetryPolicy;
use crate::session::Session;
use crate::types::AppInfo;
use crate::url::normalize_base_url;

/// Default URL of a local Trilium server.
const DEFAULT_URL: &str = "http://localhost:8080";

/// Endpoint hit by the liveness probe.
const PROBE_ENDPOINT: &str = "/app-info";

/// The main client for the Trilium ETAPI.
///
/// A client only exists once its URL and credential have been checked
/// against the server; see [`ClientBuilder::build()`].
///
/// # Example
///
/// ```no_run
/// use pytrilium::TriliumClient;
///
/// # async fn example() -> pytrilium::Result<()> {
/// let client = TriliumClient::builder()
///     .url("https://trilium.example.com")
///     .token("my-etapi-token")
///     .build()
///     .await?;
///
/// let root = client.notes().get("root").await?;
/// println!("root has {} children", root.child_note_ids.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TriliumClient {
    session: Session,
    base_url: String,
    dispatch: Option<Dispatch>,
}

impl TriliumClient {
    /// Create a builder for client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The normalized base URL, ending in `/etapi`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The credential currently sent in the `Authorization` header.
    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    /// Replace the credential. Every later request carries the new token.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.session.set_token(token.into());
    }

    /// Exchange a password for an ETAPI token and start using it.
    pub async fn login(&mut self, password: &str) -> Result<()> {
        let token = self.auth().login(password).await?;
        self.set_token(token);
        Ok(())
    }

    /// Access note operations.
    pub fn notes(&self) -> NoteActions<'_> {
        NoteActions { client: self }
    }

    /// Access branch operations.
    pub fn branches(&self) -> BranchActions<'_> {
        BranchActions { client: self }
    }

    /// Access attribute operations.
    pub fn attributes(&self) -> AttributeActions<'_> {
        AttributeActions { client: self }
    }

    /// Access attachment operations.
    pub fn attachments(&self) -> AttachmentActions<'_> {
        AttachmentActions { client: self }
    }

    /// Access calendar and inbox lookups.
    pub fn calendar(&self) -> CalendarActions<'_> {
        CalendarActions { client: self }
    }

    /// Access login and logout.
    pub fn auth(&self) -> AuthActions<'_> {
        AuthActions { client: self }
    }

    /// Server version and build information.
    pub async fn app_info(&self) -> Result<AppInfo> {
        self.invoke(Method::GET, PROBE_ENDPOINT, RequestBody::Empty, &[])
            .await
    }

    /// Send a request to `endpoint`, relative to the base URL.
    ///
    /// The status code is not turned into an error: anything outside
    /// [`VALID_RESPONSE_CODES`](crate::VALID_RESPONSE_CODES) is logged as a
    /// warning and the response is returned so the caller can inspect it.
    /// Transient failures are retried by the session before this returns.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pytrilium::{Method, RequestBody, TriliumClient};
    ///
    /// # async fn example(client: TriliumClient) -> pytrilium::Result<()> {
    /// let response = client
    ///     .request(Method::GET, "/notes", RequestBody::Empty, &[("search", "#todo")])
    ///     .await?;
    /// if !response.is_valid() {
    ///     eprintln!("search failed with {}", response.status());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: RequestBody,
        query: &[(&str, &str)],
    ) -> Result<ApiResponse> {
        let request = self.dispatch_request(method, endpoint, body, query);
        match &self.dispatch {
            Some(dispatch) => request.with_subscriber(dispatch.clone()).await,
            None => request.await,
        }
    }

    /// Shorthand for a GET without body or query.
    pub async fn get(&self, endpoint: &str) -> Result<ApiResponse> {
        self.request(Method::GET, endpoint, RequestBody::Empty, &[])
            .await
    }

    /// Send a request and decode a JSON body, failing on a non-valid status.
    pub(crate) async fn invoke<R>(
        &self,
        method: Method,
        endpoint: &str,
        body: RequestBody,
        query: &[(&str, &str)],
    ) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.request(method, endpoint, body, query)
            .await?
            .error_for_status()?
            .json()
    }

    /// Send a GET and return the body as text, failing on a non-valid status.
    pub(crate) async fn invoke_text(&self, endpoint: &str) -> Result<String> {
        let response = self.get(endpoint).await?.error_for_status()?;
        Ok(response.text().into_owned())
    }

    /// Send a GET and return the raw body, failing on a non-valid status.
    pub(crate) async fn invoke_bytes(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<u8>> {
        let response = self
            .request(Method::GET, endpoint, RequestBody::Empty, query)
            .await?
            .error_for_status()?;
        Ok(response.into_bytes())
    }

    async fn dispatch_request(
        &self,
        method: Method,
        endpoint: &str,
        body: RequestBody,
        query: &[(&str, &str)],
    ) -> Result<ApiResponse> {
        let url = self.endpoint_url(endpoint);
        debug!(%method, url = %url, "sending request");

        let response = self.session.send(method.clone(), &url, &body, query).await?;
        let response = ApiResponse::read(response).await?;

        if !response.is_valid() {
            warn!(
                %method,
                url = %url,
                status = response.status().as_u16(),
                body = %response.text(),
                "possible invalid response code"
            );
        }
        Ok(response)
    }

    /// The dispatch this client logs to, if one was configured.
    pub(crate) fn dispatch(&self) -> Option<&Dispatch> {
        self.dispatch.as_ref()
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        if endpoint.is_empty() || endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }

    /// Confirm the URL and credential by calling `/app-info`.
    async fn probe(&self) -> Result<()> {
        let response = self.get(PROBE_ENDPOINT).await?;
        if response.is_valid() {
            debug!(url = %self.base_url, "liveness probe succeeded");
            return Ok(());
        }

        let status = response.status();
        let body = response.text().into_owned();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Err(Error::Authentication {
                status: status.as_u16(),
                body,
            })
        } else {
            Err(Error::Probe {
                status: status.as_u16(),
                body,
            })
        }
    }
}

/// Builder for creating a [`TriliumClient`].
///
/// Either a token or a password is required. When only a password is given,
/// `build()` logs in first and uses the returned token.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use pytrilium::{RetryPolicy, TriliumClient};
///
/// # async fn example() -> pytrilium::Result<()> {
/// let client = TriliumClient::builder()
///     .url("http://localhost:8080")
///     .password("hunter2")
///     .debug(true)
///     .log_file("pytrilium.log")
///     .retry_policy(RetryPolicy::default().max_retries(2))
///     .timeout(Duration::from_secs(30))
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ClientBuilder {
    base_url: String,
    token: Option<String>,
    password: Option<String>,
    log: LogConfig,
    log_dispatch: Option<Dispatch>,
    retry: RetryPolicy,
    timeout: Option<Duration>,
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("log", &self.log)
            .field("log_dispatch", &self.log_dispatch.is_some())
            .field("retry", &self.retry)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            token: None,
            password: None,
            log: LogConfig::default(),
            log_dispatch: None,
            retry: RetryPolicy::default(),
            timeout: None,
        }
    }

    /// Set the Trilium URL.
    ///
    /// Must include `http://` or `https://`. `/etapi` is appended when
    /// missing. Defaults to `http://localhost:8080`.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the ETAPI token, found in Trilium under Options > ETAPI.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the password to log in with when no token is given.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Log at DEBUG instead of INFO.
    pub fn debug(mut self, debug: bool) -> Self {
        self.log = self.log.debug(debug);
        self
    }

    /// Also append log records to a file.
    pub fn log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log = self.log.file(path);
        self
    }

    /// Send this client's log records to `dispatch`.
    ///
    /// Takes precedence over [`debug()`](Self::debug) and
    /// [`log_file()`](Self::log_file).
    pub fn log_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.log_dispatch = Some(dispatch);
        self
    }

    /// Replace the retry policy.
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    /// Set a request timeout. Without one, the transport default applies.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Build the client and verify it against the server.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidUrl`] if the URL cannot be normalized
    /// - [`Error::MissingCredential`] if neither token nor password is set
    /// - [`Error::Authentication`] if the password or token is rejected
    /// - [`Error::Probe`] if the liveness probe returns any other
    ///   non-valid status
    /// - any error from the login exchange
    pub async fn build(self) -> Result<TriliumClient> {
        let base_url = normalize_base_url(&self.base_url)?;
        if self.token.is_none() && self.password.is_none() {
            return Err(Error::MissingCredential);
        }

        let dispatch = match self.log_dispatch {
            Some(dispatch) => Some(dispatch),
            None if self.log.is_debug() || self.log.log_file().is_some() => {
                Some(self.log.build_dispatch()?)
            }
            None => None,
        };

        let session = Session::new(self.token.clone(), self.retry, self.timeout)?;
        let mut client = TriliumClient {
            session,
            base_url,
            dispatch,
        };

        if let (None, Some(password)) = (&self.token, &self.password) {
            client.login(password).await.map_err(|e| match e {
                Error::Status {
                    status: status @ (401 | 403),
                    body,
                } => Error::Authentication { status, body },
                other => other,
            })?;
        }

        client.probe().await?;
        Ok(client)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
