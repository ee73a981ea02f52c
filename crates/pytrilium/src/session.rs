//! The pooled HTTP session shared by every request.

use std::fmt;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Method, Response};
use tracing::debug;

use crate::error::{Error, Result};
use crate::request::RequestBody;
use crate::retry::RetryPolicy;

/// `User-Agent` sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// One connection pool plus the credential and retry policy that go with it.
#[derive(Clone)]
pub(crate) struct Session {
    http_client: Client,
    token: Option<String>,
    retry: RetryPolicy,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl Session {
    pub(crate) fn new(
        token: Option<String>,
        retry: RetryPolicy,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            token,
            retry,
        })
    }

    pub(crate) fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Replace the credential. The pool is kept.
    pub(crate) fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Send one logical request, retrying transient failures per the policy.
    ///
    /// Once the retry budget is spent the last response is returned as is,
    /// whatever its status.
    pub(crate) async fn send(
        &self,
        method: Method,
        url: &str,
        body: &RequestBody,
        query: &[(&str, &str)],
    ) -> Result<Response> {
        let mut retries = 0;
        loop {
            let attempt = self.build(method.clone(), url, body, query).send().await;

            let delay = match &attempt {
                Ok(response) if self.retry.should_retry_status(&method, response.status()) => Some(
                    self.retry
                        .retry_after(response.status(), response.headers())
                        .unwrap_or_else(|| self.retry.backoff(retries + 1)),
                ),
                Err(e) if self.retry.should_retry_error(&method, e) => {
                    Some(self.retry.backoff(retries + 1))
                }
                _ => None,
            };

            match delay {
                Some(delay) if retries < self.retry.retries() => {
                    retries += 1;
                    debug!(
                        %method,
                        url,
                        retry = retries,
                        max_retries = self.retry.retries(),
                        delay_ms = delay.as_millis() as u64,
                        "retrying request"
                    );
                    tokio::time::sleep(delay).await;
                }
                _ => {
                    return attempt.map_err(|e| {
                        if e.is_connect() {
                            Error::ConnectionRefused(url.to_string())
                        } else {
                            Error::Http(e)
                        }
                    });
                }
            }
        }
    }

    fn build(
        &self,
        method: Method,
        url: &str,
        body: &RequestBody,
        query: &[(&str, &str)],
    ) -> reqwest::RequestBuilder {
        let mut request = self.http_client.request(method, url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, token);
        }
        if let Some(content_type) = body.content_type() {
            request = request.header(CONTENT_TYPE, content_type);
        }
        if let Some(bytes) = body.to_bytes() {
            request = request.body(bytes);
        }
        request
    }
}
