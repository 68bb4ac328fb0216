use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use tracing::{debug, info, warn};

use backoffice_core::{RefreshRequest, RefreshResponse, REFRESH_PATH};

use crate::modules::auth::types::{
    Redirect, RedirectReason, RequestBody, RequestOptions, RequestOutcome, SessionCredentials,
};

pub(crate) fn auth_headers(token: &str) -> anyhow::Result<HeaderMap> {
    if token.trim().is_empty() {
        anyhow::bail!("token is required (BACKOFFICE_TOKEN, --token, or `backoffice login`)");
    }
    let mut headers = HeaderMap::new();
    let value = HeaderValue::from_str(&format!("Bearer {token}"))?;
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}

/// Owns the credentials of one context and performs every call that needs them.
#[derive(Debug)]
pub struct AuthSession {
    client: reqwest::Client,
    addr: String,
    allow_insecure: bool,
    credentials: SessionCredentials,
    dirty: bool,
}

impl AuthSession {
    pub fn new(
        client: reqwest::Client,
        addr: impl Into<String>,
        credentials: SessionCredentials,
        allow_insecure: bool,
    ) -> Self {
        Self {
            client,
            addr: addr.into(),
            allow_insecure,
            credentials,
            dirty: false,
        }
    }

    pub fn credentials(&self) -> &SessionCredentials {
        &self.credentials
    }

    /// True once the credentials differ from what the session was created with.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn replace_credentials(&mut self, credentials: SessionCredentials) {
        self.credentials = credentials;
        self.dirty = true;
    }

    pub fn clear(&mut self) {
        if !self.credentials.is_empty() {
            self.credentials.clear();
            self.dirty = true;
        }
    }

    pub fn url(&self, endpoint: &str) -> String {
        let base = self.addr.trim_end_matches('/');
        if endpoint.starts_with('/') {
            format!("{base}{endpoint}")
        } else {
            format!("{base}/{endpoint}")
        }
    }

    /// Sends one logical request: try, refresh on 401, retry once, or redirect.
    pub async fn authorized_request(
        &mut self,
        endpoint: &str,
        options: RequestOptions,
    ) -> anyhow::Result<RequestOutcome> {
        let url = self.url(endpoint);
        if url.starts_with("http://") && !self.allow_insecure {
            anyhow::bail!("refusing to use http:// without --insecure");
        }

        if !options.public && self.credentials.access_token.is_none() {
            debug!(method = %options.method, url = %url, "no access token; request not sent");
            return Ok(self.redirect(RedirectReason::MissingAccessToken));
        }

        let sent = match self.send_once(&options, &url).await {
            Ok(sent) => sent,
            Err(reason) => return Ok(self.redirect(reason)),
        };
        let response = match sent {
            Ok(response) => response,
            Err(err) if options.public => return Err(err.into()),
            Err(err) => {
                warn!(method = %options.method, url = %url, "http request failed: {err}");
                return Ok(self.redirect(RedirectReason::Network(err.to_string())));
            }
        };
        if options.public || response.status() != StatusCode::UNAUTHORIZED {
            return Ok(RequestOutcome::Response(response));
        }

        let Some(refresh_token) = self.credentials.refresh_token.clone() else {
            return Ok(self.redirect(RedirectReason::MissingRefreshToken));
        };

        info!(
            method = %options.method,
            url = %url,
            "http request unauthorized; attempting token refresh"
        );
        if let Err(reason) = self.refresh(&refresh_token).await {
            return Ok(self.redirect(reason));
        }

        match self.send_once(&options, &url).await {
            Ok(Ok(response)) if response.status() == StatusCode::UNAUTHORIZED => {
                Ok(self.redirect(RedirectReason::Unauthorized))
            }
            Ok(Ok(response)) => Ok(RequestOutcome::Response(response)),
            Ok(Err(err)) => {
                warn!(method = %options.method, url = %url, "http retry failed: {err}");
                Ok(self.redirect(RedirectReason::Network(err.to_string())))
            }
            Err(reason) => Ok(self.redirect(reason)),
        }
    }

    /// Bearer header for the current token. A public call goes out without an unusable token.
    fn bearer_headers(&self, public: bool) -> Result<HeaderMap, RedirectReason> {
        let Some(token) = self.credentials.access_token.as_deref() else {
            return Ok(HeaderMap::new());
        };
        match auth_headers(token) {
            Ok(headers) => Ok(headers),
            Err(err) if public => {
                warn!("access token not attached: {err}");
                Ok(HeaderMap::new())
            }
            Err(err) => {
                warn!("access token unusable: {err}");
                Err(RedirectReason::InvalidAccessToken)
            }
        }
    }

    async fn send_once(
        &self,
        options: &RequestOptions,
        url: &str,
    ) -> Result<Result<reqwest::Response, reqwest::Error>, RedirectReason> {
        let mut headers = options.headers.clone();
        headers.extend(self.bearer_headers(options.public)?);
        let builder = self
            .client
            .request(options.method.clone(), url)
            .headers(headers);
        let builder = match &options.body {
            Some(RequestBody::Json(payload)) => builder.json(payload),
            Some(RequestBody::Form(fields)) => builder.form(fields),
            None => builder,
        };

        debug!(method = %options.method, url = %url, "http request");
        let start = std::time::Instant::now();
        let result = builder.send().await;
        if let Ok(response) = &result {
            debug!(
                method = %options.method,
                url = %url,
                status = %response.status(),
                elapsed_ms = start.elapsed().as_millis(),
                "http response"
            );
        }
        Ok(result)
    }

    async fn refresh(&mut self, refresh_token: &str) -> Result<(), RedirectReason> {
        let url = self.url(REFRESH_PATH);
        let payload = RefreshRequest {
            refresh_token: refresh_token.to_string(),
        };
        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|err| RedirectReason::Network(err.to_string()))?;
        if !response.status().is_success() {
            let status = response.status();
            warn!(url = %url, status = %status, "token refresh rejected");
            return Err(RedirectReason::RefreshRejected(status.as_u16()));
        }
        let auth: RefreshResponse = response.json().await.map_err(|err| {
            warn!(url = %url, "token refresh body invalid: {err}");
            RedirectReason::InvalidRefreshResponse
        })?;

        if let Err(err) = auth_headers(&auth.access_token) {
            warn!(url = %url, "token refresh returned an unusable access token: {err}");
            return Err(RedirectReason::InvalidRefreshResponse);
        }

        self.credentials.access_token = Some(auth.access_token);
        if let Some(rotated) = auth.refresh_token.filter(|token| !token.trim().is_empty()) {
            self.credentials.refresh_token = Some(rotated);
        }
        self.dirty = true;
        debug!(url = %url, "access token refreshed");
        Ok(())
    }

    fn redirect(&mut self, reason: RedirectReason) -> RequestOutcome {
        info!(reason = %reason, "redirecting to login");
        self.clear();
        RequestOutcome::Redirect(Redirect::to_login(reason))
    }
}
