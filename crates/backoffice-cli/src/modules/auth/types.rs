use std::fmt;

use reqwest::header::HeaderMap;
use reqwest::Method;

use backoffice_core::LOGIN_PATH;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionCredentials {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl SessionCredentials {
    pub fn new(access_token: Option<String>, refresh_token: Option<String>) -> Self {
        Self {
            access_token: access_token.filter(|token| !token.trim().is_empty()),
            refresh_token: refresh_token.filter(|token| !token.trim().is_empty()),
        }
    }

    pub fn with_access_token(access_token: impl Into<String>) -> Self {
        Self::new(Some(access_token.into()), None)
    }

    pub fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.refresh_token.is_none()
    }

    pub fn clear(&mut self) {
        self.access_token = None;
        self.refresh_token = None;
    }
}

#[derive(Debug, Clone)]
pub enum RequestBody {
    Json(serde_json::Value),
    Form(Vec<(String, String)>),
}

#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<RequestBody>,
    pub headers: HeaderMap,
    /// Public calls never trigger a refresh or a redirect.
    pub public: bool,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            body: None,
            headers: HeaderMap::new(),
            public: false,
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn json<T: serde::Serialize>(method: Method, payload: &T) -> anyhow::Result<Self> {
        Ok(Self::new(method).with_body(RequestBody::Json(serde_json::to_value(payload)?)))
    }

    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn public(mut self) -> Self {
        self.public = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectReason {
    MissingAccessToken,
    MissingRefreshToken,
    RefreshRejected(u16),
    InvalidRefreshResponse,
    InvalidAccessToken,
    Unauthorized,
    Network(String),
}

impl fmt::Display for RedirectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAccessToken => f.write_str("not logged in"),
            Self::MissingRefreshToken => {
                f.write_str("session expired and no refresh token is stored")
            }
            Self::RefreshRejected(status) => write!(f, "token refresh rejected ({status})"),
            Self::InvalidRefreshResponse => f.write_str("token refresh returned an invalid body"),
            Self::InvalidAccessToken => f.write_str("stored access token is not usable"),
            Self::Unauthorized => f.write_str("refreshed token was rejected"),
            Self::Network(err) => write!(f, "request failed: {err}"),
        }
    }
}

/// Terminal navigation to the login surface. Credentials are already cleared when one is issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub location: String,
    pub reason: RedirectReason,
}

impl Redirect {
    pub fn to_login(reason: RedirectReason) -> Self {
        Self {
            location: LOGIN_PATH.to_string(),
            reason,
        }
    }
}

impl fmt::Display for Redirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; run `backoffice login`", self.reason)
    }
}

#[derive(Debug)]
pub enum RequestOutcome {
    Response(reqwest::Response),
    Redirect(Redirect),
}
