use reqwest::{Method, StatusCode};

use backoffice_core::{LogoutRequest, TokenPair, TokenRequest, LOGOUT_PATH, TOKEN_PATH};

use crate::modules::auth::{AuthSession, RequestBody, RequestOptions};
use crate::modules::system::http::{error_message, expect_response};

pub(crate) async fn request_token_pair(
    session: &mut AuthSession,
    request: &TokenRequest,
) -> anyhow::Result<TokenPair> {
    let options = RequestOptions::new(Method::POST)
        .with_body(RequestBody::Form(request.form_fields()))
        .public();
    let response = expect_response(session.authorized_request(TOKEN_PATH, options).await?)?;
    if response.status() != StatusCode::OK {
        let status = response.status();
        let mut message = error_message(response).await;
        if message.trim().is_empty() {
            message = "Invalid credentials".to_string();
        }
        anyhow::bail!("Login failed: {status} {message}");
    }
    Ok(response.json::<TokenPair>().await?)
}

pub(crate) async fn revoke_refresh_token(
    session: &mut AuthSession,
    refresh_token: &str,
) -> anyhow::Result<()> {
    let payload = LogoutRequest {
        refresh_token: refresh_token.to_string(),
    };
    let options = RequestOptions::json(Method::POST, &payload)?.public();
    let response = expect_response(session.authorized_request(LOGOUT_PATH, options).await?)?;
    if !response.status().is_success() {
        let status = response.status();
        let message = error_message(response).await;
        anyhow::bail!("Logout failed: {status} {message}");
    }
    Ok(())
}
