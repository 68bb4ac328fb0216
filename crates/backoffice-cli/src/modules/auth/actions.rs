use reqwest::Method;
use tracing::{info, warn};

use backoffice_core::{TokenRequest, CURRENT_USER_PATH};

use crate::cli_args::{LoginArgs, LogoutArgs};
use crate::modules::auth::http::{request_token_pair, revoke_refresh_token};
use crate::modules::auth::{delete_session, load_session, store_session};
use crate::modules::auth::{AuthSession, RequestOptions, SessionCredentials};
use crate::modules::system::http::{expect_response, print_json_response};
use crate::modules::system::{
    ensure_secure_addr, resolve_addr, resolve_context_name, CliConfig, CliContext, CommandContext,
};
use crate::{prompt_line, prompt_password};

/// Exchanges credentials for a token pair and installs it in the session.
pub(crate) async fn login(session: &mut AuthSession, request: &TokenRequest) -> anyhow::Result<()> {
    let tokens = request_token_pair(session, request).await?;
    session.replace_credentials(SessionCredentials::new(
        Some(tokens.access_token),
        Some(tokens.refresh_token),
    ));
    info!(username = %request.username, "logged in");
    Ok(())
}

/// Revokes the refresh token if there is one; local credentials are cleared either way.
pub(crate) async fn logout(session: &mut AuthSession) {
    if let Some(refresh_token) = session.credentials().refresh_token.clone() {
        if let Err(err) = revoke_refresh_token(session, &refresh_token).await {
            warn!("logout request failed: {err}");
        }
    }
    session.clear();
}

pub(crate) async fn handle_login(
    args: LoginArgs,
    addr_arg: Option<String>,
    context_arg: Option<String>,
    allow_insecure: bool,
    client: &reqwest::Client,
    config: &mut CliConfig,
) -> anyhow::Result<()> {
    let context_name = resolve_context_name(args.context.or(context_arg), config);
    let addr = resolve_addr(addr_arg, &context_name, config);
    ensure_secure_addr(&addr, allow_insecure)?;

    let username = match args.username {
        Some(username) => username,
        None => prompt_line("Username: ")?,
    };
    if username.trim().is_empty() {
        anyhow::bail!("username is required");
    }
    let password = match args.password {
        Some(password) => password,
        None => prompt_password("Password: ")?,
    };
    let request = TokenRequest {
        username: username.clone(),
        password,
        scope: args.scopes,
    };

    let mut session = AuthSession::new(
        client.clone(),
        addr.clone(),
        SessionCredentials::default(),
        allow_insecure,
    );
    login(&mut session, &request).await?;
    store_session(&context_name, session.credentials())?;

    let entry = config
        .contexts
        .entry(context_name.clone())
        .or_insert_with(|| CliContext {
            addr: addr.clone(),
            username: None,
        });
    entry.addr = addr;
    entry.username = Some(username.clone());
    config.current_context = Some(context_name);

    println!("Logged in as {username}");
    Ok(())
}

pub(crate) async fn handle_logout(
    args: LogoutArgs,
    addr_arg: Option<String>,
    context_arg: Option<String>,
    allow_insecure: bool,
    client: &reqwest::Client,
    config: &mut CliConfig,
) -> anyhow::Result<()> {
    let context_name = resolve_context_name(args.context.or(context_arg), config);
    let addr = resolve_addr(addr_arg, &context_name, config);
    let credentials = load_session(&context_name)?;

    let mut session = AuthSession::new(client.clone(), addr, credentials, allow_insecure);
    logout(&mut session).await;
    delete_session(&context_name)?;
    if let Some(context) = config.contexts.get_mut(&context_name) {
        context.username = None;
    }

    println!("Logged out");
    Ok(())
}

pub(crate) async fn handle_whoami(ctx: &mut CommandContext<'_>) -> anyhow::Result<()> {
    let outcome = ctx
        .session
        .authorized_request(CURRENT_USER_PATH, RequestOptions::new(Method::GET))
        .await?;
    print_json_response(expect_response(outcome)?).await
}
