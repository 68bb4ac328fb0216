use reqwest::Method;

use crate::cli_args::{ServerArgs, ServerCommand};
use crate::modules::auth::{AuthSession, RequestOptions, SessionCredentials};
use crate::modules::system::config::ensure_secure_addr;
use crate::modules::system::http::{expect_response, print_json_response};

pub(crate) async fn handle_server_command(
    args: ServerArgs,
    addr: String,
    allow_insecure: bool,
    client: &reqwest::Client,
) -> anyhow::Result<()> {
    ensure_secure_addr(&addr, allow_insecure)?;
    let mut session = AuthSession::new(
        client.clone(),
        addr,
        SessionCredentials::default(),
        allow_insecure,
    );
    let endpoint = match args.command {
        ServerCommand::Health => "/health",
        ServerCommand::Info => "/info",
    };
    let options = RequestOptions::new(Method::GET).public();
    let response = expect_response(session.authorized_request(endpoint, options).await?)?;
    print_json_response(response).await
}
