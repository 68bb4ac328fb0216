use clap::Parser;
use std::io::{self, Write};

mod cli_args;
mod cli_command;
mod modules;

use crate::cli_args::*;
use crate::cli_command::handle_command;
use crate::modules::auth::{handle_login, handle_logout};
use crate::modules::auth::{load_session, store_session, AuthSession, SessionCredentials};
use crate::modules::shared::confirm_for;
use crate::modules::system::CommandContext;
use crate::modules::system::{
    ensure_secure_addr, handle_config_command, handle_server_command, load_config, resolve_addr,
    resolve_context_name, save_config,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub(crate) const DEFAULT_ADDR: &str = "https://127.0.0.1:8000";
pub(crate) const DEFAULT_CONTEXT: &str = "default";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let client = reqwest::Client::builder()
        .danger_accept_invalid_certs(cli.insecure)
        .build()?;
    let mut config = load_config()?;
    let addr_arg = cli.addr.clone();
    let context_arg = cli.context.clone();
    let command = cli.command;

    match command {
        Command::Config(args) => {
            handle_config_command(args, &mut config)?;
            save_config(&config)?;
        }
        Command::Login(args) => {
            handle_login(
                args,
                addr_arg,
                context_arg,
                cli.insecure,
                &client,
                &mut config,
            )
            .await?;
            save_config(&config)?;
        }
        Command::Logout(args) => {
            handle_logout(
                args,
                addr_arg,
                context_arg,
                cli.insecure,
                &client,
                &mut config,
            )
            .await?;
            save_config(&config)?;
        }
        Command::Server(args) => {
            let context_name = resolve_context_name(context_arg, &config);
            let addr = resolve_addr(addr_arg, &context_name, &config);
            handle_server_command(args, addr, cli.insecure, &client).await?;
        }
        command => {
            let context_name = resolve_context_name(context_arg, &config);
            let addr = resolve_addr(addr_arg, &context_name, &config);
            ensure_secure_addr(&addr, cli.insecure)?;

            // A token passed on the command line is never written back to the keyring.
            let (credentials, from_store) = match cli.token {
                Some(token) => (SessionCredentials::with_access_token(token), false),
                None => (load_session(&context_name)?, true),
            };
            debug!(context = %context_name, addr = %addr, from_store, "session loaded");

            let mut ctx = CommandContext {
                session: AuthSession::new(client.clone(), addr, credentials, cli.insecure),
                context_name,
                config: &mut config,
                confirm: confirm_for(cli.yes),
            };

            let result = handle_command(command, &mut ctx).await;
            if from_store && ctx.session.is_dirty() {
                store_session(&ctx.context_name, ctx.session.credentials())?;
            }
            save_config(ctx.config)?;
            result?;
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

pub(crate) fn prompt_line(prompt: &str) -> anyhow::Result<String> {
    let mut input = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub(crate) fn prompt_password(prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let password = rpassword::read_password()?;
    if password.trim().is_empty() {
        anyhow::bail!("password is required");
    }
    Ok(password)
}
