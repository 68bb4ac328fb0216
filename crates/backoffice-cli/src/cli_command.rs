use crate::cli_args::*;
use crate::modules::admins::handle_admin;
use crate::modules::auth::handle_whoami;
use crate::modules::clients::handle_client;
use crate::modules::system::CommandContext;

pub(crate) async fn handle_command(
    command: Command,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    match command {
        Command::Whoami => handle_whoami(ctx).await?,
        Command::Clients(args) => handle_client(args, ctx).await?,
        Command::Admins(args) => handle_admin(args, ctx).await?,
        Command::Config(_) | Command::Login(_) | Command::Logout(_) | Command::Server(_) => {
            unreachable!()
        }
    }

    Ok(())
}
