use clap::{ArgAction, Parser, Subcommand};

pub use crate::modules::admins::args::*;
pub use crate::modules::auth::args::*;
pub use crate::modules::clients::args::*;
pub use crate::modules::system::args::*;

#[derive(Parser)]
#[command(name = "backoffice")]
#[command(about = "Backoffice admin CLI")]
pub struct Cli {
    #[arg(long, env = "BACKOFFICE_ADDR")]
    pub addr: Option<String>,
    #[arg(long, env = "BACKOFFICE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
    #[arg(long)]
    pub context: Option<String>,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[arg(long, help = "Allow http:// and invalid TLS certificates")]
    pub insecure: bool,
    #[arg(short, long, help = "Answer yes to confirmation prompts")]
    pub yes: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Exchange username and password for a session")]
    Login(LoginArgs),
    #[command(about = "Revoke the session and forget its tokens")]
    Logout(LogoutArgs),
    #[command(about = "Show the signed-in admin")]
    Whoami,
    Config(ConfigArgs),
    Server(ServerArgs),
    #[command(about = "Manage clients")]
    Clients(ClientArgs),
    #[command(about = "Manage admins")]
    Admins(AdminArgs),
}
