use clap::{ArgAction, Args, Subcommand, ValueEnum};

use crate::modules::shared::args::OutputFormat;

#[derive(Args)]
pub struct ClientArgs {
    #[command(subcommand)]
    pub command: ClientCommand,
}

#[derive(Subcommand)]
pub enum ClientCommand {
    #[command(about = "List clients")]
    List(ClientListArgs),
    #[command(about = "Show one client")]
    Get(ClientGetArgs),
    #[command(about = "Create a client")]
    Create(ClientCreateArgs),
    #[command(about = "Update a client")]
    Update(ClientUpdateArgs),
    #[command(about = "Delete a client after confirmation")]
    Delete(ClientDeleteArgs),
    #[command(about = "Change only the name of a client")]
    Rename(ClientRenameArgs),
    #[command(about = "Enable or disable a client")]
    Status(ClientStatusArgs),
    #[command(about = "Move a client to another admin")]
    Transfer(ClientTransferArgs),
    #[command(about = "Find a client by exact name")]
    Search(ClientSearchArgs),
    #[command(about = "List the clients of one admin")]
    ByAdmin(ClientByAdminArgs),
    #[command(about = "Enable or disable all of your clients")]
    Bulk(ClientBulkArgs),
    #[command(about = "Check whether a client name is taken")]
    Exists(ClientExistsArgs),
}

#[derive(Args)]
pub struct ClientListArgs {
    #[arg(long, help = "Only clients owned by the current admin")]
    pub mine: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct ClientGetArgs {
    pub id: i64,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct ClientCreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub phones: Option<String>,
    #[arg(long)]
    pub disabled: bool,
    #[arg(long)]
    pub admin_id: Option<i64>,
}

#[derive(Args)]
pub struct ClientUpdateArgs {
    pub id: i64,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub phones: Option<String>,
    #[arg(long)]
    pub enabled: Option<bool>,
    #[arg(long)]
    pub admin_id: Option<i64>,
}

#[derive(Args)]
pub struct ClientDeleteArgs {
    pub id: i64,
}

#[derive(Args)]
pub struct ClientRenameArgs {
    pub id: i64,
    pub name: String,
}

#[derive(Args)]
pub struct ClientStatusArgs {
    pub id: i64,
    #[arg(long, action = ArgAction::Set)]
    pub enabled: bool,
}

#[derive(Args)]
pub struct ClientTransferArgs {
    pub id: i64,
    #[arg(long)]
    pub admin_id: i64,
}

#[derive(Args)]
pub struct ClientSearchArgs {
    pub name: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct ClientByAdminArgs {
    pub admin_id: i64,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BulkAction {
    Enable,
    Disable,
}

impl BulkAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enable => "enable",
            Self::Disable => "disable",
        }
    }
}

#[derive(Args)]
pub struct ClientBulkArgs {
    #[arg(value_enum)]
    pub action: BulkAction,
}

#[derive(Args)]
pub struct ClientExistsArgs {
    pub name: String,
}
