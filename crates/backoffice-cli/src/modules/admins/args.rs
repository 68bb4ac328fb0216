use clap::{Args, Subcommand};

use crate::modules::shared::args::OutputFormat;

#[derive(Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommand,
}

#[derive(Subcommand)]
pub enum AdminCommand {
    #[command(about = "List admins")]
    List(AdminListArgs),
    #[command(about = "Show one admin")]
    Get(AdminGetArgs),
    #[command(about = "Show one admin by name")]
    GetByName(AdminGetByNameArgs),
    #[command(about = "Create an admin")]
    Create(AdminCreateArgs),
    #[command(about = "Update an admin")]
    Update(AdminUpdateArgs),
    #[command(about = "Delete an admin after confirmation")]
    Delete(AdminDeleteArgs),
    #[command(about = "Flip an admin between enabled and disabled")]
    ToggleStatus(AdminToggleStatusArgs),
    #[command(about = "Check whether an admin name is taken")]
    Exists(AdminExistsArgs),
}

#[derive(Args)]
pub struct AdminListArgs {
    #[arg(long)]
    pub enabled_only: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct AdminGetArgs {
    pub id: i64,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct AdminGetByNameArgs {
    pub name: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct AdminCreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub disabled: bool,
    #[arg(long = "role", help = "Role id (repeatable)")]
    pub roles: Vec<i64>,
}

#[derive(Args)]
pub struct AdminUpdateArgs {
    pub id: i64,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub enabled: Option<bool>,
}

#[derive(Args)]
pub struct AdminDeleteArgs {
    pub id: i64,
}

#[derive(Args)]
pub struct AdminToggleStatusArgs {
    pub name: String,
}

#[derive(Args)]
pub struct AdminExistsArgs {
    pub name: String,
}
