use clap::Args;

#[derive(Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long, env = "BACKOFFICE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
    #[arg(long = "scope", help = "Requested scope (repeatable)")]
    pub scopes: Vec<String>,
    #[arg(long)]
    pub context: Option<String>,
}

#[derive(Args)]
pub struct LogoutArgs {
    #[arg(long)]
    pub context: Option<String>,
}
