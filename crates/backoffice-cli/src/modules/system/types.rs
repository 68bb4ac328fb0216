use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::modules::auth::AuthSession;
use crate::modules::shared::Confirm;

#[derive(Serialize, Deserialize, Default)]
pub struct CliConfig {
    #[serde(default)]
    pub current_context: Option<String>,
    #[serde(default)]
    pub contexts: HashMap<String, CliContext>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct CliContext {
    pub addr: String,
    #[serde(default)]
    pub username: Option<String>,
}

pub struct CommandContext<'a> {
    pub session: AuthSession,
    pub context_name: String,
    pub config: &'a mut CliConfig,
    pub confirm: Box<dyn Confirm>,
}
