use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::Record;
use super::timestamp;
use crate::api::{ClientCreate, ClientUpdate};
use crate::resource::ResourceKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub client_id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phones: Option<String>,
    pub enabled: bool,
    #[serde(with = "timestamp")]
    pub date_created: DateTime<Utc>,
    #[serde(default)]
    pub admin_id: Option<i64>,
}

impl Record for Client {
    const KIND: ResourceKind = ResourceKind::Clients;
    type Create = ClientCreate;
    type Update = ClientUpdate;

    fn id(&self) -> i64 {
        self.client_id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.date_created
    }

    fn extra_columns() -> &'static [&'static str] {
        &["PHONES", "ADMIN"]
    }

    fn extra_values(&self) -> Vec<String> {
        vec![
            self.phones.clone().unwrap_or_default(),
            self.admin_id.map(|id| id.to_string()).unwrap_or_default(),
        ]
    }
}
