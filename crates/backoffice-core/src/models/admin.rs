use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::Record;
use super::timestamp;
use crate::api::{AdminCreate, AdminUpdate};
use crate::resource::ResourceKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    pub admin_id: i64,
    pub name: String,
    pub email: String,
    pub enabled: bool,
    #[serde(with = "timestamp")]
    pub date_created: DateTime<Utc>,
    #[serde(default)]
    pub roles: Vec<i64>,
}

impl Record for Admin {
    const KIND: ResourceKind = ResourceKind::Admins;
    type Create = AdminCreate;
    type Update = AdminUpdate;

    fn id(&self) -> i64 {
        self.admin_id
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
        &["ROLES"]
    }

    fn extra_values(&self) -> Vec<String> {
        let roles = self
            .roles
            .iter()
            .map(|role| role.to_string())
            .collect::<Vec<_>>()
            .join(",");
        vec![roles]
    }
}
