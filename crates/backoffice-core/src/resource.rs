use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Clients,
    Admins,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown resource: {0}")]
pub struct ParseResourceError(String);

impl ResourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clients => "clients",
            Self::Admins => "admins",
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            Self::Clients => "client",
            Self::Admins => "admin",
        }
    }

    /// Collection endpoint, always with the trailing slash the API routes expect.
    pub fn collection_path(self) -> String {
        format!("/{}/", self.as_str())
    }

    pub fn item_path(self, id: i64) -> String {
        format!("/{}/{}", self.as_str(), id)
    }

    pub fn exists_path(self, name: &str) -> String {
        format!("/{}/check/{}/exists", self.as_str(), urlencoding::encode(name))
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = ParseResourceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().trim_matches('/').to_ascii_lowercase().as_str() {
            "clients" | "client" => Ok(Self::Clients),
            "admins" | "admin" => Ok(Self::Admins),
            other => Err(ParseResourceError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_api_layout() {
        assert_eq!(ResourceKind::Clients.collection_path(), "/clients/");
        assert_eq!(ResourceKind::Admins.item_path(7), "/admins/7");
        assert_eq!(
            ResourceKind::Clients.exists_path("Acme Corp"),
            "/clients/check/Acme%20Corp/exists"
        );
    }

    #[test]
    fn parse_accepts_singular_and_slashes() {
        assert_eq!(
            "/clients/".parse::<ResourceKind>().expect("clients"),
            ResourceKind::Clients
        );
        assert_eq!(
            "Admin".parse::<ResourceKind>().expect("admin"),
            ResourceKind::Admins
        );
        assert!("tickets".parse::<ResourceKind>().is_err());
    }
}
