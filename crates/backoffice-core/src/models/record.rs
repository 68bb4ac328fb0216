use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::resource::ResourceKind;

/// A row of a resource collection as served by the API.
pub trait Record: DeserializeOwned + Serialize {
    const KIND: ResourceKind;

    /// Body accepted by `POST /{resource}/`.
    type Create: Serialize;
    /// Body accepted by `PUT /{resource}/{id}`.
    type Update: Serialize;

    fn id(&self) -> i64;
    fn name(&self) -> &str;
    fn email(&self) -> &str;
    fn enabled(&self) -> bool;
    fn created_at(&self) -> DateTime<Utc>;

    /// Headers for type-specific columns, rendered after the common ones.
    fn extra_columns() -> &'static [&'static str] {
        &[]
    }

    /// Values matching [`Record::extra_columns`], in the same order.
    fn extra_values(&self) -> Vec<String> {
        Vec::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    Active,
    Inactive,
}

impl StatusBadge {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            Self::Active
        } else {
            Self::Inactive
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub status: StatusBadge,
    pub created_at: DateTime<Utc>,
    pub extra: Vec<String>,
}

impl RecordRow {
    pub fn from_record<R: Record>(record: &R) -> Self {
        Self {
            id: record.id(),
            name: record.name().to_string(),
            email: record.email().to_string(),
            status: StatusBadge::from_enabled(record.enabled()),
            created_at: record.created_at(),
            extra: record.extra_values(),
        }
    }
}

pub fn project_rows<R: Record>(records: &[R]) -> Vec<RecordRow> {
    records.iter().map(RecordRow::from_record).collect()
}
