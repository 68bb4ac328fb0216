mod admin;
mod client;
mod record;
pub mod timestamp;

pub use admin::Admin;
pub use client::Client;
pub use record::{project_rows, Record, RecordRow, StatusBadge};
