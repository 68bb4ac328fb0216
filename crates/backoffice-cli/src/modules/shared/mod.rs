mod actions;
pub(crate) mod args;
mod confirm;
mod controller;
mod http;
mod render;
pub(crate) mod types;

pub(crate) use actions::{print_delete, print_view};
pub(crate) use confirm::{confirm_for, Confirm};
pub(crate) use controller::ResourceController;
pub(crate) use http::check_name_exists;
