mod actions;
pub(crate) mod args;
mod http;
mod session;
mod store;
pub(crate) mod types;

pub(crate) use actions::{handle_login, handle_logout, handle_whoami};
pub(crate) use session::AuthSession;
pub(crate) use store::{delete_session, load_session, store_session};
#[cfg(test)]
pub(crate) use store::{clear_keyring_mock, lock_keyring_tests_async, lock_keyring_tests_sync};
#[cfg(test)]
pub(crate) use types::RedirectReason;
pub(crate) use types::{Redirect, RequestBody, RequestOptions, RequestOutcome, SessionCredentials};
