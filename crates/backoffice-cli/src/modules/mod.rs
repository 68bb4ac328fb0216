pub(crate) mod admins;
pub(crate) mod auth;
pub(crate) mod clients;
pub(crate) mod shared;
pub(crate) mod system;
