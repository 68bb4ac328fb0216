pub mod admins;
pub mod auth;
pub mod clients;

pub use admins::*;
pub use auth::*;
pub use clients::*;
