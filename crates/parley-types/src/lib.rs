pub mod auth;
pub mod models;

pub use auth::*;
pub use models::*;
