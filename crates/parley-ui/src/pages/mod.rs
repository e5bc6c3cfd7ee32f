pub mod chat;
pub mod home;
pub mod login;
pub mod models;
pub mod not_found;
