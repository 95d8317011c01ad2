pub mod auth;
pub mod page;
pub mod todo;
pub mod user;
