pub mod add;
pub mod auth;
pub mod config;
pub mod del;
pub mod init;
pub mod list;
pub mod log;
pub mod task;
