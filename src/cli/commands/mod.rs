pub mod admin;
pub mod backup;
pub mod config;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod submit;
