pub mod access;
pub mod admin;
pub mod aggregate;
pub mod backup;
pub mod import;
pub mod log;
pub mod submit;
