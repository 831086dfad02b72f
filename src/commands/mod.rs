//! CLI commands

pub mod comment;
pub mod init;
pub mod list;
pub mod show;
