//! CLI commands

pub mod init;
pub mod list;
pub mod new;
pub mod params;
pub mod search;
pub mod show;
