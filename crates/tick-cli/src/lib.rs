//! Tick time tracking CLI library.
//!
//! This crate provides the `ticker` command-line interface.

mod app;
pub mod branch;
mod cli;
pub mod commands;
mod config;
mod error;
pub mod prompt;

pub use app::{Context, execute};
pub use cli::{Category, Cli, Commands, CreateArgs, ListArgs, StartArgs};
pub use config::Config;
pub use error::UsageError;
