//! Library surface of the sellout CLI: argument types, subcommand
//! implementations, logging setup, and summary rendering.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
