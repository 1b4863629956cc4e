pub mod commands;
pub mod error;
pub mod log;
mod shell;
mod suites;
mod tool;
