use colored::Colorize;
use std::io::{self, Write};

use crate::domain::errors::{Errors, GitError};

pub fn display_error(err: Errors) -> io::Result<()> {
    let message = err.to_string();
    match err {
        Errors::UserInput(_) => print_error(message, None),
        Errors::Precondition(_) => print_error(message, None),
        Errors::Git(inner) => print_git_error(inner),
        Errors::Output(source) => print_error(message, Some(source.into())),
        Errors::Configuration { source, .. } => print_error(message, Some(source)),
    }
}

fn print_git_error(err: GitError) -> io::Result<()> {
    let message = err.to_string();

    match err {
        GitError::Command { .. } => print_error(message, None),
        GitError::Spawn { source, .. } => print_error(message, Some(source)),
    }
}

fn print_error(message: String, source: Option<anyhow::Error>) -> io::Result<()> {
    log::error!("{} {:?}", message, source);

    write_error(&mut io::stdout().lock(), &message, source)
}

fn write_error<W: Write>(out: &mut W, message: &str, source: Option<anyhow::Error>) -> io::Result<()> {
    match source {
        Some(source) => writeln!(out, "{}: {message}\n  {source:#}", "error".red()),
        None => writeln!(out, "{}: {message}", "error".red()),
    }
}
