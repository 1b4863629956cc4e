use agent_git::{cli::error::display_error, domain::errors::Errors, entry::Cli};
use clap::Parser;

fn run(cli: Cli) -> Result<(), Errors> {
    let context = cli.init()?;

    cli.commands.execute(&context)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        display_error(err)?;
        std::process::exit(1);
    }

    Ok(())
}
