use inquire::{InquireError, Text};

use crate::{
    adapters::testing::CommandSuite,
    app_context::AppContext,
    domain::{
        adapters::{Chat, Git, Reporter},
        commands::{operation::HELP, Operation},
        errors::{Errors, UserInputError},
    },
};

use super::{commands::print_summary, error::display_error};

enum Input {
    Exit,
    Help,
    Line(String),
}

fn read_input(line: &str) -> Input {
    let line = line.trim();

    match line.to_lowercase().as_str() {
        "exit" | "quit" => Input::Exit,
        "help" | "/git help" => Input::Help,
        _ => {
            let line = line.strip_prefix("/git").unwrap_or(line);
            Input::Line(line.trim().to_string())
        }
    }
}

pub fn handler<G: Git, C: Chat, R: Reporter>(
    context: &AppContext<G, C, R, CommandSuite>,
) -> Result<(), Errors> {
    println!("Type a /git command, 'help' for usage or 'exit' to leave.");

    loop {
        let line = match Text::new("/git").prompt() {
            Ok(line) => line,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => {
                return Err(Errors::UserInput(UserInputError::InvalidArguments {
                    name: "prompt".into(),
                    message: format!("Failed reading input {e}"),
                }))
            }
        };

        let line = match read_input(&line) {
            Input::Exit => break,
            Input::Help => {
                println!("{HELP}");
                continue;
            }
            Input::Line(line) => line,
        };

        let result = line
            .parse::<Operation>()
            .map_err(Errors::UserInput)
            .and_then(|operation| operation.execute(context));

        match result {
            Ok(summary) => print_summary(&summary),
            Err(err) => display_error(err).map_err(Errors::Output)?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn git_prefix_is_optional() {
        for line in ["/git branch list", "branch list", "  /git   branch list "] {
            assert!(matches!(read_input(line), Input::Line(line) if line == "branch list"));
        }
    }

    #[test]
    fn exit_and_help_are_recognised() {
        assert!(matches!(read_input("EXIT"), Input::Exit));
        assert!(matches!(read_input("quit"), Input::Exit));
        assert!(matches!(read_input("help"), Input::Help));
    }
}
