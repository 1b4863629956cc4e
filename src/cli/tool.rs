use serde_json::Value;

use crate::{
    adapters::testing::CommandSuite,
    app_context::AppContext,
    domain::{
        adapters::{Chat, Git, Reporter},
        commands::tools,
        errors::Errors,
    },
};

use super::commands::{invalid_json, print_summary};

pub fn handler<G: Git, C: Chat, R: Reporter>(
    context: &AppContext<G, C, R, CommandSuite>,
    name: &str,
    args: &str,
) -> Result<(), Errors> {
    let args: Value = serde_json::from_str(args).map_err(|e| invalid_json(name, e))?;

    let summary = tools::execute(context, name, args)?;
    print_summary(&summary);

    Ok(())
}

pub fn definitions() -> Result<(), Errors> {
    let definitions = serde_json::to_string_pretty(&tools::definitions())
        .map_err(|e| invalid_json("tools", e))?;

    println!("{definitions}");

    Ok(())
}
