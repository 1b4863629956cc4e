use crate::{
    adapters::testing::CommandSuite,
    app_context::AppContext,
    domain::{
        adapters::{Chat, Git, Reporter, TestResults},
        commands::hook,
        errors::Errors,
    },
};

use super::commands::print_summary;

pub fn handler<G: Git, C: Chat, R: Reporter>(
    context: &AppContext<G, C, R, CommandSuite>,
) -> Result<(), Errors> {
    if context.suites.is_empty() {
        context
            .reporter
            .warning("No test suites configured, see 'testing.suites' in the config file.");
    }

    for suite in &context.suites {
        // A suite that fails to start simply counts as not passed.
        match suite.run() {
            Ok(true) => context
                .reporter
                .info(&format!("Test suite '{}' passed.", suite.name())),
            Ok(false) => context
                .reporter
                .error(&format!("Test suite '{}' failed.", suite.name())),
            Err(e) => {
                log::error!("{:?}", e);
                context.reporter.error(&format!("{e:#}"));
            }
        }
    }

    match hook::after_testing(context)? {
        Some(summary) => print_summary(&summary),
        None => println!("Nothing committed."),
    }

    Ok(())
}
