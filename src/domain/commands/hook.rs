use crate::{
    app_context::AppContext,
    domain::{
        adapters::{Chat, Git, Reporter, TestResults},
        errors::Errors,
    },
};

use super::commit::{self, Commit};

/// Commit the working tree after a test run, only when it is dirty and every suite passed.
///
/// Returns the commit summary when a commit was made. Commit failures are returned
/// to the caller rather than swallowed.
pub fn after_testing<G: Git, C: Chat, R: Reporter, T: TestResults>(
    context: &AppContext<G, C, R, T>,
) -> Result<Option<String>, Errors> {
    if !context.git.is_dirty() {
        log::info!("working tree is clean, skipping auto commit");
        return Ok(None);
    }

    if let Some(suite) = context
        .suites
        .iter()
        .find(|suite| !suite.all_tests_passed())
    {
        log::warn!("test suite '{}' did not pass", suite.name());
        context
            .reporter
            .error("Not committing changes, due to tests not passing");

        return Ok(None);
    }

    let summary = commit::handler(
        &context.git,
        &context.chat,
        &context.reporter,
        &context.config,
        Commit::default(),
    )?;

    Ok(Some(summary))
}
