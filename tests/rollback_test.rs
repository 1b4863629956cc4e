
use agent_git::domain::{
    commands::Operation,
    errors::{Errors, GitError, PreconditionError, UserInputError},
};
use fakers::*;

fn dirty_tree(args: &[&str]) -> anyhow::Result<agent_git::domain::models::ProcessOutcome> {
    if args.contains(&"status") {
        Ok(output(" M src/lib.rs\n?? notes.txt\n"))
    } else {
        Ok(output(""))
    }
}

#[test]
fn uncommitted_changes_abort_without_reset() -> anyhow::Result<()> {
    // Arrange
    let context = fake_context(FileSystemMock::new(dirty_tree), ChatMock::fake(), vec![]);

    // Act
    let err = "rollback 2"
        .parse::<Operation>()?
        .execute(&context)
        .unwrap_err();

    // Assert
    assert!(matches!(
        err,
        Errors::Precondition(PreconditionError::UncommittedChanges)
    ));
    assert_eq!(context.git.fs.calls(), [["git", "status", "--porcelain"]]);
    assert_eq!(context.git.fs.position("reset"), None);

    Ok(())
}

#[test]
fn rollback_steps_reset_relative_to_head() -> anyhow::Result<()> {
    // Arrange
    let context = fake_context(FileSystemMock::fake(), ChatMock::fake(), vec![]);

    // Act
    let summary = "rollback 3".parse::<Operation>()?.execute(&context)?;

    // Assert
    assert_eq!(
        context.git.fs.calls(),
        [
            vec!["git", "status", "--porcelain"],
            vec!["git", "reset", "--hard", "HEAD~3"],
        ]
    );
    assert_eq!(summary, "Rolled back 3 commit(s)");

    Ok(())
}

#[test]
fn rollback_without_steps_goes_back_one_commit() -> anyhow::Result<()> {
    // Arrange
    let context = fake_context(FileSystemMock::fake(), ChatMock::fake(), vec![]);

    // Act
    let summary = "rollback".parse::<Operation>()?.execute(&context)?;

    // Assert
    assert!(context.git.fs.called(&["git", "reset", "--hard", "HEAD~1"]));
    assert_eq!(summary, "Rolled back 1 commit(s)");
    assert_eq!(
        context.reporter.lines(Level::Info),
        [
            "Rolling back to previous commit...",
            "Rollback completed successfully."
        ]
    );

    Ok(())
}

#[test]
fn rollback_to_commit_via_tool_resets_onto_hash() -> anyhow::Result<()> {
    // Arrange
    let context = fake_context(FileSystemMock::fake(), ChatMock::fake(), vec![]);

    // Act
    let summary = agent_git::domain::commands::tools::execute(
        &context,
        "git_rollback",
        serde_json::json!({ "commit": "abc123", "steps": 4 }),
    )?;

    // Assert
    assert_eq!(
        context.git.fs.calls(),
        [
            vec!["git", "status", "--porcelain"],
            vec!["git", "reset", "--hard", "abc123"],
        ]
    );
    assert_eq!(summary, "Rolled back to commit abc123");

    Ok(())
}

#[test]
fn invalid_steps_fail_without_running_git() {
    // Arrange
    let context = fake_context(FileSystemMock::fake(), ChatMock::fake(), vec![]);

    // Act
    let err = "rollback abc".parse::<Operation>().unwrap_err();

    // Assert
    assert_eq!(
        err,
        UserInputError::InvalidSteps {
            value: "abc".into()
        }
    );
    assert!(err.to_string().contains("\"abc\""));
    assert!(context.git.fs.calls().is_empty());
}

#[test]
fn reset_failure_surfaces_stderr() -> anyhow::Result<()> {
    // Arrange
    let fs = FileSystemMock::new(|args| {
        if args.contains(&"reset") {
            Ok(failure(
                "fatal: ambiguous argument 'HEAD~9': unknown revision\n",
            ))
        } else {
            Ok(output(""))
        }
    });
    let context = fake_context(fs, ChatMock::fake(), vec![]);

    // Act
    let err = "rollback 9"
        .parse::<Operation>()?
        .execute(&context)
        .unwrap_err();

    // Assert
    assert!(matches!(
        err,
        Errors::Git(GitError::Command { ref message, .. })
            if message == "fatal: ambiguous argument 'HEAD~9': unknown revision"
    ));

    Ok(())
}

#[test]
fn successful_rollback_clears_dirty_flag() -> anyhow::Result<()> {
    // Arrange
    let context = fake_context(
        FileSystemMock::fake().with_dirty(true),
        ChatMock::fake(),
        vec![],
    );

    // Act
    "rollback".parse::<Operation>()?.execute(&context)?;

    // Assert
    assert!(!context.git.fs.dirty.get());

    Ok(())
}
