
use agent_git::domain::{
    commands::hook,
    errors::{Errors, GitError},
};
use fakers::*;

#[test]
fn clean_tree_is_never_committed() -> anyhow::Result<()> {
    // Arrange
    let context = fake_context(
        FileSystemMock::fake(),
        ChatMock::fake(),
        vec![TestSuiteMock::new("unit", true)],
    );

    // Act
    let summary = hook::after_testing(&context)?;

    // Assert
    assert_eq!(summary, None);
    assert!(context.git.fs.calls().is_empty());
    assert_eq!(context.chat.request_count(), 0);

    Ok(())
}

#[test]
fn failing_suite_blocks_the_commit() -> anyhow::Result<()> {
    // Arrange
    let context = fake_context(
        FileSystemMock::fake().with_dirty(true),
        ChatMock::fake(),
        vec![
            TestSuiteMock::new("unit", true),
            TestSuiteMock::new("integration", false),
        ],
    );

    // Act
    let summary = hook::after_testing(&context)?;

    // Assert
    assert_eq!(summary, None);
    assert!(context.git.fs.calls().is_empty());
    assert!(context.git.fs.dirty.get());
    assert_eq!(
        context.reporter.lines(Level::Error),
        ["Not committing changes, due to tests not passing"]
    );

    Ok(())
}

#[test]
fn dirty_tree_with_passing_suites_is_committed() -> anyhow::Result<()> {
    // Arrange
    let context = fake_context(
        FileSystemMock::fake().with_dirty(true),
        ChatMock::fake(),
        vec![
            TestSuiteMock::new("unit", true),
            TestSuiteMock::new("integration", true),
        ],
    );

    // Act
    let summary = hook::after_testing(&context)?;

    // Assert
    assert_eq!(summary.as_deref(), Some("Changes successfully committed to git"));
    assert_eq!(context.git.fs.position("add"), Some(0));
    assert_eq!(context.git.fs.position("commit"), Some(1));
    assert_eq!(context.git.fs.calls().len(), 2);
    assert_eq!(context.chat.request_count(), 1);
    assert!(!context.git.fs.dirty.get());

    Ok(())
}

#[test]
fn dirty_tree_without_suites_is_committed() -> anyhow::Result<()> {
    // Arrange
    let context = fake_context(
        FileSystemMock::fake().with_dirty(true),
        ChatMock::silent(),
        vec![],
    );

    // Act
    let summary = hook::after_testing(&context)?;

    // Assert
    assert!(summary.is_some());
    assert_eq!(context.git.fs.calls().len(), 2);

    Ok(())
}

#[test]
fn commit_failure_is_propagated() {
    // Arrange
    let fs = FileSystemMock::new(|args| {
        if args.contains(&"commit") {
            Ok(failure("fatal: unable to write new index file"))
        } else {
            Ok(output(""))
        }
    })
    .with_dirty(true);
    let context = fake_context(fs, ChatMock::fake(), vec![TestSuiteMock::new("unit", true)]);

    // Act
    let err = hook::after_testing(&context).unwrap_err();

    // Assert
    assert!(matches!(err, Errors::Git(GitError::Command { .. })));
    assert!(context.git.fs.dirty.get());
}
