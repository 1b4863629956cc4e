use crate::{
    app_config::{CommitConfig, GitConfig},
    domain::{
        adapters::{Chat, Git, Reporter},
        errors::Errors,
        models::ChatMessage,
    },
    utils::string::OptionStr,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Commit {
    /// Message for the commit, generated from the conversation when empty.
    pub message: Option<String>,
}

pub fn handler<G: Git, C: Chat, R: Reporter>(
    git: &G,
    chat: &C,
    reporter: &R,
    config: &GitConfig,
    commit: Commit,
) -> Result<String, Errors> {
    git.stage_all().map_err(Errors::Git)?;

    let message = commit_message(chat, reporter, &config.commit, commit.message);

    git.commit(&config.identity, &message).map_err(Errors::Git)?;
    reporter.info("Changes committed to git.");

    git.mark_clean();

    Ok("Changes successfully committed to git".into())
}

/// Resolve the final commit message, never fails and falls back to the configured default.
pub fn commit_message<C: Chat, R: Reporter>(
    chat: &C,
    reporter: &R,
    settings: &CommitConfig,
    message: Option<String>,
) -> String {
    if let Some(message) = message.none_if_empty() {
        reporter.info("Using provided commit message.");
        return message;
    }

    reporter.info("Asking the model to generate a git commit message...");

    if chat.current_message().is_none() {
        reporter.warning("No chat message to describe the changes, using default commit message.");
        return settings.default_message.clone();
    }

    match generate(chat, settings) {
        Ok(Some(message)) => message,
        Ok(None) => {
            reporter.warning("AI did not provide a commit message, using default.");
            settings.default_message.clone()
        }
        Err(e) => {
            log::error!("Failed to generate commit message: {:?}", e);
            reporter.warning("Failed to generate a commit message, using default.");
            settings.default_message.clone()
        }
    }
}

fn generate<C: Chat>(chat: &C, settings: &CommitConfig) -> anyhow::Result<Option<String>> {
    let mut request = chat.create_request(ChatMessage::user(settings.prompt.clone()))?;

    request.retain_last(settings.history);
    // The model must answer with text rather than calling back into the agent.
    request.tools.clear();

    let output = chat.complete(request)?;

    Ok(output
        .map(|message| message.trim().to_string())
        .filter(|message| !message.is_empty()))
}
