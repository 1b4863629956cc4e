use crate::{
    app_config::GitConfig,
    domain::adapters::{Chat, Git, Reporter, TestResults},
};

/// Collaborators every git operation runs against.
pub struct AppContext<G: Git, C: Chat, R: Reporter, T: TestResults> {
    pub git: G,
    pub chat: C,
    pub reporter: R,
    pub suites: Vec<T>,
    pub config: GitConfig,
}

impl<G: Git, C: Chat, R: Reporter, T: TestResults> AppContext<G, C, R, T> {
    pub fn new(git: G, chat: C, reporter: R, suites: Vec<T>, config: GitConfig) -> Self {
        AppContext {
            git,
            chat,
            reporter,
            suites,
            config,
        }
    }
}
