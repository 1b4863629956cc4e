use serde::{Deserialize, Serialize};

pub const BOT_NAME: &str = "Agent Git";
pub const BOT_EMAIL: &str = "agent-git@users.noreply.localhost";

/// Committer identity applied to every commit made by the agent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Default for Identity {
    fn default() -> Self {
        Identity {
            name: BOT_NAME.into(),
            email: BOT_EMAIL.into(),
        }
    }
}

impl Identity {
    /// `-c` overrides so the repository's own user config is left untouched.
    pub fn config_args(&self) -> [String; 4] {
        [
            "-c".into(),
            format!("user.name={}", self.name),
            "-c".into(),
            format!("user.email={}", self.email),
        ]
    }
}
