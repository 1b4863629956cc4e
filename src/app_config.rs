use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::{
    adapters::chat::Endpoint,
    domain::{errors::Errors, models::Identity},
    utils::get_file_contents,
};

pub const REPO_CONFIG_FILE: &str = ".agent-git.yml";
pub const DEFAULT_COMMIT_MESSAGE: &str = "Agent Git Automatic Checkin";
pub const DEFAULT_COMMIT_PROMPT: &str = "Please create a git commit message for the set of changes you recently made. \
The message should be a short description of the changes you made. \
Only output the exact git commit message. Do not include any other text.";

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GitConfig {
    pub identity: Identity,
    pub commit: CommitConfig,
    pub chat: ChatConfig,
    pub testing: TestingConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CommitConfig {
    /// Used whenever a commit message could not be generated.
    pub default_message: String,
    /// Instruction sent to the model when generating a commit message.
    pub prompt: String,
    /// Number of trailing messages kept in the generation request.
    pub history: usize,
}

impl Default for CommitConfig {
    fn default() -> Self {
        CommitConfig {
            default_message: DEFAULT_COMMIT_MESSAGE.into(),
            prompt: DEFAULT_COMMIT_PROMPT.into(),
            history: 2,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChatConfig {
    pub transcript: Option<PathBuf>,
    pub endpoint: Option<Endpoint>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TestingConfig {
    /// Suite name to the argv used to run it.
    pub suites: BTreeMap<String, Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    Once(PathBuf),
    Local(PathBuf),
    Global(PathBuf),
    Default,
}

impl ConfigSource {
    /// File backing the config, `None` when defaults are used.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Once(path) | ConfigSource::Local(path) | ConfigSource::Global(path) => {
                Some(path)
            }
            ConfigSource::Default => None,
        }
    }
}

pub struct AppConfig {
    pub source: ConfigSource,
    pub config: GitConfig,
}

impl AppConfig {
    pub fn new(once_off_config_path: Option<PathBuf>, repo_root: Option<&Path>) -> Result<AppConfig, Errors> {
        let source = Self::resolve_source(
            once_off_config_path,
            repo_root.map(|root| root.join(REPO_CONFIG_FILE)),
            Self::global_config_path(),
        );

        let config = Self::load(&source)?;

        Ok(AppConfig { source, config })
    }

    fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "agent-git", "agent-git")
            .map(|dirs| dirs.config_dir().join("config.yml"))
    }

    fn resolve_source(
        once_off: Option<PathBuf>,
        repo_config: Option<PathBuf>,
        global_config: Option<PathBuf>,
    ) -> ConfigSource {
        match (once_off, repo_config, global_config) {
            // Once off override takes priority 1
            (Some(path), _, _) => {
                log::info!("⏳ Loading once off config...");
                ConfigSource::Once(path)
            }
            // Repository has config file priority 2
            (_, Some(path), _) if path.is_file() => {
                log::info!("⏳ Loading local repo config...");
                ConfigSource::Local(path)
            }
            // User has a config file priority 3
            (_, _, Some(path)) if path.is_file() => {
                log::info!("⏳ Loading global config...");
                ConfigSource::Global(path)
            }
            // Nothing on disk use provided defaults priority 4
            _ => {
                log::info!("⏳ Using default config...");
                ConfigSource::Default
            }
        }
    }

    pub fn load(source: &ConfigSource) -> Result<GitConfig, Errors> {
        let path = match source.path() {
            Some(path) => path,
            None => return Ok(GitConfig::default()),
        };

        let contents = get_file_contents(path).map_err(|e| Errors::Configuration {
            message: format!("Failed to read configuration at path '{}'", path.display()),
            source: e,
        })?;

        let config = serde_yaml::from_str::<GitConfig>(&contents).map_err(|e| {
            Errors::Configuration {
                message: format!(
                    "Failed to parse configuration please ensure yaml is valid.\n{}",
                    path.display()
                ),
                source: e.into(),
            }
        })?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use fake::{Fake, Faker};

    use super::*;

    #[test]
    fn once_off_config_has_priority_1() {
        let once_path = fake_path_buf();
        let repo_config = existing_file();

        let source = AppConfig::resolve_source(
            Some(once_path.clone()),
            Some(repo_config.clone()),
            Some(repo_config),
        );

        assert_eq!(ConfigSource::Once(once_path), source);
    }

    #[test]
    fn repo_config_file_overrides_global_config_has_priority_2() {
        let repo_config = existing_file();

        let source =
            AppConfig::resolve_source(None, Some(repo_config.clone()), Some(existing_file()));

        assert_eq!(ConfigSource::Local(repo_config), source);
    }

    #[test]
    fn global_config_used_when_repo_has_none_priority_3() {
        let global = existing_file();

        let source = AppConfig::resolve_source(None, Some(fake_path_buf()), Some(global.clone()));

        assert_eq!(ConfigSource::Global(global), source);
    }

    #[test]
    fn no_config_files_defaults_priority_4() {
        let source = AppConfig::resolve_source(None, Some(fake_path_buf()), Some(fake_path_buf()));

        assert_eq!(ConfigSource::Default, source);
        assert_eq!(AppConfig::load(&source).unwrap(), GitConfig::default());
    }

    #[test]
    fn only_default_source_has_no_path() {
        let path = fake_path_buf();

        assert_eq!(ConfigSource::Local(path.clone()).path(), Some(path.as_path()));
        assert_eq!(ConfigSource::Default.path(), None);
    }

    #[test]
    fn partial_yaml_keeps_defaults_for_missing_fields() {
        let config: GitConfig = serde_yaml::from_str(
            "identity:\n  name: Release Bot\ntesting:\n  suites:\n    unit: [cargo, test]\n",
        )
        .unwrap();

        assert_eq!(config.identity.name, "Release Bot");
        assert_eq!(config.identity.email, Identity::default().email);
        assert_eq!(config.commit, CommitConfig::default());
        assert_eq!(config.testing.suites["unit"], ["cargo", "test"]);
    }

    #[test]
    fn missing_once_off_file_is_a_configuration_error() {
        let err = AppConfig::load(&ConfigSource::Once(fake_path_buf())).unwrap_err();

        assert!(matches!(err, Errors::Configuration { .. }));
    }

    fn existing_file() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml")
    }

    fn fake_path_buf() -> PathBuf {
        PathBuf::from(Faker.fake::<String>())
    }
}
