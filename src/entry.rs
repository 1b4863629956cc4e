use std::path::PathBuf;

use clap::Parser;

use crate::adapters::{chat::ChatSession, testing::CommandSuite, Console, Git, SystemFileSystem};
use crate::app_config::AppConfig;
use crate::app_context::AppContext;
use crate::cli::{commands::Commands, log::LogLevel};
use crate::domain::{adapters::FileSystem, adapters::Git as _, commands::tools, errors::Errors};

pub type SystemContext = AppContext<Git<SystemFileSystem>, ChatSession, Console, CommandSuite>;

#[derive(Debug, Parser)]
#[clap(name = "agent-git")]
#[clap(bin_name = "agent-git")]
#[clap(about = "git commit, rollback & branch operations for chat driven coding agents.", long_about = None)]
#[clap(version)]
pub struct Cli {
    /// File path to config file to be used as a once off.
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Log level
    #[clap(value_enum, long, default_value_t=LogLevel::None)]
    log: LogLevel,

    /// Working tree to run git in.
    #[clap(short = 'C', long, default_value = ".")]
    directory: PathBuf,

    /// Yaml chat transcript used to generate commit messages.
    #[clap(short, long)]
    transcript: Option<PathBuf>,

    /// Commands
    #[clap(subcommand)]
    pub commands: Commands,
}

impl Cli {
    pub fn init(&self) -> Result<SystemContext, Errors> {
        self.log.init_logger();

        let directory = dunce::canonicalize(&self.directory).map_err(|e| Errors::Configuration {
            message: format!("Failed to find working tree '{}'", self.directory.display()),
            source: e.into(),
        })?;

        let git = Git::new(SystemFileSystem::new(directory.clone()));

        let root = git
            .root_directory()
            .map_err(|e| log::warn!("Not inside a git repository: {}", e))
            .ok();

        let AppConfig { source, config } = AppConfig::new(self.config.clone(), root.as_deref())?;

        match source.path() {
            Some(path) => log::info!("using config at '{}'", path.display()),
            None => log::info!("using default config"),
        }

        // Anything already modified on start up still needs committing.
        match git.status() {
            Ok(status) => git.fs.set_dirty(!status.is_clean()),
            Err(e) => log::warn!("Failed to read working tree status: {}", e),
        }

        let transcript = match self.transcript.as_ref().or(config.chat.transcript.as_ref()) {
            Some(path) => ChatSession::load_transcript(path).map_err(|e| Errors::Configuration {
                message: format!("Failed to load chat transcript '{}'", path.display()),
                source: e,
            })?,
            None => vec![],
        };

        let chat = ChatSession::new(transcript, tools::names(), config.chat.endpoint.clone());

        let suite_root = root.unwrap_or(directory);
        let suites = config
            .testing
            .suites
            .iter()
            .map(|(name, command)| CommandSuite::new(name.clone(), command.clone(), suite_root.clone()))
            .collect();

        Ok(AppContext::new(git, chat, Console::new("git"), suites, config))
    }
}

#[test]
fn verify_app() {
    // Simple test to assure cli builds correctly
    use clap::CommandFactory;
    Cli::command().debug_assert()
}
