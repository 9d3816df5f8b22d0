use std::path::PathBuf;

use clap::{Parser, Subcommand};

use dev_home::config::HomeConfig;
use dev_home::storage::FileStorage;
use dev_home::{hlog, hlog_debug, HomeAction, HomeProvider, RawAction, Result};

/// dev-home - drive the home page preview store from the command line
#[derive(Parser, Debug)]
#[command(name = "dev-home")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    DEV_HOME_DEBUG=1     Enable debug logging (alternative to --debug)\n    DEV_HOME_DEBUG=trace Also log full state snapshots")]
pub struct Cli {
    /// Data provider endpoint (overrides config.toml)
    #[arg(long, global = true)]
    pub service_url: Option<String>,

    /// Dataset name (overrides config.toml)
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// Storage file to use instead of ~/.dev-home/storage.json
    #[arg(long, global = true)]
    pub storage: Option<PathBuf>,

    /// Enable debug logging (writes to ~/.dev-home/dev-home.log)
    #[arg(short = 'd', long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the state a freshly mounted provider starts with
    State,

    /// Show a non-sample page in the preview pane
    OpenNoSample,

    /// Show a sample in the preview pane
    Select {
        /// Identifier of the sample
        sample_id: String,
    },

    /// Change the preview page (persisted across runs)
    SetPage {
        /// Route of the page, e.g. /dev/base-page
        path: String,
    },

    /// Dispatch an action given as JSON, e.g. '{"type":"OPEN_NO_SAMPLE"}'
    Dispatch {
        /// JSON object with "type" and optional "payload"
        action: String,
    },
}

impl Cli {
    fn config_overrides(&self) -> HomeConfig {
        HomeConfig {
            service_url: self.service_url.clone(),
            database_name: self.database.clone(),
        }
    }
}

/// Turn a subcommand into the action it dispatches. `State` dispatches nothing.
fn command_action(command: &Command) -> Result<Option<HomeAction>> {
    let action = match command {
        Command::State => None,
        Command::OpenNoSample => Some(HomeAction::OpenNoSample),
        Command::Select { sample_id } => Some(HomeAction::SelectSample(sample_id.clone())),
        Command::SetPage { path } => Some(HomeAction::SetPreviewPage(path.clone())),
        Command::Dispatch { action } => {
            // User input is validated here so a typo is an error, not a panic.
            let raw: RawAction = serde_json::from_str(action)?;
            Some(HomeAction::try_from(raw)?)
        }
    };
    Ok(action)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    dev_home::log::init_with_debug(cli.debug);
    if dev_home::log::is_debug() {
        hlog!("dev-home starting (debug mode enabled)");
    } else {
        hlog!("dev-home starting");
    }

    let command = cli.command.clone().unwrap_or(Command::State);
    let action = command_action(&command)?;

    let config = HomeConfig::load()?.merge(cli.config_overrides());
    let storage = match &cli.storage {
        Some(path) => FileStorage::open(path)?,
        None => FileStorage::open_default()?,
    };
    hlog_debug!("Using storage {}", storage.path().display());

    let provider = HomeProvider::mount(config, storage);
    if let Some(action) = action {
        provider.dispatch(action);
    }

    println!("{}", serde_json::to_string_pretty(&provider.state())?);
    Ok(())
}
