use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cardload", version, about = "Batch-import tickets onto a task board")]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'o', value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to colorize output
    #[arg(long, value_enum, global = true, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a TOML config file
    #[arg(long, env = "CARDLOAD_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Board API base URL (overrides config file)
    #[arg(long, env = "TRELLO_API_URL", global = true)]
    pub api_url: Option<String>,

    /// API key (overrides config file)
    #[arg(long, env = "TRELLO_API_KEY", global = true)]
    pub api_key: Option<String>,

    /// API token (overrides config file)
    #[arg(long, env = "TRELLO_API_TOKEN", global = true)]
    pub api_token: Option<String>,

    /// Board identifier (overrides config file)
    #[arg(long, env = "TRELLO_BOARD", global = true)]
    pub board: Option<String>,

    /// Target list identifier for imported cards (overrides config file)
    #[arg(long, env = "TRELLO_LIST", global = true)]
    pub list: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Debug, Copy, Default)]
pub enum ColorChoice {
    /// Colorize output if stdout is a terminal
    #[default]
    Auto,
    /// Always colorize output
    Always,
    /// Never colorize output
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the lists on the configured board
    #[command(visible_alias = "ls")]
    Lists,
    /// Show the labels on the configured board
    Labels,
    /// Check a ticket file against the expected structure without importing
    #[command(visible_alias = "check")]
    Validate {
        /// Path to the JSON ticket file
        file: PathBuf,
    },
    /// Import tickets from a JSON file onto the configured list
    #[command(visible_alias = "i")]
    Import {
        /// Path to the JSON ticket file
        file: PathBuf,
    },
}
