use anyhow::{anyhow, Result};
use directories::{BaseDirs, ProjectDirs};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default public Trello API endpoint
const DEFAULT_API_URL: &str = "https://api.trello.com/1";

/// Importer configuration: the four values every board-facing run needs,
/// plus the API base URL.
///
/// Each value resolves through the same precedence chain: CLI flag, then
/// environment variable, then config file. A value missing from all three
/// is a fatal configuration error.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    /// Board API base URL (defaults to the public Trello endpoint)
    pub api_url: Option<String>,
    /// API key
    pub api_key: Option<String>,
    /// API token
    pub api_token: Option<String>,
    /// Board identifier
    pub board: Option<String>,
    /// Target list identifier for imported cards
    pub list: Option<String>,
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        let explicit_path = config_path.as_deref();
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(anyhow!("Config file not found: {}", path.display()));
            }
        }

        for path in config_paths(explicit_path) {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        // TRELLO_API_KEY -> api_key, TRELLO_BOARD -> board, etc.
        figment = figment.merge(Env::prefixed("TRELLO_"));

        let config: Config = figment
            .extract()
            .map_err(|e| anyhow!("Failed to load config: {}", e))?;

        Ok(config)
    }

    pub fn merge_with_cli(
        &mut self,
        api_url: Option<String>,
        api_key: Option<String>,
        api_token: Option<String>,
        board: Option<String>,
        list: Option<String>,
    ) {
        if let Some(api_url) = api_url {
            self.api_url = Some(api_url);
        }
        if let Some(api_key) = api_key {
            self.api_key = Some(api_key);
        }
        if let Some(api_token) = api_token {
            self.api_token = Some(api_token);
        }
        if let Some(board) = board {
            self.board = Some(board);
        }
        if let Some(list) = list {
            self.list = Some(list);
        }
    }

    /// Check the values every board-facing command needs
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_none() {
            return Err(anyhow!(
                "API key not configured. Set via --api-key, TRELLO_API_KEY env var, or config file"
            ));
        }
        if self.api_token.is_none() {
            return Err(anyhow!(
                "API token not configured. Set via --api-token, TRELLO_API_TOKEN env var, or config file"
            ));
        }
        if self.board.is_none() {
            return Err(anyhow!(
                "Board not configured. Set via --board, TRELLO_BOARD env var, or config file"
            ));
        }
        Ok(())
    }

    /// Check the target list id; only `import` needs it
    pub fn validate_list(&self) -> Result<()> {
        if self.list.is_none() {
            return Err(anyhow!(
                "Target list not configured. Set via --list, TRELLO_LIST env var, or config file"
            ));
        }
        Ok(())
    }

    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }
}

fn config_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(path) = explicit {
        paths.push(path.to_path_buf());
        return paths;
    }

    if let Some(path) = get_project_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_xdg_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_local_config_path() {
        push_unique(&mut paths, path);
    }

    paths
}

fn push_unique(paths: &mut Vec<PathBuf>, path: PathBuf) {
    if !paths.contains(&path) {
        paths.push(path);
    }
}

fn get_project_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "cardload").map(|d| d.config_dir().join("config.toml"))
}

fn get_xdg_config_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(dir).join("cardload").join("config.toml"));
    }

    BaseDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(".config")
            .join("cardload")
            .join("config.toml")
    })
}

fn get_local_config_path() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|dir| dir.join("config.toml"))
}
