//! Layered configuration: built-in defaults, then a TOML file named by
//! `HANABI_CONFIG`, then `HANABI_*` environment variables. Every value
//! remembers which layer set it so `hanabi cfg` can report it.

use hanabi_engine::game::PLAYERS;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub players: Vec<String>,
    /// JSONL file that finished games are appended to
    pub history: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub players: ValueSource,
    pub history: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            players: ValueSource::Default,
            history: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            players: (1..=PLAYERS).map(|i| format!("Player {}", i)).collect(),
            history: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("HANABI_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.history {
            cfg.history = Some(v);
            sources.history = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("HANABI_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(players) = std::env::var("HANABI_PLAYERS")
        && !players.is_empty()
    {
        cfg.players = players.split(',').map(|s| s.trim().to_string()).collect();
        sources.players = ValueSource::Env;
    }
    if let Ok(history) = std::env::var("HANABI_HISTORY")
        && !history.is_empty()
    {
        cfg.history = Some(history);
        sources.history = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    players: Option<Vec<String>>,
    #[serde(default)]
    history: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.players.len() != PLAYERS {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: players must name exactly {} seats",
            PLAYERS
        )));
    }
    if cfg.players.iter().any(|p| p.trim().is_empty()) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: player names must not be empty".into(),
        ));
    }
    Ok(())
}
