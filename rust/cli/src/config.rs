use cardroom_engine::engine::MAX_SEATS;
use cardroom_engine::player::{STARTING_STACK, SeatedPlayer};
use cardroom_engine::rules::Blinds;
use serde::{Deserialize, Serialize};
use std::fs;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = MAX_SEATS;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub players: usize,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_stack: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub players: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            players: ValueSource::Default,
            seed: ValueSource::Default,
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
            starting_stack: STARTING_STACK,
            small_blind: 5,
            big_blind: 10,
            players: 2,
            seed: None,
        }
    }
}

impl Config {
    /// Applies command-line flags on top of the resolved values.
    pub fn with_overrides(
        mut self,
        seed: Option<u64>,
        players: Option<usize>,
    ) -> Result<Self, ConfigError> {
        if let Some(s) = seed {
            self.seed = Some(s);
        }
        if let Some(p) = players {
            self.players = p;
        }
        validate(&self)?;
        Ok(self)
    }

    pub fn blinds(&self) -> Result<Blinds, ConfigError> {
        Blinds::new(self.small_blind, self.big_blind)
            .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))
    }

    /// Seats named P1..Pn, each with the starting stack.
    pub fn seats(&self) -> Vec<SeatedPlayer> {
        (1..=self.players)
            .map(|i| SeatedPlayer::new(format!("P{}", i), self.starting_stack))
            .collect()
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

    if let Ok(path) = std::env::var("CARDROOM_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Some(seed) = env_value("CARDROOM_SEED", "seed")? {
        cfg.seed = Some(seed);
        sources.seed = ValueSource::Env;
    }
    if let Some(players) = env_value("CARDROOM_PLAYERS", "players")? {
        cfg.players = players;
        sources.players = ValueSource::Env;
    }
    if let Some(stack) = env_value("CARDROOM_STARTING_STACK", "starting_stack")? {
        cfg.starting_stack = stack;
        sources.starting_stack = ValueSource::Env;
    }
    if let Some(sb) = env_value("CARDROOM_SMALL_BLIND", "small_blind")? {
        cfg.small_blind = sb;
        sources.small_blind = ValueSource::Env;
    }
    if let Some(bb) = env_value("CARDROOM_BIG_BLIND", "big_blind")? {
        cfg.big_blind = bb;
        sources.big_blind = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    players: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
}

/// Reads and parses a non-empty environment variable.
fn env_value<T: std::str::FromStr>(key: &str, name: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(v) if !v.is_empty() => v
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", name, v))),
        _ => Ok(None),
    }
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&cfg.players) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: players must be {}-{}, got {}",
            MIN_PLAYERS, MAX_PLAYERS, cfg.players
        )));
    }
    if cfg.starting_stack == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_stack must be >0".into(),
        ));
    }
    cfg.blinds()?;
    Ok(())
}
