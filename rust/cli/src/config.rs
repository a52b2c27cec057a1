use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub scramble_length: usize,
    pub double_chance: f64,
    pub seed: Option<u64>,
    pub solver: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub scramble_length: ValueSource,
    pub double_chance: ValueSource,
    pub seed: ValueSource,
    pub solver: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            scramble_length: ValueSource::Default,
            double_chance: ValueSource::Default,
            seed: ValueSource::Default,
            solver: ValueSource::Default,
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
            scramble_length: cubik_engine::scramble::DEFAULT_SCRAMBLE_LENGTH,
            double_chance: cubik_engine::scramble::DEFAULT_DOUBLE_CHANCE,
            seed: None,
            solver: "cubik-solver".into(),
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
        write!(f, "{:?}", self)
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("CUBIK_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.scramble_length {
            cfg.scramble_length = v;
            sources.scramble_length = ValueSource::File;
        }
        if let Some(v) = f.double_chance {
            cfg.double_chance = v;
            sources.double_chance = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.solver {
            cfg.solver = v;
            sources.solver = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("CUBIK_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(length) = std::env::var("CUBIK_SCRAMBLE_LENGTH")
        && !length.is_empty()
    {
        cfg.scramble_length = length
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid scramble_length".into()))?;
        sources.scramble_length = ValueSource::Env;
    }
    if let Ok(chance) = std::env::var("CUBIK_DOUBLE_CHANCE")
        && !chance.is_empty()
    {
        cfg.double_chance = chance
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid double_chance".into()))?;
        sources.double_chance = ValueSource::Env;
    }
    if let Ok(solver) = std::env::var("CUBIK_SOLVER")
        && !solver.is_empty()
    {
        cfg.solver = solver;
        sources.solver = ValueSource::Env;
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
    scramble_length: Option<usize>,
    #[serde(default)]
    double_chance: Option<f64>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    solver: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.scramble_length == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: scramble_length must be >=1".into(),
        ));
    }
    if !(0.0..=1.0).contains(&cfg.double_chance) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: double_chance must be within 0..=1".into(),
        ));
    }
    if cfg.solver.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: solver must not be empty".into(),
        ));
    }
    Ok(())
}
