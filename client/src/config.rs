use std::env;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_WIDTH: usize = 8;
pub const DEFAULT_HEIGHT: usize = 8;
pub const DEFAULT_TILE_SIZE: u32 = 60; // Pixels.
const MIN_WINDOW_SIZE: i32 = 120; // Room for the win banner on tiny boards.

const WIDTH_KEY: &str = "BOARD_WIDTH";
const HEIGHT_KEY: &str = "BOARD_HEIGHT";
const TILE_SIZE_KEY: &str = "TILE_SIZE";
const SEED_KEY: &str = "SEED";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub tile_size: u32,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tile_size: DEFAULT_TILE_SIZE,
            seed: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    Invalid { key: &'static str, value: String },
    ZeroTileSize,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, value } => {
                write!(f, "invalid value for {}: '{}'", key, value)
            }
            ConfigError::ZeroTileSize => write!(f, "{} must be greater than zero", TILE_SIZE_KEY),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Reads the board settings from the environment, after loading `.env`
    /// if there is one. Unset keys fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let config = Config {
            width: parse(&lookup, WIDTH_KEY)?.unwrap_or(defaults.width),
            height: parse(&lookup, HEIGHT_KEY)?.unwrap_or(defaults.height),
            tile_size: parse(&lookup, TILE_SIZE_KEY)?.unwrap_or(defaults.tile_size),
            seed: parse(&lookup, SEED_KEY)?,
        };

        if config.tile_size == 0 {
            return Err(ConfigError::ZeroTileSize);
        }

        Ok(config)
    }

    pub fn window_size(&self) -> (i32, i32) {
        let side = |tiles: usize| {
            let pixels = tiles.saturating_mul(self.tile_size as usize);
            i32::try_from(pixels).unwrap_or(i32::MAX).max(MIN_WINDOW_SIZE)
        };

        (side(self.width), side(self.height))
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(value) = lookup(key) else {
        return Ok(None);
    };

    let parsed = value.trim().parse::<T>();
    match parsed {
        Ok(parsed) => Ok(Some(parsed)),
        Err(_) => Err(ConfigError::Invalid { key, value }),
    }
}
