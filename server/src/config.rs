//! Server Configuration
//!
//! Defaults, overridden by an optional TOML file (`GLASS_TODO_CONFIG`),
//! overridden in turn by `GLASS_TODO_ADDR`, `GLASS_TODO_DB` and `GLASS_TODO_STATIC`.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

pub const CONFIG_ENV: &str = "GLASS_TODO_CONFIG";
pub const ADDR_ENV: &str = "GLASS_TODO_ADDR";
pub const DB_ENV: &str = "GLASS_TODO_DB";
pub const STATIC_ENV: &str = "GLASS_TODO_STATIC";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the HTTP server binds to
    pub addr: SocketAddr,
    /// SQLite file, or `:memory:`
    pub db_path: PathBuf,
    /// Directory holding the built frontend (index.html + wasm bundle)
    pub static_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            db_path: PathBuf::from("glass_todo.db"),
            static_dir: None,
        }
    }
}

impl Config {
    /// Load from the process environment
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` for environment variables
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match lookup(CONFIG_ENV) {
            Some(path) => {
                let contents = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file: {}", path))?;
                Self::from_toml(&contents).with_context(|| format!("Failed to parse config file: {}", path))?
            }
            None => Self::default(),
        };

        if let Some(addr) = lookup(ADDR_ENV) {
            config.addr = addr
                .parse()
                .with_context(|| format!("{} is not a socket address: {}", ADDR_ENV, addr))?;
        }
        if let Some(db) = lookup(DB_ENV) {
            config.db_path = PathBuf::from(db);
        }
        if let Some(dir) = lookup(STATIC_ENV) {
            config.static_dir = (!dir.is_empty()).then(|| PathBuf::from(dir));
        }

        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}
