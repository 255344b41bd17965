//! Runtime configuration from environment variables

use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{LexiconError, LexiconResult};

pub const DATA_DIR_VAR: &str = "LEXICON_DATA_DIR";
pub const HTTP_ADDR_VAR: &str = "LEXICON_HTTP_ADDR";
pub const SERVER_NAME_VAR: &str = "LEXICON_SERVER_NAME";

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_SERVER_NAME: &str = "lexicon";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Dataset directory holding `manifest.json`, `frames/` and `lus/`
    pub data_dir: PathBuf,
    /// Serve the REST API on this address instead of stdio MCP
    pub http_addr: Option<SocketAddr>,
    pub server_name: String,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> LexiconResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> LexiconResult<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let data_dir = match get(DATA_DIR_VAR) {
            Some(path) => resolve_path(&current_dir, path.trim()),
            None => current_dir.join(DEFAULT_DATA_DIR),
        };

        let http_addr = get(HTTP_ADDR_VAR)
            .map(|addr| {
                addr.trim().parse::<SocketAddr>().map_err(|e| {
                    LexiconError::InvalidArgument(format!("{}={}: {}", HTTP_ADDR_VAR, addr, e))
                })
            })
            .transpose()?;

        Ok(Self {
            data_dir,
            http_addr,
            server_name: get(SERVER_NAME_VAR).unwrap_or_else(|| DEFAULT_SERVER_NAME.to_string()),
        })
    }

    /// Configuration for a dataset directory with every other setting at its default
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            http_addr: None,
            server_name: DEFAULT_SERVER_NAME.to_string(),
        }
    }
}

fn resolve_path(base: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
