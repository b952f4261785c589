//! Configuration file (zeplin.yaml) parsing.
//!
//! Every field is optional. The token can also come from the environment,
//! and command-line flags override whatever is loaded here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_API_URL;
use crate::assets::{Codec, ReencodeOptions};
use crate::error::{Result, ZeplinError};
use crate::render::DEFAULT_DEPTH;

/// File looked up in the current directory when `--config` is not given.
pub const CONFIG_FILENAME: &str = "zeplin.yaml";

/// Environment variable that overrides `token`.
pub const TOKEN_ENV: &str = "ZEPLIN_TOKEN";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Personal access token.
    pub token: Option<String>,

    pub api_url: String,

    /// Download directory.
    pub output: PathBuf,

    /// Default `screen spec` depth.
    pub depth: usize,

    pub reencode: ReencodeOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: None,
            api_url: DEFAULT_API_URL.to_string(),
            output: PathBuf::from("assets"),
            depth: DEFAULT_DEPTH,
            reencode: ReencodeOptions::default(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ZeplinError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content).map_err(|e| ZeplinError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Re-encoded rasters must not share the `.png` extension of raw icon rasters.
    fn validate(&self) -> Result<()> {
        if self.reencode.codec == Codec::Png {
            return Err(ZeplinError::Config {
                message: "reencode.codec cannot be png".to_string(),
                help: Some("Use webp or jpeg; png is the extension of rasters written as-is".to_string()),
            });
        }
        Ok(())
    }

    /// Load `explicit` if given, else `zeplin.yaml` in `dir` if present,
    /// else defaults. An explicit path that does not exist is an error.
    pub fn discover(dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = dir.join(CONFIG_FILENAME);
                if path.is_file() {
                    Self::load(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Token from the environment, falling back to the config file.
    pub fn effective_token(&self) -> Result<String> {
        let env = std::env::var(TOKEN_ENV).ok();
        resolve_token(env.as_deref(), self.token.as_deref())
    }
}

fn resolve_token(env: Option<&str>, file: Option<&str>) -> Result<String> {
    env.or(file)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ZeplinError::Config {
            message: "No Zeplin access token configured".to_string(),
            help: Some(format!(
                "Set {} or add `token:` to {}",
                TOKEN_ENV, CONFIG_FILENAME
            )),
        })
}
