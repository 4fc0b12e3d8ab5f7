use std::borrow::Cow;

use anyhow::{Context as _, Result};
use serde::Deserialize;

pub mod setup;

/// Prefix for environment variables overriding config values.
const ENV_PREFIX: &str = "BIN_TEXT__";

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub log: log4rs::config::RawConfig,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Wrap encoded text after this many characters. `0` disables wrapping.
    #[serde(default)]
    pub wrap: usize,
    /// Terminate encoded text with a newline.
    #[serde(default = "default_trailing_newline")]
    pub trailing_newline: bool,
}

const fn default_trailing_newline() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            wrap: 0,
            trailing_newline: default_trailing_newline(),
        }
    }
}

fn profile() -> Result<Cow<'static, str>> {
    use std::env::VarError::NotPresent;
    use std::env::var;

    match var("BIN_TEXT_PROFILE") {
        Ok(value) => Ok(value.into()),
        Err(NotPresent) => Ok("release".into()),
        Err(err) => Err(err).context("cannot load BIN_TEXT_PROFILE env variable"),
    }
}

/// Loads the layered configuration.
///
/// Layers, lowest precedence first: the embedded defaults, `bin_text.toml`,
/// `bin_text.{profile}.toml`, and `BIN_TEXT__*` environment variables.
pub fn build_config() -> Result<Config> {
    use setup::{Builder, Env, File, TomlText};

    let profile = profile()?;
    let profile_config = format!("bin_text.{profile}.toml");
    let default_config = include_str!("../../assets/default_config.toml");

    Builder::new()
        .add_layer(TomlText::new(default_config))
        .add_layer(File::new("bin_text.toml").required(false))
        .add_layer(File::new(&profile_config).required(false))
        .add_layer(Env::new(ENV_PREFIX))
        .build()
}
