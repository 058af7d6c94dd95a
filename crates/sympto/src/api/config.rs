use std::{env, net::SocketAddr, path::PathBuf};

use crate::api::errors::AppError;

#[derive(Clone)]
pub struct Config {
  pub env: Env,
  pub listen_addr: String,

  // Reference tables, bundled copies are used when unset
  pub symptoms_path: Option<PathBuf>,
  pub descriptions_path: Option<PathBuf>,

  // Spelling correction
  pub dictionary_path: Option<PathBuf>,
  pub spelling: bool,

  // Debugging
  pub enable_prometheus: bool,
}

impl Config {
  pub fn from_env() -> Result<Config, AppError> {
    let config = Config {
      env: Env::from(env::var("ENV").unwrap_or("dev".into())),
      listen_addr: env::var("LISTEN_ADDR").unwrap_or("0.0.0.0:8000".into()),
      symptoms_path: env::var("SYMPTOMS_PATH").ok().map(PathBuf::from),
      descriptions_path: env::var("DESCRIPTIONS_PATH").ok().map(PathBuf::from),
      dictionary_path: env::var("DICTIONARY_PATH").ok().map(PathBuf::from),
      spelling: env::var("SPELLING").map(|value| value != "0").unwrap_or(true),
      enable_prometheus: env::var("ENABLE_PROMETHEUS").unwrap_or_default() == "1",
    };

    if let Err(err) = config.listen_addr.parse::<SocketAddr>() {
      return Err(AppError::ConfigError(format!("invalid listen address {}: {err}", config.listen_addr)));
    }

    Ok(config)
  }
}

impl Default for Config {
  fn default() -> Config {
    Config {
      env: Env::Dev,
      listen_addr: "0.0.0.0:8000".into(),
      symptoms_path: None,
      descriptions_path: None,
      dictionary_path: None,
      spelling: true,
      enable_prometheus: false,
    }
  }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Env {
  Dev,
  Production,
}

impl From<String> for Env {
  fn from(value: String) -> Self {
    match value.as_ref() {
      "dev" => Env::Dev,
      "production" => Env::Production,
      _ => Env::Dev,
    }
  }
}
