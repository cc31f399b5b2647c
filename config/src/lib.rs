// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod dotenv;

use std::env;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_CALLBACK_CACHE_SECS: u64 = 60 * 5;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Missing {0} environment variable")]
  MissingVar(&'static str),
  #[error("IO error: {0}")]
  IoError(#[from] std::io::Error),
  #[error(".env file not found: {0}")]
  PathNotFound(PathBuf),
  #[error("Malformed .env entry: {0}")]
  MalformedEntry(String),
}

/// Startup configuration for the bot. Credentials are opaque strings; their
/// absence is a startup error, never a runtime one.
#[derive(Debug, Clone)]
pub struct BotConfig {
  pub bot_token: String,
  pub owm_api_key: String,
  /// Seconds Telegram may cache a callback-query answer on the client.
  pub callback_cache_time: u64,
}

impl BotConfig {
  pub fn from_env() -> Result<Self, ConfigError> {
    let config = Self {
      bot_token: required_var("BOT_API_TOKEN")?,
      owm_api_key: required_var("OWM_API_KEY")?,
      callback_cache_time: DEFAULT_CALLBACK_CACHE_SECS,
    };
    tracing::debug!("Loaded configuration from environment");
    Ok(config)
  }
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
  match env::var(name) {
    Ok(value) if !value.trim().is_empty() => Ok(value),
    _ => Err(ConfigError::MissingVar(name)),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  // Env vars are process-global, so the from_env cases run in one test.
  #[test]
  fn from_env_requires_both_credentials() {
    env::remove_var("BOT_API_TOKEN");
    env::remove_var("OWM_API_KEY");
    assert!(matches!(
      BotConfig::from_env().unwrap_err(),
      ConfigError::MissingVar("BOT_API_TOKEN")
    ));

    env::set_var("BOT_API_TOKEN", "123:abc");
    assert!(matches!(
      BotConfig::from_env().unwrap_err(),
      ConfigError::MissingVar("OWM_API_KEY")
    ));

    env::set_var("OWM_API_KEY", "owmkey");
    let config = BotConfig::from_env().unwrap();
    assert_eq!(config.bot_token, "123:abc");
    assert_eq!(config.owm_api_key, "owmkey");
    assert_eq!(config.callback_cache_time, 300);

    env::remove_var("BOT_API_TOKEN");
    env::remove_var("OWM_API_KEY");
  }

  #[test]
  fn blank_values_count_as_missing() {
    env::set_var("TEST_BLANK_VAR", "   ");
    assert!(required_var("TEST_BLANK_VAR").is_err());
    env::remove_var("TEST_BLANK_VAR");
  }
}
