// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::ConfigError;
use std::collections::HashMap;
use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT: Once = Once::new();
static DEFAULT_FILENAME: &str = ".env";

#[derive(Debug, Default)]
pub struct Dotenv {
  vars: HashMap<String, String>,
}

impl Dotenv {
  pub fn new() -> Self {
    Self {
      vars: HashMap::new(),
    }
  }

  /// Reads KEY=VALUE pairs from a .env file; blank lines and `#` comments
  /// are skipped, single or double quotes around values are stripped.
  pub fn load_from_file<P: AsRef<Path>>(&mut self, filename: Option<P>) -> Result<(), ConfigError> {
    let path = filename.map_or_else(
      || PathBuf::from(DEFAULT_FILENAME),
      |p| p.as_ref().to_path_buf(),
    );

    if !path.exists() {
      return Err(ConfigError::PathNotFound(path));
    }

    let file = File::open(&path)?;
    let reader = BufReader::new(file);

    for (line_num, line) in reader.lines().enumerate() {
      let line = line?;
      let trimmed = line.trim();

      if trimmed.is_empty() || trimmed.starts_with('#') {
        continue;
      }

      match parse_line(trimmed) {
        Ok((key, value)) => {
          self.vars.insert(key, value);
        }
        Err(err) => {
          return Err(ConfigError::MalformedEntry(format!(
            "line {}: {}",
            line_num + 1,
            err
          )));
        }
      }
    }

    Ok(())
  }

  pub fn set_env_vars(&self) {
    for (key, value) in &self.vars {
      env::set_var(key, value);
    }
  }

  pub fn get(&self, key: &str) -> Option<&String> {
    self.vars.get(key)
  }
}

fn parse_line(line: &str) -> Result<(String, String), String> {
  let parts: Vec<&str> = line.splitn(2, '=').collect();

  if parts.len() != 2 {
    return Err("Invalid format: missing '='".to_string());
  }

  let key = parts[0].trim();
  let value = parts[1].trim();

  if key.is_empty() {
    return Err("Empty key".to_string());
  }

  let value = value.trim_matches('"').trim_matches('\'').to_string();

  Ok((key.to_string(), value))
}

/// Loads the default .env into the process environment once.
pub fn load() -> Result<(), ConfigError> {
  let mut result = Ok(());
  INIT.call_once(|| {
    let mut config = Dotenv::new();
    match config.load_from_file::<&str>(None) {
      Ok(()) => {
        config.set_env_vars();
      }
      Err(err) => {
        result = Err(err);
      }
    }
  });
  result
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_simple_pairs() {
    assert_eq!(
      parse_line("BOT_API_TOKEN=123:abc").unwrap(),
      ("BOT_API_TOKEN".to_string(), "123:abc".to_string())
    );
  }

  #[test]
  fn strips_quotes_and_whitespace() {
    assert_eq!(
      parse_line(r#"OWM_API_KEY = "secret" "#).unwrap(),
      ("OWM_API_KEY".to_string(), "secret".to_string())
    );
    assert_eq!(
      parse_line("KEY='value'").unwrap(),
      ("KEY".to_string(), "value".to_string())
    );
  }

  #[test]
  fn keeps_equals_signs_inside_values() {
    assert_eq!(
      parse_line("KEY=a=b").unwrap(),
      ("KEY".to_string(), "a=b".to_string())
    );
  }

  #[test]
  fn rejects_lines_without_separator_or_key() {
    assert!(parse_line("NOVALUE").is_err());
    assert!(parse_line("=value").is_err());
  }

  #[test]
  fn skips_comments_and_blank_lines() {
    let dir = std::env::temp_dir().join("vitweather-dotenv-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(".env");
    std::fs::write(&path, "# comment\n\nBOT_API_TOKEN=tok\n").unwrap();

    let mut dotenv = Dotenv::new();
    dotenv.load_from_file(Some(&path)).unwrap();
    assert_eq!(dotenv.get("BOT_API_TOKEN"), Some(&"tok".to_string()));

    std::fs::remove_dir_all(&dir).ok();
  }

  #[test]
  fn missing_file_is_reported() {
    let mut dotenv = Dotenv::new();
    let err = dotenv
      .load_from_file(Some("/nonexistent/.env"))
      .unwrap_err();
    assert!(matches!(err, ConfigError::PathNotFound(_)));
  }
}
