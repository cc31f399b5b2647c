// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use thiserror::Error;

/// Failures while looking the caller's coordinates up by IP.
#[derive(Debug, Error)]
pub enum ResolutionError {
  #[error("geolocation request failed: {0}")]
  Http(#[from] reqwest::Error),
  #[error("geolocation request failed with status {0}")]
  Status(reqwest::StatusCode),
  #[error("geolocation response is not valid JSON: {0}")]
  InvalidJson(#[from] serde_json::Error),
  #[error("geolocation response has no usable '{0}' field")]
  MissingLocation(&'static str),
  #[error("could not parse coordinates from {0:?}")]
  MalformedCoordinates(String),
}

/// Failures while fetching the raw current-weather document.
#[derive(Debug, Error)]
pub enum ProviderError {
  #[error("failed to build weather API URL: {0}")]
  Url(#[from] url::ParseError),
  #[error("weather request failed: {0}")]
  Http(#[from] reqwest::Error),
  #[error("rate limit exceeded")]
  RateLimited,
  #[error("weather request failed with status {0}")]
  Status(reqwest::StatusCode),
  #[error("weather response is not valid JSON: {0}")]
  InvalidJson(#[from] serde_json::Error),
}

/// Failures while turning a raw document into a `Weather` value.
#[derive(Debug, Error, PartialEq)]
pub enum NormalizationError {
  #[error("required field '{0}' is missing")]
  MissingField(&'static str),
  #[error("field '{field}' is not {expected}")]
  WrongType {
    field: &'static str,
    expected: &'static str,
  },
  #[error("wind direction {0}° is outside [0, 360]")]
  OutOfRangeDirection(f64),
}

/// Union of the pipeline error kinds, surfaced to callers unrecovered.
#[derive(Debug, Error)]
pub enum WeatherError {
  #[error(transparent)]
  Resolution(#[from] ResolutionError),
  #[error(transparent)]
  Provider(#[from] ProviderError),
  #[error(transparent)]
  Normalization(#[from] NormalizationError),
}
