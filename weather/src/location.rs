// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
  constants::{GEO_API_URL, REQUEST_TIMEOUT},
  error::ResolutionError,
};

/// Approximate geographic position derived from the caller's IP.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
  pub latitude: f64,
  pub longitude: f64,
}

#[async_trait]
pub trait LocationResolver: Send + Sync {
  async fn resolve(&self) -> Result<Coordinates, ResolutionError>;
}

/// Resolves coordinates from the network origin via ipinfo.io, which reports
/// them as a combined `"lat,lon"` string in the `loc` field.
pub struct IpinfoResolver {
  client: Client,
}

impl IpinfoResolver {
  pub fn new() -> Self {
    Self {
      client: Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("Failed to create HTTP client"),
    }
  }
}

impl Default for IpinfoResolver {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl LocationResolver for IpinfoResolver {
  #[instrument(skip(self))]
  async fn resolve(&self) -> Result<Coordinates, ResolutionError> {
    let response = self.client.get(GEO_API_URL).send().await?;

    let status = response.status();
    if !status.is_success() {
      return Err(ResolutionError::Status(status));
    }

    let body = response.text().await?;
    let data: Value = serde_json::from_str(&body)?;

    let loc = data
      .get("loc")
      .and_then(Value::as_str)
      .ok_or(ResolutionError::MissingLocation("loc"))?;

    let coordinates = parse_loc(loc)?;
    debug!(latitude = coordinates.latitude, longitude = coordinates.longitude, "resolved location");
    Ok(coordinates)
  }
}

fn parse_loc(loc: &str) -> Result<Coordinates, ResolutionError> {
  let malformed = || ResolutionError::MalformedCoordinates(loc.to_string());

  let (lat, lon) = loc.split_once(',').ok_or_else(malformed)?;
  let latitude = lat.trim().parse().map_err(|_| malformed())?;
  let longitude = lon.trim().parse().map_err(|_| malformed())?;

  Ok(Coordinates { latitude, longitude })
}
