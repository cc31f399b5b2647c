// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::{
  constants::{API_BASE_URL, REQUEST_TIMEOUT},
  error::ProviderError,
  location::Coordinates,
};

#[async_trait]
pub trait WeatherFetcher: Send + Sync {
  async fn fetch(&self, coordinates: Coordinates) -> Result<Value, ProviderError>;
}

/// Client for the OpenWeatherMap current-weather endpoint.
///
/// Returns the raw document as parsed JSON; semantic extraction is the
/// normalizer's job.
pub struct OpenWeather {
  api_key: String,
  client: Client,
}

impl OpenWeather {
  pub fn new(api_key: impl Into<String>) -> Self {
    Self {
      api_key: api_key.into(),
      client: Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("Failed to create HTTP client"),
    }
  }

  fn build_api_url(&self, coordinates: Coordinates) -> Result<Url, ProviderError> {
    Ok(Url::parse_with_params(
      API_BASE_URL,
      &[
        ("lat", coordinates.latitude.to_string()),
        ("lon", coordinates.longitude.to_string()),
        ("appid", self.api_key.clone()),
        ("units", "metric".to_string()),
      ],
    )?)
  }
}

#[async_trait]
impl WeatherFetcher for OpenWeather {
  #[instrument(skip(self))]
  async fn fetch(&self, coordinates: Coordinates) -> Result<Value, ProviderError> {
    let url = self.build_api_url(coordinates)?;
    let response = self.client.get(url).send().await?;

    match response.status() {
      reqwest::StatusCode::OK => (),
      reqwest::StatusCode::TOO_MANY_REQUESTS => return Err(ProviderError::RateLimited),
      status => return Err(ProviderError::Status(status)),
    }

    let body = response.text().await?;
    let document: Value = serde_json::from_str(&body)?;
    debug!("received current weather document");
    Ok(document)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn api_url_interpolates_coordinates_and_credentials() {
    let provider = OpenWeather::new("SECRET");
    let url = provider
      .build_api_url(Coordinates {
        latitude: 48.8566,
        longitude: 2.3522,
      })
      .unwrap();

    assert_eq!(url.host_str(), Some("api.openweathermap.org"));
    assert_eq!(url.path(), "/data/2.5/weather");

    let query: Vec<(String, String)> = url
      .query_pairs()
      .map(|(k, v)| (k.into_owned(), v.into_owned()))
      .collect();
    assert!(query.contains(&("lat".into(), "48.8566".into())));
    assert!(query.contains(&("lon".into(), "2.3522".into())));
    assert!(query.contains(&("appid".into(), "SECRET".into())));
    assert!(query.contains(&("units".into(), "metric".into())));
  }
}
