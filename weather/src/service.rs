// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use tracing::{info, instrument};

use crate::{
  error::WeatherError,
  location::{IpinfoResolver, LocationResolver},
  models::Weather,
  normalize::normalize,
  provider::{OpenWeather, WeatherFetcher},
};

/// Composes the pipeline: resolve location → fetch raw document → normalize.
///
/// Stateless between invocations; concurrent callers each get their own
/// network round trips.
pub struct WeatherQueryService<R = IpinfoResolver, F = OpenWeather> {
  resolver: R,
  provider: F,
}

impl WeatherQueryService {
  pub fn new(api_key: impl Into<String>) -> Self {
    Self {
      resolver: IpinfoResolver::new(),
      provider: OpenWeather::new(api_key),
    }
  }
}

impl<R, F> WeatherQueryService<R, F>
where
  R: LocationResolver,
  F: WeatherFetcher,
{
  pub fn with_parts(resolver: R, provider: F) -> Self {
    Self { resolver, provider }
  }

  /// The first failure is propagated unchanged; in particular a failed
  /// resolution never reaches the weather provider.
  #[instrument(skip(self))]
  pub async fn current_weather(&self) -> Result<Weather, WeatherError> {
    let coordinates = self.resolver.resolve().await?;
    let document = self.provider.fetch(coordinates).await?;
    let weather = normalize(&document)?;
    info!(location = %weather.location, "normalized current weather");
    Ok(weather)
  }
}
