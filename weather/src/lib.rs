// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod error;
pub mod location;
pub mod models;
pub mod normalize;
pub mod provider;
pub mod service;

pub use error::{NormalizationError, ProviderError, ResolutionError, WeatherError};
pub use location::{Coordinates, IpinfoResolver, LocationResolver};
pub use models::{CompassDirection, Weather};
pub use normalize::normalize;
pub use provider::{OpenWeather, WeatherFetcher};
pub use service::WeatherQueryService;

pub mod constants {
  use std::time::Duration;
  pub(crate) const GEO_API_URL: &str = "https://ipinfo.io/json";
  pub(crate) const API_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
  pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
}
