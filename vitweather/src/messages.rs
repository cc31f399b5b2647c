// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use weather::{Weather, WeatherError};

pub fn weather(weather: &Weather) -> String {
  format!(
    "{}, {}\nTemperature is {}°C, feels like {}°C",
    weather.location, weather.description, weather.temperature, weather.feels_like
  )
}

pub fn wind(weather: &Weather) -> String {
  format!("{} wind {} m/s", weather.wind_direction, weather.wind_speed)
}

pub fn sun_time(weather: &Weather) -> String {
  format!(
    "Sunrise: {}\nSunset: {}",
    weather.sunrise.format("%H:%M"),
    weather.sunset.format("%H:%M")
  )
}

pub fn help() -> &'static str {
  "This bot can get the current weather from your IP address."
}

/// Each pipeline failure kind gets its own non-crashing user message.
pub fn error_reply(err: &WeatherError) -> &'static str {
  match err {
    WeatherError::Resolution(_) => "Could not determine your location. Please try again later.",
    WeatherError::Provider(_) => "The weather service is unavailable right now. Please try again later.",
    WeatherError::Normalization(_) => {
      "Got an unexpected answer from the weather service. Please try again later."
    }
  }
}
