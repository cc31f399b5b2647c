// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde_json::Value;

use crate::{
  error::NormalizationError,
  models::{CompassDirection, Weather},
};

/// Turns a raw current-weather document into a `Weather` value.
///
/// Pure and deterministic: no I/O, same input always yields the same output.
/// Construction is all-or-nothing — any missing or mistyped field fails the
/// whole document. Temperatures and wind speed are taken verbatim (the
/// request already asked for metric units); the condition description gets
/// its first character uppercased; sun times are localized with the
/// document's own UTC offset.
pub fn normalize(document: &Value) -> Result<Weather, NormalizationError> {
  let tz = timezone(document)?;

  Ok(Weather {
    location: string(document, "name")?.to_string(),
    temperature: number(document, "main.temp")?,
    feels_like: number(document, "main.feels_like")?,
    description: capitalize(description(document)?),
    wind_speed: number(document, "wind.speed")?,
    wind_direction: CompassDirection::from_degrees(number(document, "wind.deg")?)?,
    sunrise: sun_time(document, "sys.sunrise", &tz)?,
    sunset: sun_time(document, "sys.sunset", &tz)?,
  })
}

fn lookup<'a>(document: &'a Value, path: &'static str) -> Result<&'a Value, NormalizationError> {
  let mut current = document;
  for segment in path.split('.') {
    current = current
      .get(segment)
      .ok_or(NormalizationError::MissingField(path))?;
  }
  Ok(current)
}

fn number(document: &Value, path: &'static str) -> Result<f64, NormalizationError> {
  lookup(document, path)?
    .as_f64()
    .ok_or(NormalizationError::WrongType {
      field: path,
      expected: "a number",
    })
}

fn integer(document: &Value, path: &'static str) -> Result<i64, NormalizationError> {
  lookup(document, path)?
    .as_i64()
    .ok_or(NormalizationError::WrongType {
      field: path,
      expected: "an integer",
    })
}

fn string<'a>(document: &'a Value, path: &'static str) -> Result<&'a str, NormalizationError> {
  lookup(document, path)?
    .as_str()
    .ok_or(NormalizationError::WrongType {
      field: path,
      expected: "a string",
    })
}

fn description(document: &Value) -> Result<&str, NormalizationError> {
  let conditions = lookup(document, "weather")?
    .as_array()
    .ok_or(NormalizationError::WrongType {
      field: "weather",
      expected: "an array",
    })?;

  conditions
    .first()
    .and_then(|condition| condition.get("description"))
    .ok_or(NormalizationError::MissingField("weather[0].description"))?
    .as_str()
    .ok_or(NormalizationError::WrongType {
      field: "weather[0].description",
      expected: "a string",
    })
}

// UTC offset in seconds east, reported by the provider alongside the data.
fn timezone(document: &Value) -> Result<FixedOffset, NormalizationError> {
  let offset = integer(document, "timezone")?;
  i32::try_from(offset)
    .ok()
    .and_then(FixedOffset::east_opt)
    .ok_or(NormalizationError::WrongType {
      field: "timezone",
      expected: "a UTC offset in seconds",
    })
}

fn sun_time(
  document: &Value,
  path: &'static str,
  tz: &FixedOffset,
) -> Result<DateTime<FixedOffset>, NormalizationError> {
  let epoch = integer(document, path)?;
  Utc
    .timestamp_opt(epoch, 0)
    .single()
    .map(|dt| dt.with_timezone(tz))
    .ok_or(NormalizationError::WrongType {
      field: path,
      expected: "a unix timestamp",
    })
}

// "capitalize" semantics: first character uppercased, the rest untouched.
fn capitalize(text: &str) -> String {
  let mut chars = text.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Timelike;
  use serde_json::json;

  fn paris_document() -> Value {
    json!({
      "name": "Paris",
      "timezone": 3600,
      "main": {"temp": 18.2, "feels_like": 17.5},
      "weather": [{"description": "light rain"}],
      "wind": {"speed": 3.1, "deg": 200},
      "sys": {"sunrise": 1_700_000_000, "sunset": 1_700_040_000}
    })
  }

  #[test]
  fn normalizes_a_complete_document() {
    let weather = normalize(&paris_document()).unwrap();

    assert_eq!(weather.location, "Paris");
    assert_eq!(weather.temperature, 18.2);
    assert_eq!(weather.feels_like, 17.5);
    assert_eq!(weather.description, "Light rain");
    assert_eq!(weather.wind_speed, 3.1);
    assert_eq!(weather.wind_direction, CompassDirection::South);
    assert_eq!(weather.sunrise.timestamp(), 1_700_000_000);
    assert_eq!(weather.sunset.timestamp(), 1_700_040_000);
  }

  #[test]
  fn normalize_is_deterministic() {
    let document = paris_document();
    assert_eq!(normalize(&document).unwrap(), normalize(&document).unwrap());
  }

  #[test]
  fn sun_times_are_local_to_the_queried_location() {
    let weather = normalize(&paris_document()).unwrap();

    // 1_700_000_000 is 22:13:20 UTC; the document claims UTC+1.
    assert_eq!(weather.sunrise.offset().local_minus_utc(), 3600);
    assert_eq!(weather.sunrise.hour(), 23);
    assert_eq!(weather.sunrise.minute(), 13);
  }

  #[test]
  fn each_missing_field_fails_the_whole_document() {
    let cases = [
      ("name", "name"),
      ("timezone", "timezone"),
      ("main", "main.temp"),
      ("weather", "weather"),
      ("wind", "wind.speed"),
      ("sys", "sys.sunrise"),
    ];

    for (removed, reported) in cases {
      let mut document = paris_document();
      document.as_object_mut().unwrap().remove(removed);
      assert_eq!(
        normalize(&document).unwrap_err(),
        NormalizationError::MissingField(reported),
        "removing '{removed}'"
      );
    }
  }

  #[test]
  fn each_missing_nested_field_fails_the_whole_document() {
    let cases = [
      ("main", "temp", "main.temp"),
      ("main", "feels_like", "main.feels_like"),
      ("wind", "speed", "wind.speed"),
      ("wind", "deg", "wind.deg"),
      ("sys", "sunrise", "sys.sunrise"),
      ("sys", "sunset", "sys.sunset"),
    ];

    for (section, removed, reported) in cases {
      let mut document = paris_document();
      document[section].as_object_mut().unwrap().remove(removed);
      assert_eq!(
        normalize(&document).unwrap_err(),
        NormalizationError::MissingField(reported),
        "removing '{section}.{removed}'"
      );
    }
  }

  #[test]
  fn empty_condition_list_is_a_missing_description() {
    let mut document = paris_document();
    document["weather"] = json!([]);
    assert_eq!(
      normalize(&document).unwrap_err(),
      NormalizationError::MissingField("weather[0].description")
    );
  }

  #[test]
  fn mistyped_fields_are_reported_as_wrong_type() {
    let mut document = paris_document();
    document["main"]["temp"] = json!("warm");
    assert_eq!(
      normalize(&document).unwrap_err(),
      NormalizationError::WrongType {
        field: "main.temp",
        expected: "a number",
      }
    );

    let mut document = paris_document();
    document["name"] = json!(42);
    assert_eq!(
      normalize(&document).unwrap_err(),
      NormalizationError::WrongType {
        field: "name",
        expected: "a string",
      }
    );

    let mut document = paris_document();
    document["sys"]["sunrise"] = json!(17.5);
    assert_eq!(
      normalize(&document).unwrap_err(),
      NormalizationError::WrongType {
        field: "sys.sunrise",
        expected: "an integer",
      }
    );
  }

  #[test]
  fn description_is_capitalized_not_title_cased() {
    let mut document = paris_document();
    document["weather"][0]["description"] = json!("scattered clouds");
    assert_eq!(normalize(&document).unwrap().description, "Scattered clouds");

    document["weather"][0]["description"] = json!("");
    assert_eq!(normalize(&document).unwrap().description, "");
  }

  #[test]
  fn wind_direction_edge_degrees() {
    let mut document = paris_document();

    document["wind"]["deg"] = json!(360);
    assert_eq!(normalize(&document).unwrap().wind_direction, CompassDirection::North);

    document["wind"]["deg"] = json!(22);
    assert_eq!(normalize(&document).unwrap().wind_direction, CompassDirection::North);

    document["wind"]["deg"] = json!(23);
    assert_eq!(normalize(&document).unwrap().wind_direction, CompassDirection::Northeast);
  }

  #[test]
  fn out_of_range_wind_direction_fails_normalization() {
    let mut document = paris_document();
    document["wind"]["deg"] = json!(-10);
    assert_eq!(
      normalize(&document).unwrap_err(),
      NormalizationError::OutOfRangeDirection(-10.0)
    );
  }
}
