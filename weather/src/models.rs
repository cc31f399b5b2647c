// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::error::NormalizationError;

/// Eight-sector compass rose; each variant is pinned to its canonical degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CompassDirection {
  North,
  Northeast,
  East,
  Southeast,
  South,
  Southwest,
  West,
  Northwest,
}

impl CompassDirection {
  pub const fn degrees(self) -> u16 {
    match self {
      CompassDirection::North => 0,
      CompassDirection::Northeast => 45,
      CompassDirection::East => 90,
      CompassDirection::Southeast => 135,
      CompassDirection::South => 180,
      CompassDirection::Southwest => 225,
      CompassDirection::West => 270,
      CompassDirection::Northwest => 315,
    }
  }

  pub const fn as_str(self) -> &'static str {
    match self {
      CompassDirection::North => "North",
      CompassDirection::Northeast => "Northeast",
      CompassDirection::East => "East",
      CompassDirection::Southeast => "Southeast",
      CompassDirection::South => "South",
      CompassDirection::Southwest => "Southwest",
      CompassDirection::West => "West",
      CompassDirection::Northwest => "Northwest",
    }
  }

  /// Buckets a wind direction into the nearest 45° sector.
  ///
  /// Ties round half away from zero (`f64::round`), so 22.5° resolves to
  /// `Northeast`. Exactly 360° normalizes to `North`. Anything outside
  /// `[0, 360]` (including NaN) is rejected as out of range.
  pub fn from_degrees(deg: f64) -> Result<Self, NormalizationError> {
    if !(0.0..=360.0).contains(&deg) {
      return Err(NormalizationError::OutOfRangeDirection(deg));
    }

    let mut bucket = ((deg / 45.0).round() as u16) * 45;
    if bucket == 360 {
      bucket = 0;
    }

    Ok(match bucket {
      0 => CompassDirection::North,
      45 => CompassDirection::Northeast,
      90 => CompassDirection::East,
      135 => CompassDirection::Southeast,
      180 => CompassDirection::South,
      225 => CompassDirection::Southwest,
      270 => CompassDirection::West,
      _ => CompassDirection::Northwest,
    })
  }
}

impl std::fmt::Display for CompassDirection {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Canonical output of the weather pipeline.
///
/// Constructed all-or-nothing by `normalize`; never mutated afterwards.
/// Temperatures are in °C, wind speed in m/s, sun times are wall-clock
/// local to the queried location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Weather {
  pub location: String,
  pub temperature: f64,
  pub feels_like: f64,
  pub description: String,
  pub wind_speed: f64,
  pub wind_direction: CompassDirection,
  pub sunrise: DateTime<FixedOffset>,
  pub sunset: DateTime<FixedOffset>,
}

#[cfg(test)]
mod tests {
  use super::*;

  const ALL: [CompassDirection; 8] = [
    CompassDirection::North,
    CompassDirection::Northeast,
    CompassDirection::East,
    CompassDirection::Southeast,
    CompassDirection::South,
    CompassDirection::Southwest,
    CompassDirection::West,
    CompassDirection::Northwest,
  ];

  #[test]
  fn canonical_degrees_map_to_themselves() {
    for dir in ALL {
      assert_eq!(CompassDirection::from_degrees(f64::from(dir.degrees())).unwrap(), dir);
    }
  }

  #[test]
  fn adding_a_sector_shifts_by_one_direction() {
    for (i, dir) in ALL.iter().enumerate() {
      let shifted = CompassDirection::from_degrees(f64::from(dir.degrees()) + 45.0).unwrap();
      assert_eq!(shifted, ALL[(i + 1) % 8]);
    }
  }

  #[test]
  fn full_circle_normalizes_to_north() {
    assert_eq!(CompassDirection::from_degrees(360.0).unwrap(), CompassDirection::North);
    assert_eq!(CompassDirection::from_degrees(0.0).unwrap(), CompassDirection::North);
  }

  #[test]
  fn rounds_to_nearest_sector() {
    assert_eq!(CompassDirection::from_degrees(22.0).unwrap(), CompassDirection::North);
    assert_eq!(CompassDirection::from_degrees(23.0).unwrap(), CompassDirection::Northeast);
    assert_eq!(CompassDirection::from_degrees(200.0).unwrap(), CompassDirection::South);
    assert_eq!(CompassDirection::from_degrees(210.0).unwrap(), CompassDirection::Southwest);
    assert_eq!(CompassDirection::from_degrees(350.0).unwrap(), CompassDirection::North);
  }

  #[test]
  fn midpoints_round_half_away_from_zero() {
    assert_eq!(CompassDirection::from_degrees(22.5).unwrap(), CompassDirection::Northeast);
    assert_eq!(CompassDirection::from_degrees(67.5).unwrap(), CompassDirection::East);
    assert_eq!(CompassDirection::from_degrees(337.5).unwrap(), CompassDirection::North);
  }

  #[test]
  fn out_of_range_degrees_are_rejected() {
    for deg in [-0.1, -45.0, 360.1, 720.0, f64::NAN] {
      assert!(matches!(
        CompassDirection::from_degrees(deg),
        Err(NormalizationError::OutOfRangeDirection(_))
      ));
    }
  }
}
