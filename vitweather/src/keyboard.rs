// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.

/// Inline keyboards shown under each reply: rows of (label, callback_data).
pub type Keyboard = &'static [&'static [(&'static str, &'static str)]];

pub const WEATHER: Keyboard = &[
  &[("Update", "weather")],
  &[("Wind", "wind"), ("Sun time", "sun_time")],
];

pub const WIND: Keyboard = &[
  &[("Update", "wind")],
  &[("Weather", "weather"), ("Sun time", "sun_time")],
];

pub const SUN_TIME: Keyboard = &[
  &[("Update", "sun_time")],
  &[("Weather", "weather"), ("Wind", "wind")],
];

pub const HELP: Keyboard = &[&[("Current weather", "weather")]];
