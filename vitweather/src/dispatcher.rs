// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use std::time::Duration;

use anyhow::Result;
use telegram::{CallbackQuery, IncomingMessage, TelegramClient, TelegramError, Update};
use tracing::{error, info, instrument, warn};
use weather::WeatherQueryService;

use crate::{keyboard, messages};

const POLL_RETRY_DELAY: Duration = Duration::from_secs(3);

/// The three weather queries a chat can ask for, via command or callback.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Query {
  Weather,
  Wind,
  SunTime,
}

impl Query {
  fn from_callback(data: &str) -> Option<Self> {
    match data {
      "weather" => Some(Query::Weather),
      "wind" => Some(Query::Wind),
      "sun_time" => Some(Query::SunTime),
      _ => None,
    }
  }

  fn render(self, weather: &weather::Weather) -> String {
    match self {
      Query::Weather => messages::weather(weather),
      Query::Wind => messages::wind(weather),
      Query::SunTime => messages::sun_time(weather),
    }
  }

  fn keyboard(self) -> keyboard::Keyboard {
    match self {
      Query::Weather => keyboard::WEATHER,
      Query::Wind => keyboard::WIND,
      Query::SunTime => keyboard::SUN_TIME,
    }
  }
}

pub struct Dispatcher {
  client: TelegramClient,
  service: WeatherQueryService,
  callback_cache_time: u64,
}

impl Dispatcher {
  pub fn new(
    client: TelegramClient,
    service: WeatherQueryService,
    callback_cache_time: u64,
  ) -> Self {
    Self {
      client,
      service,
      callback_cache_time,
    }
  }

  /// Long-polls Telegram forever, handling each update independently; a
  /// failed update is logged and never stops the loop.
  #[instrument(skip(self))]
  pub async fn run(&self) -> Result<()> {
    info!("Starting long polling");
    let mut offset = None;

    loop {
      let updates = match self.client.get_updates(offset).await {
        Ok(updates) => updates,
        Err(err) => {
          warn!("Failed to fetch updates: {err}");
          tokio::time::sleep(POLL_RETRY_DELAY).await;
          continue;
        }
      };

      for update in updates {
        offset = Some(update.update_id + 1);
        if let Err(err) = self.handle_update(update).await {
          warn!("Failed to handle update: {err}");
        }
      }
    }
  }

  async fn handle_update(&self, update: Update) -> Result<(), TelegramError> {
    if let Some(message) = update.message {
      self.handle_command(message).await
    } else if let Some(callback) = update.callback_query {
      self.handle_callback(callback).await
    } else {
      Ok(())
    }
  }

  async fn handle_command(&self, message: IncomingMessage) -> Result<(), TelegramError> {
    let Some(command) = message.text.as_deref().and_then(parse_command) else {
      return Ok(());
    };

    match command {
      "/start" | "/weather" => self.reply_query(message.chat.id, Query::Weather).await,
      "/wind" => self.reply_query(message.chat.id, Query::Wind).await,
      "/sun_time" => self.reply_query(message.chat.id, Query::SunTime).await,
      "/help" => {
        let mut builder = self
          .client
          .message()
          .chat_id(message.chat.id)
          .text(messages::help());
        for row in keyboard::HELP {
          builder = builder.button(row.to_vec());
        }
        builder.send(&self.client).await
      }
      _ => Ok(()),
    }
  }

  async fn handle_callback(&self, callback: CallbackQuery) -> Result<(), TelegramError> {
    let Some(query) = callback.data.as_deref().and_then(Query::from_callback) else {
      // Unknown payload: still answer, or the chat keeps its spinner.
      return self
        .client
        .callback_answer()
        .callback_query_id(&callback.id)
        .send(&self.client)
        .await;
    };

    let text = self.query_text(query).await;

    self
      .client
      .callback_answer()
      .callback_query_id(&callback.id)
      .text(&text)
      .show_alert()
      .cache_time(self.callback_cache_time)
      .send(&self.client)
      .await
  }

  async fn reply_query(&self, chat_id: i64, query: Query) -> Result<(), TelegramError> {
    let text = self.query_text(query).await;

    let mut builder = self.client.message().chat_id(chat_id).text(&text);
    for row in query.keyboard() {
      builder = builder.button(row.to_vec());
    }
    builder.send(&self.client).await
  }

  async fn query_text(&self, query: Query) -> String {
    match self.service.current_weather().await {
      Ok(weather) => query.render(&weather),
      Err(err) => {
        error!("Weather query failed: {err}");
        messages::error_reply(&err).to_string()
      }
    }
  }
}

// Accepts the bare and group-chat forms: "/weather", "/weather@somebot".
fn parse_command(text: &str) -> Option<&str> {
  let first = text.split_whitespace().next()?;
  if !first.starts_with('/') {
    return None;
  }
  Some(first.split('@').next().unwrap_or(first))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_bare_commands() {
    assert_eq!(parse_command("/weather"), Some("/weather"));
    assert_eq!(parse_command("/sun_time extra words"), Some("/sun_time"));
  }

  #[test]
  fn strips_bot_mention_suffix() {
    assert_eq!(parse_command("/wind@vitweather_bot"), Some("/wind"));
  }

  #[test]
  fn ignores_plain_text() {
    assert_eq!(parse_command("hello there"), None);
    assert_eq!(parse_command(""), None);
    assert_eq!(parse_command("   "), None);
  }

  #[test]
  fn callback_payloads_map_to_queries() {
    assert_eq!(Query::from_callback("weather"), Some(Query::Weather));
    assert_eq!(Query::from_callback("wind"), Some(Query::Wind));
    assert_eq!(Query::from_callback("sun_time"), Some(Query::SunTime));
    assert_eq!(Query::from_callback("bogus"), None);
  }
}
