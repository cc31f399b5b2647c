// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  client::TelegramClient,
  config::{TelegramConfig, MAX_MESSAGE_LENGTH},
  error::TelegramError,
  types::{CallbackAnswer, InlineKeyboard, InlineKeyboardButton, Message, ParseMode},
};

#[derive(Default)]
pub struct MessageBuilder<'a> {
  pub(crate) chat_id: Option<i64>,
  pub(crate) text: Option<&'a str>,
  pub(crate) parse_mode: Option<ParseMode>,
  pub(crate) disable_preview: Option<bool>,
  pub(crate) silent: Option<bool>,
  pub(crate) reply_to: Option<i64>,
  pub(crate) buttons: Vec<Vec<(String, String)>>,
}

impl<'a> MessageBuilder<'a> {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn chat_id(mut self, id: i64) -> Self {
    self.chat_id = Some(id);
    self
  }

  pub fn text(mut self, text: &'a str) -> Self {
    self.text = Some(text);
    self
  }

  pub fn parse_mode(mut self, mode: ParseMode) -> Self {
    self.parse_mode = Some(mode);
    self
  }

  pub fn disable_preview(mut self) -> Self {
    self.disable_preview = Some(true);
    self
  }

  pub fn silent(mut self) -> Self {
    self.silent = Some(true);
    self
  }

  pub fn reply_to(mut self, message_id: i64) -> Self {
    self.reply_to = Some(message_id);
    self
  }

  /// Adds one keyboard row of (label, callback_data) buttons.
  pub fn button(mut self, buttons: Vec<(impl Into<String>, impl Into<String>)>) -> Self {
    let row = buttons
      .into_iter()
      .map(|(text, data)| (text.into(), data.into()))
      .collect();
    self.buttons.push(row);
    self
  }

  pub async fn send(self, client: &TelegramClient) -> Result<(), TelegramError> {
    let chat_id = self
      .chat_id
      .ok_or_else(|| TelegramError::ApiError("Chat ID is required".into()))?;

    let text = self
      .text
      .ok_or_else(|| TelegramError::ApiError("Message text is required".into()))?;

    if text.len() > MAX_MESSAGE_LENGTH {
      return Err(TelegramError::ApiError(format!(
        "Message too long: {} characters (max {})",
        text.len(),
        MAX_MESSAGE_LENGTH
      )));
    }

    let reply_markup = if !self.buttons.is_empty() {
      Some(InlineKeyboard {
        inline_keyboard: self
          .buttons
          .into_iter()
          .map(|row| {
            row
              .into_iter()
              .map(|(text, callback_data)| InlineKeyboardButton {
                text,
                callback_data,
              })
              .collect()
          })
          .collect(),
      })
    } else {
      None
    };

    let message = Message {
      chat_id,
      text,
      parse_mode: self.parse_mode,
      disable_web_page_preview: self.disable_preview,
      disable_notification: self.silent,
      reply_to_message_id: self.reply_to,
      reply_markup,
    };

    client.send_message(message).await
  }
}

#[derive(Default)]
pub struct CallbackAnswerBuilder<'a> {
  pub(crate) callback_query_id: Option<&'a str>,
  pub(crate) text: Option<&'a str>,
  pub(crate) show_alert: Option<bool>,
  pub(crate) cache_time: Option<u64>,
}

impl<'a> CallbackAnswerBuilder<'a> {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn callback_query_id(mut self, id: &'a str) -> Self {
    self.callback_query_id = Some(id);
    self
  }

  pub fn text(mut self, text: &'a str) -> Self {
    self.text = Some(text);
    self
  }

  pub fn show_alert(mut self) -> Self {
    self.show_alert = Some(true);
    self
  }

  /// Client-side cache window (seconds) Telegram may reuse this answer for.
  pub fn cache_time(mut self, seconds: u64) -> Self {
    self.cache_time = Some(seconds);
    self
  }

  pub async fn send(self, client: &TelegramClient) -> Result<(), TelegramError> {
    let callback_query_id = self
      .callback_query_id
      .ok_or_else(|| TelegramError::ApiError("Callback query ID is required".into()))?;

    let answer = CallbackAnswer {
      callback_query_id,
      text: self.text,
      show_alert: self.show_alert,
      cache_time: self.cache_time,
    };

    client.answer_callback_query(answer).await
  }
}

#[derive(Default)]
pub struct TelegramClientBuilder {
  pub(crate) config: TelegramConfig,
}

impl TelegramClientBuilder {
  pub fn token(mut self, token: impl Into<String>) -> Self {
    self.config.token = token.into();
    self
  }

  pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
    self.config.timeout = timeout;
    self
  }

  pub fn retry_attempts(mut self, attempts: u32) -> Self {
    self.config.retry_attempts = attempts;
    self
  }

  pub fn retry_delay(mut self, delay: std::time::Duration) -> Self {
    self.config.retry_delay = delay;
    self
  }

  pub fn build(self) -> Result<TelegramClient, TelegramError> {
    if self.config.token.is_empty() {
      return Err(TelegramError::ConfigError("Bot token cannot be empty".into()));
    }

    let client = reqwest::Client::builder()
      .timeout(self.config.timeout)
      .build()
      .map_err(TelegramError::HttpError)?;

    Ok(TelegramClient {
      config: self.config,
      client,
    })
  }
}
