// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  builders::{CallbackAnswerBuilder, MessageBuilder, TelegramClientBuilder},
  config::{TelegramConfig, LONG_POLL_GRACE_SECS, LONG_POLL_TIMEOUT_SECS, TELEGRAM_API_BASE},
  error::TelegramError,
  types::{CallbackAnswer, GetUpdates, Message, TelegramResponse, Update},
};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

#[derive(Clone, Debug)]
pub struct TelegramClient {
  pub(crate) config: TelegramConfig,
  pub(crate) client: Client,
}

impl TelegramClient {
  pub fn builder() -> TelegramClientBuilder {
    TelegramClientBuilder::default()
  }

  pub fn message(&self) -> MessageBuilder {
    MessageBuilder::new()
  }

  pub fn callback_answer(&self) -> CallbackAnswerBuilder {
    CallbackAnswerBuilder::new()
  }

  fn method_url(&self, method: &str) -> String {
    format!("{}{}/{}", TELEGRAM_API_BASE, self.config.token, method)
  }

  /// Long-polls for new updates. `offset` must be one past the last
  /// update_id already handled, or Telegram replays old updates.
  #[instrument(skip(self))]
  pub async fn get_updates(&self, offset: Option<i64>) -> Result<Vec<Update>, TelegramError> {
    let request = GetUpdates {
      offset,
      timeout: LONG_POLL_TIMEOUT_SECS,
      allowed_updates: &["message", "callback_query"],
    };

    let response = self
      .client
      .post(self.method_url("getUpdates"))
      .timeout(Duration::from_secs(LONG_POLL_TIMEOUT_SECS + LONG_POLL_GRACE_SECS))
      .json(&request)
      .send()
      .await
      .map_err(TelegramError::HttpError)?;

    let status = response.status();

    if status.as_u16() == 429 {
      return Err(TelegramError::RateLimitExceeded);
    }

    let telegram_response: TelegramResponse<Vec<Update>> =
      response.json().await.map_err(TelegramError::HttpError)?;

    if !telegram_response.ok {
      return Err(TelegramError::ApiError(format!(
        "{}: {}",
        status, telegram_response.description
      )));
    }

    let updates = telegram_response.result.unwrap_or_default();
    debug!(count = updates.len(), "received updates");
    Ok(updates)
  }

  #[instrument(skip(self, message), fields(chat_id = message.chat_id))]
  pub(crate) async fn send_message(&self, message: Message<'_>) -> Result<(), TelegramError> {
    let url = self.method_url("sendMessage");

    for attempt in 0..=self.config.retry_attempts {
      match self.call_api(&url, &message).await {
        Ok(_) => {
          debug!("Message sent successfully");
          return Ok(());
        }
        Err(e) => {
          if attempt == self.config.retry_attempts {
            error!("All retry attempts failed");
            return Err(e);
          }
          warn!("Attempt {} failed: {}. Retrying...", attempt + 1, e);
          tokio::time::sleep(self.config.retry_delay).await;
        }
      }
    }

    Err(TelegramError::ApiError("Max retry attempts reached".into()))
  }

  #[instrument(skip(self, answer), fields(callback_query_id = answer.callback_query_id))]
  pub(crate) async fn answer_callback_query(
    &self,
    answer: CallbackAnswer<'_>,
  ) -> Result<(), TelegramError> {
    let url = self.method_url("answerCallbackQuery");

    for attempt in 0..=self.config.retry_attempts {
      match self.call_api(&url, &answer).await {
        Ok(_) => {
          debug!("Callback query answered");
          return Ok(());
        }
        Err(e) => {
          if attempt == self.config.retry_attempts {
            error!("All retry attempts failed");
            return Err(e);
          }
          warn!("Attempt {} failed: {}. Retrying...", attempt + 1, e);
          tokio::time::sleep(self.config.retry_delay).await;
        }
      }
    }

    Err(TelegramError::ApiError("Max retry attempts reached".into()))
  }

  async fn call_api<B: Serialize>(&self, url: &str, body: &B) -> Result<(), TelegramError> {
    let response = self
      .client
      .post(url)
      .json(body)
      .send()
      .await
      .map_err(TelegramError::HttpError)?;

    let status = response.status();

    if status.as_u16() == 429 {
      return Err(TelegramError::RateLimitExceeded);
    }

    let telegram_response: TelegramResponse =
      response.json().await.map_err(TelegramError::HttpError)?;

    if !telegram_response.ok {
      return Err(TelegramError::ApiError(format!(
        "{}: {}",
        status, telegram_response.description
      )));
    }

    Ok(())
  }
}
