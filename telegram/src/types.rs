// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
  Markdown,
  Html,
  MarkdownV2,
}

#[derive(Debug, Serialize)]
pub(crate) struct InlineKeyboard {
  pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct InlineKeyboardButton {
  pub text: String,
  pub callback_data: String,
}

#[derive(Deserialize)]
pub(crate) struct TelegramResponse<T = serde_json::Value> {
  pub ok: bool,
  #[serde(default)]
  pub description: String,
  pub result: Option<T>,
}

#[derive(Serialize)]
pub(crate) struct Message<'a> {
  pub chat_id: i64,
  pub text: &'a str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_web_page_preview: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_notification: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_to_message_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboard>,
}

#[derive(Serialize)]
pub(crate) struct CallbackAnswer<'a> {
  pub callback_query_id: &'a str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub text: Option<&'a str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub show_alert: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub cache_time: Option<u64>,
}

#[derive(Serialize)]
pub(crate) struct GetUpdates {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub offset: Option<i64>,
  pub timeout: u64,
  pub allowed_updates: &'static [&'static str],
}

/// One entry from getUpdates; only the kinds the bot handles are decoded.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
  pub update_id: i64,
  #[serde(default)]
  pub message: Option<IncomingMessage>,
  #[serde(default)]
  pub callback_query: Option<CallbackQuery>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
  pub message_id: i64,
  pub chat: Chat,
  #[serde(default)]
  pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
  pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
  pub id: String,
  #[serde(default)]
  pub data: Option<String>,
}
