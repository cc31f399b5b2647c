// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::{Context, Result};
use config::BotConfig;
use telegram::TelegramClient;
use weather::WeatherQueryService;

mod dispatcher;
mod keyboard;
mod messages;

#[cfg(debug_assertions)]
fn setup_logging() {
  tracing_subscriber::fmt()
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .init();
}

#[cfg(not(debug_assertions))]
fn setup_logging() {
  tracing_subscriber::fmt().init();
}

#[tokio::main]
async fn main() -> Result<()> {
  #[cfg(debug_assertions)]
  match config::dotenv::load() {
    Ok(()) | Err(config::ConfigError::PathNotFound(_)) => {}
    Err(err) => return Err(err).context("Failed to load .env"),
  }
  setup_logging();

  let config = BotConfig::from_env().context("Failed to load bot configuration")?;

  let client = TelegramClient::builder()
    .token(config.bot_token.clone())
    .build()
    .context("Failed to build Telegram client")?;
  let service = WeatherQueryService::new(config.owm_api_key.clone());

  dispatcher::Dispatcher::new(client, service, config.callback_cache_time)
    .run()
    .await
}
