use crate::{Command, Request, Responder, Result};
use std::time::Duration;
use teloxide::prelude::*;
use tokio::time::sleep;
use tracing::{info, warn};

/// Telegram bot answering student directory queries
#[derive(Clone)]
pub struct TelegramBot {
    /// Teloxide bot instance
    pub bot: Bot,
    responder: Responder,
}

impl TelegramBot {
    #[must_use]
    pub fn new(token: String, responder: Responder) -> Self {
        Self {
            bot: Bot::new(token),
            responder,
        }
    }

    /// Build the replies for a request off the async runtime, since a
    /// per-request reload reads the spreadsheet from disk.
    pub async fn respond(&self, request: Request) -> Result<Vec<String>> {
        let responder = self.responder.clone();
        let replies = tokio::task::spawn_blocking(move || responder.respond(&request)).await?;
        Ok(replies)
    }

    /// Test connection to Telegram API with backoff retry.
    /// Starts at 2s, increases by 2s each attempt, max 10s delay.
    /// Retries indefinitely until connection succeeds.
    async fn test_connection(&self) {
        const INITIAL_DELAY_SECS: u64 = 2;
        const MAX_DELAY_SECS: u64 = 10;

        let mut attempt = 1u64;
        loop {
            match self.bot.get_me().await {
                Ok(bot_user) => {
                    info!(
                        "Connected to Telegram API: @{} (id: {})",
                        bot_user
                            .user
                            .username
                            .unwrap_or_else(|| "no username".to_string()),
                        bot_user.user.id
                    );
                    return;
                }
                Err(e) => {
                    // 2s, 4s, 6s, 8s, 10s, 10s, ...
                    let delay_secs = (INITIAL_DELAY_SECS * attempt).min(MAX_DELAY_SECS);

                    warn!("Connection attempt {attempt} failed: {e}. Retrying in {delay_secs}s...");

                    if attempt == 1 {
                        warn!("This may be due to:");
                        warn!("  - Network connectivity issues");
                        warn!("  - Firewall blocking api.telegram.org");
                        warn!("  - Invalid bot token");
                        warn!("  - Telegram API being temporarily unavailable");
                    }

                    sleep(Duration::from_secs(delay_secs)).await;
                    attempt += 1;
                }
            }
        }
    }

    /// Publish the command menu shown by Telegram clients.
    async fn register_commands(&self) {
        if let Err(e) = self.bot.set_my_commands(Command::bot_commands()).await {
            warn!("Failed to register bot commands: {e}");
        }
    }

    /// Run the bot until Ctrl+C
    pub async fn run(self) -> Result<()> {
        use teloxide::dispatching::{Dispatcher, UpdateFilterExt};
        use teloxide::dptree;
        use teloxide::types::Update;

        self.test_connection().await;
        self.register_commands().await;

        let bot = self.bot.clone();

        let schema = dptree::entry().branch(Update::filter_message().endpoint({
            let bot_clone = self.clone();
            move |_bot: Bot, msg: teloxide::types::Message| {
                let bot_clone = bot_clone.clone();
                async move { crate::handler::handle_message(bot_clone, msg).await }
            }
        }));

        Dispatcher::builder(bot, schema)
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        Ok(())
    }
}
