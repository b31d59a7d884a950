use super::{CommandStrategy, DataOverrides, open_store};
use talaba_config::Config;
use talaba_core::ReloadPolicy;
use talaba_telegram::{Responder, TelegramBot};
use tracing::{info, warn};

/// Input for the Telegram bot command.
pub struct BotInput {
    pub data: DataOverrides,
}

/// Strategy for running the Telegram bot.
pub struct BotStrategy;

impl CommandStrategy for BotStrategy {
    type Input = BotInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        // Fatal before anything else starts.
        let token = Config::bot_token()?;

        info!("Starting Telegram bot...");

        let store = open_store(&config, input.data);
        if !store.current().is_available() {
            match store.policy() {
                ReloadPolicy::Startup => {
                    warn!("Student data failed to load; lookups will fail until restart");
                }
                ReloadPolicy::PerRequest => {
                    warn!("Student data failed to load; every request will retry");
                }
            }
        }

        let responder = Responder::new(store, config.replies.list_limit);
        let bot = TelegramBot::new(token, responder);

        info!("Telegram bot is running. Press Ctrl+C to stop.");
        bot.run().await?;

        Ok(())
    }
}
