use crate::{Request, Result, TelegramBot};
use teloxide::{requests::Requester, types::Message};
use tracing::info;

/// Handle any message (commands, identifiers, or anything else)
pub async fn handle_message(bot: TelegramBot, msg: Message) -> Result<()> {
    let username = msg
        .from
        .as_ref()
        .and_then(|u| u.username.as_deref())
        .unwrap_or("unknown");

    let request = Request::from_text(msg.text());
    info!("[@{username}] Request: {request:?}");

    if matches!(request, Request::Lookup(_)) {
        bot.bot
            .send_chat_action(msg.chat.id, teloxide::types::ChatAction::Typing)
            .await?;
    }

    let replies = bot.respond(request).await?;

    for reply in replies {
        bot.bot.send_message(msg.chat.id, reply).await?;
    }

    Ok(())
}
