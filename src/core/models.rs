use serde::{Deserialize, Serialize};

/// One Telegram webhook update.
///
/// Only the fields the bot acts on are modeled; everything else in the
/// update object is ignored during deserialization. An update without a
/// `message`, `message.chat.id`, or `message.text` fails to parse.
#[derive(Debug, Deserialize)]
pub struct Update {
    pub message: IncomingMessage,
}

#[derive(Debug, Deserialize)]
pub struct IncomingMessage {
    pub chat: Chat,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// JSON body of a Bot API `sendMessage` call.
#[derive(Debug, Serialize)]
pub struct SendMessage {
    pub chat_id: i64,
    pub text: String,
}

impl SendMessage {
    /// Build the echo reply for an update: the inbound text prefixed with
    /// `echo: `, addressed back to the originating chat. The text is used
    /// as-is, with no trimming, escaping, or length limiting.
    #[must_use]
    pub fn echo_reply(update: &Update) -> Self {
        Self {
            chat_id: update.message.chat.id,
            text: format!("echo: {}", update.message.text),
        }
    }
}
