use crate::protocol::Chat;

/// A chat bubble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLine {
    pub author: String,
    pub text: String,
}

impl From<&Chat> for ChatLine {
    fn from(chat: &Chat) -> Self {
        Self {
            author: format!("{}:", chat.player_name),
            text: chat.message.clone(),
        }
    }
}
