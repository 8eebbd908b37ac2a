//! Chat platform transports

pub mod telegram;

pub use telegram::{
    Chat, Message, ReplySender, TelegramClient, TelegramConfig, Update,
    DEFAULT_TELEGRAM_API_BASE,
};
