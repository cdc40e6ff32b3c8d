//! Telegram Bot API client

pub mod client;

pub use client::TelegramClient;
