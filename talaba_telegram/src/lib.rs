#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Telegram front-end for the student directory.

mod bot;
mod command;
mod error;
pub mod format;
mod handler;
mod responder;

pub use bot::TelegramBot;
pub use command::Command;
pub use error::{Error, Result};
pub use handler::handle_message;
pub use responder::{Request, Responder};
