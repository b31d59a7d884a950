mod schema;

pub use schema::{Config, DataConfig, RepliesConfig, TOKEN_ENV};
