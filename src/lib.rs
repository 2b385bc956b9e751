pub mod config;
pub mod countries;
pub mod error;
pub mod feed;
pub mod fetcher;
pub mod render;
pub mod server;

pub use config::ServerConfig;
pub use error::{Result, TrendsError};
pub use feed::{NewsItem, TrendRecord};
pub use server::{router, serve, AppState};
