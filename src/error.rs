use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrendsError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("http status {0}")]
    Status(u16),

    #[error("invalid feed xml: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("failed to render page: {0}")]
    Render(#[from] askama::Error),

    #[error("failed to serialize trends: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TrendsError>;
