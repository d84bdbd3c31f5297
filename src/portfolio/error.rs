use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Couldn't read page config: {0}")]
    ConfigRead(#[from] std::io::Error),
    #[error("Couldn't parse page config: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("Invalid page config: {0}")]
    InvalidConfig(String),
    #[error("Invalid skill progress value {0:?}")]
    InvalidProgress(String),
    #[error("Page is missing its {0}")]
    MissingRoot(&'static str),
}
