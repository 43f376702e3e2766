#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid bind config: {0}")]
    Json(
        #[from]
        #[source]
        serde_json::Error,
    ),
}
