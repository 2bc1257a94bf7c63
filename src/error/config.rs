#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} is not an http(s) URL: {value}")]
    InvalidUrl { name: &'static str, value: String },
}
