#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
}
