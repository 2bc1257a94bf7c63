mod storage;
mod upload;
mod config;

pub use storage::StorageError;
pub use upload::UploadError;
pub use config::ConfigError;
