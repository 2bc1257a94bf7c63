pub mod api;
pub mod configs;
pub mod error;
pub mod routes;
pub mod utils;
pub mod views;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::configs::get_upload_endpoint;
pub use crate::error::{ ConfigError, StorageError, UploadError };
