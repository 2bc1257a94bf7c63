pub(crate) mod env_validate;

pub use env_validate::{ get_upload_endpoint, validate_endpoint, DEFAULT_UPLOAD_URL };
