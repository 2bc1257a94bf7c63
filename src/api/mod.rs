pub mod upload;

pub use upload::{ post_file, UploadReceipt };
