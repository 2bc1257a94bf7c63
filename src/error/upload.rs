/// Display text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UploadError {
    #[error("Choose a recording file first")]
    MissingFile,
    #[error("Could not read the selected file: {0}")]
    Read(String),
    #[error("Upload failed: {0}")]
    Network(String),
    #[error("Error: {0}")]
    Status(u16),
    #[error("Unexpected server response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for UploadError {
    fn from(error: serde_json::Error) -> Self {
        UploadError::Decode(error.to_string())
    }
}
