use crate::api::UploadReceipt;
use crate::error::UploadError;

/// What the upload form shows: the preloader, the message line, or the
/// result of the last upload.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum UploadState {
    #[default]
    Idle,
    MissingFile,
    Uploading {
        file_name: String,
    },
    Succeeded(UploadReceipt),
    Failed(String),
}

impl UploadState {
    /// Starts an upload for the selected file. Returns false when no request
    /// should be sent: nothing selected, or an upload is still running.
    pub fn begin(&mut self, file_name: Option<&str>) -> bool {
        if self.is_uploading() {
            log::debug!("Upload already in progress, ignoring");
            return false;
        }
        match file_name.filter(|name| !name.is_empty()) {
            Some(name) => {
                *self = Self::Uploading { file_name: name.to_string() };
                true
            }
            None => {
                *self = Self::MissingFile;
                false
            }
        }
    }

    pub fn finish(&mut self, result: Result<UploadReceipt, UploadError>) {
        *self = match result {
            Ok(receipt) => Self::Succeeded(receipt),
            Err(e) => {
                log::error!("Upload failed: {}", e);
                Self::Failed(e.to_string())
            }
        };
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self, Self::Uploading { .. })
    }

    pub fn preloader_visible(&self) -> bool {
        self.is_uploading()
    }

    pub fn message_visible(&self) -> bool {
        matches!(self, Self::MissingFile | Self::Failed(_))
    }

    pub fn message(&self) -> Option<String> {
        match self {
            Self::MissingFile => Some(UploadError::MissingFile.to_string()),
            Self::Failed(message) => Some(message.clone()),
            _ => None,
        }
    }

    pub fn receipt(&self) -> Option<&UploadReceipt> {
        match self {
            Self::Succeeded(receipt) => Some(receipt),
            _ => None,
        }
    }
}
