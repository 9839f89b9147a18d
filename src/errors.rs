use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComparatorError {
    #[error("Failed to load image '{path}': {message}")]
    ImageLoadError { path: PathBuf, message: String },

    #[error("Unsupported image format: {format}")]
    UnsupportedFormat { format: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Two images are needed to compare, found {found}")]
    NotEnoughImages { found: usize },

    #[error("Image '{path}' is too large: {megapixels}MP (max {limit}MP)")]
    ImageTooLarge { path: PathBuf, megapixels: u64, limit: u64 },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ComparatorError>;

impl ComparatorError {
    /// Returns true if the user can fix this by trying again with other input
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ComparatorError::FileNotFound { .. }
                | ComparatorError::UnsupportedFormat { .. }
                | ComparatorError::NotEnoughImages { .. }
                | ComparatorError::ImageTooLarge { .. }
                | ComparatorError::IoError { .. }
        )
    }

    /// Returns a user-friendly error message with recovery suggestions
    pub fn user_message(&self) -> String {
        let suggestion = match self {
            ComparatorError::FileNotFound { .. } => "Check if the file exists and you have permission to access it.",
            ComparatorError::UnsupportedFormat { .. } => "Try converting it to a common format like PNG or JPEG.",
            ComparatorError::NotEnoughImages { .. } => "Drop or select two image files at once.",
            ComparatorError::ImageLoadError { .. } => "The image file may be corrupted. Try opening it in another viewer.",
            ComparatorError::ImageTooLarge { .. } => "Downscale the image or raise the megapixel limit in the settings file.",
            ComparatorError::IoError { .. } => "File system error occurred. Check disk space and permissions.",
        };

        format!("{}. {}", self, suggestion)
    }

    /// Returns an error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ComparatorError::ImageLoadError { .. } => "IMAGE_LOAD_ERROR",
            ComparatorError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            ComparatorError::FileNotFound { .. } => "FILE_NOT_FOUND",
            ComparatorError::NotEnoughImages { .. } => "NOT_ENOUGH_IMAGES",
            ComparatorError::ImageTooLarge { .. } => "IMAGE_TOO_LARGE",
            ComparatorError::IoError { .. } => "IO_ERROR",
        }
    }

    pub fn log(&self) {
        if self.is_recoverable() {
            log::warn!("[{}] {}", self.error_code(), self);
        } else {
            log::error!("[{}] {}", self.error_code(), self);
        }
    }
}
