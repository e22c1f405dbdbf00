use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("Export error: {0}")]
    Export(#[from] std::io::Error),

    #[error("Unexpected error: {message}")]
    Unexpected { message: String },
}

pub type Result<T> = std::result::Result<T, FilterError>;

impl FilterError {
    /// Notification text shown to the user. Raw driver and IO messages stay
    /// in the audit log; this string never carries them.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message } => message.clone(),
            Self::Store(_) => {
                "A database access error occurred. Please try again.".to_string()
            }
            Self::Export(_) => "Failed to write the filter results to file.".to_string(),
            Self::Unexpected { .. } => {
                "An unexpected error occurred. Details were written to the log file.".to_string()
            }
        }
    }
}
