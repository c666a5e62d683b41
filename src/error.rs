/// Error types for Leads Tracker
///
/// The `Display` text of each variant is what the popup shows to the user.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("storage error: {0}")]
pub struct StorageError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeadError {
    #[error("Please enter a URL")]
    EmptyInput,
    #[error("\"{0}\" is not a valid URL")]
    InvalidUrl(String),
    #[error("This URL is already saved!")]
    Duplicate(String),
    #[error("This feature only works when running as a Chrome extension.")]
    HostUnavailable,
    #[error("Couldn't access current tab URL.")]
    TabUrlUnavailable,
    #[error("Saved leads could not be read and have been reset.")]
    CorruptSnapshot(String),
    #[error("No leads to delete!")]
    NothingToDelete,
    #[error("no lead at position {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("no saved lead for {0}")]
    NotFound(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, LeadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(LeadError::EmptyInput.to_string(), "Please enter a URL");
        assert_eq!(
            LeadError::Duplicate("https://a.com".to_string()).to_string(),
            "This URL is already saved!"
        );
        assert_eq!(
            LeadError::InvalidUrl("https://exa mple.com".to_string()).to_string(),
            "\"https://exa mple.com\" is not a valid URL"
        );
    }

    #[test]
    fn test_storage_error_is_transparent() {
        let err: LeadError = StorageError("quota exceeded".to_string()).into();
        assert_eq!(err.to_string(), "storage error: quota exceeded");
    }
}
