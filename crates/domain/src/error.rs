#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("no connection")]
    NoConnection,
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum AuthError {
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(Box<dyn std::error::Error>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_from_storage_error() {
        assert!(matches!(
            ReadError::from(StorageError::NoConnection),
            ReadError::Storage(StorageError::NoConnection)
        ));
    }

    #[test]
    fn test_auth_error_display() {
        assert_eq!(
            AuthError::Rejected("bad credentials".to_string()).to_string(),
            "bad credentials"
        );
        assert_eq!(
            AuthError::from(StorageError::NoConnection).to_string(),
            "no connection"
        );
    }

    #[test]
    fn test_read_error_display() {
        assert_eq!(
            ReadError::Other("deserialization failed".into()).to_string(),
            "deserialization failed"
        );
    }
}
