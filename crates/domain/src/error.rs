#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum CreateError {
    #[error("conflict")]
    Conflict,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

impl From<ReadError> for CreateError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::Storage(storage) => CreateError::Storage(storage),
            ReadError::Other(other) => CreateError::Other(other),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum DeleteError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

impl From<ReadError> for DeleteError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::Storage(storage) => DeleteError::Storage(storage),
            ReadError::Other(other) => DeleteError::Other(other),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Date is required")]
    MissingDate,
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("At least one exercise with at least one set (weight and reps) is required")]
    NoValidExercise,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_error_from_read_error() {
        assert!(matches!(
            CreateError::from(ReadError::Storage(StorageError::Serialization("x".into()))),
            CreateError::Storage(StorageError::Serialization(message)) if message == "x"
        ));
        assert!(matches!(
            CreateError::from(ReadError::Other("foo".into())),
            CreateError::Other(error) if error.to_string() == "foo"
        ));
    }

    #[test]
    fn test_delete_error_from_read_error() {
        assert!(matches!(
            DeleteError::from(ReadError::Storage(StorageError::Io(std::io::Error::other(
                "disk"
            )))),
            DeleteError::Storage(StorageError::Io(_))
        ));
        assert!(matches!(
            DeleteError::from(ReadError::Other("foo".into())),
            DeleteError::Other(error) if error.to_string() == "foo"
        ));
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(ValidationError::MissingDate.to_string(), "Date is required");
        assert_eq!(
            ValidationError::InvalidDate("2024-13-01".into()).to_string(),
            "Invalid date: 2024-13-01"
        );
    }
}
