use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum BookshelfError {
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    DuplicateKey {
        message: String,
    },
    Serialization {
        message: String,
    },
    // Unexpected failure inside the service itself, e.g. a book that cannot
    // be read back right after it was appended to the shelf.
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl BookshelfError {
    pub fn validation(message: &str, reason_code: Option<String>) -> BookshelfError {
        BookshelfError::Validation { message: message.to_string(), reason_code }
    }

    pub fn not_found(message: &str) -> BookshelfError {
        BookshelfError::NotFound { message: message.to_string() }
    }

    pub fn duplicate_key(message: &str) -> BookshelfError {
        BookshelfError::DuplicateKey { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> BookshelfError {
        BookshelfError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> BookshelfError {
        BookshelfError::Runtime { message: message.to_string(), reason_code }
    }
}

impl From<serde_json::Error> for BookshelfError {
    fn from(err: serde_json::Error) -> Self {
        BookshelfError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for BookshelfError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BookshelfError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            BookshelfError::NotFound { message } => {
                write!(f, "{}", message)
            }
            BookshelfError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            BookshelfError::Serialization { message } => {
                write!(f, "{}", message)
            }
            BookshelfError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for shelf operations.
pub type BookshelfResult<T> = Result<T, BookshelfError>;

#[cfg(test)]
mod tests {
    use crate::core::bookshelf::BookshelfError;

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(BookshelfError::validation("test", None), BookshelfError::Validation{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(BookshelfError::not_found("test"), BookshelfError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_duplicate_key_error() {
        assert!(matches!(BookshelfError::duplicate_key("test"), BookshelfError::DuplicateKey{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_serialization_error() {
        assert!(matches!(BookshelfError::serialization("test"), BookshelfError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_runtime_error() {
        assert!(matches!(BookshelfError::runtime("test", None), BookshelfError::Runtime{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_format_errors() {
        assert_eq!("no such book", BookshelfError::not_found("no such book").to_string());
        assert_eq!("bad input None", BookshelfError::validation("bad input", None).to_string());
    }
}
