use async_trait::async_trait;
use crate::core::bookshelf::BookshelfError;

#[derive(Debug)]
pub enum CommandError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Other {
        message: String,
        reason_code: Option<String>,
    },
}

impl CommandError {
    // Message as presented to the caller, without internal reason codes.
    pub fn public_message(&self) -> String {
        match self {
            CommandError::DuplicateKey { message } => message.to_string(),
            CommandError::NotFound { message } => message.to_string(),
            CommandError::Runtime { message, .. } => message.to_string(),
            CommandError::Serialization { message } => message.to_string(),
            CommandError::Validation { message, .. } => message.to_string(),
            CommandError::Other { message, .. } => message.to_string(),
        }
    }
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<BookshelfError> for CommandError {
    fn from(other: BookshelfError) -> Self {
        match other {
            BookshelfError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            BookshelfError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            BookshelfError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            BookshelfError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            BookshelfError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}
