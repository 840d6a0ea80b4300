use std::fmt;
use std::fmt::{Display, Formatter};
use crate::core::library::LibraryError;

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
}

impl CommandError {
    // only lookup and precondition failures are reported back to the operator,
    // anything else aborts the session
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CommandError::NotFound { .. } | CommandError::Validation { .. })
    }
}

pub trait Command<Request, Response> {
    fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

impl From<CommandError> for LibraryError {
    fn from(other: CommandError) -> Self {
        match other {
            CommandError::DuplicateKey { message } => {
                LibraryError::DuplicateKey { message }
            }
            CommandError::NotFound { message } => {
                LibraryError::NotFound { message }
            }
            CommandError::Runtime { message, reason_code } => {
                LibraryError::Runtime { message, reason_code }
            }
            CommandError::Serialization { message } => {
                LibraryError::Serialization { message }
            }
            CommandError::Validation { message, reason_code } => {
                LibraryError::Validation { message, reason_code }
            }
        }
    }
}

// Display is the operator facing message only
impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::DuplicateKey { message } => write!(f, "{}", message),
            CommandError::NotFound { message } => write!(f, "{}", message),
            CommandError::Runtime { message, .. } => write!(f, "{}", message),
            CommandError::Serialization { message } => write!(f, "{}", message),
            CommandError::Validation { message, .. } => write!(f, "{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[test]
    fn test_should_build_command_error() {
        let _ = CommandError::DuplicateKey { message: "test".to_string() };
        let _ = CommandError::Runtime { message: "test".to_string(), reason_code: None };
        let _ = CommandError::Serialization { message: "test".to_string() };
        let _ = CommandError::Validation { message: "test".to_string(), reason_code: None };
    }

    #[test]
    fn test_should_convert_library_error() {
        let err = CommandError::from(LibraryError::not_found("Invalid book or user ID."));
        assert!(err.is_recoverable());
        assert_eq!("Invalid book or user ID.", err.to_string());

        let err = CommandError::from(LibraryError::validation("Book is already issued.", Some("issued".to_string())));
        assert!(err.is_recoverable());
        assert_eq!("Book is already issued.", err.to_string());

        let err = CommandError::from(LibraryError::serialization("bad json"));
        assert!(!err.is_recoverable());
        assert!(matches!(LibraryError::from(err), LibraryError::Serialization { .. }));
    }
}
