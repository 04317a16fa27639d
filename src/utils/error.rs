// Common error types for agenda

use std::fmt;
use thiserror::Error;

/// Which side of a meeting a user stands on when a check fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendeeRole {
    Organizer,
    Participant,
}

impl fmt::Display for AttendeeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendeeRole::Organizer => write!(f, "organizer"),
            AttendeeRole::Participant => write!(f, "participant"),
        }
    }
}

/// Reasons a candidate meeting is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreationError {
    #[error("Please sign in before creating a meeting")]
    NotAuthenticated,

    #[error("The meeting's {0} is required")]
    MissingField(&'static str),

    #[error("The {role} '{name}' has not yet registered")]
    UnknownUser { role: AttendeeRole, name: String },

    #[error("Some meetings of the {role} '{owner}' conflict in time with '{conflicting_title}'")]
    TimeConflict {
        role: AttendeeRole,
        owner: String,
        conflicting_title: String,
    },

    #[error("The meeting title '{0}' is already taken")]
    DuplicateTitle(String),
}

#[derive(Debug, Error)]
pub enum AgendaError {
    #[error(transparent)]
    Creation(#[from] CreationError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

pub type Result<T> = std::result::Result<T, AgendaError>;

/// Exit code for a rejected meeting
pub const EXIT_VALIDATION: i32 = 1;
/// Exit code for a broken environment (config, files, logger)
pub const EXIT_ENVIRONMENT: i32 = 2;

/// An error ready to be shown to the person at the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserError {
    pub message: String,
    pub exit_code: i32,
}

impl UserError {
    pub fn from_agenda_error(err: &AgendaError) -> Self {
        let exit_code = match err {
            AgendaError::Creation(_) => EXIT_VALIDATION,
            _ => EXIT_ENVIRONMENT,
        };

        Self {
            // One line only, whatever the underlying error carried
            message: err.to_string().replace(['\n', '\r'], " "),
            exit_code,
        }
    }

    pub fn print(&self) {
        eprintln!("{}", self.message);
    }
}
