// Agenda - meeting scheduler
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::meeting::{Meeting, NewMeeting};
pub use models::user::User;
pub use services::meeting_creator::{ExecutionContext, MeetingCreator};
pub use utils::error::{AgendaError, CreationError, Result};
