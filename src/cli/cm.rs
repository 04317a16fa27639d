use clap::Args;
use serde::Serialize;
use crate::models::meeting::{Meeting, NewMeeting};
use crate::services::meeting_creator::{ExecutionContext, MeetingCreator};
use crate::services::meeting_store::JsonMeetingStore;
use crate::services::session::FileSessionProvider;
use crate::services::user_registry::JsonUserRegistry;
use crate::utils::config::AgendaConfig;
use crate::utils::error::{AgendaError, Result};
use crate::utils::logging::CM_LOG_TAG;

/// Create a meeting among registered users
///
/// Every flag defaults to empty; a missing value is reported by name once
/// the command runs.
#[derive(Debug, Clone, Args)]
pub struct CmCommand {
    /// The meeting's title
    #[arg(short = 't', long = "title", default_value = "")]
    pub title: String,

    /// The meeting's originator
    #[arg(short = 'o', long = "originator", default_value = "")]
    pub originator: String,

    /// The meeting's participants, comma-separated
    #[arg(short = 'p', long = "participants", default_value = "")]
    pub participants: String,

    /// The meeting's start time, e.g. "2024-01-01 09:00"
    #[arg(short = 's', long = "startTime", default_value = "")]
    pub start_time: String,

    /// The meeting's end time, e.g. "2024-01-01 10:00"
    #[arg(short = 'e', long = "endTime", default_value = "")]
    pub end_time: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for the cm command
#[derive(Debug, Serialize)]
pub struct CmResponse {
    pub status: String,
    pub meeting: Meeting,
}

impl CmCommand {
    pub fn new_meeting(&self) -> NewMeeting {
        NewMeeting {
            title: self.title.clone(),
            organizer: self.originator.clone(),
            participants: self.participants.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
        }
    }

    /// Execute the cm command against the data directory in `config`
    pub fn run(&self, config: &AgendaConfig) -> Result<()> {
        let session = FileSessionProvider::with_path(config.session_path());
        let users = JsonUserRegistry::with_path(config.users_path());
        let meetings = JsonMeetingStore::with_path(config.meetings_path());
        let ctx = ExecutionContext {
            session: &session,
            users: &users,
            meetings: &meetings,
        };

        let meeting = match MeetingCreator::create(self.new_meeting(), &ctx) {
            Ok(meeting) => meeting,
            Err(err) => {
                log::warn!("{} Failed to create meeting: {}: {}", CM_LOG_TAG, self.title, err);
                return Err(err);
            }
        };

        log::info!("{} Created meeting: {}", CM_LOG_TAG, meeting.title);

        if self.json {
            let response = CmResponse {
                status: "success".to_string(),
                meeting,
            };

            let json_output = serde_json::to_string(&response)
                .map_err(|e| AgendaError::StorageError(format!("Failed to serialize JSON response: {}", e)))?;

            println!("{}", json_output);
        } else {
            println!("Created meeting: {}", meeting.title);
        }

        Ok(())
    }
}
