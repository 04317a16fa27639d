use serde::{Deserialize, Serialize};
use crate::utils::validation::split_participants;

/// A meeting as entered on the command line, before any validation.
///
/// Built once from parsed arguments and handed by value to the creator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewMeeting {
    pub title: String,
    pub organizer: String,
    /// Comma-separated user names, exactly as typed
    pub participants: String,
    pub start_time: String,
    pub end_time: String,
}

impl NewMeeting {
    pub fn participant_names(&self) -> Vec<String> {
        split_participants(&self.participants)
    }

    pub fn into_meeting(self) -> Meeting {
        let participants = self.participant_names();
        Meeting {
            title: self.title,
            organizer: self.organizer,
            participants,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}

/// A stored meeting.
///
/// Times are opaque tokens whose string order is their chronological order,
/// e.g. `2024-01-01 09:00`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub title: String,
    pub organizer: String,
    pub participants: Vec<String>,
    pub start_time: String,
    pub end_time: String,
}

impl Meeting {
    /// Whether `name` organizes or takes part in this meeting
    pub fn involves(&self, name: &str) -> bool {
        self.organizer == name || self.participants.iter().any(|p| p == name)
    }

    /// Whether a candidate slot collides with this meeting.
    ///
    /// The candidate collides when its start lies in `[start, end)` or its
    /// end lies in `(start, end]` of this meeting. A candidate that strictly
    /// contains this meeting is not reported.
    pub fn conflicts_with(&self, start: &str, end: &str) -> bool {
        let starts_inside = start >= self.start_time.as_str() && start < self.end_time.as_str();
        let ends_inside = end > self.start_time.as_str() && end <= self.end_time.as_str();
        starts_inside || ends_inside
    }
}
