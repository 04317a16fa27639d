// Meeting creation: validate a candidate against users and existing meetings

use crate::models::meeting::{Meeting, NewMeeting};
use crate::services::meeting_store::MeetingStore;
use crate::services::session::SessionProvider;
use crate::services::user_registry::UserRegistry;
use crate::utils::error::{AttendeeRole, CreationError, Result};
use crate::utils::validation::validate_required;

/// Collaborators a command runs against
pub struct ExecutionContext<'a> {
    pub session: &'a dyn SessionProvider,
    pub users: &'a dyn UserRegistry,
    pub meetings: &'a dyn MeetingStore,
}

/// Validates and stores new meetings
pub struct MeetingCreator;

impl MeetingCreator {
    /// Run every check in order and store the meeting when all pass.
    ///
    /// The first failing check decides the error. Nothing is written unless
    /// every check passes; on success the full list, with the new meeting
    /// appended last, is persisted in one write.
    pub fn create(candidate: NewMeeting, ctx: &ExecutionContext<'_>) -> Result<Meeting> {
        if !ctx.session.is_logged_in()? {
            return Err(CreationError::NotAuthenticated.into());
        }

        validate_required("title", &candidate.title)?;
        validate_required("originator", &candidate.organizer)?;
        validate_required("participants", &candidate.participants)?;
        validate_required("startTime", &candidate.start_time)?;
        validate_required("endTime", &candidate.end_time)?;

        let participants = candidate.participant_names();

        Self::ensure_registered(ctx, AttendeeRole::Organizer, &candidate.organizer)?;
        for participant in &participants {
            Self::ensure_registered(ctx, AttendeeRole::Participant, participant)?;
        }

        Self::ensure_free(ctx, AttendeeRole::Organizer, &candidate.organizer, &candidate)?;
        for participant in &participants {
            Self::ensure_free(ctx, AttendeeRole::Participant, participant, &candidate)?;
        }

        let mut meetings = ctx.meetings.fetch_all()?;
        if meetings.iter().any(|meeting| meeting.title == candidate.title) {
            return Err(CreationError::DuplicateTitle(candidate.title).into());
        }

        let meeting = candidate.into_meeting();
        meetings.push(meeting.clone());
        ctx.meetings.persist_all(&meetings)?;

        Ok(meeting)
    }

    fn ensure_registered(
        ctx: &ExecutionContext<'_>,
        role: AttendeeRole,
        name: &str,
    ) -> Result<()> {
        if ctx.users.exists(name)? {
            Ok(())
        } else {
            Err(CreationError::UnknownUser {
                role,
                name: name.to_string(),
            }
            .into())
        }
    }

    fn ensure_free(
        ctx: &ExecutionContext<'_>,
        role: AttendeeRole,
        name: &str,
        candidate: &NewMeeting,
    ) -> Result<()> {
        let conflict = ctx
            .meetings
            .fetch_by_attendee(name)?
            .into_iter()
            .find(|meeting| meeting.conflicts_with(&candidate.start_time, &candidate.end_time));

        match conflict {
            Some(meeting) => Err(CreationError::TimeConflict {
                role,
                owner: name.to_string(),
                conflicting_title: meeting.title,
            }
            .into()),
            None => Ok(()),
        }
    }
}
