use agenda::services::meeting_store::{JsonMeetingStore, MeetingStore};
use agenda::services::session::FileSessionProvider;
use agenda::services::user_registry::JsonUserRegistry;
use agenda::utils::error::AttendeeRole;
use agenda::{AgendaError, CreationError, ExecutionContext, MeetingCreator, NewMeeting};
use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// End-to-end scheduling scenarios over a real data directory

fn seed(dir: &Path) {
    fs::write(
        dir.join("users.json"),
        r#"[{"username":"alice"},{"username":"bob"},{"username":"carol"},{"username":"dave"}]"#,
    ).unwrap();
    fs::write(dir.join("session.json"), r#"{"username":"alice"}"#).unwrap();
}

fn new_meeting(title: &str, organizer: &str, participants: &str, start: &str, end: &str) -> NewMeeting {
    NewMeeting {
        title: title.to_string(),
        organizer: organizer.to_string(),
        participants: participants.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
    }
}

#[test]
fn test_week_of_meetings_through_library() {
    let temp_dir = TempDir::new().unwrap();
    seed(temp_dir.path());

    let session = FileSessionProvider::with_path(temp_dir.path().join("session.json"));
    let users = JsonUserRegistry::with_path(temp_dir.path().join("users.json"));
    let store = JsonMeetingStore::with_path(temp_dir.path().join("meetings.json"));
    let ctx = ExecutionContext {
        session: &session,
        users: &users,
        meetings: &store,
    };

    MeetingCreator::create(
        new_meeting("Standup", "alice", "bob,carol", "2024-01-01 09:00", "2024-01-01 10:00"),
        &ctx,
    ).unwrap();
    MeetingCreator::create(
        new_meeting("Design review", "dave", "bob", "2024-01-01 10:00", "2024-01-01 11:30"),
        &ctx,
    ).unwrap();

    // carol is busy in the standup
    let clash = MeetingCreator::create(
        new_meeting("Coffee", "dave", "carol", "2024-01-01 08:30", "2024-01-01 09:30"),
        &ctx,
    );
    match clash {
        Err(AgendaError::Creation(CreationError::TimeConflict { role, owner, conflicting_title })) => {
            assert_eq!(role, AttendeeRole::Participant);
            assert_eq!(owner, "carol");
            assert_eq!(conflicting_title, "Standup");
        }
        other => panic!("Expected TimeConflict, got {:?}", other),
    }

    MeetingCreator::create(
        new_meeting("Lunch", "carol", "alice,dave", "2024-01-01 12:00", "2024-01-01 13:00"),
        &ctx,
    ).unwrap();

    let titles: Vec<String> = store.fetch_all().unwrap().into_iter().map(|m| m.title).collect();
    assert_eq!(titles, vec!["Standup", "Design review", "Lunch"]);

    let bobs: Vec<String> = store.fetch_by_attendee("bob").unwrap().into_iter().map(|m| m.title).collect();
    assert_eq!(bobs, vec!["Standup", "Design review"]);
}

#[test]
fn test_audit_log_records_every_invocation() {
    let temp_dir = TempDir::new().unwrap();
    seed(temp_dir.path());

    Command::cargo_bin("agenda").unwrap()
        .env_remove("AGENDA_HOME")
        .env_remove("RUST_LOG")
        .arg("--data-dir").arg(temp_dir.path())
        .args(&["cm", "-t", "Standup", "-o", "alice", "-p", "bob",
                "-s", "2024-01-01 09:00", "-e", "2024-01-01 10:00"])
        .assert()
        .success();

    Command::cargo_bin("agenda").unwrap()
        .env_remove("AGENDA_HOME")
        .env_remove("RUST_LOG")
        .arg("--data-dir").arg(temp_dir.path())
        .args(&["cm", "-t", "Standup", "-o", "carol", "-p", "dave",
                "-s", "2024-01-02 09:00", "-e", "2024-01-02 10:00"])
        .assert()
        .failure();

    let log = fs::read_to_string(temp_dir.path().join("agenda.log")).unwrap();
    let audit_lines: Vec<&str> = log.lines().filter(|line| line.contains("[agenda cm]")).collect();

    assert_eq!(audit_lines.len(), 2);
    assert!(audit_lines[0].contains("Created meeting: Standup"));
    assert!(audit_lines[1].contains("Failed to create meeting: Standup"));
    assert!(audit_lines[1].contains("already taken"));
}

#[test]
fn test_custom_file_names_from_config() {
    let temp_dir = TempDir::new().unwrap();
    seed(temp_dir.path());
    fs::write(
        temp_dir.path().join("agenda.toml"),
        "meetings_file = \"team.json\"\nlog_file_basename = \"audit\"\n",
    ).unwrap();

    Command::cargo_bin("agenda").unwrap()
        .env_remove("AGENDA_HOME")
        .env_remove("RUST_LOG")
        .arg("--data-dir").arg(temp_dir.path())
        .args(&["cm", "-t", "Standup", "-o", "alice", "-p", "bob",
                "-s", "2024-01-01 09:00", "-e", "2024-01-01 10:00"])
        .assert()
        .success();

    assert!(temp_dir.path().join("team.json").exists());
    assert!(!temp_dir.path().join("meetings.json").exists());
    assert!(temp_dir.path().join("audit.log").exists());
}
