// Who is signed in

use std::path::PathBuf;
use crate::models::user::User;
use crate::services::read_json_file;
use crate::utils::error::Result;

/// Source of the signed-in user
pub trait SessionProvider {
    fn current_user(&self) -> Result<Option<User>>;

    fn is_logged_in(&self) -> Result<bool> {
        Ok(self.current_user()?.is_some())
    }
}

/// Session kept as a JSON file holding the signed-in user.
/// No file means nobody is signed in.
pub struct FileSessionProvider {
    session_path: PathBuf,
}

impl FileSessionProvider {
    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            session_path: path.into(),
        }
    }
}

impl SessionProvider for FileSessionProvider {
    fn current_user(&self) -> Result<Option<User>> {
        read_json_file(&self.session_path)
    }
}
