// Registered users lookup

use std::path::PathBuf;
use crate::models::user::User;
use crate::services::read_json_file;
use crate::utils::error::Result;

/// Answers whether a user name is registered
pub trait UserRegistry {
    fn exists(&self, name: &str) -> Result<bool>;
}

/// Users stored as a JSON array in one file
pub struct JsonUserRegistry {
    users_path: PathBuf,
}

impl JsonUserRegistry {
    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            users_path: path.into(),
        }
    }

    pub fn load_users(&self) -> Result<Vec<User>> {
        Ok(read_json_file(&self.users_path)?.unwrap_or_default())
    }
}

impl UserRegistry for JsonUserRegistry {
    fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.load_users()?.iter().any(|user| user.username == name))
    }
}
