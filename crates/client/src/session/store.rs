//! Persistent single-session cache.
//!
//! The authenticated user is cached as one JSON file under the config
//! directory, the browser-storage analogue of the original app. There is at
//! most one cached session; writes happen from sequential user actions, so
//! no locking is needed beyond the filesystem's own atomicity.

use std::{fs, path::PathBuf};

use tracing::warn;

use crate::{config, error::Result, models::User};

/// File name of the fixed session key.
const SESSION_FILE: &str = "session.json";

/// Authentication state read from the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    /// No user is cached.
    Anonymous,
    /// A user record is cached locally. The server-side session may have
    /// expired independently; local state is what gates navigation.
    Authenticated(User),
}

impl Session {
    /// The cached user, if authenticated.
    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated(user) => Some(user),
        }
    }

    /// True when a user record is cached.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }
}

/// Reads and writes the cached session file.
#[derive(Debug, Clone)]
pub struct SessionStore {
    root: PathBuf,
}

impl SessionStore {
    /// Create a store rooted at the provided directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Default location under the user's config directory.
    pub fn default_root() -> PathBuf {
        config::config_root()
    }

    fn path(&self) -> PathBuf {
        self.root.join(SESSION_FILE)
    }

    /// Cache the user, overwriting any existing session.
    pub fn store(&self, user: &User) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let serialized = serde_json::to_vec_pretty(user)?;
        fs::write(self.path(), serialized)?;
        Ok(())
    }

    /// Strict read: `Ok(None)` when nothing is cached, `Err(Error::Parse)`
    /// when the cached text is not a valid user record.
    pub fn stored_user(&self) -> Result<Option<User>> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Lenient read for route guarding and display: an unreadable session
    /// file counts as no session.
    pub fn current(&self) -> Session {
        match self.stored_user() {
            Ok(Some(user)) => Session::Authenticated(user),
            Ok(None) => Session::Anonymous,
            Err(err) => {
                warn!("ignoring unreadable session file: {err}");
                Session::Anonymous
            }
        }
    }

    /// True iff the session file exists. Does not parse or verify it.
    pub fn is_logged_in(&self) -> bool {
        self.path().exists()
    }

    /// Remove the cached session. Succeeds when nothing was cached.
    pub fn clear(&self) -> Result<()> {
        let path = self.path();
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}

/// Write arbitrary text into a store's session slot. Test helper for
/// exercising the corrupt-file paths.
#[cfg(test)]
pub(crate) fn write_raw(root: &std::path::Path, contents: &str) {
    fs::create_dir_all(root).expect("create session root");
    fs::write(root.join(SESSION_FILE), contents).expect("write session file");
}
