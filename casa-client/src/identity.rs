//! Cached identity of the signed-in user
//!
//! Sign-in happens elsewhere; it leaves a user id and the user's privilege
//! list behind. Both are kept under two keys, `userId` and `privileges`,
//! where `privileges` holds the JSON array as a string.

use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use shared::models::UserPrivilege;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("Failed to read identity: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt identity data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Signed-in user and their grants
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub user_id: String,
    pub privileges: Vec<UserPrivilege>,
}

/// The two stored keys, raw
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredIdentity {
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privileges: Option<String>,
}

impl StoredIdentity {
    /// Decode the raw keys
    ///
    /// No user id means nobody is signed in. A missing privilege list is an
    /// empty one; an unparseable list is an error.
    pub fn decode(&self) -> Result<Option<Identity>, IdentityError> {
        let Some(user_id) = self.user_id.as_deref().filter(|id| !id.is_empty()) else {
            return Ok(None);
        };
        let privileges = match self.privileges.as_deref() {
            Some(raw) => serde_json::from_str(raw)?,
            None => Vec::new(),
        };
        Ok(Some(Identity {
            user_id: user_id.to_string(),
            privileges,
        }))
    }

    pub fn encode(identity: &Identity) -> Result<Self, IdentityError> {
        Ok(Self {
            user_id: Some(identity.user_id.clone()),
            privileges: Some(serde_json::to_string(&identity.privileges)?),
        })
    }
}

/// Source of the current identity
pub trait IdentityProvider: Send + Sync {
    /// `Ok(None)` when nobody is signed in
    fn load(&self) -> Result<Option<Identity>, IdentityError>;

    fn store(&self, identity: &Identity) -> Result<(), IdentityError>;

    fn clear(&self) -> Result<(), IdentityError>;
}

/// Identity kept in memory
#[derive(Debug, Default)]
pub struct MemoryIdentity {
    stored: RwLock<StoredIdentity>,
}

impl MemoryIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signed_in(identity: &Identity) -> Result<Self, IdentityError> {
        Ok(Self {
            stored: RwLock::new(StoredIdentity::encode(identity)?),
        })
    }

    /// Replace the raw keys
    pub fn set_raw(&self, stored: StoredIdentity) {
        *self.stored.write() = stored;
    }
}

impl IdentityProvider for MemoryIdentity {
    fn load(&self) -> Result<Option<Identity>, IdentityError> {
        self.stored.read().decode()
    }

    fn store(&self, identity: &Identity) -> Result<(), IdentityError> {
        *self.stored.write() = StoredIdentity::encode(identity)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), IdentityError> {
        *self.stored.write() = StoredIdentity::default();
        Ok(())
    }
}

/// Identity persisted as a small JSON file
///
/// ```json
/// { "userId": "u-1", "privileges": "[{\"userId\":\"u-1\",\"screenId\":\"reports\",\"level\":3}]" }
/// ```
#[derive(Debug, Clone)]
pub struct FileIdentity {
    path: PathBuf,
}

impl FileIdentity {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_stored(&self) -> Result<StoredIdentity, IdentityError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(StoredIdentity::default()),
            Err(e) => Err(e.into()),
        }
    }
}

impl IdentityProvider for FileIdentity {
    fn load(&self) -> Result<Option<Identity>, IdentityError> {
        self.read_stored()?.decode()
    }

    fn store(&self, identity: &Identity) -> Result<(), IdentityError> {
        let text = serde_json::to_string_pretty(&StoredIdentity::encode(identity)?)?;
        std::fs::write(&self.path, text)?;
        tracing::debug!(path = %self.path.display(), "Identity stored");
        Ok(())
    }

    fn clear(&self) -> Result<(), IdentityError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
