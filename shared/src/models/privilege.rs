//! User privilege Model

use serde::{Deserialize, Serialize};

/// Access tier for a screen
///
/// The wire value keeps the numbering issued by the identity provider
/// (1 = Admin, 2 = No Access, 3 = View, 4 = Edit). Ordering is by
/// capability: `NoAccess < View < Edit < Admin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AccessLevel {
    Admin,
    NoAccess,
    View,
    Edit,
}

impl AccessLevel {
    /// Capability rank used for every comparison
    pub fn rank(self) -> u8 {
        match self {
            Self::NoAccess => 0,
            Self::View => 1,
            Self::Edit => 2,
            Self::Admin => 3,
        }
    }

    pub fn wire_value(self) -> u8 {
        match self {
            Self::Admin => 1,
            Self::NoAccess => 2,
            Self::View => 3,
            Self::Edit => 4,
        }
    }

    /// Whether this grant satisfies `required`
    pub fn satisfies(self, required: AccessLevel) -> bool {
        self.rank() >= required.rank()
    }
}

impl PartialOrd for AccessLevel {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AccessLevel {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl TryFrom<u8> for AccessLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Admin),
            2 => Ok(Self::NoAccess),
            3 => Ok(Self::View),
            4 => Ok(Self::Edit),
            other => Err(format!("unknown privilege level {other}")),
        }
    }
}

impl From<AccessLevel> for u8 {
    fn from(level: AccessLevel) -> Self {
        level.wire_value()
    }
}

/// Grant of `level` on `screen_id` to `user_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPrivilege {
    pub user_id: String,
    pub screen_id: String,
    pub level: AccessLevel,
}

impl UserPrivilege {
    pub fn new(user_id: impl Into<String>, screen_id: impl Into<String>, level: AccessLevel) -> Self {
        Self {
            user_id: user_id.into(),
            screen_id: screen_id.into(),
            level,
        }
    }
}
