//! Privilege evaluation
//!
//! Pure functions over a privilege list. A missing grant is not a failure:
//! it resolves to [`DEFAULT_LEVEL`].

use crate::models::{AccessLevel, UserPrivilege};

/// Level applied when no explicit grant exists for (user, screen)
pub const DEFAULT_LEVEL: AccessLevel = AccessLevel::View;

/// Level granted to `user_id` on `screen_id`
pub fn evaluate(privileges: &[UserPrivilege], user_id: &str, screen_id: &str) -> AccessLevel {
    privileges
        .iter()
        .find(|p| p.user_id == user_id && p.screen_id == screen_id)
        .map(|p| p.level)
        .unwrap_or(DEFAULT_LEVEL)
}

pub fn has_access(
    privileges: &[UserPrivilege],
    user_id: &str,
    screen_id: &str,
    required: AccessLevel,
) -> bool {
    evaluate(privileges, user_id, screen_id).satisfies(required)
}

/// Any Admin grant, on any screen
pub fn is_admin(privileges: &[UserPrivilege], user_id: &str) -> bool {
    privileges
        .iter()
        .any(|p| p.user_id == user_id && p.level == AccessLevel::Admin)
}

pub fn can_edit(privileges: &[UserPrivilege], user_id: &str, screen_id: &str) -> bool {
    has_access(privileges, user_id, screen_id, AccessLevel::Edit)
}

pub fn can_view(privileges: &[UserPrivilege], user_id: &str, screen_id: &str) -> bool {
    has_access(privileges, user_id, screen_id, AccessLevel::View)
}

pub fn screen_privileges<'a>(privileges: &'a [UserPrivilege], screen_id: &str) -> Vec<&'a UserPrivilege> {
    privileges.iter().filter(|p| p.screen_id == screen_id).collect()
}

pub fn user_privileges<'a>(privileges: &'a [UserPrivilege], user_id: &str) -> Vec<&'a UserPrivilege> {
    privileges.iter().filter(|p| p.user_id == user_id).collect()
}
