//! Member Repository

use chrono::Utc;
use shared::models::{Member, MemberCreate, MemberType};

use super::{RepoError, RepoResult};
use crate::db::{DbService, new_id};

/// All members, optionally of one type, in registration order
pub fn find_all(db: &DbService, member_type: Option<MemberType>) -> Vec<Member> {
    db.read()
        .members
        .iter()
        .filter(|m| member_type.is_none_or(|t| m.member_type == t))
        .cloned()
        .collect()
}

pub fn find_by_id(db: &DbService, id: &str) -> Option<Member> {
    db.read().members.iter().find(|m| m.id == id).cloned()
}

/// Case-insensitive match on name, or substring match on phone
pub fn search(db: &DbService, term: &str) -> Vec<Member> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return find_all(db, None);
    }
    db.read()
        .members
        .iter()
        .filter(|m| m.name.to_lowercase().contains(&needle) || m.phone.contains(&needle))
        .cloned()
        .collect()
}

pub fn create(db: &DbService, data: MemberCreate) -> Member {
    let member = Member {
        id: new_id(),
        name: data.name.trim().to_string(),
        gender: data.gender,
        birth_date: data.birth_date,
        phone: data.phone.trim().to_string(),
        member_type: data.member_type,
        created_at: Utc::now(),
    };
    db.write().members.push(member.clone());
    member
}

/// Remove a member and drop them from every event's participants
pub fn delete(db: &DbService, id: &str) -> RepoResult<Member> {
    let mut tables = db.write();
    let index = tables
        .members
        .iter()
        .position(|m| m.id == id)
        .ok_or_else(|| RepoError::NotFound(format!("Member {}", id)))?;
    let member = tables.members.remove(index);
    for event in tables.events.iter_mut() {
        event.participants.retain(|p| p != id);
    }
    Ok(member)
}
