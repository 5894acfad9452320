//! Event Repository

use chrono::{NaiveDate, Utc};
use shared::models::{Event, EventCreate, EventPatch, dedup_participants};

use super::{RepoError, RepoResult};
use crate::db::{DbService, new_id};

/// Events ordered by date, optionally restricted to one day
pub fn find_all(db: &DbService, date: Option<NaiveDate>) -> Vec<Event> {
    let mut events: Vec<Event> = db
        .read()
        .events
        .iter()
        .filter(|e| date.is_none_or(|d| e.date == d))
        .cloned()
        .collect();
    events.sort_by(|a, b| a.date.cmp(&b.date).then(a.created_at.cmp(&b.created_at)));
    events
}

pub fn create(db: &DbService, data: EventCreate) -> Event {
    let event = Event {
        id: new_id(),
        title: data.title.trim().to_string(),
        date: data.date,
        description: data.description,
        participants: Vec::new(),
        created_at: Utc::now(),
    };
    db.write().events.push(event.clone());
    event
}

/// Apply the fields present in `patch`
///
/// Ids added to the participants must name existing members; ids already
/// on the event are kept as they are. Duplicates collapse.
pub fn update(db: &DbService, id: &str, patch: EventPatch) -> RepoResult<Event> {
    let mut tables = db.write();
    let tables = &mut *tables;

    let event = tables
        .events
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or_else(|| RepoError::NotFound(format!("Event {}", id)))?;

    if let Some(participants) = &patch.participants
        && let Some(unknown) = participants.iter().find(|p| {
            !event.participants.contains(*p) && !tables.members.iter().any(|m| &m.id == *p)
        })
    {
        return Err(RepoError::Validation(format!(
            "Unknown participant {}",
            unknown
        )));
    }

    if let Some(title) = patch.title {
        event.title = title.trim().to_string();
    }
    if let Some(date) = patch.date {
        event.date = date;
    }
    if let Some(description) = patch.description {
        event.description = description;
    }
    if let Some(participants) = patch.participants {
        event.participants = dedup_participants(participants);
    }

    Ok(event.clone())
}

pub fn delete(db: &DbService, id: &str) -> RepoResult<Event> {
    let mut tables = db.write();
    let index = tables
        .events
        .iter()
        .position(|e| e.id == id)
        .ok_or_else(|| RepoError::NotFound(format!("Event {}", id)))?;
    Ok(tables.events.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Gender, MemberCreate, MemberType};

    use crate::db::repository::member;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, d).unwrap()
    }

    fn event(db: &DbService, title: &str, d: u32) -> Event {
        create(
            db,
            EventCreate {
                title: title.to_string(),
                date: day(d),
                description: String::new(),
            },
        )
    }

    fn worker(db: &DbService) -> String {
        member::create(
            db,
            MemberCreate {
                name: "Ana".into(),
                gender: Gender::Female,
                birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
                phone: "1".into(),
                member_type: MemberType::Trabalhador,
            },
        )
        .id
    }

    #[test]
    fn test_list_sorted_and_by_date() {
        let db = DbService::new();
        event(&db, "Gira", 20);
        event(&db, "Palestra", 5);
        let titles: Vec<_> = find_all(&db, None).into_iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["Palestra", "Gira"]);
        assert_eq!(find_all(&db, Some(day(20))).len(), 1);
        assert!(find_all(&db, Some(day(1))).is_empty());
    }

    #[test]
    fn test_patch_participants() {
        let db = DbService::new();
        let member_id = worker(&db);
        let e = event(&db, "Gira", 20);

        let patched = update(
            &db,
            &e.id,
            EventPatch::participants(vec![member_id.clone(), member_id.clone()]),
        )
        .unwrap();
        assert_eq!(patched.participants, vec![member_id]);
        assert_eq!(patched.title, "Gira");

        let err = update(&db, &e.id, EventPatch::participants(vec!["ghost".into()])).unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }

    #[test]
    fn test_toggle_after_member_deleted() {
        let db = DbService::new();
        let ana = worker(&db);
        let bia = worker(&db);
        let e = event(&db, "Gira", 20);
        update(&db, &e.id, EventPatch::participants(vec![ana.clone()])).unwrap();

        member::delete(&db, &ana).unwrap();
        let e = find_all(&db, None).remove(0);
        assert!(e.participants.is_empty());

        let toggled = e.toggled_participants(&bia);
        let e = update(&db, &e.id, EventPatch::participants(toggled)).unwrap();
        assert_eq!(e.participants, vec![bia]);
    }

    #[test]
    fn test_stale_participant_list_still_editable() {
        let db = DbService::new();
        let ana = worker(&db);
        let bia = worker(&db);
        let e = event(&db, "Gira", 20);
        // a client holding the list from before the member was deleted
        let stale = update(&db, &e.id, EventPatch::participants(vec![ana.clone()])).unwrap();
        db.write().members.retain(|m| m.id != ana);

        let toggled = stale.toggled_participants(&bia);
        let patched = update(&db, &e.id, EventPatch::participants(toggled)).unwrap();
        assert_eq!(patched.participants, vec![ana, bia]);
    }

    #[test]
    fn test_patch_and_delete_missing() {
        let db = DbService::new();
        assert!(matches!(
            update(&db, "nope", EventPatch::default()),
            Err(RepoError::NotFound(_))
        ));
        assert!(matches!(delete(&db, "nope"), Err(RepoError::NotFound(_))));
    }
}
