//! Event Model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Event entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    /// Member IDs, unique
    #[serde(default)]
    pub participants: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn has_participant(&self, member_id: &str) -> bool {
        self.participants.iter().any(|p| p == member_id)
    }

    /// Participant list after toggling `member_id`
    ///
    /// Removes the member when present, appends it otherwise.
    pub fn toggled_participants(&self, member_id: &str) -> Vec<String> {
        if self.has_participant(member_id) {
            self.participants
                .iter()
                .filter(|p| *p != member_id)
                .cloned()
                .collect()
        } else {
            let mut participants = self.participants.clone();
            participants.push(member_id.to_string());
            participants
        }
    }

    /// Case-insensitive match on title or description
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term) || self.description.to_lowercase().contains(&term)
    }
}

/// Create event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCreate {
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
}

/// Partial update payload (PATCH)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<String>>,
}

impl EventPatch {
    pub fn participants(participants: Vec<String>) -> Self {
        Self {
            participants: Some(participants),
            ..Default::default()
        }
    }
}

/// Drop duplicate ids while keeping first-seen order
pub fn dedup_participants(participants: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    participants
        .into_iter()
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

/// Events whose title or description contains `term`; empty term keeps all
pub fn filter_events<'a>(events: &'a [Event], term: &str) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|e| term.is_empty() || e.matches(term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(participants: &[&str]) -> Event {
        Event {
            id: "e1".to_string(),
            title: "Gira de Caboclos".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            description: "Trabalho aberto ao público".to_string(),
            participants: participants.iter().map(|s| s.to_string()).collect(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_toggle_adds_missing_member() {
        let e = event(&["m1"]);
        assert_eq!(e.toggled_participants("m2"), vec!["m1", "m2"]);
    }

    #[test]
    fn test_toggle_removes_present_member() {
        let e = event(&["m1", "m2"]);
        assert_eq!(e.toggled_participants("m1"), vec!["m2"]);
    }

    #[test]
    fn test_dedup_keeps_order() {
        let ids = vec!["b".into(), "a".into(), "b".into()];
        assert_eq!(dedup_participants(ids), vec!["b", "a"]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let events = vec![event(&[])];
        assert_eq!(filter_events(&events, "CABOCLOS").len(), 1);
        assert_eq!(filter_events(&events, "público").len(), 1);
        assert_eq!(filter_events(&events, "reunião").len(), 0);
        assert_eq!(filter_events(&events, "").len(), 1);
    }
}
