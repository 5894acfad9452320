//! Therapy and TherapySession Models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Therapy type with its daily ticket book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Therapy {
    pub id: String,
    pub name: String,
    /// Daily ticket capacity
    pub max_tickets: u32,
    /// Ticket numbers issued today
    #[serde(default)]
    pub current_tickets: Vec<u32>,
    pub location: String,
    /// How many tickets the calling display shows at once
    #[serde(default = "default_call_count")]
    pub call_count: usize,
}

fn default_call_count() -> usize {
    1
}

impl Therapy {
    pub fn issued_count(&self) -> u32 {
        self.current_tickets.len() as u32
    }

    pub fn remaining_tickets(&self) -> u32 {
        self.max_tickets.saturating_sub(self.issued_count())
    }

    pub fn is_full(&self) -> bool {
        self.issued_count() >= self.max_tickets
    }
}

/// Scheduled therapy session holding one ticket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TherapySession {
    pub id: String,
    pub member_id: String,
    pub therapy_id: String,
    pub date: DateTime<Utc>,
    pub ticket_number: u32,
    #[serde(default)]
    pub called: bool,
}

/// Create session payload
///
/// `ticket_number` is the number the client expects from its snapshot;
/// the server rejects the request when its own next number differs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TherapySessionCreate {
    pub member_id: String,
    pub therapy_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_number: Option<u32>,
}

/// Therapy catalog served by the organization
///
/// (id, name, daily tickets, display window, location)
const CATALOG: &[(&str, &str, u32, usize, &str)] = &[
    ("1", "Conversa Fraterna", 15, 1, "Sala de atendimento"),
    ("2", "Conversa Aruandeira", 15, 1, "Sala de atendimento"),
    ("3", "Passe de Macas", 20, 3, "Sala de espera"),
    ("4", "Reyki", 12, 2, "Sala de espera"),
    ("5", "Cirurgia Espiritual", 10, 2, "Sala de espera"),
    ("6", "Limpeza Espiritual", 15, 1, "Sala de atendimento"),
];

/// The seeded therapy catalog with empty ticket books
pub fn default_catalog() -> Vec<Therapy> {
    CATALOG
        .iter()
        .map(|(id, name, max_tickets, call_count, location)| Therapy {
            id: id.to_string(),
            name: name.to_string(),
            max_tickets: *max_tickets,
            current_tickets: Vec::new(),
            location: location.to_string(),
            call_count: *call_count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_windows() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 6);
        let macas = catalog.iter().find(|t| t.name == "Passe de Macas").unwrap();
        assert_eq!(macas.call_count, 3);
        assert_eq!(macas.max_tickets, 20);
        assert!(catalog.iter().all(|t| t.current_tickets.is_empty()));
    }

    #[test]
    fn test_call_count_defaults_to_one() {
        let json = r#"{"id":"9","name":"Nova","maxTickets":5,"location":"Sala"}"#;
        let therapy: Therapy = serde_json::from_str(json).unwrap();
        assert_eq!(therapy.call_count, 1);
        assert_eq!(therapy.remaining_tickets(), 5);
        assert!(!therapy.is_full());
    }
}
