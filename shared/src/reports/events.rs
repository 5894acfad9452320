//! Event participation reducers

use serde::{Deserialize, Serialize};

use crate::models::{Event, Member};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventParticipation {
    pub title: String,
    pub participants: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerParticipation {
    pub member_id: String,
    pub name: String,
    pub events: usize,
    /// Rounded share of all events, 0 when there are no events
    pub percentage: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStats {
    pub event_participation: Vec<EventParticipation>,
    /// Most active worker first
    pub worker_participation: Vec<WorkerParticipation>,
    pub total_events: usize,
    pub average_participation: u32,
}

/// `round(part / total * 100)`, 0 for an empty total
pub fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as u32
}

pub fn event_stats(events: &[Event], members: &[Member]) -> EventStats {
    let total_events = events.len();

    let event_participation: Vec<_> = events
        .iter()
        .map(|e| EventParticipation {
            title: e.title.clone(),
            participants: e.participants.len(),
        })
        .collect();

    let mut worker_participation: Vec<_> = members
        .iter()
        .filter(|m| m.is_worker())
        .map(|worker| {
            let attended = events.iter().filter(|e| e.has_participant(&worker.id)).count();
            WorkerParticipation {
                member_id: worker.id.clone(),
                name: worker.name.clone(),
                events: attended,
                percentage: percentage(attended, total_events),
            }
        })
        .collect();
    // stable: ties keep member order
    worker_participation.sort_by(|a, b| b.events.cmp(&a.events));

    let average_participation = if total_events == 0 {
        0
    } else {
        let sum: usize = event_participation.iter().map(|e| e.participants).sum();
        (sum as f64 / total_events as f64).round() as u32
    };

    EventStats {
        event_participation,
        worker_participation,
        total_events,
        average_participation,
    }
}
