//! Therapy scheduling flow
//!
//! Scheduling checks the member's sessions and the therapy's ticket book
//! against a fresh snapshot, then submits the ticket number it expects. The
//! server re-runs both checks atomically and answers 409 when the snapshot
//! went stale in between.

use std::sync::Arc;

use chrono_tz::Tz;
use shared::models::{Therapy, TherapySession, TherapySessionCreate};
use shared::tickets;

use crate::backend::TherapyBackend;
use crate::{ClientError, ClientResult};

/// Outcome of a successful scheduling, with the refetched collections
#[derive(Debug, Clone)]
pub struct Scheduled {
    pub session: TherapySession,
    pub therapies: Vec<Therapy>,
    pub member_sessions: Vec<TherapySession>,
}

/// Sessions a member had of one therapy
#[derive(Debug, Clone, PartialEq)]
pub struct TherapyHistory {
    pub therapy: Therapy,
    pub count: usize,
    /// Newest first
    pub sessions: Vec<TherapySession>,
}

pub struct TherapyScheduler {
    backend: Arc<dyn TherapyBackend>,
    tz: Tz,
}

impl TherapyScheduler {
    pub fn new(backend: Arc<dyn TherapyBackend>, tz: Tz) -> Self {
        Self { backend, tz }
    }

    /// Issue the next ticket of `therapy_id` to `member_id`
    pub async fn schedule(&self, member_id: &str, therapy_id: &str) -> ClientResult<Scheduled> {
        let therapies = self.backend.therapies().await?;
        let therapy = therapies
            .iter()
            .find(|t| t.id == therapy_id)
            .ok_or_else(|| ClientError::NotFound(format!("therapy {therapy_id}")))?;
        let sessions = self.backend.member_sessions(member_id).await?;

        let day = tickets::today(self.tz);
        let ticket = tickets::check_issue(therapy, &sessions, member_id, day, self.tz)
            .inspect_err(|e| tracing::debug!(member = member_id, error = %e, "Scheduling refused"))?;

        let request = TherapySessionCreate {
            member_id: member_id.to_string(),
            therapy_id: therapy_id.to_string(),
            date: None,
            ticket_number: Some(ticket),
        };
        let session = self.backend.create_session(&request).await?;
        tracing::info!(
            therapy = %therapy.name,
            ticket = session.ticket_number,
            "Therapy scheduled"
        );

        Ok(Scheduled {
            session,
            therapies: self.backend.therapies().await?,
            member_sessions: self.backend.member_sessions(member_id).await?,
        })
    }

    /// Per-therapy history of a member, in catalog order
    pub async fn member_history(&self, member_id: &str) -> ClientResult<Vec<TherapyHistory>> {
        let therapies = self.backend.therapies().await?;
        let sessions = self.backend.member_sessions(member_id).await?;

        Ok(therapies
            .into_iter()
            .map(|therapy| {
                let list: Vec<TherapySession> = tickets::history(&sessions, &therapy.id)
                    .into_iter()
                    .cloned()
                    .collect();
                TherapyHistory {
                    count: list.len(),
                    sessions: list,
                    therapy,
                }
            })
            .collect())
    }
}
