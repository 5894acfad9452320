//! Remote operations used by the scheduling and calling screens
//!
//! [`HttpClient`] is the production implementation; tests substitute an
//! in-memory fake.

use async_trait::async_trait;
use shared::models::{Member, Therapy, TherapySession, TherapySessionCreate};

use crate::{ClientResult, HttpClient};

#[async_trait]
pub trait TherapyBackend: Send + Sync {
    async fn therapies(&self) -> ClientResult<Vec<Therapy>>;

    async fn sessions_today(&self) -> ClientResult<Vec<TherapySession>>;

    async fn members(&self) -> ClientResult<Vec<Member>>;

    async fn member_sessions(&self, member_id: &str) -> ClientResult<Vec<TherapySession>>;

    async fn create_session(&self, session: &TherapySessionCreate) -> ClientResult<TherapySession>;

    /// Mark a session called
    async fn call_session(&self, id: &str) -> ClientResult<TherapySession>;
}

#[async_trait]
impl TherapyBackend for HttpClient {
    async fn therapies(&self) -> ClientResult<Vec<Therapy>> {
        self.list_therapies().await
    }

    async fn sessions_today(&self) -> ClientResult<Vec<TherapySession>> {
        HttpClient::sessions_today(self).await
    }

    async fn members(&self) -> ClientResult<Vec<Member>> {
        self.list_members(None).await
    }

    async fn member_sessions(&self, member_id: &str) -> ClientResult<Vec<TherapySession>> {
        HttpClient::member_sessions(self, member_id).await
    }

    async fn create_session(&self, session: &TherapySessionCreate) -> ClientResult<TherapySession> {
        HttpClient::create_session(self, session).await
    }

    async fn call_session(&self, id: &str) -> ClientResult<TherapySession> {
        HttpClient::call_session(self, id).await
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! In-memory backend with the server's issuance rules

    use super::*;
    use crate::ClientError;
    use chrono::{NaiveDate, Utc};
    use parking_lot::Mutex;
    use shared::models::{Gender, MemberType};

    #[derive(Default)]
    pub struct FakeBackend {
        pub therapies: Mutex<Vec<Therapy>>,
        pub sessions: Mutex<Vec<TherapySession>>,
        pub members: Mutex<Vec<Member>>,
        pub fail_calls: Mutex<bool>,
        pub call_log: Mutex<Vec<String>>,
        pub create_log: Mutex<Vec<TherapySessionCreate>>,
    }

    pub fn member(id: &str, name: &str) -> Member {
        Member {
            id: id.to_string(),
            name: name.to_string(),
            gender: Gender::Female,
            birth_date: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
            phone: "11 90000-0000".to_string(),
            member_type: MemberType::Consulente,
            created_at: Utc::now(),
        }
    }

    pub fn session(id: &str, member_id: &str, therapy_id: &str, ticket: u32) -> TherapySession {
        TherapySession {
            id: id.to_string(),
            member_id: member_id.to_string(),
            therapy_id: therapy_id.to_string(),
            date: Utc::now(),
            ticket_number: ticket,
            called: false,
        }
    }

    impl FakeBackend {
        pub fn seeded() -> Self {
            let backend = Self::default();
            *backend.therapies.lock() = shared::models::default_catalog();
            backend
        }
    }

    #[async_trait]
    impl TherapyBackend for FakeBackend {
        async fn therapies(&self) -> ClientResult<Vec<Therapy>> {
            Ok(self.therapies.lock().clone())
        }

        async fn sessions_today(&self) -> ClientResult<Vec<TherapySession>> {
            Ok(self.sessions.lock().clone())
        }

        async fn members(&self) -> ClientResult<Vec<Member>> {
            Ok(self.members.lock().clone())
        }

        async fn member_sessions(&self, member_id: &str) -> ClientResult<Vec<TherapySession>> {
            Ok(self
                .sessions
                .lock()
                .iter()
                .filter(|s| s.member_id == member_id)
                .cloned()
                .collect())
        }

        async fn create_session(&self, req: &TherapySessionCreate) -> ClientResult<TherapySession> {
            self.create_log.lock().push(req.clone());
            let mut therapies = self.therapies.lock();
            let therapy = therapies
                .iter_mut()
                .find(|t| t.id == req.therapy_id)
                .ok_or_else(|| ClientError::NotFound(req.therapy_id.clone()))?;
            let ticket = therapy.issued_count() + 1;
            if req.ticket_number.is_some_and(|n| n != ticket) {
                return Err(ClientError::Conflict(format!("next ticket is {ticket}")));
            }
            therapy.current_tickets.push(ticket);
            let mut sessions = self.sessions.lock();
            let created = session(
                &format!("s{}", sessions.len() + 1),
                &req.member_id,
                &req.therapy_id,
                ticket,
            );
            sessions.push(created.clone());
            Ok(created)
        }

        async fn call_session(&self, id: &str) -> ClientResult<TherapySession> {
            if *self.fail_calls.lock() {
                return Err(ClientError::Internal("server unavailable".into()));
            }
            self.call_log.lock().push(id.to_string());
            let mut sessions = self.sessions.lock();
            let s = sessions
                .iter_mut()
                .find(|s| s.id == id)
                .ok_or_else(|| ClientError::NotFound(id.to_string()))?;
            s.called = true;
            Ok(s.clone())
        }
    }
}
