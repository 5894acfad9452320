//! HTTP client for the casa REST API

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::ErrorBody;
use shared::models::{
    Event, EventCreate, EventPatch, FinancialTransaction, Member, MemberCreate, MemberType,
    MonthlyPayment, MonthlyPaymentUpsert, Therapy, TherapySession, TherapySessionCreate,
    TransactionCreate,
};

use crate::{ClientConfig, ClientError, ClientResult};

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request with query parameters
    pub async fn get_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).query(query).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PATCH request with JSON body
    pub async fn patch<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        let response = self.client.patch(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Map non-2xx statuses to [`ClientError`], preferring the server's message
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.message)
                .unwrap_or(text);
            tracing::debug!(%status, %message, "Request failed");
            return Err(match status {
                StatusCode::NOT_FOUND => ClientError::NotFound(message),
                StatusCode::BAD_REQUEST => ClientError::Validation(message),
                StatusCode::CONFLICT => ClientError::Conflict(message),
                StatusCode::UNPROCESSABLE_ENTITY => ClientError::BusinessRule(message),
                _ => ClientError::Internal(message),
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    // ========== Members ==========

    pub async fn list_members(&self, member_type: Option<MemberType>) -> ClientResult<Vec<Member>> {
        match member_type {
            Some(t) => self.get_query("/api/members", &[("type", t.as_str())]).await,
            None => self.get("/api/members").await,
        }
    }

    pub async fn search_members(&self, term: &str) -> ClientResult<Vec<Member>> {
        self.get_query("/api/members/search", &[("term", term)]).await
    }

    pub async fn create_member(&self, member: &MemberCreate) -> ClientResult<Member> {
        self.post("/api/members", member).await
    }

    pub async fn delete_member(&self, id: &str) -> ClientResult<bool> {
        self.delete(&format!("/api/members/{}", id)).await
    }

    // ========== Events ==========

    pub async fn list_events(&self, date: Option<chrono::NaiveDate>) -> ClientResult<Vec<Event>> {
        match date {
            Some(d) => {
                self.get_query("/api/events", &[("date", d.format("%Y-%m-%d").to_string())])
                    .await
            }
            None => self.get("/api/events").await,
        }
    }

    pub async fn create_event(&self, event: &EventCreate) -> ClientResult<Event> {
        self.post("/api/events", event).await
    }

    pub async fn update_event(&self, id: &str, patch: &EventPatch) -> ClientResult<Event> {
        self.patch(&format!("/api/events/{}", id), patch).await
    }

    /// Add or remove one participant, based on the event as we last saw it
    pub async fn toggle_participant(&self, event: &Event, member_id: &str) -> ClientResult<Event> {
        let patch = EventPatch::participants(event.toggled_participants(member_id));
        self.update_event(&event.id, &patch).await
    }

    pub async fn delete_event(&self, id: &str) -> ClientResult<bool> {
        self.delete(&format!("/api/events/{}", id)).await
    }

    // ========== Therapies ==========

    pub async fn list_therapies(&self) -> ClientResult<Vec<Therapy>> {
        self.get("/api/therapies").await
    }

    pub async fn therapies_today(&self) -> ClientResult<Vec<Therapy>> {
        self.get("/api/therapies/today").await
    }

    pub async fn list_sessions(&self) -> ClientResult<Vec<TherapySession>> {
        self.get("/api/therapy-sessions").await
    }

    pub async fn sessions_today(&self) -> ClientResult<Vec<TherapySession>> {
        self.get("/api/therapy-sessions/today").await
    }

    pub async fn member_sessions(&self, member_id: &str) -> ClientResult<Vec<TherapySession>> {
        self.get(&format!("/api/therapy-sessions/{}", member_id)).await
    }

    pub async fn create_session(&self, session: &TherapySessionCreate) -> ClientResult<TherapySession> {
        self.post("/api/therapy-sessions", session).await
    }

    pub async fn call_session(&self, id: &str) -> ClientResult<TherapySession> {
        self.post_empty(&format!("/api/therapy-sessions/{}/call", id)).await
    }

    // ========== Dues and finance ==========

    pub async fn list_payments(&self, month: Option<&str>) -> ClientResult<Vec<MonthlyPayment>> {
        match month {
            Some(m) => self.get_query("/api/monthly-payments", &[("month", m)]).await,
            None => self.get("/api/monthly-payments").await,
        }
    }

    pub async fn upsert_payment(&self, payment: &MonthlyPaymentUpsert) -> ClientResult<MonthlyPayment> {
        self.post("/api/monthly-payments", payment).await
    }

    pub async fn list_transactions(&self) -> ClientResult<Vec<FinancialTransaction>> {
        self.get("/api/transactions").await
    }

    pub async fn create_transaction(
        &self,
        transaction: &TransactionCreate,
    ) -> ClientResult<FinancialTransaction> {
        self.post("/api/transactions", transaction).await
    }

    pub async fn delete_transaction(&self, id: &str) -> ClientResult<bool> {
        self.delete(&format!("/api/transactions/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = HttpClient::new(&ClientConfig::new("http://casa.local:3000/")).unwrap();
        assert_eq!(client.base_url(), "http://casa.local:3000");
        assert_eq!(client.url("/api/members"), "http://casa.local:3000/api/members");
        assert_eq!(client.url("health"), "http://casa.local:3000/health");
    }
}
