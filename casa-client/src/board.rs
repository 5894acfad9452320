//! Ticket call board
//!
//! Hosts a [`TicketCaller`] and keeps therapies, today's sessions and members
//! fresh with a [`Poller`]. A refresh only replaces the fetched collections;
//! the caller's lists change when a therapy is (re)selected or advanced. A
//! call is also recorded in the fetched sessions, so reselecting before the
//! next refresh does not queue it again.

use std::sync::Arc;

use parking_lot::Mutex;
use shared::models::{Member, Therapy, TherapySession};

use crate::backend::TherapyBackend;
use crate::caller::{Advance, Cue, TicketCaller};
use crate::clock::Clock;
use crate::poller::Poller;
use crate::{ClientConfig, ClientError, ClientResult};

/// Notice shown under the calls
pub const NOTICE: &str = "Pedimos a gentileza de não entrar nas terapias portando chaves, óculos, carteira e celular. Se estiver utilizando cinto, abrir ou retirar. Retirar os calçados.";

/// Upcoming calls shown on the board
pub const UPCOMING_SHOWN: usize = 3;

#[derive(Debug, Default)]
struct BoardData {
    therapies: Vec<Therapy>,
    sessions_today: Vec<TherapySession>,
    members: Vec<Member>,
    last_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallEntry {
    pub ticket_number: u32,
    /// `None` when the member is not (yet) known to the board
    pub member_name: Option<String>,
}

/// What the display renders
#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
    pub therapy_name: String,
    pub location: String,
    pub notice: &'static str,
    pub current: Vec<CallEntry>,
    pub upcoming: Vec<CallEntry>,
    pub sound_enabled: bool,
}

pub struct CallBoard {
    backend: Arc<dyn TherapyBackend>,
    clock: Arc<dyn Clock>,
    config: ClientConfig,
    data: Arc<Mutex<BoardData>>,
    caller: TicketCaller,
    poller: Option<Poller>,
}

impl CallBoard {
    pub fn new(backend: Arc<dyn TherapyBackend>, clock: Arc<dyn Clock>, config: ClientConfig) -> Self {
        let caller = TicketCaller::new(clock.clone(), config.call_cooldown);
        Self {
            backend,
            clock,
            config,
            data: Arc::new(Mutex::new(BoardData::default())),
            caller,
            poller: None,
        }
    }

    pub fn with_cue(mut self, cue: Arc<dyn Cue>) -> Self {
        self.caller.set_cue(cue);
        self
    }

    /// Start the periodic refresh; the first one runs right away
    pub fn start(&mut self) {
        if self.is_polling() {
            return;
        }
        let backend = self.backend.clone();
        let data = self.data.clone();
        self.poller = Some(Poller::spawn(
            self.clock.clone(),
            self.config.poll_interval,
            move || {
                let backend = backend.clone();
                let data = data.clone();
                async move {
                    // failures are kept on the board for display
                    let _ = refresh_into(backend.as_ref(), &data).await;
                }
            },
        ));
        tracing::info!(interval = ?self.config.poll_interval, "Call board polling started");
    }

    pub fn stop(&mut self) {
        if let Some(poller) = self.poller.take() {
            poller.cancel();
        }
    }

    pub fn is_polling(&self) -> bool {
        self.poller.as_ref().is_some_and(|p| !p.is_cancelled())
    }

    /// Refresh now, outside the polling schedule
    pub async fn refresh(&self) -> ClientResult<()> {
        refresh_into(self.backend.as_ref(), &self.data).await
    }

    pub fn therapies(&self) -> Vec<Therapy> {
        self.data.lock().therapies.clone()
    }

    pub fn last_error(&self) -> Option<String> {
        self.data.lock().last_error.clone()
    }

    pub fn caller(&self) -> &TicketCaller {
        &self.caller
    }

    /// Select a therapy from the last fetched catalog
    pub fn select_therapy(&mut self, therapy_id: &str) -> ClientResult<()> {
        let (therapy, sessions) = {
            let data = self.data.lock();
            let therapy = data
                .therapies
                .iter()
                .find(|t| t.id == therapy_id)
                .cloned()
                .ok_or_else(|| ClientError::NotFound(format!("therapy {therapy_id}")))?;
            (therapy, data.sessions_today.clone())
        };
        self.caller.select(&therapy, &sessions);
        Ok(())
    }

    /// Call the next ticket and record it as called in the board's snapshot
    pub async fn advance(&mut self) -> ClientResult<Advance> {
        let outcome = self.caller.advance(self.backend.as_ref()).await?;
        if let Advance::Called(called) = &outcome
            && let Some(session) = self
                .data
                .lock()
                .sessions_today
                .iter_mut()
                .find(|s| s.id == called.id)
        {
            session.called = true;
        }
        Ok(outcome)
    }

    /// Flip the sound cue, returning the new setting
    pub fn toggle_sound(&mut self) -> bool {
        let enabled = !self.caller.sound_enabled();
        self.caller.set_sound_enabled(enabled);
        enabled
    }

    /// Display view of the selected therapy
    pub fn view(&self) -> Option<BoardView> {
        let therapy = self.caller.therapy()?;
        let data = self.data.lock();
        let entry = |s: &TherapySession| CallEntry {
            ticket_number: s.ticket_number,
            member_name: data
                .members
                .iter()
                .find(|m| m.id == s.member_id)
                .map(|m| m.name.clone()),
        };

        Some(BoardView {
            therapy_name: therapy.name.clone(),
            location: therapy.location.clone(),
            notice: NOTICE,
            current: self.caller.current_calls().iter().map(entry).collect(),
            upcoming: self
                .caller
                .next_calls()
                .iter()
                .take(UPCOMING_SHOWN)
                .map(entry)
                .collect(),
            sound_enabled: self.caller.sound_enabled(),
        })
    }
}

impl Drop for CallBoard {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn refresh_into(backend: &dyn TherapyBackend, data: &Mutex<BoardData>) -> ClientResult<()> {
    let fetched = tokio::try_join!(backend.therapies(), backend.sessions_today(), backend.members());
    match fetched {
        Ok((therapies, sessions_today, members)) => {
            let mut data = data.lock();
            data.therapies = therapies;
            data.sessions_today = sessions_today;
            data.members = members;
            data.last_error = None;
            Ok(())
        }
        Err(e) => {
            tracing::warn!(error = %e, "Call board refresh failed");
            data.lock().last_error = Some(e.to_string());
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::fake::{FakeBackend, member, session};
    use crate::clock::ManualClock;
    use std::time::Duration;

    fn board() -> (Arc<FakeBackend>, Arc<ManualClock>, CallBoard) {
        let backend = Arc::new(FakeBackend::seeded());
        *backend.members.lock() = vec![member("m1", "Ana"), member("m2", "Bruno")];
        *backend.sessions.lock() = (1..=6)
            .map(|i| session(&format!("s{i}"), &format!("m{}", i % 2 + 1), "3", i))
            .collect();
        let clock = Arc::new(ManualClock::new());
        let board = CallBoard::new(backend.clone(), clock.clone(), ClientConfig::default());
        (backend, clock, board)
    }

    async fn wait_until(mut done: impl FnMut() -> bool) {
        tokio::time::timeout(Duration::from_secs(1), async {
            while !done() {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("condition not reached");
    }

    #[tokio::test]
    async fn test_view_of_selected_therapy() {
        let (_, _, mut board) = board();
        assert!(board.view().is_none());
        board.refresh().await.unwrap();
        board.select_therapy("3").unwrap();

        let view = board.view().unwrap();
        assert_eq!(view.therapy_name, "Passe de Macas");
        assert_eq!(view.location, "Sala de espera");
        assert_eq!(view.notice, NOTICE);
        assert_eq!(
            view.current.iter().map(|c| c.ticket_number).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(view.current[0].member_name.as_deref(), Some("Bruno"));
        assert_eq!(view.upcoming.len(), 3);
        assert!(view.sound_enabled);
    }

    #[tokio::test]
    async fn test_upcoming_capped_and_advance() {
        let (backend, _, mut board) = board();
        backend
            .sessions
            .lock()
            .extend((7..=9).map(|i| session(&format!("s{i}"), "m9", "3", i)));
        board.refresh().await.unwrap();
        board.select_therapy("3").unwrap();
        assert_eq!(board.view().unwrap().upcoming.len(), 3);

        assert!(matches!(board.advance().await.unwrap(), Advance::Called(_)));
        let view = board.view().unwrap();
        assert_eq!(
            view.current.iter().map(|c| c.ticket_number).collect::<Vec<_>>(),
            vec![2, 3, 4]
        );
        assert_eq!(view.upcoming[0].ticket_number, 5);
        assert_eq!(view.upcoming[2].member_name, None);
    }

    #[tokio::test]
    async fn test_reselect_after_advance_keeps_called_ticket_out() {
        let (backend, clock, mut board) = board();
        backend.sessions.lock().truncate(5);
        board.refresh().await.unwrap();
        board.select_therapy("3").unwrap();

        assert!(matches!(board.advance().await.unwrap(), Advance::Called(_)));
        clock.advance(Duration::from_secs(1));
        board.select_therapy("3").unwrap();

        let next: Vec<u32> = board.caller().next_calls().iter().map(|s| s.ticket_number).collect();
        assert_eq!(next, vec![5]);
        let Advance::Called(called) = board.advance().await.unwrap() else {
            panic!("expected a call");
        };
        assert_eq!(called.ticket_number, 5);
        assert_eq!(*backend.call_log.lock(), vec!["s4".to_string(), "s5".to_string()]);
    }

    #[tokio::test]
    async fn test_refresh_after_advance_agrees_with_caller() {
        let (backend, _, mut board) = board();
        board.refresh().await.unwrap();
        board.select_therapy("3").unwrap();
        board.advance().await.unwrap();

        board.refresh().await.unwrap();
        board.select_therapy("3").unwrap();
        let view = board.view().unwrap();
        assert_eq!(
            view.upcoming.iter().map(|c| c.ticket_number).collect::<Vec<_>>(),
            vec![5, 6]
        );
        assert!(backend.sessions.lock().iter().any(|s| s.id == "s4" && s.called));
    }

    #[tokio::test]
    async fn test_toggle_sound() {
        let (_, _, mut board) = board();
        board.refresh().await.unwrap();
        board.select_therapy("3").unwrap();
        assert!(!board.toggle_sound());
        assert!(!board.view().unwrap().sound_enabled);
        assert!(board.toggle_sound());
    }

    #[tokio::test]
    async fn test_unknown_therapy() {
        let (_, _, mut board) = board();
        board.refresh().await.unwrap();
        assert!(matches!(board.select_therapy("42"), Err(ClientError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_polling_refreshes_without_touching_caller() {
        let (backend, clock, mut board) = board();
        board.start();
        assert!(board.is_polling());
        wait_until(|| board.therapies().len() == 6).await;
        board.select_therapy("3").unwrap();

        backend.therapies.lock()[2].name = "Passe".to_string();
        backend.sessions.lock().push(session("s7", "m1", "3", 7));
        clock.advance(Duration::from_secs(30));
        wait_until(|| board.therapies()[2].name == "Passe").await;

        // the caller keeps its own lists until reselected
        assert_eq!(board.caller().next_calls().len(), 3);
        assert_eq!(board.view().unwrap().therapy_name, "Passe de Macas");
        board.select_therapy("3").unwrap();
        assert_eq!(board.caller().next_calls().len(), 4);

        board.stop();
        assert!(!board.is_polling());
    }
}
