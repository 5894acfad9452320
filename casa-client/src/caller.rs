//! Sequential ticket caller
//!
//! For the selected therapy the caller keeps a window of current calls, as
//! wide as the therapy's `call_count`, and a queue of the next uncalled
//! sessions by ticket number. [`TicketCaller::advance`] moves one session
//! from the queue into the window, at most once per cool-down.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use shared::models::{Therapy, TherapySession};
use shared::tickets;

use crate::backend::TherapyBackend;
use crate::clock::Clock;
use crate::ClientResult;

/// Audible/visual signal played on each call
pub trait Cue: Send + Sync {
    fn play(&self, session: &TherapySession);
}

/// Cue that does nothing
#[derive(Debug, Default)]
pub struct SilentCue;

impl Cue for SilentCue {
    fn play(&self, _session: &TherapySession) {}
}

/// Result of one `advance()`
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Nothing to call, no therapy selected, or still cooling down
    Idle,
    Called(TherapySession),
}

pub struct TicketCaller {
    clock: Arc<dyn Clock>,
    cue: Arc<dyn Cue>,
    cooldown: Duration,
    sound_enabled: bool,
    therapy: Option<Therapy>,
    current_calls: VecDeque<TherapySession>,
    next_calls: VecDeque<TherapySession>,
    /// Guard held until this instant of the clock
    animating_until: Option<Duration>,
}

impl TicketCaller {
    pub fn new(clock: Arc<dyn Clock>, cooldown: Duration) -> Self {
        Self {
            clock,
            cue: Arc::new(SilentCue),
            cooldown,
            sound_enabled: true,
            therapy: None,
            current_calls: VecDeque::new(),
            next_calls: VecDeque::new(),
            animating_until: None,
        }
    }

    pub fn with_cue(mut self, cue: Arc<dyn Cue>) -> Self {
        self.set_cue(cue);
        self
    }

    pub fn set_cue(&mut self, cue: Arc<dyn Cue>) {
        self.cue = cue;
    }

    pub fn therapy(&self) -> Option<&Therapy> {
        self.therapy.as_ref()
    }

    pub fn current_calls(&self) -> &VecDeque<TherapySession> {
        &self.current_calls
    }

    pub fn next_calls(&self) -> &VecDeque<TherapySession> {
        &self.next_calls
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.sound_enabled = enabled;
    }

    pub fn is_animating(&self) -> bool {
        self.animating_until
            .is_some_and(|until| self.clock.now() < until)
    }

    fn window(&self) -> usize {
        self.therapy.as_ref().map_or(1, |t| t.call_count.max(1))
    }

    /// Select a therapy and rebuild both lists from today's sessions
    ///
    /// The first `call_count` uncalled sessions become current, the rest
    /// wait in order.
    pub fn select(&mut self, therapy: &Therapy, sessions_today: &[TherapySession]) {
        let (_called, waiting) = tickets::partition_calls(sessions_today, &therapy.id);
        self.therapy = Some(therapy.clone());
        let window = self.window();

        let mut waiting: VecDeque<TherapySession> = waiting.into();
        let rest = waiting.split_off(window.min(waiting.len()));
        self.current_calls = waiting;
        self.next_calls = rest;
        self.animating_until = None;
        tracing::debug!(
            therapy = %therapy.name,
            current = self.current_calls.len(),
            next = self.next_calls.len(),
            "Therapy selected"
        );
    }

    /// Call the next ticket
    ///
    /// The session is marked called remotely first; on failure the guard is
    /// released and both lists stay as they were.
    pub async fn advance(&mut self, backend: &dyn TherapyBackend) -> ClientResult<Advance> {
        if self.therapy.is_none() || self.is_animating() {
            return Ok(Advance::Idle);
        }
        let Some(head) = self.next_calls.front() else {
            return Ok(Advance::Idle);
        };
        let id = head.id.clone();

        self.animating_until = Some(Duration::MAX);
        if let Err(e) = backend.call_session(&id).await {
            self.animating_until = None;
            tracing::warn!(session = %id, error = %e, "Failed to call ticket");
            return Err(e);
        }

        let mut called = match self.next_calls.pop_front() {
            Some(session) => session,
            None => {
                self.animating_until = None;
                return Ok(Advance::Idle);
            }
        };
        called.called = true;
        self.current_calls.push_back(called.clone());
        while self.current_calls.len() > self.window() {
            self.current_calls.pop_front();
        }

        if self.sound_enabled {
            self.cue.play(&called);
        }
        self.animating_until = Some(self.clock.now() + self.cooldown);
        tracing::info!(ticket = called.ticket_number, "Ticket called");
        Ok(Advance::Called(called))
    }
}
