//! Route guard for protected screens
//!
//! The guard starts in [`GuardState::Checking`] and settles once per target
//! (screen id, required level). Asking again for the same target returns the
//! settled outcome without touching the identity provider.

use std::sync::Arc;

use shared::Screen;
use shared::access;
use shared::models::AccessLevel;

use crate::identity::IdentityProvider;

pub const LOGIN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    RedirectToLogin,
    RedirectToUnauthorized,
}

impl GuardOutcome {
    /// Where the screen should navigate, if anywhere
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin => Some(LOGIN_PATH),
            Self::RedirectToUnauthorized => Some(UNAUTHORIZED_PATH),
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Checking,
    Settled(GuardOutcome),
}

pub struct RouteGuard {
    identity: Arc<dyn IdentityProvider>,
    target: Option<(String, AccessLevel)>,
    state: GuardState,
}

impl RouteGuard {
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            identity,
            target: None,
            state: GuardState::Checking,
        }
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Settle access to `screen_id` at `required`
    pub fn check(&mut self, screen_id: &str, required: AccessLevel) -> GuardOutcome {
        if let (Some((id, level)), GuardState::Settled(outcome)) = (&self.target, self.state)
            && id == screen_id
            && *level == required
        {
            return outcome;
        }

        self.target = Some((screen_id.to_string(), required));
        self.state = GuardState::Checking;
        let outcome = self.evaluate(screen_id, required);
        self.state = GuardState::Settled(outcome);
        outcome
    }

    /// Settle access to a registered screen at its own required level
    pub fn check_screen(&mut self, screen: Screen) -> GuardOutcome {
        self.check(screen.id(), screen.required_level())
    }

    /// Forget the settled outcome, e.g. after sign-in or sign-out
    pub fn reset(&mut self) {
        self.target = None;
        self.state = GuardState::Checking;
    }

    fn evaluate(&self, screen_id: &str, required: AccessLevel) -> GuardOutcome {
        let identity = match self.identity.load() {
            Ok(Some(identity)) => identity,
            Ok(None) => return GuardOutcome::RedirectToLogin,
            Err(e) => {
                tracing::warn!(error = %e, "Unreadable identity, redirecting to login");
                return GuardOutcome::RedirectToLogin;
            }
        };

        let level = access::evaluate(&identity.privileges, &identity.user_id, screen_id);
        if level.satisfies(required) {
            GuardOutcome::Allow
        } else {
            tracing::debug!(screen = screen_id, ?level, ?required, "Access denied");
            GuardOutcome::RedirectToUnauthorized
        }
    }
}
