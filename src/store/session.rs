use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::Holding;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    Idle,
    Loading,
    Ready,
    Refreshing,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionStatus {
    pub phase: SessionPhase,
    pub error: Option<String>,
}

#[derive(Debug)]
enum SessionState {
    Idle,
    Loading,
    Ready {
        holdings: Vec<Holding>,
        as_of: DateTime<Utc>,
    },
    Refreshing {
        holdings: Vec<Holding>,
        as_of: DateTime<Utc>,
    },
    Failed {
        message: String,
    },
}

/// Owner of the holdings collection for the single dashboard session.
///
/// The lifecycle is explicit: `Idle → Loading → Ready` for the initial load,
/// `Ready → Refreshing → Ready` for each refresh, `Loading → Failed` when the
/// feed is unavailable (terminal until a retry starts a new load). Every
/// transition method rejects moves the lifecycle does not allow, and the
/// collection is always replaced wholesale, never patched in place. While a
/// refresh is in flight the previous holdings stay readable, so the dashboard
/// keeps showing the stale rows rather than going blank.
pub struct PortfolioSession {
    state: RwLock<SessionState>,
}

impl PortfolioSession {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(SessionState::Idle),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        match &*self.state.read() {
            SessionState::Idle => SessionPhase::Idle,
            SessionState::Loading => SessionPhase::Loading,
            SessionState::Ready { .. } => SessionPhase::Ready,
            SessionState::Refreshing { .. } => SessionPhase::Refreshing,
            SessionState::Failed { .. } => SessionPhase::Failed,
        }
    }

    pub fn status(&self) -> SessionStatus {
        let (phase, error) = match &*self.state.read() {
            SessionState::Idle => (SessionPhase::Idle, None),
            SessionState::Loading => (SessionPhase::Loading, None),
            SessionState::Ready { .. } => (SessionPhase::Ready, None),
            SessionState::Refreshing { .. } => (SessionPhase::Refreshing, None),
            SessionState::Failed { message } => (SessionPhase::Failed, Some(message.clone())),
        };
        SessionStatus { phase, error }
    }

    /// Start the initial load, or a retry after a failed one.
    pub fn begin_load(&self) -> Result<(), AppError> {
        let mut state = self.state.write();
        match &*state {
            SessionState::Idle | SessionState::Failed { .. } => {
                *state = SessionState::Loading;
                Ok(())
            }
            SessionState::Loading => Err(AppError::NotReady("load already in progress".into())),
            SessionState::Refreshing { .. } => {
                Err(AppError::NotReady("refresh already in progress".into()))
            }
            SessionState::Ready { .. } => Err(AppError::NotReady("portfolio already loaded".into())),
        }
    }

    pub fn complete_load(&self, holdings: Vec<Holding>) -> Result<(), AppError> {
        let mut state = self.state.write();
        match &*state {
            SessionState::Loading => {
                *state = SessionState::Ready {
                    holdings,
                    as_of: Utc::now(),
                };
                Ok(())
            }
            _ => Err(AppError::NotReady("no load in progress".into())),
        }
    }

    pub fn fail_load(&self, message: &str) -> Result<(), AppError> {
        let mut state = self.state.write();
        match &*state {
            SessionState::Loading => {
                *state = SessionState::Failed {
                    message: message.to_string(),
                };
                Ok(())
            }
            _ => Err(AppError::NotReady("no load in progress".into())),
        }
    }

    /// Start a refresh and hand back the current holdings to perturb.
    pub fn begin_refresh(&self) -> Result<Vec<Holding>, AppError> {
        let mut state = self.state.write();
        match &mut *state {
            SessionState::Ready { holdings, as_of } => {
                let snapshot = std::mem::take(holdings);
                let as_of = *as_of;
                *state = SessionState::Refreshing {
                    holdings: snapshot.clone(),
                    as_of,
                };
                Ok(snapshot)
            }
            SessionState::Refreshing { .. } => {
                Err(AppError::NotReady("refresh already in progress".into()))
            }
            SessionState::Loading => Err(AppError::NotReady("load already in progress".into())),
            SessionState::Idle => Err(AppError::NotReady("portfolio not loaded".into())),
            SessionState::Failed { message } => Err(AppError::LoadFailed(message.clone())),
        }
    }

    pub fn complete_refresh(&self, holdings: Vec<Holding>) -> Result<(), AppError> {
        let mut state = self.state.write();
        match &*state {
            SessionState::Refreshing { .. } => {
                *state = SessionState::Ready {
                    holdings,
                    as_of: Utc::now(),
                };
                Ok(())
            }
            _ => Err(AppError::NotReady("no refresh in progress".into())),
        }
    }

    /// Current holdings and the time they last changed.
    pub fn holdings(&self) -> Result<(Vec<Holding>, DateTime<Utc>), AppError> {
        match &*self.state.read() {
            SessionState::Ready { holdings, as_of }
            | SessionState::Refreshing { holdings, as_of } => Ok((holdings.clone(), *as_of)),
            SessionState::Idle | SessionState::Loading => {
                Err(AppError::NotReady("portfolio not loaded".into()))
            }
            SessionState::Failed { message } => Err(AppError::LoadFailed(message.clone())),
        }
    }
}

impl Default for PortfolioSession {
    fn default() -> Self {
        Self::new()
    }
}
