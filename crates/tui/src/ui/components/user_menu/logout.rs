//! Lifecycle of a single logout attempt.

use std::time::Duration;

use tokio::task::AbortHandle;
use tracing::{info, warn};
use vassa_types::{Effect, LogoutOutcome, Notification};

pub const LOGOUT_SUCCESS_MESSAGE: &str = "Logged out successfully!";
pub const LOGOUT_FAILURE_MESSAGE: &str = "Logout failed!";

#[derive(Debug, Default)]
enum Phase {
    #[default]
    Idle,
    /// The call is in flight; the handle aborts it on teardown.
    Pending(Option<AbortHandle>),
    /// The backend accepted the logout; a reload is scheduled.
    Succeeded,
}

/// `Idle -> Pending -> {Succeeded, Failed -> Idle}`.
#[derive(Debug, Default)]
pub struct LogoutFlow {
    phase: Phase,
}

impl LogoutFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending(_))
    }

    pub fn has_succeeded(&self) -> bool {
        matches!(self.phase, Phase::Succeeded)
    }

    /// Moves to Pending. Returns `false` (and changes nothing) if a logout is
    /// already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        self.phase = Phase::Pending(None);
        true
    }

    /// Records the abort handle of the spawned call.
    pub fn attach(&mut self, handle: AbortHandle) {
        if let Phase::Pending(slot) = &mut self.phase {
            *slot = Some(handle);
        }
    }

    /// Applies the call's outcome and returns the follow-up effects.
    /// Outcomes that arrive while not Pending are stale and ignored.
    pub fn complete(&mut self, outcome: &LogoutOutcome, reload_delay: Duration) -> Vec<Effect> {
        if !self.is_pending() {
            return Vec::new();
        }
        match outcome {
            LogoutOutcome::Succeeded => {
                info!("logout succeeded");
                self.phase = Phase::Succeeded;
                vec![
                    Effect::Notify(Notification::success(LOGOUT_SUCCESS_MESSAGE)),
                    Effect::ScheduleReload(reload_delay),
                ]
            }
            LogoutOutcome::Failed(reason) => {
                warn!(%reason, "logout failed");
                self.phase = Phase::Idle;
                vec![Effect::Notify(Notification::error(LOGOUT_FAILURE_MESSAGE))]
            }
            LogoutOutcome::TimedOut => {
                warn!(reason = "request timed out", "logout failed");
                self.phase = Phase::Idle;
                vec![Effect::Notify(Notification::error(LOGOUT_FAILURE_MESSAGE))]
            }
        }
    }

    /// Cancels an in-flight call and returns to Idle.
    pub fn abort(&mut self) {
        if let Phase::Pending(Some(handle)) = &self.phase {
            handle.abort();
            info!("in-flight logout aborted");
        }
        self.phase = Phase::Idle;
    }

    /// Clears a finished flow on reload. An in-flight call is left alone.
    pub fn reset(&mut self) {
        if !self.is_pending() {
            self.phase = Phase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(1000);

    #[test]
    fn second_request_while_pending_is_ignored() {
        let mut flow = LogoutFlow::new();
        assert!(flow.begin());
        assert!(!flow.begin());
        assert!(flow.is_pending());
    }

    #[test]
    fn success_notifies_and_schedules_reload() {
        let mut flow = LogoutFlow::new();
        flow.begin();
        let effects = flow.complete(&LogoutOutcome::Succeeded, DELAY);
        assert_eq!(
            effects,
            vec![
                Effect::Notify(Notification::success("Logged out successfully!")),
                Effect::ScheduleReload(DELAY),
            ]
        );
        assert!(flow.has_succeeded());
        assert!(!flow.is_pending());
    }

    #[test]
    fn failure_and_timeout_return_to_idle() {
        for outcome in [LogoutOutcome::Failed("500".into()), LogoutOutcome::TimedOut] {
            let mut flow = LogoutFlow::new();
            flow.begin();
            let effects = flow.complete(&outcome, DELAY);
            assert_eq!(effects, vec![Effect::Notify(Notification::error("Logout failed!"))]);
            assert!(!flow.is_pending());
            assert!(flow.begin(), "a new attempt is allowed after {outcome:?}");
        }
    }

    #[test]
    fn stale_outcomes_are_ignored() {
        let mut flow = LogoutFlow::new();
        assert!(flow.complete(&LogoutOutcome::Succeeded, DELAY).is_empty());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn abort_cancels_the_attached_task() {
        let mut flow = LogoutFlow::new();
        flow.begin();
        let task = tokio::spawn(std::future::pending::<()>());
        flow.attach(task.abort_handle());

        flow.abort();
        assert!(!flow.is_pending());
        assert!(task.await.unwrap_err().is_cancelled());
    }
}
