//! Window-close detection.
//!
//! The scripting bridge has no close notification, so [`PollingMonitor`] asks
//! the application at a fixed interval. Callers only see [`CloseMonitor`], so
//! an event-driven backend can replace polling without touching them.

use std::time::Duration;

use tracing::{debug, info};

use crate::open::types::OpenTarget;
use crate::remote::{WindowHandle, WindowState};

/// Answers whether a window is still open.
pub trait WindowProbe {
    fn window_state(&self, window: &WindowHandle) -> WindowState;
}

/// How waiting ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The application reported the window gone.
    Closed,
    /// The existence query failed, which is what closing a window normally
    /// looks like from the outside.
    Invalidated { reason: String },
}

/// Blocks until a window is closed.
pub trait CloseMonitor {
    fn wait_for_close(&self, probe: &dyn WindowProbe, window: &WindowHandle) -> WaitOutcome;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorState {
    Polling,
    Done(WaitOutcome),
}

/// Polls window existence at a fixed interval with no timeout.
///
/// Interrupting the process (Ctrl+C) is the only way to stop early.
#[derive(Debug, Clone)]
pub struct PollingMonitor {
    interval: Duration,
}

impl PollingMonitor {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// One poll: map the probe's answer to the next state.
    pub fn step(probe: &dyn WindowProbe, window: &WindowHandle) -> MonitorState {
        match probe.window_state(window) {
            WindowState::Exists => MonitorState::Polling,
            WindowState::NotFound => MonitorState::Done(WaitOutcome::Closed),
            WindowState::Error(reason) => {
                debug!(
                    event = "core.wait.window_query_failed",
                    window_id = %window,
                    reason = %reason,
                    "Treating failed window query as closed"
                );
                MonitorState::Done(WaitOutcome::Invalidated { reason })
            }
        }
    }
}

impl Default for PollingMonitor {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}

impl CloseMonitor for PollingMonitor {
    fn wait_for_close(&self, probe: &dyn WindowProbe, window: &WindowHandle) -> WaitOutcome {
        info!(
            event = "core.wait.poll_started",
            window_id = %window,
            interval_ms = self.interval.as_millis() as u64
        );

        let mut polls: u64 = 0;
        loop {
            polls += 1;
            match Self::step(probe, window) {
                MonitorState::Polling => std::thread::sleep(self.interval),
                MonitorState::Done(outcome) => {
                    info!(
                        event = "core.wait.poll_completed",
                        window_id = %window,
                        polls = polls,
                        outcome = ?outcome
                    );
                    return outcome;
                }
            }
        }
    }
}

/// Whether `--wait` applies to what was opened.
///
/// Waiting is only unambiguous for exactly one file, piped text, or a new
/// blank document.
pub fn should_wait(requested: bool, target: &OpenTarget) -> bool {
    requested
        && match target {
            OpenTarget::Files(files) => files.len() == 1,
            OpenTarget::Pipe(_) | OpenTarget::NewDocument => true,
            OpenTarget::Nothing => false,
        }
}
