//! Blocking until an editor window closes.

pub mod monitor;

pub use monitor::{
    CloseMonitor, MonitorState, PollingMonitor, WaitOutcome, WindowProbe, should_wait,
};
