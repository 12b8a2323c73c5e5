//! Cooperative cancellation for in-flight downloads and copies.
//!
//! A single [`CancelToken`] is shared between the SIGINT handler and the
//! long-running loops. The first signal trips the token and lets the current
//! operation unwind through the normal error path; a second signal exits
//! immediately.

use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Exit code used when a run is cancelled.
pub const EXIT_CODE_CANCELLED: i32 = 80;

/// Shared flag polled by downloads and copies between chunks.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Install the SIGINT handler backing `token`.
///
/// First signal: trip the token and let the run unwind. Second signal:
/// exit immediately with the cancelled exit code.
pub fn install_handler(token: CancelToken) -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        if token.is_cancelled() {
            process::exit(EXIT_CODE_CANCELLED);
        }
        eprintln!("Interrupt received, stopping after the current operation...");
        token.cancel();
    })
}
