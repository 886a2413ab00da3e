//! Process-wide dialog registry
//!
//! The embedding host keeps a single long-lived dialog for the process
//! lifetime. The registry owns it explicitly, with `init` and `teardown`
//! bracketing the plugin's lifetime, instead of an implicit global kept
//! alive by callback closures.

use parking_lot::Mutex;

use crate::dialog::TurnstileDialog;

static DIALOG: Mutex<Option<TurnstileDialog>> = Mutex::new(None);

/// Create the process-wide dialog if it does not exist yet
///
/// Returns true when a new dialog was created, false when one already
/// existed (the existing dialog is reopened in that case).
pub fn init() -> bool {
    let mut slot = DIALOG.lock();
    match slot.as_mut() {
        Some(dialog) => {
            dialog.reopen();
            false
        }
        None => {
            *slot = Some(TurnstileDialog::new());
            log::debug!("turnstile dialog created");
            true
        }
    }
}

/// Whether the dialog exists
pub fn is_initialized() -> bool {
    DIALOG.lock().is_some()
}

/// Run a closure against the dialog, if it exists
pub fn with_dialog<R>(f: impl FnOnce(&mut TurnstileDialog) -> R) -> Option<R> {
    DIALOG.lock().as_mut().map(f)
}

/// Destroy the dialog
///
/// The caller is responsible for running session cleanup against the host
/// first (see [`TurnstileDialog::cleanup`]).
pub fn teardown() {
    if DIALOG.lock().take().is_some() {
        log::debug!("turnstile dialog destroyed");
    }
}
