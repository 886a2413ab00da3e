//! Picking state machine
//!
//! `TurnstileWizard` consumes pick notifications from the host viewer and
//! classifies each into one of four ordered roles: the anchor and three
//! arms. Roles are finalized explicitly by the user ("selection done"),
//! except the anchor, which auto-finishes after its single pick.

use crate::error::{WizardError, WizardResult};
use crate::host::HostViewer;
use crate::names;
use crate::status::{Role, SessionStatus};

/// Host mouse selection mode for single-atom picking
const ATOMIC_SELECTION_MODE: i32 = 0;

/// Finite-state controller that groups raw atom picks into roles
///
/// Lifecycle: [`start`](Self::start) opens a fresh session collecting the
/// anchor; [`finish_role`](Self::finish_role) closes the open group and
/// advances; [`reset`](Self::reset) discards everything;
/// [`cleanup`](Self::cleanup) additionally restores the host's selection
/// mode. Every selection the wizard creates lives in the hidden `_tw`
/// namespace and is removed on reset.
#[derive(Debug)]
pub struct TurnstileWizard {
    /// Number of picks in the still-open group
    group_size: usize,
    /// Finalized group sizes, indexed by role ordinal
    group_sizes: Vec<usize>,
    /// Host selection mode saved on start, restored on cleanup
    saved_selection_mode: Option<i32>,
    status: SessionStatus,
}

impl Default for TurnstileWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnstileWizard {
    /// Create a wizard with no active session
    pub fn new() -> Self {
        Self {
            group_size: 0,
            group_sizes: Vec::new(),
            saved_selection_mode: None,
            status: SessionStatus::NotStarted,
        }
    }

    /// Current session status
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Sizes of all finalized groups so far, indexed by role ordinal
    pub fn completed_sizes(&self) -> &[usize] {
        &self.group_sizes
    }

    /// Per-role member counts, available once all four roles are finalized
    pub fn role_sizes(&self) -> Option<[usize; 4]> {
        if self.group_sizes.len() == 4 {
            Some([
                self.group_sizes[0],
                self.group_sizes[1],
                self.group_sizes[2],
                self.group_sizes[3],
            ])
        } else {
            None
        }
    }

    /// User-facing instruction for the current state
    pub fn prompt(&self) -> &'static str {
        match self.status {
            SessionStatus::NotStarted => "Click \"Start\" to begin picking turnstile atoms.",
            SessionStatus::Picking(Role::Anchor) => "Please click on the anchor atom...",
            SessionStatus::Picking(Role::Arm1) => "Please click on the first arm atom(s)...",
            SessionStatus::Picking(Role::Arm2) => "Please click on the second arm atom(s)...",
            SessionStatus::Picking(Role::Arm3) => "Please click on the third arm atom(s)...",
            SessionStatus::ReadyForAngle => "Please click the \"Picking Finished\" button.",
            SessionStatus::Error(_) => "Please retry the last action.",
        }
    }

    /// Begin a fresh picking session
    ///
    /// Clears all groups and counters, removes any prior selections in the
    /// session namespace, and switches the host to atomic picking mode
    /// (saving the previous mode for [`cleanup`](Self::cleanup)).
    pub fn start(&mut self, host: &mut dyn HostViewer) {
        if self.saved_selection_mode.is_none() {
            self.saved_selection_mode = Some(host.selection_mode());
        }
        host.set_selection_mode(ATOMIC_SELECTION_MODE);
        self.clear(host);
        self.status = SessionStatus::Picking(Role::Anchor);
        log::info!("turnstile picking session started");
    }

    /// Classify one atom pick into the currently open role
    ///
    /// Materializes the host's transient pick as `_tw{role}_s{index}`,
    /// re-points the indicator highlight at it, and grows the open group.
    /// Picking the anchor finishes role 0 synchronously, which is what
    /// keeps the anchor a singleton (a second anchor pick is impossible,
    /// not rejected).
    pub fn on_atom_picked(&mut self, host: &mut dyn HostViewer) -> WizardResult {
        let SessionStatus::Picking(role) = self.status else {
            log::warn!("atom pick ignored: no picking session in progress");
            return Ok(());
        };

        let name = names::member_name(role, self.group_size);
        host.materialize_selection(&name)?;
        host.clear_pick();
        host.highlight(names::INDICATOR_SELECTION, &name)?;

        self.group_size += 1;
        log::debug!("picked {} ({} member of {})", name, self.group_size, role.label());

        if role.is_singleton() {
            self.finish_role();
        }
        Ok(())
    }

    /// Handle a bond pick notification
    ///
    /// The pick is dropped and no group is mutated; the session stays in
    /// its current state.
    pub fn on_bond_picked(&mut self) -> WizardResult {
        log::error!("invalid pick: please click atoms, not bonds");
        Err(WizardError::InvalidPick)
    }

    /// Finalize the currently open group and advance to the next role
    ///
    /// Records the open group's size (even if zero; minimum sizes are
    /// validated when the initial configuration is captured). After the
    /// third arm the session becomes ready for angle manipulation.
    pub fn finish_role(&mut self) {
        let SessionStatus::Picking(role) = self.status else {
            log::warn!("finish ignored: no picking session in progress");
            return;
        };

        self.group_sizes.push(self.group_size);
        self.group_size = 0;
        self.status = match role.next() {
            Some(next) => SessionStatus::Picking(next),
            None => SessionStatus::ReadyForAngle,
        };
        log::debug!(
            "{} finalized with {} member(s)",
            role.label(),
            self.group_sizes[role.index()]
        );
    }

    /// Discard all groups and remove every session selection from the host
    pub fn reset(&mut self, host: &mut dyn HostViewer) {
        self.clear(host);
        self.status = SessionStatus::NotStarted;
        log::info!("turnstile session reset");
    }

    /// Full teardown: reset and restore the host's saved selection mode
    pub fn cleanup(&mut self, host: &mut dyn HostViewer) {
        if let Some(mode) = self.saved_selection_mode.take() {
            host.set_selection_mode(mode);
        }
        self.reset(host);
    }

    fn clear(&mut self, host: &mut dyn HostViewer) {
        host.clear_selections(&names::member_pattern());
        host.clear_selections(&names::indicator_pattern());
        host.clear_pick();
        host.deselect();
        self.group_size = 0;
        self.group_sizes.clear();
    }
}
