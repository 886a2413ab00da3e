//! Turnstile dialog
//!
//! Bundles the session, the panel, and the render settings, and dispatches
//! panel actions against the host viewer. Every session error is caught
//! here, at the event-callback boundary: it is logged and surfaced on the
//! panel's status line, and never propagates into the host.

use egui::Ui;

use turnstile_wizard::{HostViewer, TurnstileSession, WizardError};

use crate::panel::{PanelAction, TurnstilePanel};
use crate::render::RenderSettings;

/// The long-lived turnstile dialog
pub struct TurnstileDialog {
    session: TurnstileSession,
    panel: TurnstilePanel,
    render: RenderSettings,
    open: bool,
}

impl Default for TurnstileDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnstileDialog {
    /// Create a dialog with a fresh session
    pub fn new() -> Self {
        Self {
            session: TurnstileSession::new(),
            panel: TurnstilePanel::new(),
            render: RenderSettings::default(),
            open: true,
        }
    }

    /// Whether the dialog should be displayed
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show the dialog again after a close
    pub fn reopen(&mut self) {
        self.open = true;
    }

    /// The underlying session (status queries for embedding hosts)
    pub fn session(&self) -> &TurnstileSession {
        &self.session
    }

    /// Forward an atom pick notification from the host
    pub fn on_atom_picked(&mut self, host: &mut dyn HostViewer) {
        if let Err(err) = self.session.on_atom_picked(host) {
            self.report(err);
        }
    }

    /// Forward a bond pick notification from the host
    pub fn on_bond_picked(&mut self) {
        if let Err(err) = self.session.on_bond_picked() {
            self.report(err);
        }
    }

    /// Tear the session down (dialog destroyed or plugin unloaded)
    pub fn cleanup(&mut self, host: &mut dyn HostViewer) {
        self.session.cleanup(host);
    }

    /// Draw the dialog contents and dispatch the resulting actions
    pub fn ui(&mut self, ui: &mut Ui, host: &mut dyn HostViewer) {
        let status = self.session.status();
        let captured = self.session.initial().is_some();
        let prompt = self.session.prompt();
        let actions = self
            .panel
            .show(ui, status, captured, prompt, &mut self.render);
        for action in actions {
            self.handle_action(host, action);
        }
    }

    /// Apply one panel action to the session
    pub fn handle_action(&mut self, host: &mut dyn HostViewer, action: PanelAction) {
        match action {
            PanelAction::Start => {
                self.session.start(host);
                self.panel.sync_angle(0.0);
                self.panel
                    .set_status("Please specify the three-arm turnstile atoms");
            }
            PanelAction::FinishArm => {
                self.session.finish_role();
                self.panel.set_status(self.session.prompt());
            }
            PanelAction::PickingFinished => match self.session.capture_initial(host) {
                Ok(sizes) => {
                    self.panel.sync_angle(0.0);
                    self.panel.set_status(format!(
                        "You've selected {}, {} and {} atoms for three arms.",
                        sizes[1], sizes[2], sizes[3]
                    ));
                }
                Err(err) => self.report(err),
            },
            PanelAction::SetAngle(degrees) => {
                match self.session.apply_angle_degrees(host, degrees) {
                    Ok(applied) => self.panel.sync_angle(applied),
                    Err(err) => self.report(err),
                }
            }
            PanelAction::Revert => match self.session.revert(host) {
                Ok(applied) => self.panel.sync_angle(applied),
                Err(err) => self.report(err),
            },
            PanelAction::Reset => {
                self.session.reset(host);
                self.panel.sync_angle(0.0);
                self.panel.set_status(self.session.prompt());
            }
            PanelAction::Render => {
                if let Err(err) = self.render.execute(host) {
                    log::error!("render failed: {}", err);
                    self.panel.set_status(format!("Render failed: {}", err));
                }
            }
            PanelAction::Close => {
                self.open = false;
            }
        }
    }

    fn report(&mut self, err: WizardError) {
        log::error!("{}", err);
        self.panel.set_status(err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use turnstile_wizard::{HostError, Point3, Role, SessionStatus};

    #[derive(Default)]
    struct StubHost {
        pending_pick: Option<Point3>,
        coords: Vec<(String, Point3)>,
    }

    impl HostViewer for StubHost {
        fn materialize_selection(&mut self, name: &str) -> Result<(), HostError> {
            let pos = self
                .pending_pick
                .ok_or_else(|| HostError::Viewer("no pick".to_string()))?;
            self.coords.push((name.to_string(), pos));
            Ok(())
        }
        fn clear_pick(&mut self) {
            self.pending_pick = None;
        }
        fn highlight(&mut self, _name: &str, _target: &str) -> Result<(), HostError> {
            Ok(())
        }
        fn clear_selections(&mut self, pattern: &str) {
            let prefix = pattern.trim_end_matches('*').to_string();
            self.coords.retain(|(name, _)| !name.starts_with(&prefix));
        }
        fn deselect(&mut self) {}
        fn get_coordinates(&self, name: &str) -> Result<Point3, HostError> {
            self.coords
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, p)| *p)
                .ok_or_else(|| HostError::SelectionNotFound(name.to_string()))
        }
        fn set_coordinates(&mut self, name: &str, pos: Point3) -> Result<(), HostError> {
            match self.coords.iter_mut().find(|(n, _)| n == name) {
                Some((_, p)) => {
                    *p = pos;
                    Ok(())
                }
                None => Err(HostError::SelectionNotFound(name.to_string())),
            }
        }
        fn rebuild(&mut self) {}
        fn selection_mode(&self) -> i32 {
            0
        }
        fn set_selection_mode(&mut self, _mode: i32) {}
    }

    fn pick(dialog: &mut TurnstileDialog, host: &mut StubHost, x: f64, y: f64, z: f64) {
        host.pending_pick = Some(Point3::new(x, y, z));
        dialog.on_atom_picked(host);
    }

    #[test]
    fn test_start_action_resets_panel() {
        let mut host = StubHost::default();
        let mut dialog = TurnstileDialog::new();

        dialog.handle_action(&mut host, PanelAction::Start);
        assert_eq!(
            dialog.session().status(),
            SessionStatus::Picking(Role::Anchor)
        );
        assert!(dialog.panel.status_line().contains("turnstile atoms"));
    }

    #[test]
    fn test_full_flow_through_actions() {
        let mut host = StubHost::default();
        let mut dialog = TurnstileDialog::new();

        dialog.handle_action(&mut host, PanelAction::Start);
        pick(&mut dialog, &mut host, 0.0, 0.0, 0.0);
        pick(&mut dialog, &mut host, 1.0, 0.0, 0.0);
        dialog.handle_action(&mut host, PanelAction::FinishArm);
        pick(&mut dialog, &mut host, 0.0, 1.0, 0.0);
        dialog.handle_action(&mut host, PanelAction::FinishArm);
        pick(&mut dialog, &mut host, 0.0, 0.0, 1.0);
        dialog.handle_action(&mut host, PanelAction::FinishArm);

        dialog.handle_action(&mut host, PanelAction::PickingFinished);
        assert!(dialog
            .panel
            .status_line()
            .contains("You've selected 1, 1 and 1 atoms"));

        // A typed angle past the bound is clamped and redisplayed
        dialog.handle_action(&mut host, PanelAction::SetAngle(270.0));
        assert_eq!(dialog.panel.slider_angle(), 180);
        assert_eq!(dialog.session().current_angle(), 180.0);

        dialog.handle_action(&mut host, PanelAction::Revert);
        assert_eq!(dialog.panel.slider_angle(), 0);
    }

    #[test]
    fn test_premature_finish_reports_error() {
        let mut host = StubHost::default();
        let mut dialog = TurnstileDialog::new();

        dialog.handle_action(&mut host, PanelAction::Start);
        dialog.handle_action(&mut host, PanelAction::PickingFinished);
        assert!(dialog.panel.status_line().contains("incomplete session"));
    }

    #[test]
    fn test_close_action() {
        let mut host = StubHost::default();
        let mut dialog = TurnstileDialog::new();
        assert!(dialog.is_open());
        dialog.handle_action(&mut host, PanelAction::Close);
        assert!(!dialog.is_open());
        dialog.reopen();
        assert!(dialog.is_open());
    }
}
