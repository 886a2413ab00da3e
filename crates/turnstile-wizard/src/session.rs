//! Session state: initial configuration capture and angle application
//!
//! Rotations are always computed from the one-time coordinate snapshot,
//! never compounded from the previous frame, so repeated slider movement
//! accumulates no numerical drift and the last angle processed wins.

use turnstile_geom::{rotate_about_axis, Point3};

use crate::error::{WizardError, WizardResult};
use crate::host::HostViewer;
use crate::names;
use crate::settings::WizardSettings;
use crate::status::{ErrorKind, Role, SessionStatus};
use crate::wizard::TurnstileWizard;

/// Reference coordinates captured once when picking finishes
///
/// Read-only after creation; every displayed angle is recomputed from
/// these points.
#[derive(Debug, Clone)]
pub struct InitialConfiguration {
    /// Per-role ordered coordinate snapshots
    groups: [Vec<Point3>; 4],
}

impl InitialConfiguration {
    /// Read the snapshot for every finalized group from the host
    fn capture(host: &dyn HostViewer, sizes: [usize; 4]) -> WizardResult<Self> {
        let mut groups: [Vec<Point3>; 4] = [Vec::new(), Vec::new(), Vec::new(), Vec::new()];
        for role in Role::ALL {
            let group = &mut groups[role.index()];
            group.reserve(sizes[role.index()]);
            for i in 0..sizes[role.index()] {
                group.push(host.get_coordinates(&names::member_name(role, i))?);
            }
        }
        Ok(Self { groups })
    }

    /// The anchor atom position
    pub fn anchor(&self) -> Point3 {
        self.groups[Role::Anchor.index()][0]
    }

    /// The three axis-defining points: the first atom of each arm
    pub fn axis_points(&self) -> (Point3, Point3, Point3) {
        (
            self.groups[Role::Arm1.index()][0],
            self.groups[Role::Arm2.index()][0],
            self.groups[Role::Arm3.index()][0],
        )
    }

    /// Snapshot coordinates of one arm (role 1-3)
    pub fn arm(&self, role: Role) -> &[Point3] {
        &self.groups[role.index()]
    }

    /// Member counts per role
    pub fn sizes(&self) -> [usize; 4] {
        [
            self.groups[0].len(),
            self.groups[1].len(),
            self.groups[2].len(),
            self.groups[3].len(),
        ]
    }
}

/// Rotate every arm atom from the snapshot and stage the result on the host
fn rotate_arms(
    initial: &InitialConfiguration,
    host: &mut dyn HostViewer,
    theta: f64,
) -> WizardResult {
    let anchor = initial.anchor();
    let (p1, p2, p3) = initial.axis_points();

    for role in [Role::Arm1, Role::Arm2, Role::Arm3] {
        for (i, point) in initial.arm(role).iter().enumerate() {
            let rotated = rotate_about_axis(anchor, *point, p1, p2, p3, theta)?;
            host.set_coordinates(&names::member_name(role, i), rotated)?;
        }
    }
    host.rebuild();
    Ok(())
}

/// A turnstile session: picking wizard plus the captured snapshot and the
/// currently applied angle
#[derive(Debug, Default)]
pub struct TurnstileSession {
    wizard: TurnstileWizard,
    initial: Option<InitialConfiguration>,
    angle_degrees: f64,
    settings: WizardSettings,
    /// Kind of the last recoverable failure; cleared by the next
    /// successful operation
    error: Option<ErrorKind>,
}

impl TurnstileSession {
    /// Create a session with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with custom settings
    pub fn with_settings(settings: WizardSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// The session settings
    pub fn settings(&self) -> &WizardSettings {
        &self.settings
    }

    /// Current session status
    ///
    /// After a recoverable failure this reports [`SessionStatus::Error`]
    /// with the failure kind; the underlying picking state is unchanged
    /// and is reported again once the next operation succeeds.
    pub fn status(&self) -> SessionStatus {
        match self.error {
            Some(kind) => SessionStatus::Error(kind),
            None => self.wizard.status(),
        }
    }

    /// User-facing instruction for the current state
    pub fn prompt(&self) -> &'static str {
        if self.error.is_some() {
            "Please retry the last action."
        } else {
            self.wizard.prompt()
        }
    }

    /// Per-role member counts once all four roles are finalized
    pub fn role_sizes(&self) -> Option<[usize; 4]> {
        self.wizard.role_sizes()
    }

    /// The captured snapshot, if picking has finished
    pub fn initial(&self) -> Option<&InitialConfiguration> {
        self.initial.as_ref()
    }

    /// The currently applied angle in degrees
    pub fn current_angle(&self) -> f64 {
        self.angle_degrees
    }

    /// Record a recoverable failure so it surfaces through [`status`](Self::status)
    fn fail<T>(&mut self, err: WizardError) -> WizardResult<T> {
        self.error = Some(err.kind());
        Err(err)
    }

    /// Begin a fresh picking session, discarding any previous snapshot
    pub fn start(&mut self, host: &mut dyn HostViewer) {
        self.initial = None;
        self.angle_degrees = 0.0;
        self.error = None;
        self.wizard.start(host);
    }

    /// Classify one atom pick (see [`TurnstileWizard::on_atom_picked`])
    pub fn on_atom_picked(&mut self, host: &mut dyn HostViewer) -> WizardResult {
        match self.wizard.on_atom_picked(host) {
            Ok(()) => {
                self.error = None;
                Ok(())
            }
            Err(err) => self.fail(err),
        }
    }

    /// Handle a bond pick notification (recoverable, pick dropped)
    pub fn on_bond_picked(&mut self) -> WizardResult {
        match self.wizard.on_bond_picked() {
            Ok(()) => Ok(()),
            Err(err) => self.fail(err),
        }
    }

    /// Finalize the currently open group
    pub fn finish_role(&mut self) {
        self.error = None;
        self.wizard.finish_role();
    }

    /// Discard groups, snapshot, and host selections
    pub fn reset(&mut self, host: &mut dyn HostViewer) {
        self.initial = None;
        self.angle_degrees = 0.0;
        self.error = None;
        self.wizard.reset(host);
    }

    /// Full teardown including host selection-mode restore
    pub fn cleanup(&mut self, host: &mut dyn HostViewer) {
        self.initial = None;
        self.angle_degrees = 0.0;
        self.error = None;
        self.wizard.cleanup(host);
    }

    /// Capture the initial configuration after all four roles are finalized
    ///
    /// Validates the minimum group sizes (one anchor atom, at least one
    /// atom per arm), reads every member coordinate from the host, and
    /// stores the snapshot. Returns the per-role member counts for status
    /// display.
    pub fn capture_initial(&mut self, host: &mut dyn HostViewer) -> WizardResult<[usize; 4]> {
        let Some(sizes) = self.wizard.role_sizes() else {
            return self.fail(WizardError::incomplete(
                "please finish your selection first",
            ));
        };

        if sizes[Role::Anchor.index()] != 1 {
            return self.fail(WizardError::incomplete(format!(
                "expected exactly 1 anchor atom, got {}",
                sizes[Role::Anchor.index()]
            )));
        }
        for role in [Role::Arm1, Role::Arm2, Role::Arm3] {
            if sizes[role.index()] < role.min_members() {
                return self.fail(WizardError::incomplete(format!(
                    "the {} has no atoms",
                    role.label()
                )));
            }
        }

        let initial = match InitialConfiguration::capture(host, sizes) {
            Ok(initial) => initial,
            Err(err) => return self.fail(err),
        };
        log::info!(
            "initial configuration captured: {}, {} and {} arm atoms",
            sizes[1],
            sizes[2],
            sizes[3]
        );
        self.initial = Some(initial);
        self.angle_degrees = 0.0;
        self.error = None;
        Ok(sizes)
    }

    /// Rotate all arm atoms to `degrees` away from the initial configuration
    ///
    /// The angle is clamped to the configured range (with a warning when
    /// clamping occurs), converted to radians, and applied per atom with
    /// the axis defined by the anchor-relative plane of the first atom of
    /// each arm. New coordinates are staged on the host and a rebuild is
    /// requested. Returns the angle actually applied.
    ///
    /// Fails with `AngleOutOfRange` for non-finite input (NaN or infinity
    /// cannot be clamped to a meaningful bound), with `IncompleteSession`
    /// when no snapshot has been captured, and with `DegenerateGeometry`
    /// when the three axis atoms are collinear; in all cases no coordinate
    /// is written.
    pub fn apply_angle_degrees(
        &mut self,
        host: &mut dyn HostViewer,
        degrees: f64,
    ) -> WizardResult<f64> {
        if !degrees.is_finite() {
            return self.fail(WizardError::AngleOutOfRange {
                angle: degrees,
                min: self.settings.angle_min,
                max: self.settings.angle_max,
            });
        }

        let clamped = self.settings.clamp_angle(degrees);
        if clamped != degrees {
            log::warn!(
                "{}",
                WizardError::AngleOutOfRange {
                    angle: degrees,
                    min: self.settings.angle_min,
                    max: self.settings.angle_max,
                }
            );
        }

        let Some(initial) = self.initial.as_ref() else {
            return self.fail(WizardError::incomplete("picking is not finished"));
        };

        match rotate_arms(initial, host, clamped.to_radians()) {
            Ok(()) => {
                self.angle_degrees = clamped;
                self.error = None;
                log::debug!("applied turnstile angle {:.1} degrees", clamped);
                Ok(clamped)
            }
            Err(err) => self.fail(err),
        }
    }

    /// Restore the initial configuration (angle 0)
    pub fn revert(&mut self, host: &mut dyn HostViewer) -> WizardResult<f64> {
        self.apply_angle_degrees(host, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostError;

    struct EmptyHost;

    impl HostViewer for EmptyHost {
        fn materialize_selection(&mut self, _name: &str) -> Result<(), HostError> {
            Ok(())
        }
        fn clear_pick(&mut self) {}
        fn highlight(&mut self, _name: &str, _target: &str) -> Result<(), HostError> {
            Ok(())
        }
        fn clear_selections(&mut self, _pattern: &str) {}
        fn deselect(&mut self) {}
        fn get_coordinates(&self, name: &str) -> Result<Point3, HostError> {
            Err(HostError::SelectionNotFound(name.to_string()))
        }
        fn set_coordinates(&mut self, _name: &str, _pos: Point3) -> Result<(), HostError> {
            Ok(())
        }
        fn rebuild(&mut self) {}
        fn selection_mode(&self) -> i32 {
            0
        }
        fn set_selection_mode(&mut self, _mode: i32) {}
    }

    #[test]
    fn test_capture_requires_finished_session() {
        let mut host = EmptyHost;
        let mut session = TurnstileSession::new();

        session.start(&mut host);
        let err = session.capture_initial(&mut host).unwrap_err();
        assert!(matches!(err, WizardError::IncompleteSession(_)));
    }

    #[test]
    fn test_angle_requires_snapshot() {
        let mut host = EmptyHost;
        let mut session = TurnstileSession::new();

        let err = session.apply_angle_degrees(&mut host, 45.0).unwrap_err();
        assert!(matches!(err, WizardError::IncompleteSession(_)));
        assert_eq!(session.current_angle(), 0.0);
    }

    #[test]
    fn test_capture_rejects_empty_arm() {
        let mut host = EmptyHost;
        let mut session = TurnstileSession::new();

        session.start(&mut host);
        session.on_atom_picked(&mut host).unwrap();
        session.on_atom_picked(&mut host).unwrap();
        session.finish_role(); // arm 1: one atom
        session.finish_role(); // arm 2: empty
        session.on_atom_picked(&mut host).unwrap();
        session.finish_role(); // arm 3: one atom

        let err = session.capture_initial(&mut host).unwrap_err();
        assert!(matches!(err, WizardError::IncompleteSession(_)));
        assert!(format!("{}", err).contains("second arm"));
    }

    #[test]
    fn test_non_finite_angle_is_rejected() {
        let mut host = EmptyHost;
        let mut session = TurnstileSession::new();

        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = session.apply_angle_degrees(&mut host, bad).unwrap_err();
            assert!(matches!(err, WizardError::AngleOutOfRange { .. }));
            assert_eq!(
                session.status(),
                SessionStatus::Error(ErrorKind::AngleOutOfRange)
            );
        }
        assert_eq!(session.current_angle(), 0.0);
    }

    #[test]
    fn test_error_status_cleared_on_start() {
        let mut host = EmptyHost;
        let mut session = TurnstileSession::new();

        assert!(session.apply_angle_degrees(&mut host, 45.0).is_err());
        assert_eq!(
            session.status(),
            SessionStatus::Error(ErrorKind::IncompleteSession)
        );
        assert_eq!(session.prompt(), "Please retry the last action.");

        session.start(&mut host);
        assert_eq!(session.status(), SessionStatus::Picking(Role::Anchor));
    }
}
