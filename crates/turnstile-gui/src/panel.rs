//! Turnstile control panel
//!
//! Draws the picking controls, the angle slider (-180..=180 integer
//! degrees), the typed-angle entry, and the image render form, and returns
//! the actions to perform. All enablement is a pure function of the
//! session status plus the captured-snapshot flag.

use egui::{Button, Slider, TextEdit, Ui};

use turnstile_wizard::SessionStatus;

use crate::render::{RenderSettings, Units};

/// Action requested from the panel
#[derive(Debug, Clone, PartialEq)]
pub enum PanelAction {
    /// Begin a new picking session
    Start,
    /// Finalize the currently open arm group
    FinishArm,
    /// Capture the initial configuration and enable angle controls
    PickingFinished,
    /// Discard the session
    Reset,
    /// Apply a turnstile angle in degrees
    SetAngle(f64),
    /// Restore the initial configuration
    Revert,
    /// Render an image with the current render settings
    Render,
    /// Close the dialog
    Close,
}

/// Whether the "Arm Atoms Selection Done" control is active
pub fn finish_arm_enabled(status: SessionStatus) -> bool {
    status.is_picking()
}

/// Whether the "Picking Finished" control is active
pub fn picking_finished_enabled(status: SessionStatus, captured: bool) -> bool {
    status.is_ready() && !captured
}

/// Whether the angle slider, entry, and revert controls are active
pub fn angle_controls_enabled(status: SessionStatus, captured: bool) -> bool {
    status.is_ready() && captured
}

/// Parse a typed angle entry; NaN and infinities are treated as invalid
/// input, since a non-finite angle cannot be clamped to a bound
fn parse_angle(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// The turnstile dialog panel
pub struct TurnstilePanel {
    /// Slider position in integer degrees
    slider_value: i32,
    /// Contents of the typed-angle field
    angle_text: String,
    /// Status line shown under the title
    status_line: String,
}

impl Default for TurnstilePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnstilePanel {
    /// Create a panel with angle 0 and an empty status line
    pub fn new() -> Self {
        Self {
            slider_value: 0,
            angle_text: "0".to_string(),
            status_line: String::new(),
        }
    }

    /// Replace the status line
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_line = msg.into();
    }

    /// The current status line
    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    /// Synchronize the slider and text field with an applied angle
    ///
    /// Called after the session clamps a typed angle, so the clamped value
    /// is what gets redisplayed.
    pub fn sync_angle(&mut self, degrees: f64) {
        self.slider_value = degrees.round() as i32;
        self.angle_text = self.slider_value.to_string();
    }

    /// The angle currently shown on the slider
    pub fn slider_angle(&self) -> i32 {
        self.slider_value
    }

    /// Draw the panel and collect the requested actions
    pub fn show(
        &mut self,
        ui: &mut Ui,
        status: SessionStatus,
        captured: bool,
        prompt: &str,
        render: &mut RenderSettings,
    ) -> Vec<PanelAction> {
        let mut actions = Vec::new();

        ui.heading("Three-Arm Turnstile Assistant");
        if self.status_line.is_empty() {
            ui.label(prompt);
        } else {
            ui.label(&self.status_line);
        }
        ui.separator();

        // Picking controls
        ui.horizontal(|ui| {
            if ui.add(Button::new("Start")).clicked() {
                actions.push(PanelAction::Start);
            }
            if ui
                .add_enabled(
                    finish_arm_enabled(status),
                    Button::new("Arm Atoms Selection Done"),
                )
                .clicked()
            {
                actions.push(PanelAction::FinishArm);
            }
            if ui
                .add_enabled(
                    picking_finished_enabled(status, captured),
                    Button::new("Picking Finished"),
                )
                .clicked()
            {
                actions.push(PanelAction::PickingFinished);
            }
            if ui.add(Button::new("Reset")).clicked() {
                actions.push(PanelAction::Reset);
            }
        });

        ui.separator();

        // Angle controls
        let angle_enabled = angle_controls_enabled(status, captured);
        ui.horizontal(|ui| {
            let slider = ui.add_enabled(
                angle_enabled,
                Slider::new(&mut self.slider_value, -180..=180).text("angle"),
            );
            if slider.changed() {
                self.angle_text = self.slider_value.to_string();
                actions.push(PanelAction::SetAngle(self.slider_value as f64));
            }
        });
        ui.horizontal(|ui| {
            ui.add_enabled(
                angle_enabled,
                TextEdit::singleline(&mut self.angle_text).desired_width(60.0),
            );
            if ui
                .add_enabled(angle_enabled, Button::new("Set Angle"))
                .clicked()
            {
                match parse_angle(&self.angle_text) {
                    Some(degrees) => actions.push(PanelAction::SetAngle(degrees)),
                    None => {
                        log::warn!("cannot parse angle '{}'", self.angle_text);
                        self.angle_text = self.slider_value.to_string();
                    }
                }
            }
            if ui
                .add_enabled(angle_enabled, Button::new("Revert"))
                .clicked()
            {
                actions.push(PanelAction::Revert);
            }
        });

        ui.separator();

        // Image render form
        ui.horizontal(|ui| {
            ui.label("File:");
            ui.add(TextEdit::singleline(&mut render.filename).desired_width(160.0));
        });
        ui.horizontal(|ui| {
            ui.label("Size:");
            ui.add(egui::DragValue::new(&mut render.width).speed(0.1));
            ui.label("x");
            ui.add(egui::DragValue::new(&mut render.height).speed(0.1));
            egui::ComboBox::from_id_salt("turnstile_units")
                .selected_text(render.units.label())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut render.units, Units::Inches, Units::Inches.label());
                    ui.selectable_value(&mut render.units, Units::Cm, Units::Cm.label());
                });
            ui.label("DPI:");
            ui.add(egui::DragValue::new(&mut render.dpi));
            if ui.add(Button::new("Ray")).clicked() {
                actions.push(PanelAction::Render);
            }
        });

        ui.separator();
        if ui.add(Button::new("Close")).clicked() {
            actions.push(PanelAction::Close);
        }

        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use turnstile_wizard::{ErrorKind, Role};

    #[test]
    fn test_enablement_follows_status() {
        let picking = SessionStatus::Picking(Role::Arm2);
        assert!(finish_arm_enabled(picking));
        assert!(!picking_finished_enabled(picking, false));
        assert!(!angle_controls_enabled(picking, false));

        let ready = SessionStatus::ReadyForAngle;
        assert!(!finish_arm_enabled(ready));
        assert!(picking_finished_enabled(ready, false));
        assert!(!angle_controls_enabled(ready, false));
        assert!(!picking_finished_enabled(ready, true));
        assert!(angle_controls_enabled(ready, true));

        assert!(!angle_controls_enabled(SessionStatus::NotStarted, false));
        assert!(!angle_controls_enabled(
            SessionStatus::Error(ErrorKind::InvalidPick),
            false
        ));
    }

    #[test]
    fn test_sync_angle_redisplays_clamped_value() {
        let mut panel = TurnstilePanel::new();
        panel.sync_angle(180.0);
        assert_eq!(panel.slider_angle(), 180);
        assert_eq!(panel.angle_text, "180");

        panel.sync_angle(-32.4);
        assert_eq!(panel.slider_angle(), -32);
        assert_eq!(panel.angle_text, "-32");
    }

    #[test]
    fn test_angle_entry_rejects_non_finite() {
        assert_eq!(parse_angle("45"), Some(45.0));
        assert_eq!(parse_angle(" -12.5 "), Some(-12.5));
        assert_eq!(parse_angle("NaN"), None);
        assert_eq!(parse_angle("nan"), None);
        assert_eq!(parse_angle("inf"), None);
        assert_eq!(parse_angle("-inf"), None);
        assert_eq!(parse_angle("abc"), None);
    }

    #[test]
    fn test_status_line() {
        let mut panel = TurnstilePanel::new();
        assert!(panel.status_line().is_empty());
        panel.set_status("Please finish your selection first...");
        assert_eq!(panel.status_line(), "Please finish your selection first...");
    }
}
