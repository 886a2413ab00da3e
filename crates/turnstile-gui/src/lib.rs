//! Dialog panel for the three-arm turnstile assistant
//!
//! Presentation layer over `turnstile-wizard`: an egui panel whose widget
//! enablement is derived from the emitted [`SessionStatus`] and the
//! captured-snapshot flag (never by reaching into session internals), a
//! dialog that dispatches panel actions against a [`HostViewer`], and a
//! process-wide dialog registry with explicit init/teardown.
//!
//! [`SessionStatus`]: turnstile_wizard::SessionStatus
//! [`HostViewer`]: turnstile_wizard::HostViewer

mod dialog;
mod panel;
pub mod registry;
mod render;

pub use dialog::TurnstileDialog;
pub use panel::{PanelAction, TurnstilePanel};
pub use render::{RenderSettings, Units};
