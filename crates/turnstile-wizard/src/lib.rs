//! Picking state machine and rotation session for the turnstile assistant
//!
//! This crate implements the interactive core of the three-arm turnstile
//! plugin: a wizard that groups raw atom picks into four ordered roles
//! (anchor plus three arms), and a session that snapshots the picked
//! coordinates and rotates the arms rigidly about the anchor.
//!
//! # Overview
//!
//! - [`HostViewer`] — abstract contract with the 3D viewer host (named
//!   selections, coordinate access, redraw); implemented by the embedding
//!   application
//! - [`TurnstileWizard`] — finite-state pick classifier with reset and
//!   cleanup lifecycle
//! - [`TurnstileSession`] — wizard plus the captured initial configuration
//!   and angle application
//! - [`SessionStatus`] — value emitted on every transition; presentation
//!   layers derive all widget enablement from it and never reach into
//!   session internals
//!
//! # Example
//!
//! ```ignore
//! use turnstile_wizard::TurnstileSession;
//!
//! let mut session = TurnstileSession::new();
//! session.start(&mut host);
//! // ... host feeds picks via session.on_atom_picked(&mut host) ...
//! session.finish_role();
//! session.capture_initial(&mut host)?;
//! session.apply_angle_degrees(&mut host, 90.0)?;
//! ```

mod error;
mod host;
pub mod names;
mod session;
mod settings;
mod status;
mod wizard;

pub use error::{WizardError, WizardResult};
pub use host::{HostError, HostViewer};
pub use session::{InitialConfiguration, TurnstileSession};
pub use settings::WizardSettings;
pub use status::{ErrorKind, Role, SessionStatus};
pub use wizard::TurnstileWizard;

/// Re-export of the geometry point type used across the host contract
pub use turnstile_geom::Point3;
