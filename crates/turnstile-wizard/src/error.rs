//! Error types for the wizard and session

use thiserror::Error;

use crate::host::HostError;
use crate::status::ErrorKind;
use turnstile_geom::GeometryError;

/// Result type for wizard and session operations
pub type WizardResult<T = ()> = Result<T, WizardError>;

/// Errors that can occur while picking atoms or applying an angle
///
/// Every variant is recoverable at the event-callback boundary: the
/// triggering request is rejected, prior displayed geometry is left
/// unchanged, and the user is re-prompted through the status line.
#[derive(Debug, Error)]
pub enum WizardError {
    /// The three axis-defining atoms are collinear; the rotation request
    /// is rejected
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// A bond was picked instead of an atom; the pick is dropped
    #[error("invalid pick: please click atoms, not bonds")]
    InvalidPick,

    /// Angle manipulation requested before all four roles were finalized
    #[error("incomplete session: {0}")]
    IncompleteSession(String),

    /// A typed angle fell outside the allowed range
    #[error("angle {angle} out of range [{min}, {max}]")]
    AngleOutOfRange { angle: f64, min: f64, max: f64 },

    /// The host viewer reported a failure
    #[error("host viewer error: {0}")]
    Host(#[from] HostError),
}

impl WizardError {
    /// Create an incomplete-session error
    pub fn incomplete(msg: impl Into<String>) -> Self {
        WizardError::IncompleteSession(msg.into())
    }

    /// Classify the error for status reporting
    pub fn kind(&self) -> ErrorKind {
        match self {
            WizardError::Geometry(_) => ErrorKind::DegenerateGeometry,
            WizardError::InvalidPick => ErrorKind::InvalidPick,
            WizardError::IncompleteSession(_) => ErrorKind::IncompleteSession,
            WizardError::AngleOutOfRange { .. } => ErrorKind::AngleOutOfRange,
            // Host failures surface as an incomplete request to the user
            WizardError::Host(_) => ErrorKind::IncompleteSession,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WizardError::AngleOutOfRange {
            angle: 200.0,
            min: -180.0,
            max: 180.0,
        };
        assert_eq!(format!("{}", err), "angle 200 out of range [-180, 180]");
        assert_eq!(err.kind(), ErrorKind::AngleOutOfRange);

        let err = WizardError::from(GeometryError::DegenerateGeometry);
        assert_eq!(err.kind(), ErrorKind::DegenerateGeometry);
    }
}
