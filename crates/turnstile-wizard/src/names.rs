//! Selection namespace owned by a turnstile session
//!
//! Member selections are named `_tw{role}_s{index}`; the indicator
//! selection is `_indicate_tw`. The leading underscore hides the
//! selections from the host's object list.

use crate::status::Role;

/// Prefix for per-atom member selections
pub const SELECTION_PREFIX: &str = "_tw";

/// Infix separating the role ordinal from the member index
pub const SUBGROUP_PREFIX: &str = "_s";

/// Name of the hidden indicator selection used for pick highlighting
pub const INDICATOR_SELECTION: &str = "_indicate_tw";

/// Selection name for member `index` of `role`
pub fn member_name(role: Role, index: usize) -> String {
    format!(
        "{}{}{}{}",
        SELECTION_PREFIX,
        role.index(),
        SUBGROUP_PREFIX,
        index
    )
}

/// Glob pattern matching every member selection of the session
pub fn member_pattern() -> String {
    format!("{}*", SELECTION_PREFIX)
}

/// Glob pattern matching the indicator selection(s)
pub fn indicator_pattern() -> String {
    "_indicate*".to_string()
}
