//! Display and naming defaults
//!
//! Small knobs shared by auto-naming and the table/summary renderers.
//! Callers that want different table output pass their own
//! [`TableOptions`](crate::table::TableOptions); these are the defaults.

/// Separator between a kind tag and its counter in generated names
pub const NAME_SEPARATOR: char = '_';

/// Spaces between table columns
pub const TABLE_PADDING: usize = 3;

/// Entry count at which `Display` switches from the full table to the
/// one-line summary
pub const DISPLAY_LIMIT: usize = 50;

/// Fallback display color for particles that do not declare one
pub const DEFAULT_COLOR: [u8; 3] = [0x80, 0x80, 0x80];
