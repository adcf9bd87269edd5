//! # Error Types
//!
//! Typed parse errors for renta-core.
//!
//! ## Where Errors Are (And Are Not) Allowed
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The registry action surface is TOTAL: unknown ids are silent no-ops   │
//! │  and invalid numeric form input falls back to defaults (see `input`).  │
//! │  That policy is load-bearing - the UI has no error/toast path.         │
//! │                                                                         │
//! │  The one place a typed error exists is string → enum parsing           │
//! │  (fuel level, condition, maintenance type), where the caller decides   │
//! │  the fallback via `.unwrap_or_default()`.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Failure to interpret a form-select string as a closed enum value.
///
/// Callers apply the permissive default (`FuelLevel::Full`,
/// `VehicleCondition::Good`) rather than surfacing this to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown fuel level: {0}")]
    UnknownFuelLevel(String),

    #[error("unknown vehicle condition: {0}")]
    UnknownCondition(String),

    #[error("unknown maintenance type: {0}")]
    UnknownMaintenanceType(String),
}
