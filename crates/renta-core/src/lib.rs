//! # renta-core: Pure Business Logic for Renta
//!
//! This crate is the **heart** of Renta, a car-rental storefront and
//! back-office system. It contains all business logic as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Renta Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                       UI shells (out of scope)                  │   │
//! │  │   Storefront ──► POS ──► Fleet Admin ──► Customer Portal       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 renta-registry (action surface)                 │   │
//! │  │    create_booking, return_vehicle, set_maintenance, ...        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ renta-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   quote   │  │   fees    │  │   │
//! │  │   │  Vehicle  │  │   Money   │  │   Quote   │  │ReturnFees │  │   │
//! │  │   │  Booking  │  │  (pesos)  │  │ breakdown │  │ check-in  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Vehicle, Booking, Destination, etc.)
//! - [`money`] - Money type with integer peso arithmetic (no floating point!)
//! - [`quote`] - Rental quote calculator shared by storefront and POS
//! - [`fees`] - Check-in return-fee calculator
//! - [`input`] - Permissive form-input parsing (defaults, never rejects)
//! - [`error`] - Typed parse errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in whole pesos (i64) to avoid float errors
//! 4. **Permissive Inputs**: Invalid form input degrades to defaults, never errors
//!
//! ## Example Usage
//!
//! ```rust
//! use renta_core::money::Money;
//! use renta_core::quote::Quote;
//!
//! // Toyota Vios at ₱2,500/day for 3 days to Davao City (₱500 surcharge)
//! let quote = Quote::compute(
//!     Money::from_pesos(2500),
//!     3,
//!     Money::from_pesos(500),
//!     &[],
//!     None,
//! );
//! assert_eq!(quote.final_total.pesos(), 8000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod fees;
pub mod input;
pub mod money;
pub mod quote;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use renta_core::Money` instead of
// `use renta_core::money::Money`

pub use error::ParseError;
pub use fees::{ReturnAssessment, ReturnFees};
pub use money::Money;
pub use quote::Quote;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================
// Return-fee policy constants. These are fixed company policy, not
// configuration: the check-in screen has always billed these exact amounts
// and compatibility tests pin them.

/// Kilometres included in every rental before excess-km charges apply.
pub const FREE_KM_ALLOWANCE: i64 = 300;

/// Charge per kilometre beyond the free allowance, in whole pesos.
pub const EXCESS_KM_FEE_PER_KM: i64 = 10;

/// Refuelling charge when the vehicle comes back with an empty tank.
pub const FUEL_FEE_EMPTY: i64 = 1500;

/// Refuelling charge when the vehicle comes back with a half tank.
pub const FUEL_FEE_HALF: i64 = 800;

/// Flat charge when the vehicle comes back damaged.
pub const DAMAGE_FEE: i64 = 5000;
