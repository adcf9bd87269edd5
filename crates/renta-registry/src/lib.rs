//! # renta-registry: In-Memory Fleet & Booking Store
//!
//! The registry is the single source of truth for all mutable state in
//! Renta. UI shells call its action surface and render its projections;
//! nothing mutates entities outside of it.
//!
//! ## Module Organization
//! ```text
//! renta_registry/
//! ├── lib.rs       ◄─── You are here (exports)
//! ├── registry.rs  ◄─── The store: collections + action surface
//! ├── state.rs     ◄─── Arc<Mutex<Registry>> wrapper for UI shells
//! ├── seed.rs      ◄─── Startup fleet/catalog data
//! └── bin/
//!     └── demo.rs  ◄─── Developer walkthrough binary
//! ```
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  registry projections ──► UI reads ──► user input ──► Quote::compute   │
//! │        ▲                                                   │            │
//! │        │                                                   ▼            │
//! │  activity appended ◄── status mutated ◄── create_booking(quote)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use renta_core::input::parse_rental_days;
//! use renta_core::{Money, Quote};
//! use renta_registry::{seed_registry, NewBooking};
//!
//! let mut registry = seed_registry();
//! let vehicle = registry.vehicles()[0].clone();
//! let destination = registry.destinations()[1].clone();
//!
//! let days = parse_rental_days("3");
//! let quote = Quote::compute(
//!     vehicle.base_price_daily(),
//!     days,
//!     destination.surcharge(),
//!     &[],
//!     None,
//! );
//!
//! let reference = registry.create_booking(NewBooking {
//!     vehicle_id: vehicle.id.clone(),
//!     customer_name: "Online Customer".to_string(),
//!     customer_email: "customer@example.com".to_string(),
//!     customer_phone: "+63 900 000 0000".to_string(),
//!     start_date: chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
//!     end_date: chrono::NaiveDate::from_ymd_opt(2025, 6, 4).unwrap(),
//!     days,
//!     destination_id: destination.id.clone(),
//!     add_on_ids: vec![],
//!     quote,
//! });
//! assert!(registry.find_booking(&reference).is_some());
//! ```

pub mod registry;
pub mod seed;
pub mod state;

pub use registry::{NewBooking, NewMaintenanceLog, Registry};
pub use seed::seed_registry;
pub use state::RegistryState;
