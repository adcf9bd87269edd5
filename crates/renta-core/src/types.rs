//! # Domain Types
//!
//! Core domain types used throughout Renta.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Vehicle      │   │     Booking     │   │  Destination    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  plate_number   │   │  reference (BK-)│   │  name           │       │
//! │  │  status         │   │  status         │   │  surcharge      │       │
//! │  │  daily rate     │   │  price breakdown│   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  VehicleStatus  │   │  BookingStatus  │   │  ActivityKind   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Available      │   │  Active         │   │  Booking        │       │
//! │  │  Rented         │   │  Completed      │   │  Return         │       │
//! │  │  Maintenance    │   │  Cancelled      │   │  Maintenance    │       │
//! │  └─────────────────┘   └─────────────────┘   │  System         │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Bookings carry two identifiers:
//! - `id`: UUID v4 - immutable, guarantees uniqueness
//! - `reference`: `BK-XXXXXXXX` - the human-readable code printed on the
//!   rental contract and quoted in the activity feed
//!
//! ## Status as Closed Enums
//! The legacy storefront dispatched on status strings ("Available", "Rented",
//! ...). Here every status is a closed enum so an illegal state is
//! unrepresentable; serde renames preserve the exact strings the UI renders.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseError;
use crate::money::Money;

// =============================================================================
// Surcharge Rate
// =============================================================================

/// Seasonal surcharge rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 2000 bps = 20% (e.g., the Christmas Rush rule)
///
/// Pricing rules carry a rate but the observed quote arithmetic never applies
/// it; the rate is stored as inert configuration until product clarifies the
/// intended application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurchargeRate(u32);

impl SurchargeRate {
    /// Creates a surcharge rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        SurchargeRate(bps)
    }

    /// Creates a surcharge rate from a whole percentage (20 = 20%).
    #[inline]
    pub const fn from_percentage(pct: u32) -> Self {
        SurchargeRate(pct * 100)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Vehicle
// =============================================================================

/// The operational status of a fleet vehicle.
///
/// Transitions (all unconditional at the registry level):
/// `Available →(book) Rented →(return) Available` and
/// `Available →(send to shop) Maintenance →(mark fixed) Available`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleStatus {
    /// On the lot, bookable.
    Available,
    /// Out with a customer.
    Rented,
    /// In the shop, not bookable.
    Maintenance,
}

/// Body category shown as a storefront filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleCategory {
    Sedan,
    #[serde(rename = "SUV")]
    Suv,
    #[serde(rename = "MPV")]
    Mpv,
    Van,
    Pickup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transmission {
    Automatic,
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
    Gasoline,
    Diesel,
}

/// A fleet vehicle.
///
/// Seeded at startup and never deleted; only `status` mutates, and only
/// through registry actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Unique identifier (UUID v4).
    pub id: String,

    pub make: String,
    pub model: String,
    pub year: i32,

    /// LTO plate number - business identifier.
    pub plate_number: String,

    pub category: VehicleCategory,
    pub transmission: Transmission,
    pub fuel_type: FuelType,
    pub seats: u8,

    /// Daily base rate in whole pesos.
    pub base_price_daily_pesos: i64,

    /// Mutable operational status.
    pub status: VehicleStatus,
}

impl Vehicle {
    /// Returns the daily base rate as a Money type.
    #[inline]
    pub fn base_price_daily(&self) -> Money {
        Money::from_pesos(self.base_price_daily_pesos)
    }

    /// Returns "Make Model" as quoted in activity messages.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

// =============================================================================
// Destination
// =============================================================================

/// A rental destination with a fixed out-of-town surcharge.
///
/// Created at startup or by the admin add-action; treated as immutable once a
/// booking references it (referential, not enforced).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub name: String,
    /// Non-negative surcharge in whole pesos (0 = local, no surcharge).
    pub surcharge_pesos: i64,
}

impl Destination {
    /// Returns the surcharge as a Money type.
    #[inline]
    pub fn surcharge(&self) -> Money {
        Money::from_pesos(self.surcharge_pesos)
    }
}

// =============================================================================
// Add-On
// =============================================================================

/// An optional extra billed per rental day (child seat, GPS, insurance...).
///
/// Static catalog: seeded at startup, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOn {
    pub id: String,
    pub name: String,
    /// Per-day price in whole pesos.
    pub price_per_day_pesos: i64,
    /// Icon label the storefront renders next to the name.
    pub icon: String,
}

impl AddOn {
    /// Returns the per-day price as a Money type.
    #[inline]
    pub fn price_per_day(&self) -> Money {
        Money::from_pesos(self.price_per_day_pesos)
    }
}

// =============================================================================
// Maintenance
// =============================================================================

/// Category of work recorded in a maintenance log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaintenanceType {
    Repair,
    Service,
    #[serde(rename = "LTO Registration")]
    LtoRegistration,
}

impl FromStr for MaintenanceType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Repair" => Ok(MaintenanceType::Repair),
            "Service" => Ok(MaintenanceType::Service),
            "LTO Registration" => Ok(MaintenanceType::LtoRegistration),
            other => Err(ParseError::UnknownMaintenanceType(other.to_string())),
        }
    }
}

/// An append-only maintenance record for a vehicle.
///
/// Created via admin action, never mutated or deleted. Adding a log does NOT
/// change the vehicle's status; that is a separate action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceLog {
    pub id: String,
    pub vehicle_id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub log_type: MaintenanceType,
    /// Cost in whole pesos.
    pub cost_pesos: i64,
    /// Odometer reading at the time of service, in km.
    pub mileage: i64,
    pub notes: String,
}

impl MaintenanceLog {
    /// Returns the cost as a Money type.
    #[inline]
    pub fn cost(&self) -> Money {
        Money::from_pesos(self.cost_pesos)
    }
}

// =============================================================================
// Pricing Rule
// =============================================================================

/// A date-ranged seasonal surcharge rule, toggled from the admin settings
/// screen.
///
/// The rate is inert: no quote computation applies it (open product
/// question). Toggling still mutates state and lands in the activity feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRule {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub surcharge: SurchargeRate,
    pub is_active: bool,
}

// =============================================================================
// Booking
// =============================================================================

/// The lifecycle status of a booking.
///
/// `Cancelled` is declared for forward compatibility but no registry action
/// reaches it; the legacy system had the same dead state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Active,
    Completed,
    Cancelled,
}

/// A rental contract.
///
/// Price breakdown fields are frozen copies of the quote at booking time
/// (snapshot pattern): later rate changes never alter an existing contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Human-readable contract reference, `BK-XXXXXXXX`.
    pub reference: String,

    pub vehicle_id: String,

    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,

    pub destination_id: String,
    /// Selected add-on ids (duplicate-free; order irrelevant).
    pub add_on_ids: Vec<String>,

    /// Frozen quote: daily rate × days.
    pub base_price_pesos: i64,
    /// Frozen quote: Σ(add-on per-day price × days).
    pub add_ons_total_pesos: i64,
    /// Frozen quote: destination surcharge.
    pub destination_fee_pesos: i64,
    /// Frozen quote: the amount actually charged (override-aware).
    pub total_price_pesos: i64,

    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,

    /// Condition snapshot recorded when the customer takes the vehicle.
    pub check_out: Option<CheckOutData>,

    /// Photo references captured at return time.
    pub return_photos: Option<Vec<String>>,
    /// Staff notes captured at return time.
    pub return_notes: Option<String>,
}

impl Booking {
    /// Returns the charged total as a Money type.
    #[inline]
    pub fn total_price(&self) -> Money {
        Money::from_pesos(self.total_price_pesos)
    }
}

// =============================================================================
// Check-Out Snapshot
// =============================================================================

/// Fuel gauge reading recorded at check-out and check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FuelLevel {
    #[default]
    Full,
    Half,
    Empty,
}

impl FromStr for FuelLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Full" => Ok(FuelLevel::Full),
            "Half" => Ok(FuelLevel::Half),
            "Empty" => Ok(FuelLevel::Empty),
            other => Err(ParseError::UnknownFuelLevel(other.to_string())),
        }
    }
}

/// Overall condition assessment recorded at check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum VehicleCondition {
    #[default]
    Good,
    Minor,
    Damaged,
}

impl FromStr for VehicleCondition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Good" => Ok(VehicleCondition::Good),
            "Minor" => Ok(VehicleCondition::Minor),
            "Damaged" => Ok(VehicleCondition::Damaged),
            other => Err(ParseError::UnknownCondition(other.to_string())),
        }
    }
}

/// The staff-recorded condition snapshot taken when a customer picks up a
/// vehicle. Written once per booking by the check-out action; the later
/// check-in compares against it to compute return fees.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutData {
    /// Contract reference this snapshot belongs to.
    pub booking_reference: String,
    /// Odometer reading at pickup, in km.
    pub initial_mileage: i64,
    pub initial_fuel_level: FuelLevel,
    /// Pre-existing scratches/dents noted before handover.
    pub pre_existing_damages: String,
    /// Photo references documenting the initial condition.
    pub photos: Vec<String>,
    pub checked_out_at: DateTime<Utc>,
    /// Name of the staff member who performed the handover.
    pub checked_out_by: String,
}

// =============================================================================
// Activity Feed
// =============================================================================

/// Category tag on an activity entry; the dashboard colors entries by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Booking,
    Return,
    Maintenance,
    System,
}

/// An append-only, display-only audit-trail entry.
///
/// The feed is newest-first and unbounded; nothing ever reads it back for
/// business decisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
}

// =============================================================================
// Unit Tests
// =============================================================================
