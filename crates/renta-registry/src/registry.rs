//! # Fleet & Booking Registry
//!
//! The single source of truth for all mutable entities. Every UI surface
//! (storefront, POS, fleet admin, customer portal) reads projections from the
//! registry and mutates it only through the action methods here.
//!
//! ## Action Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Registry Actions                                   │
//! │                                                                         │
//! │  UI Event                  Action                    State Change        │
//! │  ────────                  ──────                    ────────────        │
//! │  Confirm booking ────────► create_booking() ───────► booking stored,    │
//! │                                                      vehicle → Rented   │
//! │  Check-in complete ──────► complete_booking() ─────► booking Completed, │
//! │                                                      vehicle → Available│
//! │  Quick return / fixed ───► return_vehicle() ───────► vehicle → Available│
//! │  Send to shop ───────────► set_maintenance() ──────► vehicle →          │
//! │                                                      Maintenance        │
//! │  Log service work ───────► add_maintenance_log() ──► log prepended      │
//! │  Toggle seasonal rule ───► update_pricing_rule() ──► rule replaced      │
//! │  Add destination ────────► add_destination() ──────► destination added  │
//! │  Handover to customer ───► record_check_out() ─────► snapshot attached  │
//! │                                                                         │
//! │  EVERY applied action appends one activity-feed entry.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Policy
//! Actions are total, fire-and-forget commands: an unknown target id is a
//! silent no-op, never an error. The UI has no error path and compatibility
//! tests pin this behavior.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use renta_core::money::Money;
use renta_core::quote::Quote;
use renta_core::types::{
    Activity, ActivityKind, AddOn, Booking, BookingStatus, CheckOutData, Destination,
    MaintenanceLog, MaintenanceType, PricingRule, Vehicle, VehicleStatus,
};

// =============================================================================
// Action Inputs
// =============================================================================

/// Everything the booking flow collects before calling
/// [`Registry::create_booking`]. The quote is computed first (the storefront
/// and POS both run [`Quote::compute`]) and frozen into the booking record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub vehicle_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,
    pub destination_id: String,
    /// Selected add-on ids (duplicate-free).
    pub add_on_ids: Vec<String>,
    /// The price breakdown the customer agreed to.
    pub quote: Quote,
}

/// Admin-entered maintenance record, before the registry assigns an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMaintenanceLog {
    pub vehicle_id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub log_type: MaintenanceType,
    pub cost: Money,
    pub mileage: i64,
    pub notes: String,
}

// =============================================================================
// Registry
// =============================================================================

/// The in-memory store of vehicles, bookings, destinations, add-ons,
/// maintenance logs, pricing rules and the activity feed.
///
/// ## Ownership
/// The registry exclusively owns every collection. Callers get shared
/// references from the query methods and mutate only through actions -
/// this keeps the store unit-testable and every mutation audit-logged.
///
/// ## Ordering Invariants
/// Bookings, maintenance logs and activities are newest-first (prepend on
/// insert); vehicles, destinations and add-ons keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    vehicles: Vec<Vehicle>,
    destinations: Vec<Destination>,
    add_ons: Vec<AddOn>,
    maintenance_logs: Vec<MaintenanceLog>,
    pricing_rules: Vec<PricingRule>,
    bookings: Vec<Booking>,
    activities: Vec<Activity>,
}

impl Registry {
    /// Creates an empty registry (tests and custom setups).
    pub fn new() -> Self {
        Registry::default()
    }

    /// Creates a registry pre-loaded with a fleet and catalogs, recording the
    /// startup activity the dashboard shows on first render.
    pub fn with_inventory(
        vehicles: Vec<Vehicle>,
        destinations: Vec<Destination>,
        add_ons: Vec<AddOn>,
        pricing_rules: Vec<PricingRule>,
    ) -> Self {
        let mut registry = Registry {
            vehicles,
            destinations,
            add_ons,
            pricing_rules,
            ..Registry::default()
        };
        info!(
            vehicles = registry.vehicles.len(),
            destinations = registry.destinations.len(),
            "registry initialized"
        );
        let message = format!(
            "System initialized with {} vehicles",
            registry.vehicles.len()
        );
        registry.push_activity(message, ActivityKind::System);
        registry
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Creates a rental contract and rents out its vehicle.
    ///
    /// Stores the booking with status `Active` (newest first), sets the
    /// referenced vehicle to `Rented`, and appends a `booking` activity.
    /// Returns the generated contract reference (`BK-XXXXXXXX`).
    ///
    /// The registry does not guard against booking a vehicle that is already
    /// `Rented` - the UI disables those buttons, and enforcing it here would
    /// change observable behavior. The booking is stored even when the
    /// vehicle id is unknown; in that case no activity is appended.
    pub fn create_booking(&mut self, data: NewBooking) -> String {
        let id = Uuid::new_v4();
        let reference = booking_reference(&id);
        debug!(%reference, vehicle_id = %data.vehicle_id, "create_booking");

        let booking = Booking {
            id: id.to_string(),
            reference: reference.clone(),
            vehicle_id: data.vehicle_id.clone(),
            customer_name: data.customer_name.clone(),
            customer_email: data.customer_email,
            customer_phone: data.customer_phone,
            start_date: data.start_date,
            end_date: data.end_date,
            days: data.days,
            destination_id: data.destination_id,
            add_on_ids: data.add_on_ids,
            base_price_pesos: data.quote.base_price.pesos(),
            add_ons_total_pesos: data.quote.add_ons_total.pesos(),
            destination_fee_pesos: data.quote.destination_fee.pesos(),
            total_price_pesos: data.quote.final_total.pesos(),
            status: BookingStatus::Active,
            created_at: Utc::now(),
            check_out: None,
            return_photos: None,
            return_notes: None,
        };
        self.bookings.insert(0, booking);

        if let Some(vehicle) = self.vehicles.iter_mut().find(|v| v.id == data.vehicle_id) {
            vehicle.status = VehicleStatus::Rented;
        }

        let vehicle_name = self.vehicle_display_name(&data.vehicle_id);
        if let Some(name) = vehicle_name {
            let message = format!(
                "New booking: {} for {} ({} days, {})",
                name,
                data.customer_name,
                data.days,
                data.quote.final_total
            );
            self.push_activity(message, ActivityKind::Booking);
        }

        reference
    }

    /// Completes a contract at check-in: booking → `Completed`, return
    /// photos/notes attached, vehicle → `Available`, `return` activity.
    ///
    /// Silent no-op on an unknown reference.
    pub fn complete_booking(
        &mut self,
        reference: &str,
        photos: Option<Vec<String>>,
        notes: Option<String>,
    ) {
        debug!(%reference, "complete_booking");
        let Some(booking) = self.bookings.iter_mut().find(|b| b.reference == reference) else {
            return;
        };
        booking.status = BookingStatus::Completed;
        booking.return_photos = photos;
        booking.return_notes = notes;
        let vehicle_id = booking.vehicle_id.clone();

        if let Some(vehicle) = self.vehicles.iter_mut().find(|v| v.id == vehicle_id) {
            vehicle.status = VehicleStatus::Available;
        }

        if let Some(name) = self.vehicle_display_name(&vehicle_id) {
            let message = format!("Booking {reference} completed: {name} returned");
            self.push_activity(message, ActivityKind::Return);
        }
    }

    /// Vehicle-only return: used for walk-in contracts without a booking
    /// record, and to mark a vehicle fixed after maintenance.
    ///
    /// Silent no-op on an unknown vehicle id.
    pub fn return_vehicle(&mut self, vehicle_id: &str) {
        debug!(%vehicle_id, "return_vehicle");
        if let Some(vehicle) = self.vehicles.iter_mut().find(|v| v.id == vehicle_id) {
            vehicle.status = VehicleStatus::Available;
        }
        if let Some(name) = self.vehicle_display_name(vehicle_id) {
            self.push_activity(format!("Vehicle {name} returned"), ActivityKind::Return);
        }
    }

    /// Sends a vehicle to the shop: status → `Maintenance`.
    ///
    /// Silent no-op on an unknown vehicle id.
    pub fn set_maintenance(&mut self, vehicle_id: &str) {
        debug!(%vehicle_id, "set_maintenance");
        if let Some(vehicle) = self.vehicles.iter_mut().find(|v| v.id == vehicle_id) {
            vehicle.status = VehicleStatus::Maintenance;
        }
        if let Some(name) = self.vehicle_display_name(vehicle_id) {
            self.push_activity(
                format!("Vehicle {name} sent for maintenance"),
                ActivityKind::Maintenance,
            );
        }
    }

    /// Records service work against a vehicle. Prepends the log and appends a
    /// `maintenance` activity; never changes the vehicle's status (sending a
    /// vehicle to the shop is a separate action).
    ///
    /// Returns the generated log id.
    pub fn add_maintenance_log(&mut self, log: NewMaintenanceLog) -> String {
        let id = Uuid::new_v4().to_string();
        debug!(log_id = %id, vehicle_id = %log.vehicle_id, "add_maintenance_log");

        let message = format!("Maintenance log added for vehicle {}", log.vehicle_id);
        self.maintenance_logs.insert(
            0,
            MaintenanceLog {
                id: id.clone(),
                vehicle_id: log.vehicle_id,
                date: log.date,
                log_type: log.log_type,
                cost_pesos: log.cost.pesos(),
                mileage: log.mileage,
                notes: log.notes,
            },
        );
        self.push_activity(message, ActivityKind::Maintenance);
        id
    }

    /// Replaces the pricing rule with a matching id in place. No bounds
    /// validation on the date range or percentage; the rate is inert
    /// configuration either way. Appends a `system` activity.
    pub fn update_pricing_rule(&mut self, rule: PricingRule) {
        debug!(rule_id = %rule.id, "update_pricing_rule");
        let message = format!("Pricing rule '{}' updated", rule.name);
        if let Some(existing) = self.pricing_rules.iter_mut().find(|r| r.id == rule.id) {
            *existing = rule;
        }
        self.push_activity(message, ActivityKind::System);
    }

    /// Adds a destination to the surcharge catalog. The registry generates
    /// the id (UUID v4), so two destinations added in the same session can
    /// never collide. Returns the new id.
    pub fn add_destination(&mut self, name: impl Into<String>, surcharge: Money) -> String {
        let id = Uuid::new_v4().to_string();
        let name = name.into();
        debug!(destination_id = %id, %name, "add_destination");

        let message = format!("New destination '{name}' added");
        self.destinations.push(Destination {
            id: id.clone(),
            name,
            surcharge_pesos: surcharge.pesos(),
        });
        self.push_activity(message, ActivityKind::System);
        id
    }

    /// Attaches the staff check-out snapshot to its booking and appends a
    /// `system` activity. The dashboard only offers check-out for bookings
    /// without a snapshot, so in practice this writes once per booking.
    ///
    /// Silent no-op on an unknown booking reference.
    pub fn record_check_out(&mut self, data: CheckOutData) {
        debug!(reference = %data.booking_reference, "record_check_out");
        let reference = data.booking_reference.clone();
        let Some(booking) = self
            .bookings
            .iter_mut()
            .find(|b| b.reference == reference)
        else {
            return;
        };
        booking.check_out = Some(data);
        self.push_activity(
            format!("Check-out recorded for booking {reference}"),
            ActivityKind::System,
        );
    }

    // =========================================================================
    // Projections
    // =========================================================================

    /// All fleet vehicles, seed order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Vehicles filtered by status (storefront shows `Available`, the fleet
    /// screen tabs over all three).
    pub fn vehicles_with_status(&self, status: VehicleStatus) -> Vec<&Vehicle> {
        self.vehicles.iter().filter(|v| v.status == status).collect()
    }

    pub fn find_vehicle(&self, vehicle_id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == vehicle_id)
    }

    /// Destination surcharge catalog.
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn find_destination(&self, destination_id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == destination_id)
    }

    /// Static add-on catalog.
    pub fn add_ons(&self) -> &[AddOn] {
        &self.add_ons
    }

    pub fn find_add_on(&self, add_on_id: &str) -> Option<&AddOn> {
        self.add_ons.iter().find(|a| a.id == add_on_id)
    }

    /// Maintenance history, newest first.
    pub fn maintenance_logs(&self) -> &[MaintenanceLog] {
        &self.maintenance_logs
    }

    /// Seasonal pricing rules (inert; see [`PricingRule`]).
    pub fn pricing_rules(&self) -> &[PricingRule] {
        &self.pricing_rules
    }

    /// All bookings, newest first.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn find_booking(&self, reference: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.reference == reference)
    }

    /// The customer-portal projection: bookings whose customer email matches
    /// exactly, case-insensitively (the portal's simulated login).
    pub fn bookings_for_customer(&self, email: &str) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| b.customer_email.eq_ignore_ascii_case(email))
            .collect()
    }

    /// The activity feed, newest first, unbounded.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn vehicle_display_name(&self, vehicle_id: &str) -> Option<String> {
        self.find_vehicle(vehicle_id).map(Vehicle::display_name)
    }

    fn push_activity(&mut self, message: String, kind: ActivityKind) {
        self.activities.insert(
            0,
            Activity {
                id: Uuid::new_v4().to_string(),
                message,
                timestamp: Utc::now(),
                kind,
            },
        );
    }
}

/// Derives the human-readable contract reference from the booking's UUID:
/// `BK-` plus the first 8 hex chars, uppercased. Uniqueness is inherited
/// from the UUID instead of a fresh random draw.
fn booking_reference(id: &Uuid) -> String {
    let simple = id.simple().to_string();
    format!("BK-{}", simple[..8].to_uppercase())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use renta_core::types::{FuelLevel, Transmission, VehicleCategory};

    fn vios(id: &str) -> Vehicle {
        Vehicle {
            id: id.to_string(),
            make: "Toyota".to_string(),
            model: "Vios".to_string(),
            year: 2023,
            plate_number: format!("ABC-{id}"),
            category: VehicleCategory::Sedan,
            transmission: Transmission::Automatic,
            fuel_type: renta_core::types::FuelType::Gasoline,
            seats: 5,
            base_price_daily_pesos: 2500,
            status: VehicleStatus::Available,
        }
    }

    fn registry_with_one_vehicle() -> Registry {
        Registry::with_inventory(
            vec![vios("v1")],
            vec![Destination {
                id: "d1".to_string(),
                name: "Davao City".to_string(),
                surcharge_pesos: 500,
            }],
            vec![],
            vec![],
        )
    }

    fn booking_for(vehicle_id: &str, email: &str) -> NewBooking {
        let quote = Quote::compute(
            Money::from_pesos(2500),
            3,
            Money::from_pesos(500),
            &[],
            None,
        );
        NewBooking {
            vehicle_id: vehicle_id.to_string(),
            customer_name: "Maria Santos".to_string(),
            customer_email: email.to_string(),
            customer_phone: "+63 912 345 6789".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 4).unwrap(),
            days: 3,
            destination_id: "d1".to_string(),
            add_on_ids: vec![],
            quote,
        }
    }

    fn activities_of_kind(registry: &Registry, kind: ActivityKind) -> usize {
        registry
            .activities()
            .iter()
            .filter(|a| a.kind == kind)
            .count()
    }

    #[test]
    fn test_inventory_records_startup_activity() {
        let registry = registry_with_one_vehicle();
        assert_eq!(registry.activities().len(), 1);
        assert_eq!(
            registry.activities()[0].message,
            "System initialized with 1 vehicles"
        );
    }

    #[test]
    fn test_create_booking_rents_vehicle_and_logs_once() {
        let mut registry = registry_with_one_vehicle();
        let reference = registry.create_booking(booking_for("v1", "maria@example.com"));

        assert_eq!(
            registry.find_vehicle("v1").unwrap().status,
            VehicleStatus::Rented
        );
        let booking = registry.find_booking(&reference).unwrap();
        assert_eq!(booking.status, BookingStatus::Active);
        assert_eq!(booking.total_price_pesos, 8000);
        assert_eq!(activities_of_kind(&registry, ActivityKind::Booking), 1);
    }

    #[test]
    fn test_booking_reference_shape() {
        let mut registry = registry_with_one_vehicle();
        let reference = registry.create_booking(booking_for("v1", "a@b.c"));

        assert!(reference.starts_with("BK-"));
        let code = &reference[3..];
        assert_eq!(code.len(), 8);
        assert!(code
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_booking_references_are_unique() {
        let mut registry = registry_with_one_vehicle();
        let a = registry.create_booking(booking_for("v1", "a@b.c"));
        let b = registry.create_booking(booking_for("v1", "a@b.c"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_create_booking_from_any_status() {
        // No double-booking guard at the registry level: the UI disables the
        // button, the store does what it is told.
        let mut registry = registry_with_one_vehicle();
        registry.set_maintenance("v1");
        registry.create_booking(booking_for("v1", "a@b.c"));
        assert_eq!(
            registry.find_vehicle("v1").unwrap().status,
            VehicleStatus::Rented
        );
    }

    #[test]
    fn test_create_booking_unknown_vehicle_stores_without_activity() {
        let mut registry = registry_with_one_vehicle();
        let before = registry.activities().len();
        let reference = registry.create_booking(booking_for("ghost", "a@b.c"));

        assert!(registry.find_booking(&reference).is_some());
        assert_eq!(registry.activities().len(), before);
    }

    #[test]
    fn test_complete_booking_returns_vehicle() {
        let mut registry = registry_with_one_vehicle();
        let reference = registry.create_booking(booking_for("v1", "a@b.c"));

        registry.complete_booking(
            &reference,
            Some(vec!["photo-1".to_string()]),
            Some("scratch on left door".to_string()),
        );

        let booking = registry.find_booking(&reference).unwrap();
        assert_eq!(booking.status, BookingStatus::Completed);
        assert_eq!(booking.return_notes.as_deref(), Some("scratch on left door"));
        assert_eq!(
            registry.find_vehicle("v1").unwrap().status,
            VehicleStatus::Available
        );
        assert_eq!(activities_of_kind(&registry, ActivityKind::Return), 1);
    }

    #[test]
    fn test_complete_booking_unknown_reference_is_noop() {
        let mut registry = registry_with_one_vehicle();
        registry.create_booking(booking_for("v1", "a@b.c"));
        let activities_before = registry.activities().len();

        registry.complete_booking("BK-NOPE0000", None, None);

        assert_eq!(
            registry.find_vehicle("v1").unwrap().status,
            VehicleStatus::Rented
        );
        assert_eq!(registry.activities().len(), activities_before);
    }

    #[test]
    fn test_return_vehicle_marks_available() {
        let mut registry = registry_with_one_vehicle();
        registry.set_maintenance("v1");
        registry.return_vehicle("v1");
        assert_eq!(
            registry.find_vehicle("v1").unwrap().status,
            VehicleStatus::Available
        );
    }

    #[test]
    fn test_return_unknown_vehicle_is_noop() {
        let mut registry = registry_with_one_vehicle();
        let before = registry.activities().len();
        registry.return_vehicle("ghost");
        assert_eq!(registry.activities().len(), before);
    }

    #[test]
    fn test_set_maintenance() {
        let mut registry = registry_with_one_vehicle();
        registry.set_maintenance("v1");
        assert_eq!(
            registry.find_vehicle("v1").unwrap().status,
            VehicleStatus::Maintenance
        );
        assert_eq!(activities_of_kind(&registry, ActivityKind::Maintenance), 1);
    }

    #[test]
    fn test_add_maintenance_log_never_touches_status() {
        let mut registry = registry_with_one_vehicle();
        let id = registry.add_maintenance_log(NewMaintenanceLog {
            vehicle_id: "v1".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 5, 20).unwrap(),
            log_type: MaintenanceType::Service,
            cost: Money::from_pesos(3500),
            mileage: 45000,
            notes: "Oil change".to_string(),
        });

        assert_eq!(registry.maintenance_logs().len(), 1);
        assert_eq!(registry.maintenance_logs()[0].id, id);
        assert_eq!(
            registry.find_vehicle("v1").unwrap().status,
            VehicleStatus::Available
        );
        assert_eq!(activities_of_kind(&registry, ActivityKind::Maintenance), 1);
    }

    #[test]
    fn test_maintenance_logs_newest_first() {
        let mut registry = registry_with_one_vehicle();
        let first = registry.add_maintenance_log(NewMaintenanceLog {
            vehicle_id: "v1".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 5, 20).unwrap(),
            log_type: MaintenanceType::Repair,
            cost: Money::from_pesos(1200),
            mileage: 44000,
            notes: String::new(),
        });
        let second = registry.add_maintenance_log(NewMaintenanceLog {
            vehicle_id: "v1".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            log_type: MaintenanceType::Service,
            cost: Money::from_pesos(3500),
            mileage: 45000,
            notes: String::new(),
        });

        assert_eq!(registry.maintenance_logs()[0].id, second);
        assert_eq!(registry.maintenance_logs()[1].id, first);
    }

    #[test]
    fn test_update_pricing_rule_replaces_in_place() {
        let mut registry = Registry::with_inventory(
            vec![],
            vec![],
            vec![],
            vec![PricingRule {
                id: "r1".to_string(),
                name: "Christmas Rush".to_string(),
                start_date: NaiveDate::from_ymd_opt(2025, 12, 15).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
                surcharge: renta_core::types::SurchargeRate::from_percentage(20),
                is_active: true,
            }],
        );

        let mut toggled = registry.pricing_rules()[0].clone();
        toggled.is_active = false;
        registry.update_pricing_rule(toggled);

        assert!(!registry.pricing_rules()[0].is_active);
        assert_eq!(registry.pricing_rules().len(), 1);
        assert_eq!(activities_of_kind(&registry, ActivityKind::System), 2);
    }

    #[test]
    fn test_add_destination_generates_unique_ids() {
        // The legacy `count + 1` id scheme could collide; the registry owns
        // id generation now and two same-session adds must stay distinct.
        let mut registry = Registry::new();
        let a = registry.add_destination("Mati City", Money::from_pesos(2000));
        let b = registry.add_destination("Samal Island", Money::from_pesos(800));

        assert_ne!(a, b);
        assert_eq!(registry.destinations().len(), 2);
        assert_eq!(registry.find_destination(&a).unwrap().name, "Mati City");
        assert_eq!(activities_of_kind(&registry, ActivityKind::System), 2);
    }

    #[test]
    fn test_record_check_out_attaches_snapshot() {
        let mut registry = registry_with_one_vehicle();
        let reference = registry.create_booking(booking_for("v1", "a@b.c"));

        registry.record_check_out(CheckOutData {
            booking_reference: reference.clone(),
            initial_mileage: 45000,
            initial_fuel_level: FuelLevel::Full,
            pre_existing_damages: "small dent, rear bumper".to_string(),
            photos: vec!["photo-1".to_string()],
            checked_out_at: Utc::now(),
            checked_out_by: "R. Cruz".to_string(),
        });

        let snapshot = registry
            .find_booking(&reference)
            .unwrap()
            .check_out
            .as_ref()
            .unwrap();
        assert_eq!(snapshot.initial_mileage, 45000);
    }

    #[test]
    fn test_record_check_out_unknown_booking_is_noop() {
        let mut registry = registry_with_one_vehicle();
        let before = registry.activities().len();
        registry.record_check_out(CheckOutData {
            booking_reference: "BK-NOPE0000".to_string(),
            initial_mileage: 0,
            initial_fuel_level: FuelLevel::Full,
            pre_existing_damages: String::new(),
            photos: vec![],
            checked_out_at: Utc::now(),
            checked_out_by: String::new(),
        });
        assert_eq!(registry.activities().len(), before);
    }

    #[test]
    fn test_portal_email_match_is_exact_and_case_insensitive() {
        let mut registry = registry_with_one_vehicle();
        registry.create_booking(booking_for("v1", "Maria@Example.com"));

        assert_eq!(registry.bookings_for_customer("maria@example.com").len(), 1);
        assert_eq!(registry.bookings_for_customer("MARIA@EXAMPLE.COM").len(), 1);
        // Substring of the address must not match
        assert_eq!(registry.bookings_for_customer("maria@example").len(), 0);
        assert_eq!(registry.bookings_for_customer("other@example.com").len(), 0);
    }

    #[test]
    fn test_vehicles_with_status_filter() {
        let mut registry = Registry::with_inventory(
            vec![vios("v1"), vios("v2"), vios("v3")],
            vec![],
            vec![],
            vec![],
        );
        registry.set_maintenance("v2");

        assert_eq!(
            registry.vehicles_with_status(VehicleStatus::Available).len(),
            2
        );
        assert_eq!(
            registry
                .vehicles_with_status(VehicleStatus::Maintenance)
                .len(),
            1
        );
        assert!(registry.vehicles_with_status(VehicleStatus::Rented).is_empty());
    }

    #[test]
    fn test_action_inputs_round_trip_as_camel_case_json() {
        // UI shells submit action inputs as camelCase JSON payloads
        let data = booking_for("v1", "a@b.c");
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["vehicleId"], "v1");
        assert_eq!(json["customerEmail"], "a@b.c");
        assert!(json["quote"]["finalTotal"].is_number());

        let payload = serde_json::json!({
            "vehicleId": "v1",
            "date": "2025-06-10",
            "type": "Service",
            "cost": 3500,
            "mileage": 45000,
            "notes": "Oil change",
        });
        let log: NewMaintenanceLog = serde_json::from_value(payload).unwrap();
        assert_eq!(log.log_type, MaintenanceType::Service);
        assert_eq!(log.cost, Money::from_pesos(3500));

        let mut registry = registry_with_one_vehicle();
        registry.add_maintenance_log(log);
        assert_eq!(registry.maintenance_logs().len(), 1);
    }

    #[test]
    fn test_activity_feed_newest_first() {
        let mut registry = registry_with_one_vehicle();
        registry.set_maintenance("v1");
        registry.return_vehicle("v1");

        let messages: Vec<_> = registry
            .activities()
            .iter()
            .map(|a| a.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec![
                "Vehicle Toyota Vios returned",
                "Vehicle Toyota Vios sent for maintenance",
                "System initialized with 1 vehicles",
            ]
        );
    }
}
