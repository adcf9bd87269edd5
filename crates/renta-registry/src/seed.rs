//! # Seed Data
//!
//! The startup data set for the Tagum City rental fleet. Everything lives in
//! memory and resets on restart, so "seeding" is just constructing the
//! registry with the known fleet, surcharge catalog and add-on catalog.
//!
//! ## Seeded Inventory
//! - 6 vehicles (sedans to a 15-seat van, ₱2,000-₱5,000/day)
//! - 5 destinations (Tagum local ₱0 up to Gensan ₱2,500)
//! - 4 add-ons (child seat, GPS, insurance, additional driver)
//! - 1 seasonal pricing rule (Christmas Rush, 20%, inert)

use chrono::NaiveDate;
use uuid::Uuid;

use renta_core::types::{
    AddOn, Destination, FuelType, PricingRule, SurchargeRate, Transmission, Vehicle,
    VehicleCategory, VehicleStatus,
};

use crate::registry::Registry;

/// Builds the seeded registry the application starts with, including the
/// "System initialized" activity entry.
pub fn seed_registry() -> Registry {
    Registry::with_inventory(
        seed_vehicles(),
        seed_destinations(),
        seed_add_ons(),
        seed_pricing_rules(),
    )
}

fn vehicle(
    make: &str,
    model: &str,
    year: i32,
    plate: &str,
    category: VehicleCategory,
    transmission: Transmission,
    fuel_type: FuelType,
    seats: u8,
    daily_rate: i64,
    status: VehicleStatus,
) -> Vehicle {
    Vehicle {
        id: Uuid::new_v4().to_string(),
        make: make.to_string(),
        model: model.to_string(),
        year,
        plate_number: plate.to_string(),
        category,
        transmission,
        fuel_type,
        seats,
        base_price_daily_pesos: daily_rate,
        status,
    }
}

fn seed_vehicles() -> Vec<Vehicle> {
    use Transmission::{Automatic, Manual};
    use VehicleStatus::{Available, Maintenance, Rented};

    vec![
        vehicle(
            "Toyota",
            "Vios",
            2023,
            "ABC-1234",
            VehicleCategory::Sedan,
            Automatic,
            FuelType::Gasoline,
            5,
            2500,
            Available,
        ),
        vehicle(
            "Toyota",
            "Vios",
            2022,
            "DEF-5678",
            VehicleCategory::Sedan,
            Manual,
            FuelType::Gasoline,
            5,
            2000,
            Rented,
        ),
        vehicle(
            "Toyota",
            "Innova",
            2024,
            "GHI-9012",
            VehicleCategory::Mpv,
            Automatic,
            FuelType::Diesel,
            7,
            3500,
            Available,
        ),
        vehicle(
            "Toyota",
            "Fortuner",
            2023,
            "JKL-3456",
            VehicleCategory::Suv,
            Automatic,
            FuelType::Diesel,
            7,
            4500,
            Available,
        ),
        vehicle(
            "Nissan",
            "Navara",
            2023,
            "MNO-7890",
            VehicleCategory::Pickup,
            Automatic,
            FuelType::Diesel,
            5,
            4000,
            Maintenance,
        ),
        vehicle(
            "Toyota",
            "Hiace",
            2023,
            "PQR-1122",
            VehicleCategory::Van,
            Manual,
            FuelType::Diesel,
            15,
            5000,
            Available,
        ),
    ]
}

fn seed_destinations() -> Vec<Destination> {
    [
        ("Tagum City (Local)", 0),
        ("Davao City", 500),
        ("Panabo City", 300),
        ("Digos City", 1500),
        ("Gensan", 2500),
    ]
    .into_iter()
    .map(|(name, surcharge_pesos)| Destination {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        surcharge_pesos,
    })
    .collect()
}

fn seed_add_ons() -> Vec<AddOn> {
    [
        ("Child Seat", 200, "👶"),
        ("GPS Navigation", 150, "🗺️"),
        ("Comprehensive Insurance", 500, "🛡️"),
        ("Additional Driver", 300, "👤"),
    ]
    .into_iter()
    .map(|(name, price_per_day_pesos, icon)| AddOn {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        price_per_day_pesos,
        icon: icon.to_string(),
    })
    .collect()
}

fn seed_pricing_rules() -> Vec<PricingRule> {
    vec![PricingRule {
        id: Uuid::new_v4().to_string(),
        name: "Christmas Rush".to_string(),
        start_date: NaiveDate::from_ymd_opt(2025, 12, 15).expect("valid seed date"),
        end_date: NaiveDate::from_ymd_opt(2026, 1, 5).expect("valid seed date"),
        surcharge: SurchargeRate::from_percentage(20),
        is_active: true,
    }]
}

// =============================================================================
// Unit Tests
// =============================================================================
