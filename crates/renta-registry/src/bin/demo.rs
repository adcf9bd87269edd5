//! # Demo Walkthrough
//!
//! Developer binary that exercises a full rental cycle against a seeded
//! registry and prints the resulting projections as JSON.
//!
//! ## Usage
//! ```bash
//! cargo run -p renta-registry --bin demo
//!
//! # With action-level logging
//! RUST_LOG=debug cargo run -p renta-registry --bin demo
//! ```
//!
//! ## What It Walks Through
//! 1. Seed the fleet and catalogs
//! 2. Quote a 3-day Davao City rental with add-ons (POS override included)
//! 3. Create the booking and check the vehicle out
//! 4. Assess return fees at check-in and complete the booking
//! 5. Print the bookings and activity feed

use chrono::{Duration, Utc};
use tracing::info;
use tracing_subscriber::EnvFilter;

use renta_core::fees::{ReturnAssessment, ReturnFees};
use renta_core::input::{parse_manual_override, parse_rental_days};
use renta_core::types::{CheckOutData, FuelLevel, VehicleCondition};
use renta_core::Quote;
use renta_registry::{seed_registry, NewBooking};

fn main() -> serde_json::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut registry = seed_registry();

    // Walk-in POS flow: Vios for 3 days to Davao City, price talked down.
    let vehicle = registry.vehicles()[0].clone();
    let destination = registry.destinations()[1].clone();
    let add_ons = [registry.add_ons()[0].clone()];

    let days = parse_rental_days("3");
    let quote = Quote::compute(
        vehicle.base_price_daily(),
        days,
        destination.surcharge(),
        &add_ons,
        parse_manual_override("8000"),
    );
    info!(subtotal = %quote.subtotal, final_total = %quote.final_total, "quote ready");
    println!("Quote: {}", serde_json::to_string_pretty(&quote)?);

    let today = Utc::now().date_naive();
    let reference = registry.create_booking(NewBooking {
        vehicle_id: vehicle.id.clone(),
        customer_name: "Walk-in Customer".to_string(),
        customer_email: "walkin@example.com".to_string(),
        customer_phone: "+63 000 000 0000".to_string(),
        start_date: today,
        end_date: today + Duration::days(days),
        days,
        destination_id: destination.id.clone(),
        add_on_ids: add_ons.iter().map(|a| a.id.clone()).collect(),
        quote,
    });
    info!(%reference, "contract created");

    // Staff handover: record the condition snapshot.
    registry.record_check_out(CheckOutData {
        booking_reference: reference.clone(),
        initial_mileage: 45000,
        initial_fuel_level: FuelLevel::Full,
        pre_existing_damages: "none".to_string(),
        photos: vec![],
        checked_out_at: Utc::now(),
        checked_out_by: "R. Cruz".to_string(),
    });

    // Check-in: 400 km driven, half tank, one day late.
    let fees = ReturnFees::assess(
        &ReturnAssessment {
            pickup_mileage: 45000,
            return_mileage: 45400,
            late_days: 1,
            fuel_level: FuelLevel::Half,
            condition: VehicleCondition::Good,
        },
        vehicle.base_price_daily(),
    );
    info!(total = %fees.total, "return fees assessed");
    println!("Return fees: {}", serde_json::to_string_pretty(&fees)?);

    registry.complete_booking(&reference, None, Some("minor dust, no new damage".to_string()));

    println!(
        "Bookings: {}",
        serde_json::to_string_pretty(registry.bookings())?
    );
    println!(
        "Activity feed: {}",
        serde_json::to_string_pretty(registry.activities())?
    );

    Ok(())
}
