//! # Return Fee Calculator
//!
//! The check-in side of the rental: staff record the returned vehicle's
//! mileage, fuel level and condition, and this module turns that assessment
//! into a fee breakdown. Structurally this is a second quote calculator with
//! fixed policy constants instead of catalog prices.
//!
//! ## Fee Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Return Fee Policy                                │
//! │                                                                         │
//! │  excess km   max(0, km driven − 300 free km) × ₱10/km                  │
//! │  late        late days × daily rate × 1.5                              │
//! │  fuel        Empty → ₱1,500   Half → ₱800   Full → ₱0                  │
//! │  damage      Damaged → ₱5,000   Good/Minor → ₱0                        │
//! │                                                                         │
//! │  total = excess km fee + late fee + fuel fee + damage fee              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! These amounts are company policy, not configuration; compatibility tests
//! pin every constant.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{FuelLevel, VehicleCondition};
use crate::{DAMAGE_FEE, EXCESS_KM_FEE_PER_KM, FREE_KM_ALLOWANCE, FUEL_FEE_EMPTY, FUEL_FEE_HALF};

/// What the staff member observed at check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnAssessment {
    /// Odometer reading recorded at check-out, in km.
    pub pickup_mileage: i64,
    /// Odometer reading at return, in km.
    pub return_mileage: i64,
    /// Whole days past the agreed return date (0 = on time).
    pub late_days: i64,
    pub fuel_level: FuelLevel,
    pub condition: VehicleCondition,
}

/// The itemized fee breakdown shown on the return summary screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnFees {
    /// Kilometres beyond the free allowance (never negative).
    pub excess_km: i64,
    pub excess_km_fee: Money,
    pub late_fee: Money,
    pub fuel_fee: Money,
    pub damage_fee: Money,
    /// Sum of the four fee lines.
    pub total: Money,
}

impl ReturnFees {
    /// Computes the fee breakdown for a return.
    ///
    /// `daily_rate` is the vehicle's daily base rate; the late multiplier is
    /// 1.5× per late day.
    ///
    /// ## Example
    /// ```rust
    /// use renta_core::fees::{ReturnAssessment, ReturnFees};
    /// use renta_core::money::Money;
    /// use renta_core::types::{FuelLevel, VehicleCondition};
    ///
    /// let fees = ReturnFees::assess(
    ///     &ReturnAssessment {
    ///         pickup_mileage: 45000,
    ///         return_mileage: 45400,
    ///         late_days: 0,
    ///         fuel_level: FuelLevel::Full,
    ///         condition: VehicleCondition::Good,
    ///     },
    ///     Money::from_pesos(2500),
    /// );
    /// // 400 km driven, 300 free → 100 excess × ₱10
    /// assert_eq!(fees.excess_km_fee.pesos(), 1000);
    /// assert_eq!(fees.total.pesos(), 1000);
    /// ```
    pub fn assess(assessment: &ReturnAssessment, daily_rate: Money) -> ReturnFees {
        let km_driven = assessment.return_mileage - assessment.pickup_mileage;
        let excess_km = (km_driven - FREE_KM_ALLOWANCE).max(0);
        let excess_km_fee = Money::from_pesos(excess_km * EXCESS_KM_FEE_PER_KM);

        // 1.5× daily rate per late day
        let late_fee = daily_rate.multiply_days(assessment.late_days).scale(3, 2);

        let fuel_fee = Money::from_pesos(match assessment.fuel_level {
            FuelLevel::Empty => FUEL_FEE_EMPTY,
            FuelLevel::Half => FUEL_FEE_HALF,
            FuelLevel::Full => 0,
        });

        let damage_fee = Money::from_pesos(match assessment.condition {
            VehicleCondition::Damaged => DAMAGE_FEE,
            VehicleCondition::Good | VehicleCondition::Minor => 0,
        });

        ReturnFees {
            excess_km,
            excess_km_fee,
            late_fee,
            fuel_fee,
            damage_fee,
            total: excess_km_fee + late_fee + fuel_fee + damage_fee,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
