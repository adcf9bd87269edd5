//! # Quote Calculator
//!
//! Computes a rental price breakdown, deterministically, from explicit
//! inputs - no hidden state. The public storefront booking modal and the POS
//! contract screen call this identically; POS additionally passes a manual
//! override from the negotiation box.
//!
//! ## Quote Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Quote Computation                               │
//! │                                                                         │
//! │  daily_rate × days ────────────────────────► base_price                │
//! │  destination surcharge ────────────────────► destination_fee           │
//! │  Σ(add-on per-day price × days) ───────────► add_ons_total             │
//! │                                                                         │
//! │  base_price + destination_fee + add_ons_total = subtotal               │
//! │                                                                         │
//! │  override given?  ──yes──► final_total = override                      │
//! │        │                   discount    = subtotal − override           │
//! │        no                  (negative discount = upcharge, allowed)     │
//! │        │                                                                │
//! │        └─────────► final_total = subtotal, discount = 0                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::AddOn;

/// A computed rental price breakdown.
///
/// Field values are frozen into the booking record at contract creation
/// (snapshot pattern), so the breakdown a customer saw is the breakdown
/// that gets billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Daily rate × rental days.
    pub base_price: Money,
    /// Fixed surcharge for the selected destination.
    pub destination_fee: Money,
    /// Σ(add-on per-day price × rental days) over the selection.
    pub add_ons_total: Money,
    /// base_price + destination_fee + add_ons_total.
    pub subtotal: Money,
    /// The amount actually charged (override-aware).
    pub final_total: Money,
    /// subtotal − final_total; negative when the override is an upcharge.
    pub discount: Money,
}

impl Quote {
    /// Computes a quote from explicit inputs.
    ///
    /// `days` must already be sanitized to a positive integer; callers use
    /// [`crate::input::parse_rental_days`] which defaults to 1 on bad input.
    /// `add_ons` is the selected set - duplicate-free, order irrelevant.
    ///
    /// ## Example
    /// ```rust
    /// use renta_core::money::Money;
    /// use renta_core::quote::Quote;
    ///
    /// // ₱2,500/day × 3 days + ₱500 destination surcharge, negotiated to ₱6,000
    /// let quote = Quote::compute(
    ///     Money::from_pesos(2500),
    ///     3,
    ///     Money::from_pesos(500),
    ///     &[],
    ///     Some(Money::from_pesos(6000)),
    /// );
    /// assert_eq!(quote.subtotal.pesos(), 8000);
    /// assert_eq!(quote.final_total.pesos(), 6000);
    /// assert_eq!(quote.discount.pesos(), 2000);
    /// ```
    pub fn compute(
        daily_rate: Money,
        days: i64,
        destination_surcharge: Money,
        add_ons: &[AddOn],
        manual_override: Option<Money>,
    ) -> Quote {
        let base_price = daily_rate * days;
        let add_ons_total: Money = add_ons
            .iter()
            .map(|a| a.price_per_day() * days)
            .sum();
        let subtotal = base_price + destination_surcharge + add_ons_total;

        let (final_total, discount) = match manual_override {
            Some(override_total) => (override_total, subtotal - override_total),
            None => (subtotal, Money::zero()),
        };

        Quote {
            base_price,
            destination_fee: destination_surcharge,
            add_ons_total,
            subtotal,
            final_total,
            discount,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn add_on(id: &str, price_per_day: i64) -> AddOn {
        AddOn {
            id: id.to_string(),
            name: format!("Add-on {id}"),
            price_per_day_pesos: price_per_day,
            icon: "🧩".to_string(),
        }
    }

    #[test]
    fn test_base_quote_without_extras() {
        let quote = Quote::compute(Money::from_pesos(2500), 3, Money::zero(), &[], None);

        assert_eq!(quote.base_price.pesos(), 7500);
        assert_eq!(quote.subtotal.pesos(), 7500);
        assert_eq!(quote.final_total.pesos(), 7500);
        assert!(quote.discount.is_zero());
    }

    #[test]
    fn test_destination_surcharge_added_once() {
        // Surcharge is flat, not per-day
        let quote = Quote::compute(Money::from_pesos(2000), 5, Money::from_pesos(500), &[], None);
        assert_eq!(quote.destination_fee.pesos(), 500);
        assert_eq!(quote.subtotal.pesos(), 10500);
    }

    #[test]
    fn test_add_ons_billed_per_day() {
        let extras = [add_on("1", 200), add_on("2", 150)];
        let quote = Quote::compute(Money::from_pesos(2500), 3, Money::zero(), &extras, None);

        // (200 + 150) × 3
        assert_eq!(quote.add_ons_total.pesos(), 1050);
        assert_eq!(quote.final_total.pesos(), 7500 + 1050);
    }

    #[test]
    fn test_pos_scenario_negotiated_discount() {
        // ₱2,500/day × 3 days + ₱500 Davao surcharge = ₱8,000 subtotal,
        // negotiated down to ₱6,000 → ₱2,000 discount
        let quote = Quote::compute(
            Money::from_pesos(2500),
            3,
            Money::from_pesos(500),
            &[],
            Some(Money::from_pesos(6000)),
        );

        assert_eq!(quote.subtotal.pesos(), 8000);
        assert_eq!(quote.final_total.pesos(), 6000);
        assert_eq!(quote.discount.pesos(), 2000);
    }

    #[test]
    fn test_override_above_subtotal_is_an_upcharge() {
        // Negative discount is deliberate: negotiation can go up too
        let quote = Quote::compute(
            Money::from_pesos(2500),
            3,
            Money::zero(),
            &[],
            Some(Money::from_pesos(9000)),
        );

        assert_eq!(quote.final_total.pesos(), 9000);
        assert_eq!(quote.discount.pesos(), -1500);
    }

    #[test]
    fn test_zero_rate_vehicle() {
        let quote = Quote::compute(Money::zero(), 4, Money::from_pesos(300), &[], None);
        assert_eq!(quote.final_total.pesos(), 300);
    }

    #[test]
    fn test_single_day_rental() {
        let extras = [add_on("3", 500)];
        let quote = Quote::compute(Money::from_pesos(4500), 1, Money::zero(), &extras, None);
        assert_eq!(quote.final_total.pesos(), 5000);
    }
}
