//! Charge aggregation over a booking's room lines.

use frontdesk_domain::{BookingSnapshot, RoomBookingLine};

/// Subtotal, discount and outstanding balance for a set of room lines.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChargeTotals {
    pub subtotal: f64,
    pub discount_total: f64,
    pub due: f64,
}

impl ChargeTotals {
    /// The grand total shown on the summary; identical to the due amount.
    pub fn grand_total(&self) -> f64 {
        self.due
    }
}

pub struct ChargeService;

impl ChargeService {
    /// Sum of rents across all lines.
    pub fn subtotal(lines: &[RoomBookingLine]) -> f64 {
        lines.iter().map(|line| line.rent).sum()
    }

    /// Sum of discounts across all lines, missing discounts counting as zero.
    pub fn discount_total(lines: &[RoomBookingLine]) -> f64 {
        lines.iter().map(RoomBookingLine::discount_or_zero).sum()
    }

    /// Computes the totals for a set of lines.
    ///
    /// The discount is only subtracted when both the subtotal and the discount
    /// total are non-zero; otherwise the due amount is the subtotal.
    pub fn totals(lines: &[RoomBookingLine]) -> ChargeTotals {
        let subtotal = Self::subtotal(lines);
        let discount_total = Self::discount_total(lines);
        let due = if is_truthy(subtotal) && is_truthy(discount_total) {
            subtotal - discount_total
        } else {
            subtotal
        };
        ChargeTotals {
            subtotal,
            discount_total,
            due,
        }
    }

    /// Totals for a booking snapshot, treating absent room lines as empty.
    pub fn booking_totals(booking: &BookingSnapshot) -> ChargeTotals {
        Self::totals(booking.lines())
    }
}

fn is_truthy(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn line(rent: f64, discount: Option<f64>) -> RoomBookingLine {
        let check_in = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
        let mut line = RoomBookingLine::new(check_in, rent);
        line.discount = discount;
        line
    }

    #[test]
    fn subtracts_discount_when_both_totals_are_non_zero() {
        let lines = vec![line(1000.0, Some(100.0)), line(500.0, Some(0.0))];
        let totals = ChargeService::totals(&lines);
        assert_eq!(totals.subtotal, 1500.0);
        assert_eq!(totals.discount_total, 100.0);
        assert_eq!(totals.due, 1400.0);
        assert_eq!(totals.grand_total(), 1400.0);
    }

    #[test]
    fn zero_discount_falls_back_to_subtotal() {
        let totals = ChargeService::totals(&[line(1000.0, Some(0.0))]);
        assert_eq!(totals, ChargeTotals {
            subtotal: 1000.0,
            discount_total: 0.0,
            due: 1000.0,
        });
    }

    #[test]
    fn zero_subtotal_ignores_discount() {
        let totals = ChargeService::totals(&[line(0.0, Some(50.0))]);
        assert_eq!(totals.discount_total, 50.0);
        assert_eq!(totals.due, 0.0);
    }

    #[test]
    fn empty_and_absent_lines_produce_zero_totals() {
        assert_eq!(ChargeService::totals(&[]), ChargeTotals::default());
        let booking = BookingSnapshot::default();
        assert_eq!(ChargeService::booking_totals(&booking), ChargeTotals::default());
    }

    #[test]
    fn missing_discounts_count_as_zero() {
        let lines = vec![line(200.0, None), line(300.0, Some(25.0))];
        let totals = ChargeService::totals(&lines);
        assert_eq!(totals.discount_total, 25.0);
        assert_eq!(totals.due, 475.0);
        assert_eq!(ChargeService::totals(&lines), totals);
    }
}
