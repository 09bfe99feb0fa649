//! Reward-points scoring.
//!
//! Seven independent additive rules over a validated receipt. Each rule
//! contributes a whole number of points; the one fractional computation
//! (the description-length bonus) is ceiled before it is added, so the sum
//! is already the floored total the contract requires.
//!
//! The rules are tolerant of malformed dates and times rather than fallible:
//! a rule that cannot parse its input simply contributes nothing. Validated
//! input never takes those paths, but scoring stays total either way.

use crate::types::{Receipt, ReceiptItem};

/// Afternoon bonus window in minutes since midnight, 14:00 inclusive to
/// 16:00 exclusive.
const AFTERNOON_WINDOW: std::ops::Range<u64> = 840..960;

/// Compute the reward points for a validated receipt.
///
/// Pure and deterministic: the same receipt always scores the same total.
pub fn score(receipt: &Receipt) -> u64 {
    retailer_points(&receipt.retailer)
        + round_dollar_points(&receipt.total)
        + odd_day_points(&receipt.purchase_date)
        + quarter_multiple_points(&receipt.total)
        + item_pair_points(&receipt.items)
        + description_points(&receipt.items)
        + afternoon_points(&receipt.purchase_time)
}

/// One point per alphanumeric character in the retailer name.
fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_ascii_alphanumeric()).count() as u64
}

/// 50 points when the total has no cents.
fn round_dollar_points(total: &str) -> u64 {
    if total.ends_with(".00") {
        50
    } else {
        0
    }
}

/// 25 points when the total is an exact multiple of 0.25.
///
/// Any round-dollar total is also a quarter multiple, so this stacks with
/// the round-dollar bonus; callers downstream depend on the combined total,
/// so the overlap stays. Every two-decimal multiple of 0.25 is a dyadic
/// rational, exactly representable in an f64, which keeps the remainder
/// check exact.
fn quarter_multiple_points(total: &str) -> u64 {
    match total.parse::<f64>() {
        Ok(value) if value % 0.25 == 0.0 => 25,
        _ => 0,
    }
}

/// 5 points per complete pair of items.
fn item_pair_points(items: &[ReceiptItem]) -> u64 {
    (items.len() / 2) as u64 * 5
}

/// Per-item bonus when the trimmed description length is a multiple of 3:
/// ceil(price * 0.2).
///
/// A trimmed length of zero is a multiple of 3 and earns the bonus; an
/// all-whitespace description is scored, not skipped.
fn description_points(items: &[ReceiptItem]) -> u64 {
    items
        .iter()
        .map(|item| {
            let trimmed = item.short_description.trim();
            if trimmed.chars().count() % 3 != 0 {
                return 0;
            }
            match item.price.parse::<f64>() {
                Ok(price) => (price * 0.2).ceil() as u64,
                Err(_) => 0,
            }
        })
        .sum()
}

/// 6 points when the day of the month is odd.
///
/// The day is the third dash-separated part of the date, taken as written;
/// calendar validity is never checked.
fn odd_day_points(purchase_date: &str) -> u64 {
    let parts: Vec<&str> = purchase_date.split('-').collect();
    if parts.len() != 3 {
        return 0;
    }
    match parts[2].parse::<u32>() {
        Ok(day) if day % 2 == 1 => 6,
        _ => 0,
    }
}

/// 10 points when the purchase time falls in [14:00, 16:00).
fn afternoon_points(purchase_time: &str) -> u64 {
    let Some((hours, minutes)) = purchase_time.split_once(':') else {
        return 0;
    };
    // u64 keeps the minute arithmetic from overflowing on absurd unvalidated
    // hour values; scoring stays total on any input.
    let (Ok(hours), Ok(minutes)) = (hours.parse::<u64>(), minutes.parse::<u64>()) else {
        return 0;
    };

    if AFTERNOON_WINDOW.contains(&(hours.saturating_mul(60).saturating_add(minutes))) {
        10
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt(
        retailer: &str,
        date: &str,
        time: &str,
        items: &[(&str, &str)],
        total: &str,
    ) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: date.to_string(),
            purchase_time: time.to_string(),
            items: items
                .iter()
                .map(|(description, price)| ReceiptItem {
                    short_description: description.to_string(),
                    price: price.to_string(),
                })
                .collect(),
            total: total.to_string(),
        }
    }

    // Reference fixtures with known totals.

    #[test]
    fn test_target_receipt_scores_28() {
        // 6 (retailer) + 6 (odd day) + 10 (two pairs) + 3 + 3 (descriptions)
        let r = receipt(
            "Target",
            "2022-01-01",
            "13:01",
            &[
                ("Mountain Dew 12PK", "6.49"),
                ("Emils Cheese Pizza", "12.25"),
                ("Knorr Creamy Chicken", "1.26"),
                ("Doritos Nacho Cheese", "3.35"),
                ("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            "35.35",
        );
        assert_eq!(score(&r), 28);
    }

    #[test]
    fn test_corner_market_receipt_scores_109() {
        // 14 (retailer) + 50 (round dollar) + 25 (quarter) + 10 (pairs) + 10 (afternoon)
        let r = receipt(
            "M&M Corner Market",
            "2022-03-20",
            "14:33",
            &[
                ("Gatorade", "2.25"),
                ("Gatorade", "2.25"),
                ("Gatorade", "2.25"),
                ("Gatorade", "2.25"),
            ],
            "9.00",
        );
        assert_eq!(score(&r), 109);
    }

    #[test]
    fn test_single_item_receipt_scores_31() {
        // 6 (retailer) + 25 (quarter multiple)
        let r = receipt(
            "Target",
            "2022-01-02",
            "13:13",
            &[("Pepsi - 12-oz", "1.25")],
            "1.25",
        );
        assert_eq!(score(&r), 31);
    }

    #[test]
    fn test_morning_receipt_scores_15() {
        // 9 (retailer) + 5 (one pair) + 1 (Dasani description)
        let r = receipt(
            "Walgreens",
            "2022-01-02",
            "08:13",
            &[("Pepsi - 12-oz", "1.25"), ("Dasani", "1.40")],
            "2.65",
        );
        assert_eq!(score(&r), 15);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let r = receipt(
            "Walgreens",
            "2022-01-02",
            "08:13",
            &[("Pepsi - 12-oz", "1.25"), ("Dasani", "1.40")],
            "2.65",
        );
        assert_eq!(score(&r), score(&r));
    }

    #[test]
    fn test_round_dollar_total_earns_both_total_bonuses() {
        // 1 (retailer) + 50 (round dollar) + 25 (quarter multiple)
        let r = receipt("A", "2022-01-02", "09:00", &[("Soda", "1.00")], "100.00");
        assert_eq!(score(&r), 76);
    }

    #[test]
    fn test_afternoon_window_is_half_open() {
        let base = |time: &str| receipt("A", "2022-01-02", time, &[("Soda", "1.10")], "1.10");

        assert_eq!(score(&base("13:59")), 1);
        assert_eq!(score(&base("14:00")), 11);
        assert_eq!(score(&base("15:59")), 11);
        assert_eq!(score(&base("16:00")), 1);
    }

    #[test]
    fn test_oversized_time_contributes_nothing() {
        // Never passes validation, but scoring must not panic on it either.
        let r = receipt(
            "A",
            "2022-01-02",
            "4294967295:00",
            &[("Soda", "1.10")],
            "1.10",
        );
        assert_eq!(score(&r), 1);

        let r = receipt(
            "A",
            "2022-01-02",
            "18446744073709551615:59",
            &[("Soda", "1.10")],
            "1.10",
        );
        assert_eq!(score(&r), 1);
    }

    #[test]
    fn test_item_pair_thresholds() {
        let with_items = |count: usize| {
            let items = vec![("Soda", "1.10"); count];
            receipt("A", "2022-01-02", "09:00", &items, "1.10")
        };

        assert_eq!(score(&with_items(1)), 1);
        assert_eq!(score(&with_items(2)), 6);
        assert_eq!(score(&with_items(3)), 6);
        assert_eq!(score(&with_items(4)), 11);
        assert_eq!(score(&with_items(5)), 11);
    }

    #[test]
    fn test_description_length_multiple_of_three() {
        // "Dasani" has length 6: ceil(1.40 * 0.2) = 1.
        let r = receipt("A", "2022-01-02", "09:00", &[("Dasani", "1.40")], "1.40");
        assert_eq!(score(&r), 2);

        // Length 5 after trimming: no bonus.
        let r = receipt("A", "2022-01-02", "09:00", &[(" Water ", "1.40")], "1.40");
        assert_eq!(score(&r), 1);
    }

    #[test]
    fn test_all_whitespace_description_still_earns_bonus() {
        // Trimmed length 0 is a multiple of 3: ceil(2.00 * 0.2) = 1.
        let r = receipt("A", "2022-01-02", "09:00", &[("   ", "2.00")], "2.00");
        assert_eq!(score(&r), 1 + 50 + 25 + 1);
    }

    #[test]
    fn test_odd_day_bonus() {
        let on = |date: &str| receipt("A", date, "09:00", &[("Soda", "1.10")], "1.10");

        assert_eq!(score(&on("2022-01-01")), 7);
        assert_eq!(score(&on("2022-01-02")), 1);
        assert_eq!(score(&on("2022-01-31")), 7);
        // Format-valid but not a real date; parity is still taken as written.
        assert_eq!(score(&on("2022-13-99")), 7);
    }
}
