//! Receipt scoring rules.
//!
//! A receipt's points are the sum of five independent rules. A rule whose input
//! cannot be parsed contributes zero and is logged at warn level; it never
//! fails the whole calculation.

use crate::money::Money;
use crate::receipt::{LineItem, Receipt};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use log::{debug, warn};
use rust_decimal::Decimal;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

const ROUND_TOTAL_POINTS: u64 = 50;
const QUARTER_TOTAL_POINTS: u64 = 25;
const ITEM_PAIR_POINTS: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// Exclusive bounds of the afternoon window, in minutes after midnight.
const AFTERNOON_START: u32 = 14 * 60;
const AFTERNOON_END: u32 = 16 * 60;

/// Per-rule contributions for a single receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointsBreakdown {
    /// One point per ASCII alphanumeric character in the retailer name.
    pub retailer: u64,
    /// Round-dollar and quarter-multiple bonuses.
    pub total: u64,
    /// Item pair bonus plus description-length bonuses.
    pub items: u64,
    /// Odd purchase day bonus.
    pub purchase_date: u64,
    /// Afternoon purchase bonus.
    pub purchase_time: u64,
}

impl PointsBreakdown {
    /// Computes every rule for `receipt`.
    pub fn for_receipt(receipt: &Receipt) -> Self {
        PointsBreakdown {
            retailer: retailer_points(&receipt.retailer),
            total: total_points(&receipt.total),
            items: items_points(&receipt.items),
            purchase_date: purchase_date_points(&receipt.purchase_date),
            purchase_time: purchase_time_points(&receipt.purchase_time),
        }
    }

    /// Sum of all rule contributions, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        [
            self.retailer,
            self.total,
            self.items,
            self.purchase_date,
            self.purchase_time,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// Calculates the points awarded for a receipt.
pub fn calculate_points(receipt: &Receipt) -> u64 {
    let breakdown = PointsBreakdown::for_receipt(receipt);
    debug!("Points breakdown for '{}': {:?}", receipt.retailer, breakdown);
    breakdown.total()
}

fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_ascii_alphanumeric()).count() as u64
}

fn total_points(total: &str) -> u64 {
    let total = match Money::from_str(total) {
        Ok(amount) => amount,
        Err(e) => {
            warn!("Unparsable total '{}': {}", total, e);
            return 0;
        }
    };

    let mut points = 0;
    if total.is_whole() {
        points += ROUND_TOTAL_POINTS;
    }
    if total.is_multiple_of_quarter() {
        points += QUARTER_TOTAL_POINTS;
    }
    points
}

fn items_points(items: &[LineItem]) -> u64 {
    let pairs = (items.len() / 2) as u64;
    let mut points = ITEM_PAIR_POINTS * pairs;

    // 0.2
    let price_factor = Decimal::new(2, 1);

    for item in items {
        // Byte length, so multi-byte descriptions count every encoded byte.
        if item.short_description.trim().len() % 3 != 0 {
            continue;
        }

        let price = match Money::from_str(&item.price) {
            Ok(price) => price,
            Err(e) => {
                warn!(
                    "Unparsable price '{}' for '{}': {}",
                    item.price, item.short_description, e
                );
                continue;
            }
        };

        match price.scaled_ceil(price_factor) {
            Some(bonus) => points = points.saturating_add(bonus),
            None => warn!(
                "Price '{}' for '{}' is out of range, skipping",
                item.price, item.short_description
            ),
        }
    }

    points
}

fn purchase_date_points(purchase_date: &str) -> u64 {
    if !is_padded_date(purchase_date) {
        warn!("Unparsable purchase date '{}'", purchase_date);
        return 0;
    }

    match NaiveDate::parse_from_str(purchase_date, DATE_FORMAT) {
        Ok(date) if date.day() % 2 == 1 => ODD_DAY_POINTS,
        Ok(_) => 0,
        Err(e) => {
            warn!("Unparsable purchase date '{}': {}", purchase_date, e);
            0
        }
    }
}

fn purchase_time_points(purchase_time: &str) -> u64 {
    if !is_clock_time(purchase_time) {
        warn!("Unparsable purchase time '{}'", purchase_time);
        return 0;
    }

    let time = match NaiveTime::parse_from_str(purchase_time, TIME_FORMAT) {
        Ok(time) => time,
        Err(e) => {
            warn!("Unparsable purchase time '{}': {}", purchase_time, e);
            return 0;
        }
    };

    let minutes = time.hour() * 60 + time.minute();
    if minutes > AFTERNOON_START && minutes < AFTERNOON_END {
        AFTERNOON_POINTS
    } else {
        0
    }
}

/// `YYYY-MM-DD` with zero-padded month and day; chrono alone accepts `2022-1-5`.
fn is_padded_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// `H:MM` or `HH:MM`; minutes must be two digits.
fn is_clock_time(s: &str) -> bool {
    match s.split_once(':') {
        Some((hour, minute)) => {
            (1..=2).contains(&hour.len())
                && minute.len() == 2
                && hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt(
        retailer: &str,
        date: &str,
        time: &str,
        total: &str,
        items: &[(&str, &str)],
    ) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: date.to_string(),
            purchase_time: time.to_string(),
            items: items.iter().map(|(d, p)| LineItem::new(*d, *p)).collect(),
            total: total.to_string(),
        }
    }

    #[test]
    fn test_retailer_strips_non_alphanumeric() {
        assert_eq!(retailer_points("M&M Corner Market"), 14);
        assert_eq!(retailer_points("Target"), 6);
        assert_eq!(retailer_points("  &-! "), 0);
        assert_eq!(retailer_points("Café"), 3);
    }

    #[test]
    fn test_total_round_and_quarter() {
        assert_eq!(total_points("9.00"), 75);
        assert_eq!(total_points("1.25"), 25);
        assert_eq!(total_points("35.35"), 0);
        assert_eq!(total_points("0.00"), 75);
    }

    #[test]
    fn test_total_unparsable_is_zero() {
        assert_eq!(total_points("abc"), 0);
        assert_eq!(total_points(""), 0);
        assert_eq!(total_points(" 9.00"), 0);
        assert_eq!(total_points("9.00\n"), 0);
    }

    #[test]
    fn test_items_pairs() {
        let items: Vec<LineItem> = (0..5).map(|_| LineItem::new("ab", "1.00")).collect();
        assert_eq!(items_points(&items), 10);
    }

    #[test]
    fn test_items_description_bonus() {
        let single = |desc: &str, price: &str| items_points(&[LineItem::new(desc, price)]);

        assert_eq!(single("Mountain Dew 12PK", "6.49"), 0);
        // 18 bytes
        assert_eq!(single("Emils Cheese Pizza", "12.25"), 3);
        assert_eq!(single("Klarbrunn 12-PK 12 FL OZ", "12.00"), 3);
        assert_eq!(single("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"), 3);
    }

    #[test]
    fn test_items_empty_description_qualifies() {
        assert_eq!(items_points(&[LineItem::new("   ", "10.00")]), 2);
    }

    #[test]
    fn test_items_bad_price_skips_only_that_item() {
        let items = [
            LineItem::new("Dasani", "not-a-price"),
            LineItem::new("Gatorade", "2.25"),
            LineItem::new("Doritos", "5.00"),
        ];
        // one pair; "Dasani" skipped; "Gatorade" and "Doritos" have no bonus
        assert_eq!(items_points(&items), 5);

        let items = [
            LineItem::new("Dasani", "not-a-price"),
            LineItem::new("Klarbrunn 12-PK 12 FL OZ", "6.49"),
        ];
        assert_eq!(items_points(&items), 5 + 2);
    }

    #[test]
    fn test_items_huge_prices_saturate() {
        let items = [
            LineItem::new("abc", "90000000000000000000.00"),
            LineItem::new("def", "90000000000000000000.00"),
        ];
        assert_eq!(items_points(&items), u64::MAX);
    }

    #[test]
    fn test_items_padded_price_contributes_nothing() {
        assert_eq!(items_points(&[LineItem::new("abc", " 10.00")]), 0);
        assert_eq!(items_points(&[LineItem::new("abc", "10.00 ")]), 0);
    }

    #[test]
    fn test_breakdown_total_saturates() {
        let breakdown = PointsBreakdown {
            retailer: 6,
            items: u64::MAX,
            ..PointsBreakdown::default()
        };
        assert_eq!(breakdown.total(), u64::MAX);
    }

    #[test]
    fn test_items_negative_price_contributes_nothing() {
        assert_eq!(items_points(&[LineItem::new("Pop", "-10.00")]), 0);
    }

    #[test]
    fn test_purchase_date() {
        assert_eq!(purchase_date_points("2022-01-01"), 6);
        assert_eq!(purchase_date_points("2022-03-20"), 0);
        assert_eq!(purchase_date_points("2022-02-30"), 0);
        assert_eq!(purchase_date_points("01/01/2022"), 0);
        assert_eq!(purchase_date_points("2022-1-5"), 0);
        assert_eq!(purchase_date_points("2022-01-5"), 0);
        assert_eq!(purchase_date_points(" 2022-01-05"), 0);
        assert_eq!(purchase_date_points("2022-01-05"), 6);
    }

    #[test]
    fn test_purchase_time_window_is_exclusive() {
        assert_eq!(purchase_time_points("14:33"), 10);
        assert_eq!(purchase_time_points("15:59"), 10);
        assert_eq!(purchase_time_points("14:01"), 10);
        assert_eq!(purchase_time_points("14:00"), 0);
        assert_eq!(purchase_time_points("16:00"), 0);
        assert_eq!(purchase_time_points("13:13"), 0);
    }

    #[test]
    fn test_purchase_time_unparsable() {
        assert_eq!(purchase_time_points("2:33pm"), 0);
        assert_eq!(purchase_time_points("25:00"), 0);
        assert_eq!(purchase_time_points("15:5"), 0);
        assert_eq!(purchase_time_points(" 15:05"), 0);
        assert_eq!(purchase_time_points("15:05"), 10);
    }

    #[test]
    fn test_target_receipt() {
        let r = receipt(
            "Target",
            "2022-01-01",
            "13:01",
            "35.35",
            &[
                ("Mountain Dew 12PK", "6.49"),
                ("Emils Cheese Pizza", "12.25"),
                ("Knorr Creamy Chicken", "1.26"),
                ("Doritos Nacho Cheese", "3.35"),
                ("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
        );

        let breakdown = PointsBreakdown::for_receipt(&r);
        assert_eq!(breakdown.retailer, 6);
        assert_eq!(breakdown.total, 0);
        assert_eq!(breakdown.items, 10 + 3 + 3);
        assert_eq!(breakdown.purchase_date, 6);
        assert_eq!(breakdown.purchase_time, 0);
        assert_eq!(calculate_points(&r), 28);
    }

    #[test]
    fn test_corner_market_receipt() {
        let r = receipt(
            "M&M Corner Market",
            "2022-03-20",
            "14:33",
            "9.00",
            &[
                ("Gatorade", "2.25"),
                ("Gatorade", "2.25"),
                ("Gatorade", "2.25"),
                ("Gatorade", "2.25"),
            ],
        );

        assert_eq!(calculate_points(&r), 109);
    }

    #[test]
    fn test_breakdown_sums_to_points() {
        let r = receipt(
            "Walgreens",
            "2022-01-02",
            "08:13",
            "2.65",
            &[("Pepsi - 12-oz", "1.25"), ("Dasani", "1.40")],
        );
        assert_eq!(PointsBreakdown::for_receipt(&r).total(), calculate_points(&r));
        assert_eq!(calculate_points(&r), 9 + 5 + 1);
    }

    #[test]
    fn test_malformed_fields_do_not_fail_scoring() {
        let r = receipt(
            "Target",
            "garbage",
            "garbage",
            "garbage",
            &[("abc", "garbage")],
        );
        assert_eq!(calculate_points(&r), 6);
    }
}
