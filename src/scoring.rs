//! Loyalty points rules for submitted receipts
//!
//! Points are the sum of independent rules:
//! 1. One point per letter or decimal digit in the retailer name
//! 2. 50 points if the total is a round dollar amount
//! 3. 25 points if the total is a multiple of 0.25
//! 4. 5 points for every two items
//! 5. ceil(price * 0.02) for each item whose trimmed description length is a multiple of 3
//! 6. 6 points if the purchase day is odd
//! 7. 10 points if the purchase time is from 14:00 up to (not including) 16:00
//!
//! Every rule parses its own input and contributes zero when that input is
//! malformed. A bad field lowers the score; it never fails the request.

use crate::models::{Item, Receipt};
use bigdecimal::{BigDecimal, ToPrimitive, Zero};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::str::FromStr;

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const ITEM_PAIR_POINTS: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// Afternoon window in whole hours, `[start, end)`.
const AFTERNOON_HOURS: std::ops::Range<u32> = 14..16;

/// Longest amount string that is parsed at all.
const MAX_AMOUNT_LEN: usize = 64;

/// Largest decimal exponent accepted in either direction, after trailing zeros are dropped.
const MAX_AMOUNT_SCALE: i64 = 32;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Letters (any `L*` category) or decimal digits (`Nd`).
static RETAILER_CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{Nd}]").expect("retailer pattern is valid"));

/// Zero-padded `YYYY-MM-DD`. chrono alone also takes `2022-1-1` and signed years.
static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is valid"));

/// `H:MM` or `HH:MM`; minutes are always two digits.
static TIME_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{1,2}:[0-9]{2}$").expect("time pattern is valid"));

/// Per-rule point contributions for one receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub round_dollar: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// Sum of all rule contributions.
    pub fn total(&self) -> u64 {
        [
            self.retailer,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .iter()
        .fold(0u64, |acc, points| acc.saturating_add(*points))
    }
}

/// Scores a receipt rule by rule.
pub fn score(receipt: &Receipt) -> PointsBreakdown {
    let total = parse_amount(&receipt.total);

    PointsBreakdown {
        retailer: retailer_points(&receipt.retailer),
        round_dollar: round_dollar_points(total.as_ref()),
        quarter_multiple: quarter_multiple_points(total.as_ref()),
        item_pairs: item_pair_points(receipt.items.len()),
        item_descriptions: item_description_points(&receipt.items),
        odd_day: odd_day_points(&receipt.purchase_date),
        afternoon: afternoon_points(&receipt.purchase_time),
    }
}

/// Total loyalty points for a receipt.
pub fn compute_points(receipt: &Receipt) -> u64 {
    score(receipt).total()
}

/// Parses a decimal money string exactly.
///
/// `None` for anything unparsable, longer than `MAX_AMOUNT_LEN`, or with a
/// normalized exponent beyond `MAX_AMOUNT_SCALE`.
pub fn parse_amount(raw: &str) -> Option<BigDecimal> {
    if raw.len() > MAX_AMOUNT_LEN {
        return None;
    }

    let amount = BigDecimal::from_str(raw).ok()?.normalized();
    let (_, scale) = amount.as_bigint_and_exponent();
    if scale.abs() > MAX_AMOUNT_SCALE {
        return None;
    }
    Some(amount)
}

pub fn retailer_points(retailer: &str) -> u64 {
    RETAILER_CHAR.find_iter(retailer).count() as u64
}

pub fn round_dollar_points(total: Option<&BigDecimal>) -> u64 {
    match total {
        Some(total) if total.is_integer() => ROUND_DOLLAR_POINTS,
        Some(_) => 0,
        None => 0,
    }
}

/// Multiple-of-0.25 check on `trunc(total * 100)`. Truncation, not rounding.
pub fn quarter_multiple_points(total: Option<&BigDecimal>) -> u64 {
    let Some(total) = total else {
        return 0;
    };

    match truncated_cents(total) {
        Some(cents) if cents % 25 == 0 => QUARTER_MULTIPLE_POINTS,
        _ => 0,
    }
}

pub fn item_pair_points(item_count: usize) -> u64 {
    (item_count as u64 / 2).saturating_mul(ITEM_PAIR_POINTS)
}

pub fn item_description_points(items: &[Item]) -> u64 {
    items
        .iter()
        .map(single_item_points)
        .fold(0u64, u64::saturating_add)
}

/// Points for one item. Length is measured in bytes of the trimmed description.
fn single_item_points(item: &Item) -> u64 {
    let trimmed = item.short_description.trim();
    if trimmed.len() % 3 != 0 {
        return 0;
    }

    let Some(price) = parse_amount(&item.price) else {
        tracing::debug!(price = %item.price, "Unparsable item price, contributing 0 points");
        return 0;
    };

    // price * 0.02 == price * 2 / 100
    let scaled = price * BigDecimal::from(2) / BigDecimal::from(100);
    match ceil_to_i64(&scaled) {
        Some(points) if points > 0 => points as u64,
        _ => 0,
    }
}

pub fn odd_day_points(purchase_date: &str) -> u64 {
    if !DATE_SHAPE.is_match(purchase_date) {
        return 0;
    }

    match NaiveDate::parse_from_str(purchase_date, DATE_FORMAT) {
        Ok(date) if date.day() % 2 == 1 => ODD_DAY_POINTS,
        Ok(_) => 0,
        Err(_) => 0,
    }
}

pub fn afternoon_points(purchase_time: &str) -> u64 {
    if !TIME_SHAPE.is_match(purchase_time) {
        return 0;
    }

    match NaiveTime::parse_from_str(purchase_time, TIME_FORMAT) {
        Ok(time) if AFTERNOON_HOURS.contains(&time.hour()) => AFTERNOON_POINTS,
        Ok(_) => 0,
        Err(_) => 0,
    }
}

/// `trunc(amount * 100)` as an integer, `None` when it does not fit an `i64`.
fn truncated_cents(amount: &BigDecimal) -> Option<i64> {
    (amount * BigDecimal::from(100)).with_scale(0).to_i64()
}

fn ceil_to_i64(value: &BigDecimal) -> Option<i64> {
    let truncated = value.with_scale(0);
    let fractional = value - &truncated;

    let whole = truncated.to_i64()?;
    if fractional > BigDecimal::zero() {
        whole.checked_add(1)
    } else {
        Some(whole)
    }
}
