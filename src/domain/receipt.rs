use crate::error::{ReceiptError, Result};
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque identifier assigned to a stored receipt.
///
/// Generated from a random (v4) UUID; callers must treat it as an arbitrary
/// string and never rely on its shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Generates a fresh identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ReceiptId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ReceiptId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single purchased line item, exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    pub short_description: String,
    /// Currency string, e.g. `"12.25"`.
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// A purchase receipt, exactly as submitted.
///
/// Fields stay in their textual form; the scoring engine re-parses them
/// strictly, so a receipt that slipped past validation still cannot produce
/// a bogus score. Missing JSON keys deserialize to empty values and are
/// reported by validation as required fields; so does an explicit `null`
/// item list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Receipt {
    pub retailer: String,
    /// `YYYY-MM-DD`
    pub purchase_date: String,
    /// `HH:MM`, 24-hour clock
    pub purchase_time: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub items: Vec<Item>,
    /// Currency string, e.g. `"35.35"`.
    pub total: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Item>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Item>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A non-negative currency amount with at most two fractional digits.
///
/// Parsed from the strict grammar `digits[.d[d]]`. Arithmetic used for
/// scoring goes through whole cents, never binary floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
    /// The amount expressed in whole cents.
    pub fn cents(&self) -> u128 {
        // scale is 0..=2 and the mantissa is non-negative (enforced by parse)
        self.0.mantissa().unsigned_abs() * 10u128.pow(2 - self.0.scale())
    }

    /// True when the amount has no cents.
    pub fn is_whole(&self) -> bool {
        self.cents() % 100 == 0
    }

    /// True when the amount is an exact multiple of `step_cents`.
    pub fn is_multiple_of_cents(&self, step_cents: u128) -> bool {
        step_cents != 0 && self.cents() % step_cents == 0
    }
}

/// Reports whether `raw` matches the currency grammar `^\d+(\.\d{1,2})?$`.
pub fn is_currency(raw: &str) -> bool {
    let (whole, fraction) = match raw.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (raw, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    all_digits(whole) && fraction.is_none_or(|f| f.len() <= 2 && all_digits(f))
}

impl FromStr for Amount {
    type Err = ReceiptError;

    fn from_str(raw: &str) -> Result<Self> {
        if !is_currency(raw) {
            return Err(ReceiptError::MalformedAmount(raw.to_owned()));
        }
        Decimal::from_str_exact(raw)
            .map(Self)
            .map_err(|_| ReceiptError::MalformedAmount(raw.to_owned()))
    }
}

/// Checks `raw` against a template where `d` stands for an ASCII digit and
/// every other byte must match literally.
fn has_shape(raw: &str, template: &str) -> bool {
    raw.len() == template.len()
        && raw.bytes().zip(template.bytes()).all(|(b, t)| match t {
            b'd' => b.is_ascii_digit(),
            _ => b == t,
        })
}

/// Parses a purchase date in strict `YYYY-MM-DD` form.
///
/// The value must also name a real calendar day (`2022-02-30` is rejected).
pub fn parse_purchase_date(raw: &str) -> Result<NaiveDate> {
    if !has_shape(raw, "dddd-dd-dd") {
        return Err(ReceiptError::MalformedDate(raw.to_owned()));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ReceiptError::MalformedDate(raw.to_owned()))
}

/// Parses a purchase time in strict 24-hour `HH:MM` form.
pub fn parse_purchase_time(raw: &str) -> Result<NaiveTime> {
    if !has_shape(raw, "dd:dd") {
        return Err(ReceiptError::MalformedTime(raw.to_owned()));
    }
    NaiveTime::parse_from_str(raw, "%H:%M")
        .map_err(|_| ReceiptError::MalformedTime(raw.to_owned()))
}
