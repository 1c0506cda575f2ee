//! Field-level validation of submitted receipts.
//!
//! Runs before a receipt is accepted for processing. Every violation is
//! collected and keyed by the JSON path of the offending field, e.g.
//! `items[2].price`, so the whole set can be reported back in one response.

use super::receipt::{Amount, Receipt, parse_purchase_date, parse_purchase_time};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const REQUIRED: &str = "This field is required.";
pub const INVALID_DATETIME: &str = "Invalid datetime format.";
pub const INVALID_CURRENCY: &str = "Must be a valid currency amount with up to two decimal places.";
pub const NO_ITEMS: &str = "Must contain at least one item.";

/// Validation messages keyed by field path, in a stable order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn add(&mut self, field: impl Into<String>, message: &str) {
        self.0.insert(field.into(), message.to_owned());
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

/// Checks that a receipt is complete and well-formed enough to be scored.
pub fn validate_receipt(receipt: &Receipt) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if is_blank(&receipt.retailer) {
        errors.add("retailer", REQUIRED);
    }

    if is_blank(&receipt.purchase_date) {
        errors.add("purchaseDate", REQUIRED);
    } else if parse_purchase_date(&receipt.purchase_date).is_err() {
        errors.add("purchaseDate", INVALID_DATETIME);
    }

    if is_blank(&receipt.purchase_time) {
        errors.add("purchaseTime", REQUIRED);
    } else if parse_purchase_time(&receipt.purchase_time).is_err() {
        errors.add("purchaseTime", INVALID_DATETIME);
    }

    if receipt.items.is_empty() {
        errors.add("items", NO_ITEMS);
    }
    for (i, item) in receipt.items.iter().enumerate() {
        if is_blank(&item.short_description) {
            errors.add(format!("items[{i}].shortDescription"), REQUIRED);
        }
        check_currency(&mut errors, format!("items[{i}].price"), &item.price);
    }

    check_currency(&mut errors, "total", &receipt.total);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn check_currency(errors: &mut ValidationErrors, field: impl Into<String>, value: &str) {
    if value.is_empty() {
        errors.add(field, REQUIRED);
    } else if value.parse::<Amount>().is_err() {
        errors.add(field, INVALID_CURRENCY);
    }
}
