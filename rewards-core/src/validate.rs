//! Receipt format validation.
//!
//! Validation runs against the untyped parsed JSON, before deserialization
//! into [`crate::types::Receipt`]. The outcome is whole-object and
//! all-or-nothing: every required field must be present and pass its
//! predicate, unknown extra fields are ignored, and the caller is never told
//! which field failed. No coercion or repair happens here.
//!
//! Each field has exactly one predicate; the tables below are the single
//! source of truth for the required field sets.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Letters, digits, whitespace, hyphen, and ampersand only.
static RETAILER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9\s\-&]+$").expect("hardcoded regex"));

/// `YYYY-MM-DD` shape only; calendar validity is deliberately not checked.
/// Digit classes are spelled out as ASCII: the default `\d` here is a
/// Unicode class and would admit digits the submission format does not use.
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("hardcoded regex"));

/// 24-hour `HH:MM`, leading zero on the hour optional.
static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]?[0-9]|2[0-3]):[0-5][0-9]$").expect("hardcoded regex"));

/// Unsigned decimal amount with exactly two ASCII cent digits.
static AMOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("hardcoded regex"));

/// ASCII word characters, whitespace, and hyphen.
static DESCRIPTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_\s-]+$").expect("hardcoded regex"));

type FieldPredicate = fn(&Value) -> bool;

/// Required receipt fields and their predicates.
const RECEIPT_RULES: &[(&str, FieldPredicate)] = &[
    ("retailer", retailer_ok),
    ("purchaseDate", purchase_date_ok),
    ("purchaseTime", purchase_time_ok),
    ("total", amount_ok),
    ("items", items_ok),
];

/// Required item fields and their predicates.
const ITEM_RULES: &[(&str, FieldPredicate)] = &[
    ("shortDescription", description_ok),
    ("price", amount_ok),
];

/// Validate a submitted receipt candidate.
///
/// Returns `true` only when the candidate is a JSON object carrying every
/// required field and every field (including every item) passes its format
/// rule.
pub fn validate_receipt(candidate: &Value) -> bool {
    let Some(obj) = candidate.as_object() else {
        return false;
    };

    RECEIPT_RULES
        .iter()
        .all(|(field, predicate)| obj.get(*field).is_some_and(*predicate))
}

/// Validate a points-lookup identifier.
///
/// Syntactic check only: the id must be non-empty after trimming
/// whitespace. Whether the id actually exists is the store's concern.
pub fn validate_lookup_id(id: &str) -> bool {
    !id.trim().is_empty()
}

fn items_ok(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| !items.is_empty() && items.iter().all(validate_item))
}

fn validate_item(candidate: &Value) -> bool {
    let Some(obj) = candidate.as_object() else {
        return false;
    };

    ITEM_RULES
        .iter()
        .all(|(field, predicate)| obj.get(*field).is_some_and(*predicate))
}

fn matches_re(value: &Value, re: &Regex) -> bool {
    value.as_str().is_some_and(|s| re.is_match(s))
}

fn retailer_ok(value: &Value) -> bool {
    matches_re(value, &RETAILER_RE)
}

fn purchase_date_ok(value: &Value) -> bool {
    matches_re(value, &DATE_RE)
}

fn purchase_time_ok(value: &Value) -> bool {
    matches_re(value, &TIME_RE)
}

fn amount_ok(value: &Value) -> bool {
    matches_re(value, &AMOUNT_RE)
}

fn description_ok(value: &Value) -> bool {
    matches_re(value, &DESCRIPTION_RE)
}
