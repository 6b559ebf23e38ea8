use lazy_static::lazy_static;
use regex::Regex;
use time::{format_description::FormatItem, macros::format_description, Date};

use crate::users::dto::UserPayload;

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub(crate) fn is_valid_phone(phone: &str) -> bool {
    lazy_static! {
        static ref PHONE_RE: Regex = Regex::new(r"^[0-9]{10}$").unwrap();
    }
    PHONE_RE.is_match(phone)
}

pub(crate) fn is_valid_dob(dob: &str) -> bool {
    Date::parse(dob, DATE_FORMAT).is_ok()
}

/// Full schema check for create: required fields present and every
/// supplied field well-formed.
pub(crate) fn validate_new_user(payload: &UserPayload) -> bool {
    let required_present = payload.lastname.is_some()
        && payload.dob.is_some()
        && payload.email.is_some()
        && payload.phone_number.is_some();
    required_present && validate_partial_user(payload)
}

/// Per-field constraints only; presence is the caller's concern. Partial
/// update payloads go through this without the required-field check.
pub(crate) fn validate_partial_user(payload: &UserPayload) -> bool {
    payload
        .lastname
        .as_deref()
        .map_or(true, |lastname| !lastname.is_empty())
        && payload.dob.as_deref().map_or(true, is_valid_dob)
        && payload.email.as_deref().map_or(true, is_valid_email)
        && payload
            .phone_number
            .as_deref()
            .map_or(true, is_valid_phone)
}
