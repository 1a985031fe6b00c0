//! Appointment submission validation.
//!
//! Pure given the wall-clock local date: a raw form goes in, a
//! field → message map comes out. An empty map means the submission is
//! acceptable. Malformed input never panics; it yields messages.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate, NaiveTime};

use crate::models::AppointmentForm;

/// Bookable window, inclusive on both ends.
pub const OPENING_TIME: &str = "09:00";
pub const CLOSING_TIME: &str = "17:00";

/// Validation result: field name → human-readable rejection reason.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// Validate a submission against today's local date.
pub fn validate(form: &AppointmentForm) -> FieldErrors {
    validate_on(form, Local::now().date_naive())
}

/// Validate a submission against an explicit "today".
///
/// Rules are evaluated independently per field; a field with no
/// violation is absent from the result. For `date` and `time` the
/// range check only runs once the format check has passed, so a field
/// never carries both messages.
pub fn validate_on(form: &AppointmentForm, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.name.trim().is_empty() {
        errors.insert("name", "Name is required.");
    }

    // Syntactic check only: an `@` with a dotted domain after the last `@`.
    let email = form.email.trim();
    let domain_ok = email
        .rsplit_once('@')
        .is_some_and(|(_, domain)| domain.contains('.'));
    if !domain_ok {
        errors.insert("email", "Enter a valid email address.");
    }

    let date = form.date.trim();
    if date.is_empty() {
        errors.insert("date", "Date is required.");
    } else {
        match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            Ok(parsed) if parsed < today => {
                errors.insert("date", "Date cannot be in the past.");
            }
            Ok(_) => {}
            Err(_) => {
                errors.insert("date", "Invalid date format.");
            }
        }
    }

    let time = form.time.trim();
    if time.is_empty() {
        errors.insert("time", "Time is required.");
    } else if NaiveTime::parse_from_str(time, "%H:%M").is_err() {
        errors.insert("time", "Invalid time format.");
    } else if time < OPENING_TIME || time > CLOSING_TIME {
        // Plain string ordering, kept deliberately: zero-padded HH:MM
        // sorts like a time, and unpadded input (e.g. "9:30") falls
        // outside the window even though chrono parses it.
        errors.insert("time", "Time must be between 09:00 and 17:00.");
    }

    if form.reason.trim().is_empty() {
        errors.insert("reason", "Reason is required.");
    }

    errors
}
