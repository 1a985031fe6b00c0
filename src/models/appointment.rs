use serde::{Deserialize, Serialize};

/// A booked appointment as stored in the `appointments` table.
///
/// `date` and `time` stay as the `YYYY-MM-DD` / `HH:MM` strings the
/// validator accepted; SQLite orders them correctly as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub date: String,
    pub time: String,
    pub reason: String,
}

/// A raw appointment submission, before validation.
///
/// Every field defaults to the empty string so an absent key in the
/// request body is indistinguishable from an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppointmentForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub reason: String,
}

impl AppointmentForm {
    /// Copy of the form with surrounding whitespace stripped from every field.
    pub fn trimmed(&self) -> AppointmentForm {
        AppointmentForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            date: self.date.trim().to_string(),
            time: self.time.trim().to_string(),
            reason: self.reason.trim().to_string(),
        }
    }
}
