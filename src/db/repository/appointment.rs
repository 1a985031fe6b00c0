//! Appointment store: the five data-access operations over the
//! `appointments` table.
//!
//! Each operation is a single SQLite statement, so atomicity is the
//! engine's. Not-found is an ordinary return value (`None` / `false`),
//! never an error; the error channel carries storage faults only.

use rusqlite::{params, Connection, Row};

use crate::db::DatabaseError;
use crate::models::{Appointment, AppointmentForm};

fn map_row(row: &Row<'_>) -> rusqlite::Result<Appointment> {
    Ok(Appointment {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        date: row.get(3)?,
        time: row.get(4)?,
        reason: row.get(5)?,
    })
}

/// Insert a new appointment with trimmed field values and return its id.
///
/// The caller is expected to have run the form through `validate` first.
pub fn insert_appointment(
    conn: &Connection,
    form: &AppointmentForm,
) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO appointments (name, email, date, time, reason)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            form.name.trim(),
            form.email.trim(),
            form.date.trim(),
            form.time.trim(),
            form.reason.trim(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Fetch one appointment by id. `None` when no record matches.
pub fn get_appointment(
    conn: &Connection,
    id: i64,
) -> Result<Option<Appointment>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, email, date, time, reason FROM appointments WHERE id = ?1",
    )?;

    match stmt.query_row(params![id], map_row) {
        Ok(appt) => Ok(Some(appt)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// All appointments, earliest first: by date, then by time within a date.
pub fn list_appointments(conn: &Connection) -> Result<Vec<Appointment>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, email, date, time, reason FROM appointments
         ORDER BY date ASC, time ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

/// Overwrite all five fields of the appointment matching `id` with
/// trimmed values. `false` when no record matches; never inserts.
pub fn update_appointment(
    conn: &Connection,
    id: i64,
    form: &AppointmentForm,
) -> Result<bool, DatabaseError> {
    let changed = conn.execute(
        "UPDATE appointments
         SET name = ?1, email = ?2, date = ?3, time = ?4, reason = ?5
         WHERE id = ?6",
        params![
            form.name.trim(),
            form.email.trim(),
            form.date.trim(),
            form.time.trim(),
            form.reason.trim(),
            id,
        ],
    )?;
    Ok(changed > 0)
}

/// Remove the appointment matching `id`. `false` when there was
/// nothing to delete.
pub fn delete_appointment(conn: &Connection, id: i64) -> Result<bool, DatabaseError> {
    let deleted = conn.execute("DELETE FROM appointments WHERE id = ?1", params![id])?;
    Ok(deleted > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::open_memory_database;

    fn sample_form() -> AppointmentForm {
        AppointmentForm {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            date: "2025-06-20".into(),
            time: "10:30".into(),
            reason: "Annual checkup".into(),
        }
    }

    #[test]
    fn create_then_get_round_trips() {
        let conn = open_memory_database().unwrap();
        let id = insert_appointment(&conn, &sample_form()).unwrap();

        let appt = get_appointment(&conn, id).unwrap().unwrap();
        assert_eq!(appt.id, id);
        assert_eq!(appt.name, "Ada Lovelace");
        assert_eq!(appt.email, "ada@example.com");
        assert_eq!(appt.date, "2025-06-20");
        assert_eq!(appt.time, "10:30");
        assert_eq!(appt.reason, "Annual checkup");
    }

    #[test]
    fn insert_trims_field_values() {
        let conn = open_memory_database().unwrap();
        let form = AppointmentForm {
            name: "  Ada  ".into(),
            email: " ada@example.com ".into(),
            date: " 2025-06-20 ".into(),
            time: " 10:30 ".into(),
            reason: "  checkup ".into(),
        };
        let id = insert_appointment(&conn, &form).unwrap();

        let appt = get_appointment(&conn, id).unwrap().unwrap();
        assert_eq!(appt.name, "Ada");
        assert_eq!(appt.email, "ada@example.com");
        assert_eq!(appt.date, "2025-06-20");
        assert_eq!(appt.time, "10:30");
        assert_eq!(appt.reason, "checkup");
    }

    #[test]
    fn get_missing_id_is_none() {
        let conn = open_memory_database().unwrap();
        assert!(get_appointment(&conn, 42).unwrap().is_none());
    }

    #[test]
    fn list_orders_by_date_then_time() {
        let conn = open_memory_database().unwrap();

        let mut form = sample_form();
        form.date = "2025-01-02".into();
        form.time = "09:00".into();
        insert_appointment(&conn, &form).unwrap();

        form.date = "2025-01-01".into();
        form.time = "16:00".into();
        insert_appointment(&conn, &form).unwrap();

        form.date = "2025-01-01".into();
        form.time = "09:30".into();
        insert_appointment(&conn, &form).unwrap();

        let all = list_appointments(&conn).unwrap();
        let order: Vec<(&str, &str)> = all
            .iter()
            .map(|a| (a.date.as_str(), a.time.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("2025-01-01", "09:30"),
                ("2025-01-01", "16:00"),
                ("2025-01-02", "09:00"),
            ]
        );
    }

    #[test]
    fn update_overwrites_all_fields() {
        let conn = open_memory_database().unwrap();
        let id = insert_appointment(&conn, &sample_form()).unwrap();

        let replacement = AppointmentForm {
            name: "Grace Hopper".into(),
            email: "grace@example.com".into(),
            date: "2025-07-01".into(),
            time: "14:00".into(),
            reason: "Follow-up".into(),
        };
        assert!(update_appointment(&conn, id, &replacement).unwrap());

        let appt = get_appointment(&conn, id).unwrap().unwrap();
        assert_eq!(appt.id, id);
        assert_eq!(appt.name, "Grace Hopper");
        assert_eq!(appt.date, "2025-07-01");
        assert_eq!(appt.time, "14:00");
    }

    #[test]
    fn update_missing_id_creates_nothing() {
        let conn = open_memory_database().unwrap();
        insert_appointment(&conn, &sample_form()).unwrap();

        let updated = update_appointment(&conn, 999, &sample_form()).unwrap();
        assert!(!updated);
        assert_eq!(list_appointments(&conn).unwrap().len(), 1);
    }

    #[test]
    fn delete_twice_reports_not_found_second_time() {
        let conn = open_memory_database().unwrap();
        let id = insert_appointment(&conn, &sample_form()).unwrap();

        assert!(delete_appointment(&conn, id).unwrap());
        assert!(!delete_appointment(&conn, id).unwrap());
        assert!(get_appointment(&conn, id).unwrap().is_none());
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let conn = open_memory_database().unwrap();
        let first = insert_appointment(&conn, &sample_form()).unwrap();
        assert!(delete_appointment(&conn, first).unwrap());

        let second = insert_appointment(&conn, &sample_form()).unwrap();
        assert!(second > first);
    }

    #[test]
    fn identical_slots_both_succeed() {
        // Overlap detection is out of scope; two bookings at the same
        // date/time are both accepted.
        let conn = open_memory_database().unwrap();
        insert_appointment(&conn, &sample_form()).unwrap();
        insert_appointment(&conn, &sample_form()).unwrap();
        assert_eq!(list_appointments(&conn).unwrap().len(), 2);
    }
}
