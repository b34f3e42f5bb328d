//! Entry CRUD operations.
//!
//! This module provides functions for creating, reading, updating, deleting and
//! filtering work-log entries in the database. [`EntryFilter`] values are
//! compiled into a parameterised `WHERE` clause.

use crate::constants::DATE_FORMAT_ISO;
use crate::errors::{AppResult, DatabaseError};
use crate::repository::{Entry, EntryFilter, NewEntry};
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use tracing::debug;

const SELECT_COLUMNS: &str = "SELECT id, name, title, date, time, notes FROM entries";
const ORDER_BY: &str = "ORDER BY date DESC, id DESC";

/// Inserts a new entry and returns it with its assigned id.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn insert_entry(conn: &Connection, entry: NewEntry) -> AppResult<Entry> {
    debug!("Inserting entry dated {}", entry.date);

    conn.execute(
        "INSERT INTO entries (name, title, date, time, notes) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            entry.name,
            entry.title,
            entry.date.format(DATE_FORMAT_ISO).to_string(),
            entry.time,
            entry.notes
        ],
    )
    .map_err(DatabaseError::Sqlite)?;

    let id = conn.last_insert_rowid();
    debug!("Entry inserted with id {}", id);
    Ok(entry.with_id(id))
}

/// Selects entries, newest date first, optionally restricted by `filter`.
///
/// # Errors
///
/// Returns an error if the query fails or a stored date cannot be parsed.
pub fn select_entries(conn: &Connection, filter: Option<&EntryFilter>) -> AppResult<Vec<Entry>> {
    let mut values = Vec::new();
    let sql = match filter {
        Some(filter) => format!(
            "{} WHERE {} {}",
            SELECT_COLUMNS,
            where_clause(filter, &mut values),
            ORDER_BY
        ),
        None => format!("{} {}", SELECT_COLUMNS, ORDER_BY),
    };
    debug!("Selecting entries: {}", sql);

    let mut stmt = conn.prepare(&sql).map_err(DatabaseError::Sqlite)?;
    let rows = stmt
        .query_map(params_from_iter(values), row_to_entry)
        .map_err(DatabaseError::Sqlite)?;

    let entries = rows
        .collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::Sqlite)?;
    debug!("Selected {} entries", entries.len());
    Ok(entries)
}

/// Overwrites every mutable column of the entry with `entry.id`.
///
/// # Errors
///
/// Returns `DatabaseError::NotFound` if no such entry exists.
pub fn update_entry(conn: &Connection, entry: &Entry) -> AppResult<()> {
    debug!("Updating entry {}", entry.id);

    let rows_affected = conn
        .execute(
            "UPDATE entries SET name = ?1, title = ?2, date = ?3, time = ?4, notes = ?5 WHERE id = ?6",
            params![
                entry.name,
                entry.title,
                entry.date.format(DATE_FORMAT_ISO).to_string(),
                entry.time,
                entry.notes,
                entry.id
            ],
        )
        .map_err(DatabaseError::Sqlite)?;

    if rows_affected == 0 {
        return Err(
            DatabaseError::NotFound(format!("Entry with id {} not found", entry.id)).into(),
        );
    }

    Ok(())
}

/// Removes the entry with the given id.
///
/// # Errors
///
/// Returns `DatabaseError::NotFound` if no such entry exists.
pub fn delete_entry(conn: &Connection, entry_id: i64) -> AppResult<()> {
    debug!("Deleting entry {}", entry_id);

    let rows_affected = conn
        .execute("DELETE FROM entries WHERE id = ?1", params![entry_id])
        .map_err(DatabaseError::Sqlite)?;

    if rows_affected == 0 {
        return Err(
            DatabaseError::NotFound(format!("Entry with id {} not found", entry_id)).into(),
        );
    }

    Ok(())
}

/// Renders `filter` as SQL, pushing bound values onto `values` in order.
///
/// Containment uses `instr` rather than `LIKE`: it is case-sensitive and
/// treats `%` and `_` in the search text literally.
fn where_clause(filter: &EntryFilter, values: &mut Vec<Value>) -> String {
    match filter {
        EntryFilter::DateEquals(date) => {
            values.push(date_value(date));
            "date = ?".to_string()
        }
        EntryFilter::DateBetween { start, end } => {
            values.push(date_value(start));
            values.push(date_value(end));
            "date BETWEEN ? AND ?".to_string()
        }
        EntryFilter::NameContains(text) => {
            values.push(Value::Text(text.clone()));
            "instr(name, ?) > 0".to_string()
        }
        EntryFilter::NameEquals(name) => {
            values.push(Value::Text(name.clone()));
            "name = ?".to_string()
        }
        EntryFilter::TitleOrNotesContains(term) => {
            values.push(Value::Text(term.clone()));
            values.push(Value::Text(term.clone()));
            "(instr(title, ?) > 0 OR instr(notes, ?) > 0)".to_string()
        }
        EntryFilter::TimeEquals(time) => {
            values.push(Value::Integer(*time));
            "time = ?".to_string()
        }
        EntryFilter::All(filters) if filters.is_empty() => "1".to_string(),
        EntryFilter::All(filters) => {
            let parts: Vec<String> = filters.iter().map(|f| where_clause(f, values)).collect();
            format!("({})", parts.join(" AND "))
        }
    }
}

fn date_value(date: &NaiveDate) -> Value {
    Value::Text(date.format(DATE_FORMAT_ISO).to_string())
}

fn row_to_entry(row: &Row<'_>) -> rusqlite::Result<Entry> {
    Ok(Entry {
        id: row.get(0)?,
        name: row.get(1)?,
        title: row.get(2)?,
        date: NaiveDate::parse_from_str(&row.get::<_, String>(3)?, DATE_FORMAT_ISO).map_err(
            |e| rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e)),
        )?,
        time: row.get(4)?,
        notes: row.get(5)?,
    })
}
