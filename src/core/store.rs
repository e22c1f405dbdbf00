use std::path::PathBuf;

use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, Row};

use crate::core::model::{FilterCriteria, OrderRow, TIMESTAMP_FORMAT};
use crate::core::ports::OrderStore;
use crate::utils::error::Result;

/// District and inclusive window bounds are bound as typed parameters;
/// the district value never reaches the SQL text itself.
const ORDERS_IN_WINDOW_SQL: &str =
    "SELECT * FROM Orders WHERE CityDistrict = ?1 AND DeliveryDateTime BETWEEN ?2 AND ?3";

/// SQLite-backed [`OrderStore`]. Opens a fresh connection per query and
/// releases it on every exit path by scope.
pub struct SqliteOrderStore {
    db_path: PathBuf,
}

impl SqliteOrderStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }
}

impl OrderStore for SqliteOrderStore {
    fn fetch_window(&self, criteria: &FilterCriteria) -> Result<Vec<OrderRow>> {
        tracing::debug!("opening database at {}", self.db_path.display());
        let conn = Connection::open(&self.db_path)?;

        let mut stmt = conn.prepare(ORDERS_IN_WINDOW_SQL)?;
        let column_count = stmt.column_count();

        let start = criteria.window_start.format(TIMESTAMP_FORMAT).to_string();
        let end = criteria.window_end().format(TIMESTAMP_FORMAT).to_string();

        let mapped = stmt.query_map(params![criteria.district, start, end], |row| {
            row_values(row, column_count).map(|values| OrderRow { values })
        })?;

        let mut rows = Vec::new();
        for row in mapped {
            rows.push(row?);
        }
        Ok(rows)
    }
}

fn row_values(row: &Row<'_>, column_count: usize) -> rusqlite::Result<Vec<String>> {
    let mut values = Vec::with_capacity(column_count);
    for idx in 0..column_count {
        values.push(render_value(row.get_ref(idx)?));
    }
    Ok(values)
}

fn render_value(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(value) => value.to_string(),
        ValueRef::Real(value) => value.to_string(),
        ValueRef::Text(text) | ValueRef::Blob(text) => String::from_utf8_lossy(text).into_owned(),
    }
}
