//! Generic keyed table access over a SQLite connection.
//!
//! [`RecordStore`] is implemented for `rusqlite::Connection`, so it is
//! available on a plain connection and, through deref, inside a
//! `rusqlite::Transaction`. [`with_transaction`] is built on SQL savepoints,
//! so it nests: inside an outer call it commits or rolls back only its own
//! part, and the outer call decides the rest.

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

use super::clock;
use super::record::{Record, IMMUTABLE_COLUMNS};
use crate::types::errors::{DashboardError, Result};

/// Table operations shared by every record kind.
pub trait RecordStore {
    /// Point lookup by primary key.
    fn get<R: Record>(&self, id: &str) -> Result<Option<R>>;
    /// Point lookup where a missing row is `NotFound` for `R::KIND`.
    fn require<R: Record>(&self, id: &str) -> Result<R> {
        self.get::<R>(id)?
            .ok_or_else(|| DashboardError::not_found(R::KIND, id))
    }
    /// Every row, ordered by `created_at` ascending, ties in insertion order.
    fn get_all<R: Record>(&self) -> Result<Vec<R>>;
    /// Rows whose indexed `column` equals `value`.
    fn query_by_index<R: Record>(&self, column: &str, value: &str) -> Result<Vec<R>>;
    fn insert<R: Record>(&self, record: &R) -> Result<()>;
    /// Sets the given columns on the row `id`. Returns `false` if no row matched.
    fn update<R: Record>(&self, id: &str, fields: &[(&str, Value)]) -> Result<bool>;
    /// Returns `false` if no row matched.
    fn delete<R: Record>(&self, id: &str) -> Result<bool>;
    /// Deletes rows whose indexed `column` equals `value`, returning how many went.
    fn delete_where<R: Record>(&self, column: &str, value: &str) -> Result<usize>;
    fn bulk_insert<R: Record>(&self, records: &[R]) -> Result<usize>;
    fn clear<R: Record>(&self) -> Result<usize>;
    fn count<R: Record>(&self) -> Result<usize>;
}

fn select_list<R: Record>() -> String {
    R::COLUMNS.join(", ")
}

fn require_indexed<R: Record>(column: &str) -> Result<()> {
    if R::INDEXED.contains(&column) {
        Ok(())
    } else {
        Err(DashboardError::Validation(format!(
            "Column '{}' is not indexed on {}",
            column,
            R::TABLE
        )))
    }
}

/// Stored timestamps are whole microseconds.
fn require_storable<R: Record>(record: &R) -> Result<()> {
    match record.timestamps().into_iter().find(|ts| !clock::is_whole_micros(*ts)) {
        None => Ok(()),
        Some(ts) => Err(DashboardError::Validation(format!(
            "{} {} has a timestamp finer than a microsecond: {}",
            R::KIND,
            record.id(),
            ts.to_rfc3339()
        ))),
    }
}

fn collect_rows<R: Record>(
    conn: &Connection,
    sql: &str,
    args: impl rusqlite::Params,
) -> Result<Vec<R>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(args, R::from_row)?;
    let mut results = Vec::new();
    for row in rows {
        results.push(row?);
    }
    Ok(results)
}

impl RecordStore for Connection {
    fn get<R: Record>(&self, id: &str) -> Result<Option<R>> {
        let sql = format!("SELECT {} FROM {} WHERE id = ?1", select_list::<R>(), R::TABLE);
        Ok(self.query_row(&sql, params![id], R::from_row).optional()?)
    }

    fn get_all<R: Record>(&self) -> Result<Vec<R>> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY created_at ASC, rowid ASC",
            select_list::<R>(),
            R::TABLE
        );
        collect_rows(self, &sql, [])
    }

    fn query_by_index<R: Record>(&self, column: &str, value: &str) -> Result<Vec<R>> {
        require_indexed::<R>(column)?;
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = ?1",
            select_list::<R>(),
            R::TABLE,
            column
        );
        collect_rows(self, &sql, params![value])
    }

    fn insert<R: Record>(&self, record: &R) -> Result<()> {
        require_storable(record)?;
        let placeholders = (1..=R::COLUMNS.len())
            .map(|i| format!("?{}", i))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            R::TABLE,
            select_list::<R>(),
            placeholders
        );
        self.execute(&sql, params_from_iter(record.to_values()))?;
        Ok(())
    }

    fn update<R: Record>(&self, id: &str, fields: &[(&str, Value)]) -> Result<bool> {
        if fields.is_empty() {
            return Ok(self.get::<R>(id)?.is_some());
        }
        for (column, _) in fields {
            if IMMUTABLE_COLUMNS.contains(column) {
                return Err(DashboardError::Validation(format!(
                    "Column '{}' cannot be updated",
                    column
                )));
            }
            if !R::COLUMNS.contains(column) {
                return Err(DashboardError::Validation(format!(
                    "Unknown column '{}' on {}",
                    column,
                    R::TABLE
                )));
            }
        }

        let assignments = fields
            .iter()
            .enumerate()
            .map(|(i, (column, _))| format!("{} = ?{}", column, i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {} WHERE id = ?{}",
            R::TABLE,
            assignments,
            fields.len() + 1
        );
        let mut values: Vec<Value> = fields.iter().map(|(_, v)| v.clone()).collect();
        values.push(Value::Text(id.to_string()));

        let affected = self.execute(&sql, params_from_iter(values))?;
        Ok(affected > 0)
    }

    fn delete<R: Record>(&self, id: &str) -> Result<bool> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", R::TABLE);
        Ok(self.execute(&sql, params![id])? > 0)
    }

    fn delete_where<R: Record>(&self, column: &str, value: &str) -> Result<usize> {
        require_indexed::<R>(column)?;
        let sql = format!("DELETE FROM {} WHERE {} = ?1", R::TABLE, column);
        Ok(self.execute(&sql, params![value])?)
    }

    fn bulk_insert<R: Record>(&self, records: &[R]) -> Result<usize> {
        if records.is_empty() {
            return Ok(0);
        }
        let placeholders = (1..=R::COLUMNS.len())
            .map(|i| format!("?{}", i))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            R::TABLE,
            select_list::<R>(),
            placeholders
        );
        for record in records {
            require_storable(record)?;
        }
        with_transaction(self, |conn| {
            let mut stmt = conn.prepare(&sql)?;
            for record in records {
                stmt.execute(params_from_iter(record.to_values()))
                    .map_err(|e| {
                        DashboardError::Storage(format!(
                            "Bulk insert into {} failed at {}: {}",
                            R::TABLE,
                            record.id(),
                            e
                        ))
                    })?;
            }
            Ok(())
        })?;
        Ok(records.len())
    }

    fn clear<R: Record>(&self) -> Result<usize> {
        let sql = format!("DELETE FROM {}", R::TABLE);
        Ok(self.execute(&sql, [])?)
    }

    fn count<R: Record>(&self) -> Result<usize> {
        let sql = format!("SELECT COUNT(*) FROM {}", R::TABLE);
        let n: i64 = self.query_row(&sql, [], |row| row.get(0))?;
        Ok(usize::try_from(n).unwrap_or_default())
    }
}

const SAVEPOINT: &str = "tabdesk_tx";

/// Runs `f` all-or-nothing: released on `Ok`, rolled back on `Err`.
///
/// Outside any transaction this is a full transaction. Nested calls each get
/// their own savepoint.
pub fn with_transaction<T>(
    conn: &Connection,
    f: impl FnOnce(&Connection) -> Result<T>,
) -> Result<T> {
    conn.execute_batch(&format!("SAVEPOINT {}", SAVEPOINT))?;
    let outcome = f(conn).and_then(|out| {
        conn.execute_batch(&format!("RELEASE {}", SAVEPOINT))?;
        Ok(out)
    });
    if outcome.is_err() {
        let rollback = format!("ROLLBACK TO {0}; RELEASE {0}", SAVEPOINT);
        if let Err(e) = conn.execute_batch(&rollback) {
            tracing::error!(error = %e, "rollback failed");
        }
    }
    outcome
}
