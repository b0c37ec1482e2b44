/// CRUD Operations Module
///
/// This module provides the four generic data-access operations: create,
/// read with conditional filters, update by id, and delete by id. Each
/// operation assembles a parameterized statement, binds the caller's
/// values, executes it on the borrowed connection, and returns a typed
/// result. Values are only ever bound; identifiers are validated before
/// they reach SQL text.
use rusqlite::{named_params, params_from_iter, Connection, ToSql};
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, error};

use crate::core::error::{CrudqlError, Result};
use crate::db::query::{Condition, Projection};
use crate::db::statement;
use crate::db::value::Value;

/// One fetched record: column names and values in statement order.
///
/// Unlike a hash map, a `Row` preserves the column order of the statement
/// that produced it, both for positional access and for JSON export.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Vec<String>,
    values: Vec<Value>,
}

impl Row {
    pub fn new(columns: Vec<String>, values: Vec<Value>) -> Self {
        Row { columns, values }
    }

    /// Looks up a value by column name.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| &self.values[i])
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Rows serialize as JSON objects in column order.
impl Serialize for Row {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, value) in self.columns.iter().zip(&self.values) {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// Serializes fetched rows to a JSON array of objects, preserving column order.
pub fn rows_to_json(rows: &[Row]) -> Result<String> {
    let json = serde_json::to_string(rows)?;
    Ok(json)
}

/// Data-access service that operates on a borrowed database connection.
///
/// The connection is owned by the caller; `DataAccess` never opens or
/// closes one. All methods are synchronous and execute a single statement.
pub struct DataAccess<'a> {
    connection: &'a Connection,
}

impl<'a> DataAccess<'a> {
    /// Creates a new DataAccess for the given connection
    pub fn new(connection: &'a Connection) -> Self {
        DataAccess { connection }
    }

    /// Inserts one row built from ordered column/value pairs.
    ///
    /// # Arguments
    ///
    /// * `table` - Target table name
    /// * `pairs` - Column/value pairs; pair order is the bind order
    ///
    /// # Returns
    ///
    /// The rowid of the inserted row.
    ///
    /// # Errors
    ///
    /// `CrudqlError::Input` for an empty pair list, `CrudqlError::Identifier`
    /// for rejected names, `CrudqlError::Constraint` when SQLite reports a
    /// constraint violation, `CrudqlError::Database` otherwise.
    pub fn create(&self, table: &str, pairs: &[(&str, Value)]) -> Result<i64> {
        let columns: Vec<&str> = pairs.iter().map(|(column, _)| *column).collect();
        let sql = statement::insert_sql(table, &columns)?;

        let params = params_from_iter(pairs.iter().map(|(_, value)| value));
        match self.connection.execute(&sql, params) {
            Ok(_) => {
                let id = self.connection.last_insert_rowid();
                debug!("Inserted row {} into {}", id, table);
                Ok(id)
            }
            Err(e) => {
                error!("Insert into {} failed: {}", table, e);
                Err(CrudqlError::classify(e))
            }
        }
    }

    /// Selects rows matching all of the given conditions.
    ///
    /// Conditions are joined with AND in input order and their values bound
    /// left to right. An empty condition list selects every row in the
    /// table; that unbounded scan is the caller's choice.
    ///
    /// # Returns
    ///
    /// The matching rows. Zero matches is `Ok` with an empty vector, not an
    /// error.
    pub fn read(
        &self,
        table: &str,
        conditions: &[Condition],
        projection: Projection,
    ) -> Result<Vec<Row>> {
        let sql = statement::select_sql(table, &projection, conditions)?;

        let mut stmt = self.connection.prepare(&sql).map_err(|e| {
            error!("Failed to prepare select on {}: {}", table, e);
            CrudqlError::Database(e)
        })?;

        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let column_count = stmt.column_count();

        let params = params_from_iter(conditions.iter().map(|condition| &condition.value));
        let rows = stmt
            .query_map(params, |row| {
                let mut values = Vec::with_capacity(column_count);
                for i in 0..column_count {
                    values.push(Value::from(row.get_ref(i)?));
                }
                Ok(Row::new(columns.clone(), values))
            })
            .and_then(|mapped| mapped.collect::<std::result::Result<Vec<Row>, _>>())
            .map_err(|e| {
                error!("Select from {} failed: {}", table, e);
                CrudqlError::Database(e)
            })?;

        debug!("Read {} rows from {}", rows.len(), table);
        Ok(rows)
    }

    /// Updates the row with the given id, setting each column in `data`.
    ///
    /// Binds one named parameter per column plus `:id`. Columns not named
    /// in `data` are left unchanged.
    ///
    /// # Returns
    ///
    /// `Ok(true)` when a row was updated, `Ok(false)` when no row has that
    /// id. Both are outcomes, not errors.
    pub fn update(&self, table: &str, data: &[(&str, Value)], id: i64) -> Result<bool> {
        let columns: Vec<&str> = data.iter().map(|(column, _)| *column).collect();
        let sql = statement::update_sql(table, &columns)?;

        // Named-parameter keys carry the ':' prefix expected by rusqlite.
        let keys: Vec<String> = data
            .iter()
            .map(|(column, _)| format!(":{}", column))
            .collect();
        let mut params: Vec<(&str, &dyn ToSql)> = Vec::with_capacity(data.len() + 1);
        for (key, (_, value)) in keys.iter().zip(data) {
            params.push((key.as_str(), value));
        }
        params.push((":id", &id));

        match self.connection.execute(&sql, params.as_slice()) {
            Ok(affected) => {
                debug!("Updated {} row(s) in {}", affected, table);
                Ok(affected > 0)
            }
            Err(e) => {
                error!("Update of {} failed: {}", table, e);
                Err(CrudqlError::classify(e))
            }
        }
    }

    /// Deletes the row with the given id.
    ///
    /// # Returns
    ///
    /// `Ok(true)` when a row was deleted, `Ok(false)` when no row has that
    /// id.
    pub fn delete(&self, table: &str, id: i64) -> Result<bool> {
        let sql = statement::delete_sql(table)?;

        match self.connection.execute(&sql, named_params! { ":id": id }) {
            Ok(affected) => {
                debug!("Deleted {} row(s) from {}", affected, table);
                Ok(affected > 0)
            }
            Err(e) => {
                error!("Delete from {} failed: {}", table, e);
                Err(CrudqlError::classify(e))
            }
        }
    }
}
