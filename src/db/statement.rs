//! SQL text assembly for the four CRUD statements.
//!
//! Builders are pure: they return SQL with placeholders and never touch the
//! database. Values never appear in statement text; they are bound later by
//! the caller. Identifiers cannot be bound as parameters, so every table and
//! column name is checked against a strict allow-list before it is
//! interpolated.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::error::{CrudqlError, Result};
use crate::db::query::{Condition, Projection};

static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Validates a table or column name against the identifier allow-list.
///
/// Names must start with a letter or underscore and contain only letters,
/// digits, and underscores. Anything else is rejected before it can reach
/// SQL text.
pub fn validate_identifier(name: &str) -> Result<()> {
    if IDENTIFIER_RE.is_match(name) {
        Ok(())
    } else {
        Err(CrudqlError::Identifier(name.to_string()))
    }
}

/// Builds `INSERT INTO <table> (<c1>, <c2>, ...) VALUES (?, ?, ...)` with
/// one positional placeholder per column.
pub fn insert_sql(table: &str, columns: &[&str]) -> Result<String> {
    validate_identifier(table)?;
    if columns.is_empty() {
        return Err(CrudqlError::Input(
            "insert requires at least one column".to_string(),
        ));
    }
    for column in columns {
        validate_identifier(column)?;
    }

    let placeholders = vec!["?"; columns.len()].join(", ");
    Ok(format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        columns.join(", "),
        placeholders
    ))
}

/// Builds `SELECT <cols> FROM <table>[ WHERE <c1> <op> ? AND ...]`.
///
/// Emits one `<column> <operator> ?` fragment per condition, joined with
/// AND in input order. The WHERE keyword appears only when at least one
/// condition exists, so an unfiltered select carries no trailing clause.
pub fn select_sql(table: &str, projection: &Projection, conditions: &[Condition]) -> Result<String> {
    validate_identifier(table)?;

    let column_list = match projection {
        Projection::All => "*".to_string(),
        Projection::Columns(columns) => {
            if columns.is_empty() {
                return Err(CrudqlError::Input(
                    "projection requires at least one column".to_string(),
                ));
            }
            for column in columns {
                validate_identifier(column)?;
            }
            columns.join(", ")
        }
    };

    let mut sql = format!("SELECT {} FROM {}", column_list, table);
    if !conditions.is_empty() {
        let mut fragments = Vec::with_capacity(conditions.len());
        for condition in conditions {
            validate_identifier(&condition.column)?;
            fragments.push(format!("{} {} ?", condition.column, condition.op.as_sql()));
        }
        sql.push_str(" WHERE ");
        sql.push_str(&fragments.join(" AND "));
    }
    Ok(sql)
}

/// Builds `UPDATE <table> SET c1 = :c1, ... WHERE id = :id` with one named
/// placeholder per column plus the id bind.
pub fn update_sql(table: &str, columns: &[&str]) -> Result<String> {
    validate_identifier(table)?;
    if columns.is_empty() {
        return Err(CrudqlError::Input(
            "update requires at least one column".to_string(),
        ));
    }

    let mut assignments = Vec::with_capacity(columns.len());
    for column in columns {
        validate_identifier(column)?;
        assignments.push(format!("{} = :{}", column, column));
    }
    Ok(format!(
        "UPDATE {} SET {} WHERE id = :id",
        table,
        assignments.join(", ")
    ))
}

/// Builds `DELETE FROM <table> WHERE id = :id`.
pub fn delete_sql(table: &str) -> Result<String> {
    validate_identifier(table)?;
    Ok(format!("DELETE FROM {} WHERE id = :id", table))
}
