//! Property-based tests for SQL statement assembly
//!
//! These tests verify the statement builders through property-based
//! testing, ensuring that:
//! - Placeholder counts always match the values to be bound
//! - WHERE fragments appear once per condition, in input order
//! - Identifier validation accepts and rejects the right shapes
//! - Executed statements behave the way the generated text promises

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rusqlite::Connection;

    use crudql::db::query::{Condition, Operator, Projection};
    use crudql::db::statement::{
        delete_sql, insert_sql, select_sql, update_sql, validate_identifier,
    };
    use crudql::db::value::Value;
    use crudql::db::DataAccess;

    // Test infrastructure

    fn arb_identifier() -> impl Strategy<Value = String> {
        "[a-zA-Z_][a-zA-Z0-9_]{0,29}".prop_map(|s: String| s)
    }

    fn arb_invalid_identifier() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            "[0-9][a-zA-Z0-9_]{0,10}".prop_map(|s: String| s),
            "[a-zA-Z_]{0,5}[ ;'\"-][a-zA-Z0-9_]{0,10}".prop_map(|s: String| s),
        ]
    }

    fn arb_operator() -> impl Strategy<Value = Operator> {
        prop_oneof![
            Just(Operator::Eq),
            Just(Operator::Ne),
            Just(Operator::Lt),
            Just(Operator::Le),
            Just(Operator::Gt),
            Just(Operator::Ge),
            Just(Operator::Like),
        ]
    }

    fn arb_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<i64>().prop_map(Value::Integer),
            (-1.0e9..1.0e9f64).prop_map(Value::Real),
            "[a-zA-Z0-9 ]{0,20}".prop_map(Value::Text),
            prop::collection::vec(any::<u8>(), 0..16).prop_map(Value::Blob),
        ]
    }

    fn arb_condition() -> impl Strategy<Value = Condition> {
        (arb_identifier(), arb_operator(), arb_value()).prop_map(|(column, op, value)| {
            Condition { column, op, value }
        })
    }

    // Property tests

    proptest! {
        /// Insert statements carry one positional placeholder per column
        #[test]
        fn prop_insert_placeholders_match_columns(
            table in arb_identifier(),
            columns in prop::collection::vec(arb_identifier(), 1..8),
        ) {
            let refs: Vec<&str> = columns.iter().map(String::as_str).collect();
            let sql = insert_sql(&table, &refs).unwrap();

            prop_assert_eq!(sql.matches('?').count(), columns.len(),
                        "Placeholder count should equal column count");
            prop_assert!(sql.starts_with(&format!("INSERT INTO {} (", table)),
                        "Statement should start with the insert preamble");
            prop_assert!(sql.ends_with(')'),
                        "Statement should close the VALUES list");
        }

        /// The WHERE clause contains one AND-joined fragment per condition,
        /// in input order, and nothing at all for an empty condition list
        #[test]
        fn prop_select_fragments_in_input_order(
            table in arb_identifier(),
            conditions in prop::collection::vec(arb_condition(), 0..8),
        ) {
            let sql = select_sql(&table, &Projection::All, &conditions).unwrap();

            prop_assert_eq!(sql.matches('?').count(), conditions.len(),
                        "Placeholder count should equal condition count");

            if conditions.is_empty() {
                prop_assert_eq!(sql, format!("SELECT * FROM {}", table));
            } else {
                let mut parts = sql.splitn(2, " WHERE ");
                let _head = parts.next().unwrap();
                let clause = parts.next();
                prop_assert!(clause.is_some(),
                            "Filtered select should contain a WHERE clause");

                let fragments: Vec<&str> = clause.unwrap().split(" AND ").collect();
                prop_assert_eq!(fragments.len(), conditions.len(),
                            "One fragment per condition expected");
                for (fragment, condition) in fragments.iter().zip(&conditions) {
                    prop_assert_eq!(*fragment,
                                format!("{} {} ?", condition.column, condition.op.as_sql()),
                                "Fragments should appear in input order");
                }
            }
        }

        /// Update statements name one parameter per column plus :id
        #[test]
        fn prop_update_binds_n_plus_one(
            table in arb_identifier(),
            columns in prop::collection::vec(arb_identifier(), 1..8),
        ) {
            let refs: Vec<&str> = columns.iter().map(String::as_str).collect();
            let sql = update_sql(&table, &refs).unwrap();

            prop_assert_eq!(sql.matches(':').count(), columns.len() + 1,
                        "Expected one named parameter per column plus :id");
            prop_assert!(sql.ends_with("WHERE id = :id"),
                        "Update should be addressed by id");
            for column in &columns {
                prop_assert!(sql.contains(&format!("{} = :{}", column, column)),
                            "Each column should be assigned its own named parameter");
            }
        }

        /// Delete statements have a fixed, id-addressed shape
        #[test]
        fn prop_delete_sql_shape(table in arb_identifier()) {
            let sql = delete_sql(&table).unwrap();
            prop_assert_eq!(sql, format!("DELETE FROM {} WHERE id = :id", table));
        }

        /// Every generated identifier passes validation
        #[test]
        fn prop_valid_identifiers_accepted(name in arb_identifier()) {
            prop_assert!(validate_identifier(&name).is_ok());
        }

        /// Names outside the allow-list are always rejected
        #[test]
        fn prop_invalid_identifiers_rejected(name in arb_invalid_identifier()) {
            prop_assert!(validate_identifier(&name).is_err(),
                        "Identifier '{}' should have been rejected", name);
        }

        /// Inserted rows are all visible to an unfiltered read, and a
        /// filtered read returns exactly the matching subset
        #[test]
        fn prop_roundtrip_counts(
            ages in prop::collection::vec(0i64..100, 0..20),
            threshold in 0i64..100,
        ) {
            let conn = Connection::open_in_memory().unwrap();
            conn.execute_batch("CREATE TABLE items (id INTEGER PRIMARY KEY, age INTEGER);")
                .unwrap();
            let data = DataAccess::new(&conn);

            for age in &ages {
                data.create("items", &[("age", Value::Integer(*age))]).unwrap();
            }

            let all = data.read("items", &[], Projection::All).unwrap();
            prop_assert_eq!(all.len(), ages.len(),
                        "Unfiltered read should return every inserted row");

            let above = data
                .read(
                    "items",
                    &[Condition::new("age", Operator::Gt, threshold)],
                    Projection::All,
                )
                .unwrap();
            let expected = ages.iter().filter(|age| **age > threshold).count();
            prop_assert_eq!(above.len(), expected,
                        "Filtered read should return exactly the matching rows");
        }
    }
}
