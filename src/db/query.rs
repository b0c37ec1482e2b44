//! Query-shaping input types consumed by the statement builders.
use crate::db::value::Value;

/// Comparison operator applied between a column and a bound value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Like,
}

impl Operator {
    /// SQL spelling of the operator.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "<>",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Like => "LIKE",
        }
    }
}

impl Default for Operator {
    fn default() -> Self {
        Operator::Eq
    }
}

/// A single `column <op> value` filter. Multiple conditions are joined
/// with AND, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub column: String,
    pub op: Operator,
    pub value: Value,
}

impl Condition {
    pub fn new(column: impl Into<String>, op: Operator, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            op,
            value: value.into(),
        }
    }

    /// Equality filter, the default when no operator is given.
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column, Operator::Eq, value)
    }
}

/// Which columns a read returns: everything, or an explicit list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    All,
    Columns(Vec<String>),
}

impl Projection {
    pub fn columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Projection::Columns(columns.into_iter().map(Into::into).collect())
    }
}

impl Default for Projection {
    fn default() -> Self {
        Projection::All
    }
}
