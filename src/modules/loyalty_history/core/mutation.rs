// Validation of update and delete requests against the two history tables.
//
// Only the allow-listed table name and fixed column names ever end up in
// statement text. Every value travels as a bound parameter, in the order
// of `assignments` followed by the record id.

use crate::modules::loyalty_history::core::tables::HistoryTable;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("no updatable fields provided, expected points and/or description")]
    NoUpdatableFieldsProvided,

    #[error("unknown table '{0}', expected histPoints or histtransactions")]
    UnknownTable(String),

    #[error("provide from and to as YYYY-MM-DD")]
    MissingDateRange,

    #[error("invalid date for {field}: '{value}', expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("invalid query string: {0}")]
    InvalidQuery(String),
}

/// Fields a caller sent for a partial update. `None` means absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatePayload {
    pub points: Option<i64>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    Points(i64),
    Description(String),
}

impl Assignment {
    pub fn column(&self) -> &'static str {
        match self {
            Assignment::Points(_) => "points",
            Assignment::Description(_) => "description",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatement {
    pub table: HistoryTable,
    pub record_id: String,
    pub assignments: Vec<Assignment>,
}

impl UpdateStatement {
    pub fn sql(&self) -> String {
        let set_clause = self
            .assignments
            .iter()
            .map(|assignment| format!("{} = ?", assignment.column()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("UPDATE {} SET {set_clause} WHERE id = ?", self.table.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteStatement {
    pub table: HistoryTable,
    pub record_id: String,
}

impl DeleteStatement {
    pub fn sql(&self) -> String {
        format!("DELETE FROM {} WHERE id = ?", self.table.as_str())
    }
}

pub fn build_update(
    table: &str,
    record_id: &str,
    payload: UpdatePayload,
) -> Result<UpdateStatement, ValidationError> {
    let table: HistoryTable = table.parse()?;

    let assignments = match table {
        HistoryTable::Points => {
            let points = payload
                .points
                .ok_or(ValidationError::MissingRequiredField { field: "points" })?;
            vec![Assignment::Points(points)]
        }
        HistoryTable::Transactions => {
            let description = payload.description.filter(|d| !d.is_empty());
            let assignments: Vec<Assignment> = payload
                .points
                .map(Assignment::Points)
                .into_iter()
                .chain(description.map(Assignment::Description))
                .collect();
            if assignments.is_empty() {
                return Err(ValidationError::NoUpdatableFieldsProvided);
            }
            assignments
        }
    };

    Ok(UpdateStatement {
        table,
        record_id: record_id.to_string(),
        assignments,
    })
}

/// The integer a `histtransactions` row is addressed by. Leading zeros and a
/// sign are accepted, so `"07"` names row 7.
pub fn transaction_id(record_id: &str) -> Option<i64> {
    record_id.parse().ok()
}

pub fn build_delete(table: &str, record_id: &str) -> Result<DeleteStatement, ValidationError> {
    Ok(DeleteStatement {
        table: table.parse()?,
        record_id: record_id.to_string(),
    })
}
