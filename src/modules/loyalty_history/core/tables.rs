use std::fmt;
use std::str::FromStr;

use crate::modules::loyalty_history::core::mutation::ValidationError;

/// The only tables a caller may name in a mutation path.
///
/// Table names are interpolated into statement text, so every name that
/// reaches the store must come from [`HistoryTable::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoryTable {
    Points,
    Transactions,
}

impl HistoryTable {
    pub const ALL: [HistoryTable; 2] = [HistoryTable::Points, HistoryTable::Transactions];

    pub fn as_str(self) -> &'static str {
        match self {
            HistoryTable::Points => "histPoints",
            HistoryTable::Transactions => "histtransactions",
        }
    }
}

impl FromStr for HistoryTable {
    type Err = ValidationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        HistoryTable::ALL
            .into_iter()
            .find(|table| table.as_str() == name)
            .ok_or_else(|| ValidationError::UnknownTable(name.to_string()))
    }
}

impl fmt::Display for HistoryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
