use std::cmp::Reverse;

use chrono::NaiveDateTime;

use crate::modules::loyalty_history::core::records::{PointEvent, TransactionEvent};
use crate::modules::loyalty_history::core::timestamp::parse_timestamp;

/// One line of a user's combined history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEntry {
    Point {
        id: String,
        user_id: String,
        points: i64,
        date: String,
    },
    Transaction {
        user_id: String,
        description: String,
        points: i64,
        date: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Point,
    Transaction,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Point => "point",
            EntryKind::Transaction => "transaction",
        }
    }
}

impl HistoryEntry {
    pub fn kind(&self) -> EntryKind {
        match self {
            HistoryEntry::Point { .. } => EntryKind::Point,
            HistoryEntry::Transaction { .. } => EntryKind::Transaction,
        }
    }

    pub fn user_id(&self) -> &str {
        match self {
            HistoryEntry::Point { user_id, .. } | HistoryEntry::Transaction { user_id, .. } => {
                user_id
            }
        }
    }

    pub fn points(&self) -> i64 {
        match self {
            HistoryEntry::Point { points, .. } | HistoryEntry::Transaction { points, .. } => {
                *points
            }
        }
    }

    pub fn date(&self) -> &str {
        match self {
            HistoryEntry::Point { date, .. } | HistoryEntry::Transaction { date, .. } => date,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            HistoryEntry::Point { id, .. } => Some(id),
            HistoryEntry::Transaction { .. } => None,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            HistoryEntry::Point { .. } => None,
            HistoryEntry::Transaction { description, .. } => Some(description),
        }
    }

    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(self.date())
    }
}

impl From<PointEvent> for HistoryEntry {
    fn from(point: PointEvent) -> Self {
        HistoryEntry::Point {
            id: point.id,
            user_id: point.user_id,
            points: point.points,
            date: point.date,
        }
    }
}

impl From<TransactionEvent> for HistoryEntry {
    fn from(transaction: TransactionEvent) -> Self {
        HistoryEntry::Transaction {
            user_id: transaction.user_id,
            description: transaction.description,
            points: transaction.points,
            date: transaction.date,
        }
    }
}

/// Combine both record sets into one feed, most recent first.
///
/// The sort is stable: equal timestamps keep points ahead of transactions and
/// each side in store order. Entries whose date cannot be read go last.
pub fn merge_and_sort(
    points: Vec<PointEvent>,
    transactions: Vec<TransactionEvent>,
) -> Vec<HistoryEntry> {
    let mut keyed: Vec<(Option<NaiveDateTime>, HistoryEntry)> = points
        .into_iter()
        .map(HistoryEntry::from)
        .chain(transactions.into_iter().map(HistoryEntry::from))
        .map(|entry| (entry.timestamp(), entry))
        .collect();

    // Reverse(None) is the greatest key, so unreadable dates end up last.
    keyed.sort_by_key(|(timestamp, _)| Reverse(*timestamp));
    keyed.into_iter().map(|(_, entry)| entry).collect()
}
