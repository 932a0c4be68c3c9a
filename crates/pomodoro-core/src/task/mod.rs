//! Task list shown next to the timer.
//!
//! Tasks live only in memory. The [`TaskLedger`] keeps them in insertion
//! order and tracks which one the operator is currently working on.

mod ledger;

pub use ledger::{Removal, TaskLedger};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Ledger-local task identifier. Strictly increasing in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        s.trim_start_matches('#')
            .parse::<u64>()
            .map(TaskId)
            .map_err(|_| ValidationError::InvalidValue {
                field: "task id".into(),
                message: format!("'{s}' is not a task number"),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub pomodoro_count: u32,
    pub created_at: DateTime<Utc>,
}

impl Task {
    fn new(id: TaskId, name: String) -> Self {
        Self {
            id,
            name,
            completed: false,
            pomodoro_count: 0,
            created_at: Utc::now(),
        }
    }
}
