//! Prior users' placements for a floor plan.
//!
//! Providers are infallible: missing or unreadable data is reported as an
//! empty history, which the scorer treats the same as no peer comparison.

pub mod archive;

pub use self::archive::ArchiveHistory;

use crate::config::{HistoryParams, HistorySource};
use crate::geometry::{Column, Point};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// One prior session's column placements.
pub type ColumnSet = Vec<Column>;

pub trait HistoryProvider: Send + Sync {
    fn load(&self, plan_name: &str) -> Vec<ColumnSet>;
}

impl<T: HistoryProvider + ?Sized> HistoryProvider for Arc<T> {
    fn load(&self, plan_name: &str) -> Vec<ColumnSet> {
        (**self).load(plan_name)
    }
}

impl<T: HistoryProvider + ?Sized> HistoryProvider for Box<T> {
    fn load(&self, plan_name: &str) -> Vec<ColumnSet> {
        (**self).load(plan_name)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoHistory;

impl HistoryProvider for NoHistory {
    fn load(&self, _plan_name: &str) -> Vec<ColumnSet> {
        Vec::new()
    }
}

/// Fixed two-session fixture returned for every plan.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleHistory;

impl SampleHistory {
    pub fn sessions() -> Vec<ColumnSet> {
        let col = |id: &str, x: f64, y: f64| Column::new(id, Point::planar(x, y), 0.5);
        vec![
            vec![
                col("prev1", 2.0, 3.0),
                col("prev2", 5.0, 7.0),
                col("prev3", 8.0, 2.0),
            ],
            vec![
                col("prev4", 1.5, 3.2),
                col("prev5", 5.2, 6.8),
                col("prev6", 7.8, 2.1),
            ],
        ]
    }
}

impl HistoryProvider for SampleHistory {
    fn load(&self, _plan_name: &str) -> Vec<ColumnSet> {
        Self::sessions()
    }
}

/// Sessions keyed by plan name, for tests and embedding callers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistory {
    sessions: HashMap<String, Vec<ColumnSet>>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style `record`.
    pub fn with_session(mut self, plan_name: &str, columns: ColumnSet) -> Self {
        self.record(plan_name, columns);
        self
    }

    pub fn record(&mut self, plan_name: &str, columns: ColumnSet) {
        self.sessions
            .entry(plan_name.to_string())
            .or_default()
            .push(columns);
    }

    pub fn session_count(&self, plan_name: &str) -> usize {
        self.sessions.get(plan_name).map_or(0, Vec::len)
    }
}

impl HistoryProvider for InMemoryHistory {
    fn load(&self, plan_name: &str) -> Vec<ColumnSet> {
        self.sessions.get(plan_name).cloned().unwrap_or_default()
    }
}

/// Picks the provider named by the configuration. An archive source without a
/// directory falls back to no history.
pub fn provider_for(params: &HistoryParams) -> Arc<dyn HistoryProvider> {
    match params.history {
        HistorySource::None => Arc::new(NoHistory),
        HistorySource::Sample => Arc::new(SampleHistory),
        HistorySource::Archive => match &params.archive_dir {
            Some(dir) => Arc::new(ArchiveHistory::new(dir)),
            None => {
                warn!("Archive history selected without a directory; peer comparison disabled");
                Arc::new(NoHistory)
            }
        },
    }
}
