pub mod engine;
pub mod optimal;
pub mod proximity;
pub mod types;

pub use self::types::{AccuracyResult, ScoreBreakdown, ScoringRequest};

use crate::config::{Config, EngineParams};
use crate::error::CsResult;
use crate::geometry::{Column, FloorPlan, Point};
use crate::history::{provider_for, ColumnSet, HistoryProvider};
use std::sync::Arc;
use tracing::debug;

/// Engine settings plus the history source it consults on `evaluate`.
#[derive(Clone)]
pub struct Scorer {
    pub params: EngineParams,
    history: Arc<dyn HistoryProvider>,
}

impl Scorer {
    pub fn new<H: HistoryProvider + 'static>(config: Config, history: H) -> CsResult<Self> {
        config.validate()?;
        Ok(Self {
            params: config.engine,
            history: Arc::new(history),
        })
    }

    /// Builds the history provider named by `config.history`.
    pub fn from_config(config: Config) -> CsResult<Self> {
        config.validate()?;
        let history = provider_for(&config.history);
        Ok(Self {
            params: config.engine,
            history,
        })
    }

    pub fn history(&self) -> &dyn HistoryProvider {
        self.history.as_ref()
    }

    pub fn optimal_positions(&self, plan: &FloorPlan) -> Vec<Point> {
        optimal::compute_optimal_positions(&plan.points, self.params.grid_size)
    }

    /// Pure scoring against history the caller already fetched.
    pub fn score(&self, request: &ScoringRequest, history: &[ColumnSet]) -> AccuracyResult {
        engine::score_with_precision(request, history, self.params.details_precision)
    }

    /// Looks up the plan's history, then scores.
    pub fn evaluate(&self, columns: &[Column], plan: &FloorPlan) -> AccuracyResult {
        let history = self.history.load(&plan.name);
        debug!(
            "Fetched {} historical sessions for '{}'",
            history.len(),
            plan.name
        );
        self.score(&ScoringRequest::for_params(plan, columns, &self.params), &history)
    }

    /// Like `evaluate`, also returning the intermediate numbers.
    pub fn evaluate_detailed(
        &self,
        columns: &[Column],
        plan: &FloorPlan,
    ) -> (AccuracyResult, Option<ScoreBreakdown>) {
        let history = self.history.load(&plan.name);
        engine::score_report(
            &ScoringRequest::for_params(plan, columns, &self.params),
            &history,
            self.params.details_precision,
        )
    }
}
