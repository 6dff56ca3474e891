use crate::config::EngineParams;
use crate::geometry::{Column, FloorPlan};
use crate::history::HistoryProvider;
use crate::scorer::{engine, AccuracyResult, ScoreBreakdown, ScoringRequest};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub plan_name: String,
    pub column_count: usize,
    pub result: AccuracyResult,
    pub breakdown: Option<ScoreBreakdown>,
}

/// Scores `columns` on `plan`, comparing against whatever `history` holds for
/// the plan's name. Never fails: missing reference data yields the zero-score
/// result.
pub fn calculate_accuracy(
    columns: &[Column],
    plan: &FloorPlan,
    history: &dyn HistoryProvider,
    params: &EngineParams,
) -> AccuracyResult {
    let sessions = history.load(&plan.name);
    engine::score_with_precision(
        &ScoringRequest::for_params(plan, columns, params),
        &sessions,
        params.details_precision,
    )
}

/// `calculate_accuracy` plus the breakdown, packaged for export or display.
pub fn evaluate_report(
    columns: &[Column],
    plan: &FloorPlan,
    history: &dyn HistoryProvider,
    params: &EngineParams,
) -> EvaluationReport {
    let sessions = history.load(&plan.name);
    let (result, breakdown) = engine::score_report(
        &ScoringRequest::for_params(plan, columns, params),
        &sessions,
        params.details_precision,
    );

    info!(
        "API: plan '{}' scored {} with {} columns",
        plan.name,
        result.score,
        columns.len()
    );

    EvaluationReport {
        plan_name: plan.name.clone(),
        column_count: columns.len(),
        result,
        breakdown,
    }
}
