use super::optimal::DEFAULT_GRID_SIZE;
use crate::config::EngineParams;
use crate::geometry::{Column, FloorPlan, Point};
use serde::{Deserialize, Serialize};

pub const NO_REFERENCE_FEEDBACK: &str =
    "Unable to calculate accuracy - no reference data available.";
pub const NO_REFERENCE_DETAILS: &str = "Try a different floor plan or add more columns.";

/// Inputs to one scoring run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringRequest {
    pub polygon: Vec<Point>,
    pub columns: Vec<Column>,
    pub grid_size: f64,
    pub plan_name: String,
}

impl ScoringRequest {
    pub fn new(plan: &FloorPlan, columns: Vec<Column>) -> Self {
        Self {
            polygon: plan.points.clone(),
            columns,
            grid_size: DEFAULT_GRID_SIZE,
            plan_name: plan.name.clone(),
        }
    }

    pub fn with_grid_size(mut self, grid_size: f64) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Request for `columns` on `plan` using the engine's configured grid step.
    pub fn for_params(plan: &FloorPlan, columns: &[Column], params: &EngineParams) -> Self {
        Self::new(plan, columns.to_vec()).with_grid_size(params.grid_size)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccuracyResult {
    pub score: u32,
    pub feedback: String,
    pub details: String,
}

impl AccuracyResult {
    pub fn no_reference_data() -> Self {
        Self {
            score: 0,
            feedback: NO_REFERENCE_FEEDBACK.to_string(),
            details: NO_REFERENCE_DETAILS.to_string(),
        }
    }

    pub fn is_no_reference_data(&self) -> bool {
        self.score == 0 && self.feedback == NO_REFERENCE_FEEDBACK
    }
}

/// Intermediate numbers behind an `AccuracyResult`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub optimal_positions: Vec<Point>,
    // Parallel to the request's columns
    pub nearest_optimal: Vec<f64>,
    pub optimality: f64,
    pub similarity: f64,
    pub sessions: usize,
    pub optimality_pct: u32,
    pub similarity_pct: u32,
}
