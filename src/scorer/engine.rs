use super::optimal::compute_optimal_positions;
use super::proximity::{falloff, mean_falloff, nearest_distance, to_percentage};
use super::types::{AccuracyResult, ScoreBreakdown, ScoringRequest};
use crate::geometry::{Column, Point};
use tracing::{debug, warn};

pub const DEFAULT_DETAILS_PRECISION: usize = 2;

/// Runs the full pipeline for one request against already-fetched history.
pub fn score(request: &ScoringRequest, history: &[Vec<Column>]) -> AccuracyResult {
    score_with_precision(request, history, DEFAULT_DETAILS_PRECISION)
}

pub fn score_with_precision(
    request: &ScoringRequest,
    history: &[Vec<Column>],
    precision: usize,
) -> AccuracyResult {
    score_report(request, history, precision).0
}

/// The result together with the breakdown it was assembled from.
pub fn score_report(
    request: &ScoringRequest,
    history: &[Vec<Column>],
    precision: usize,
) -> (AccuracyResult, Option<ScoreBreakdown>) {
    let breakdown = score_breakdown(request, history);
    let result = match &breakdown {
        Some(b) => assemble(&request.columns, b, precision),
        None => AccuracyResult::no_reference_data(),
    };
    (result, breakdown)
}

/// `None` when there is nothing to compare against: no interior grid
/// positions, or no user columns.
pub fn score_breakdown(
    request: &ScoringRequest,
    history: &[Vec<Column>],
) -> Option<ScoreBreakdown> {
    let optimal_positions = compute_optimal_positions(&request.polygon, request.grid_size);

    if optimal_positions.is_empty() || request.columns.is_empty() {
        warn!(
            "No reference data for plan '{}' ({} optimal positions, {} columns)",
            request.plan_name,
            optimal_positions.len(),
            request.columns.len()
        );
        return None;
    }

    let nearest_optimal: Vec<f64> = request
        .columns
        .iter()
        .map(|c| nearest_distance(&c.position, &optimal_positions))
        .collect();

    let optimality = nearest_optimal.iter().map(|&d| falloff(d)).sum::<f64>()
        / request.columns.len() as f64;
    let similarity = peer_similarity(&request.columns, history);

    debug!(
        "Plan '{}': optimality {:.4}, similarity {:.4} over {} sessions",
        request.plan_name,
        optimality,
        similarity,
        history.len()
    );

    Some(ScoreBreakdown {
        optimal_positions,
        nearest_optimal,
        optimality,
        similarity,
        sessions: history.len(),
        optimality_pct: to_percentage(optimality),
        similarity_pct: to_percentage(similarity),
    })
}

/// Mean falloff of each placement to the optimal positions.
pub fn optimality(columns: &[Column], optimal_positions: &[Point]) -> f64 {
    mean_falloff(columns, optimal_positions)
}

/// Similarity of `columns` to one prior session. A session with no columns
/// scores 0.
pub fn session_similarity(columns: &[Column], session: &[Column]) -> f64 {
    if session.is_empty() {
        return 0.0;
    }
    let targets: Vec<Point> = session.iter().map(|c| c.position).collect();
    mean_falloff(columns, &targets)
}

/// Average of `session_similarity` over all sessions; 0 without history.
pub fn peer_similarity(columns: &[Column], history: &[Vec<Column>]) -> f64 {
    if history.is_empty() {
        return 0.0;
    }
    let total: f64 = history
        .iter()
        .map(|session| session_similarity(columns, session))
        .sum();
    total / history.len() as f64
}

pub fn feedback_for(similarity_pct: u32) -> String {
    format!(
        "You are close to {}% of the previous users column placements.",
        similarity_pct
    )
}

pub fn format_details(columns: &[Column], nearest_optimal: &[f64], precision: usize) -> String {
    columns
        .iter()
        .zip(nearest_optimal)
        .map(|(c, d)| {
            format!(
                "Column at ({:.p$}, {:.p$}) - Distance from optimal: {:.p$}",
                c.position.x,
                c.position.y,
                d,
                p = precision
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// The numeric score reports optimality; the sentence reports peer similarity.
fn assemble(columns: &[Column], b: &ScoreBreakdown, precision: usize) -> AccuracyResult {
    AccuracyResult {
        score: b.optimality_pct,
        feedback: feedback_for(b.similarity_pct),
        details: format_details(columns, &b.nearest_optimal, precision),
    }
}
