use colscore::config::Config;
use colscore::geometry::{Column, FloorPlan, Point};
use colscore::history::{InMemoryHistory, NoHistory, SampleHistory};
use colscore::scorer::engine::{
    feedback_for, format_details, optimality, peer_similarity, score, score_breakdown,
    session_similarity,
};
use colscore::scorer::types::{NO_REFERENCE_DETAILS, NO_REFERENCE_FEEDBACK};
use colscore::scorer::{AccuracyResult, Scorer, ScoringRequest};

mod common;
use common::{col, cols, square_plan, square_points};

fn square_request(columns: Vec<Column>, grid_size: f64) -> ScoringRequest {
    ScoringRequest::new(&square_plan(), columns).with_grid_size(grid_size)
}

// --- FALLBACK PATH ---

#[test]
fn test_degenerate_plan_returns_no_reference_result() {
    let plan = FloorPlan::new(
        "sliver",
        vec![Point::planar(0.0, 0.0), Point::planar(10.0, 0.0)],
    );
    let request = ScoringRequest::new(&plan, cols(&[(1.0, 1.0), (2.0, 2.0)]));
    let result = score(&request, &SampleHistory::sessions());

    assert_eq!(result.score, 0);
    assert_eq!(result.feedback, NO_REFERENCE_FEEDBACK);
    assert_eq!(result.details, NO_REFERENCE_DETAILS);
    assert!(result.is_no_reference_data());
}

#[test]
fn test_no_columns_returns_no_reference_result() {
    let request = square_request(vec![], 5.0);
    assert_eq!(score(&request, &[]), AccuracyResult::no_reference_data());
    assert!(score_breakdown(&request, &[]).is_none());
}

#[test]
fn test_plan_too_small_for_grid_returns_no_reference_result() {
    let request = square_request(cols(&[(5.0, 5.0)]), 20.0);
    assert!(score(&request, &[]).is_no_reference_data());
}

// --- OPTIMALITY ---

#[test]
fn test_column_on_optimal_point_scores_100() {
    let request = square_request(cols(&[(7.5, 2.5)]), 5.0);
    let result = score(&request, &[]);
    assert_eq!(result.score, 100);
    assert_eq!(
        result.details,
        "Column at (7.50, 2.50) - Distance from optimal: 0.00"
    );
}

#[test]
fn test_column_at_tolerance_radius_scores_zero() {
    // Nearest optimal point is (2.5, 2.5), exactly 5 below
    let request = square_request(cols(&[(2.5, -2.5)]), 5.0);
    let b = score_breakdown(&request, &[]).expect("reference data present");
    assert_eq!(b.nearest_optimal, vec![5.0]);
    assert_eq!(b.optimality, 0.0);

    let result = score(&request, &[]);
    assert_eq!(result.score, 0);
    assert!(!result.is_no_reference_data());
    assert_eq!(
        result.details,
        "Column at (2.50, -2.50) - Distance from optimal: 5.00"
    );
}

#[test]
fn test_far_column_is_clamped_not_negative() {
    let request = square_request(cols(&[(2.5, 2.5), (2.5, -40.0)]), 5.0);
    let b = score_breakdown(&request, &[]).unwrap();
    assert_eq!(b.optimality, 0.5);
    assert_eq!(score(&request, &[]).score, 50);
}

#[test]
fn test_mixed_placement_scores_and_details() {
    let request = square_request(cols(&[(2.5, 2.5), (5.0, 5.0)]), 5.0);
    let result = score(&request, &[]);

    // (1 + (1 - sqrt(12.5) / 5)) / 2 = 0.6464...
    assert_eq!(result.score, 65);
    assert_eq!(
        result.details,
        "Column at (2.50, 2.50) - Distance from optimal: 0.00\n\
         Column at (5.00, 5.00) - Distance from optimal: 3.54"
    );
}

#[test]
fn test_details_follow_input_order() {
    let columns = cols(&[(9.0, 9.0), (1.0, 1.0), (5.0, 5.0)]);
    let request = square_request(columns, 5.0);
    let lines: Vec<String> = score(&request, &[])
        .details
        .lines()
        .map(String::from)
        .collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Column at (9.00, 9.00)"));
    assert!(lines[1].starts_with("Column at (1.00, 1.00)"));
    assert!(lines[2].starts_with("Column at (5.00, 5.00)"));
}

#[test]
fn test_non_finite_column_scores_zero_without_panicking() {
    let request = square_request(vec![col(f64::NAN, 1.0)], 5.0);
    let result = score(&request, &[]);

    assert_eq!(result.score, 0);
    assert_eq!(
        result.details,
        "Column at (NaN, 1.00) - Distance from optimal: inf"
    );
}

#[test]
fn test_details_precision_is_configurable() {
    let columns = cols(&[(5.0, 5.0)]);
    let text = format_details(&columns, &[12.5f64.sqrt()], 3);
    assert_eq!(text, "Column at (5.000, 5.000) - Distance from optimal: 3.536");
}

#[test]
fn test_optimality_helper_matches_breakdown() {
    let columns = cols(&[(2.5, 2.5), (5.0, 5.0)]);
    let request = square_request(columns.clone(), 5.0);
    let b = score_breakdown(&request, &[]).unwrap();
    assert_eq!(optimality(&columns, &b.optimal_positions), b.optimality);
}

// --- PEER SIMILARITY ---

#[test]
fn test_empty_history_gives_zero_similarity() {
    let request = square_request(cols(&[(2.0, 3.0), (5.0, 7.0)]), 5.0);
    let result = score(&request, &[]);
    assert_eq!(
        result.feedback,
        "You are close to 0% of the previous users column placements."
    );
    assert_eq!(peer_similarity(&request.columns, &[]), 0.0);
}

#[test]
fn test_identical_history_gives_full_similarity() {
    let columns = cols(&[(1.0, 1.0), (6.0, 6.0)]);
    let history = vec![columns.clone(), columns.clone()];
    let request = square_request(columns, 5.0);
    let b = score_breakdown(&request, &history).unwrap();
    assert_eq!(b.similarity, 1.0);
    assert_eq!(b.sessions, 2);
    assert_eq!(score(&request, &history).feedback, feedback_for(100));
}

#[test]
fn test_empty_session_counts_toward_average() {
    let columns = cols(&[(1.0, 1.0)]);
    let history = vec![columns.clone(), vec![]];
    assert_eq!(session_similarity(&columns, &[]), 0.0);
    assert_eq!(peer_similarity(&columns, &history), 0.5);
}

#[test]
fn test_sample_history_regression() {
    let request = square_request(cols(&[(2.5, 2.5), (5.0, 5.0)]), 5.0);
    let result = score(&request, &SampleHistory::sessions());

    // Session 1: (0.8586 + 0.6) / 2, session 2: (0.7559 + 0.6378) / 2
    assert_eq!(result.score, 65);
    assert_eq!(
        result.feedback,
        "You are close to 71% of the previous users column placements."
    );
}

#[test]
fn test_score_and_feedback_are_independent() {
    // Perfect optimality, no peers nearby
    let request = square_request(cols(&[(2.5, 7.5)]), 5.0);
    let far_session = vec![col(90.0, 90.0)];
    let result = score(&request, &[far_session]);
    assert_eq!(result.score, 100);
    assert_eq!(result.feedback, feedback_for(0));
}

// --- SCORER FACADE ---

#[test]
fn test_scorer_evaluate_uses_injected_history() {
    let plan = square_plan();
    let columns = cols(&[(1.5, 1.5)]);
    let history = InMemoryHistory::new().with_session(&plan.name, columns.clone());

    let scorer = Scorer::new(Config::default(), history).unwrap();
    let result = scorer.evaluate(&columns, &plan);

    // Default step 3 puts a center at (1.5, 1.5)
    assert_eq!(result.score, 100);
    assert_eq!(result.feedback, feedback_for(100));
}

#[test]
fn test_scorer_rejects_bad_grid_size() {
    let mut config = Config::default();
    config.engine.grid_size = 0.0;
    assert!(Scorer::new(config, NoHistory).is_err());
}

#[test]
fn test_scorer_evaluate_detailed_matches_evaluate() {
    let plan = FloorPlan::new("square.csv", square_points());
    let columns = cols(&[(2.0, 2.0), (8.0, 3.0)]);
    let scorer = Scorer::new(Config::default(), SampleHistory).unwrap();

    let (detailed, breakdown) = scorer.evaluate_detailed(&columns, &plan);
    assert_eq!(detailed, scorer.evaluate(&columns, &plan));

    let b = breakdown.unwrap();
    assert_eq!(b.optimality_pct, detailed.score);
    assert_eq!(b.nearest_optimal.len(), columns.len());
}

#[test]
fn test_request_for_params_uses_configured_grid() {
    let mut config = Config::default();
    config.engine.grid_size = 5.0;
    let columns = cols(&[(2.5, 2.5), (5.0, 5.0)]);

    let request = ScoringRequest::for_params(&square_plan(), &columns, &config.engine);
    assert_eq!(request.grid_size, 5.0);
    assert_eq!(request.plan_name, "square.csv");
    assert_eq!(request.columns, columns);

    let scorer = Scorer::new(config, NoHistory).unwrap();
    assert_eq!(scorer.evaluate(&columns, &square_plan()), scorer.score(&request, &[]));
    assert_eq!(scorer.evaluate(&columns, &square_plan()).score, 65);
}
