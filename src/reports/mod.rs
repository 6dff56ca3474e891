use colscore::api::EvaluationReport;
use colscore::geometry::Point;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

fn score_color(pct: u32) -> Color {
    match pct {
        75..=100 => Color::Green,
        40..=74 => Color::Yellow,
        _ => Color::Red,
    }
}

pub fn print_evaluation_report(report: &EvaluationReport) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Plan").add_attribute(Attribute::Bold),
        Cell::new("Columns"),
        Cell::new("Optimal Pts"),
        Cell::new("Sessions"),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Peer %"),
    ]);

    for i in 1..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let (optimal, sessions, peer) = match &report.breakdown {
        Some(b) => (
            b.optimal_positions.len().to_string(),
            b.sessions.to_string(),
            format!("{}%", b.similarity_pct),
        ),
        None => ("0".to_string(), "-".to_string(), "-".to_string()),
    };

    table.add_row(vec![
        Cell::new(&report.plan_name).add_attribute(Attribute::Bold),
        Cell::new(report.column_count),
        Cell::new(optimal),
        Cell::new(sessions),
        Cell::new(format!("{}%", report.result.score)).fg(score_color(report.result.score)),
        Cell::new(peer),
    ]);

    println!("\n{}", table);
    println!("\nFeedback: {}", report.result.feedback);
    println!("{}", report.result.details);
}

pub fn print_optimal_positions(plan_name: &str, positions: &[Point]) {
    println!("\nOptimal positions for: {}", plan_name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("X"),
        Cell::new("Y"),
    ]);
    for i in 0..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (idx, p) in positions.iter().enumerate() {
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(format!("{:.2}", p.x)),
            Cell::new(format!("{:.2}", p.y)),
        ]);
    }
    println!("{}", table);
    println!("Total: {}", positions.len());
}
