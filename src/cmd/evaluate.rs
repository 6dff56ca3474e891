use crate::reports;
use clap::Args;
use colscore::api::evaluate_report;
use colscore::config::Config;
use colscore::error::CsResult;
use colscore::scorer::Scorer;
use colscore::session::ExportData;

#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub config: Config,

    /// Exported session document holding the plan and the placed columns.
    #[arg(short, long)]
    pub session: String,

    /// Print the full report as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &EvaluateArgs, scorer: &Scorer) -> CsResult<()> {
    let doc = ExportData::load_from_file(&args.session)?;
    doc.validate()?;

    let report = evaluate_report(
        &doc.user_data.columns,
        &doc.floor_plan,
        scorer.history(),
        &scorer.params,
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        reports::print_evaluation_report(&report);
    }
    Ok(())
}
