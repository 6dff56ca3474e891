use crate::reports;
use clap::Args;
use colscore::config::Config;
use colscore::error::CsResult;
use colscore::scorer::Scorer;
use colscore::session::ExportData;

#[derive(Args, Debug, Clone)]
pub struct OptimalArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short, long)]
    pub session: String,
}

pub fn run(args: &OptimalArgs, scorer: &Scorer) -> CsResult<()> {
    let doc = ExportData::load_from_file(&args.session)?;
    doc.validate()?;
    let positions = scorer.optimal_positions(&doc.floor_plan);
    reports::print_optimal_positions(&doc.floor_plan.name, &positions);
    Ok(())
}
