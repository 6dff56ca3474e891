use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use colscore::config::Config;
use colscore::scorer::Scorer;
use std::process;
use tracing::{info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON configuration file; explicit flags win over its values.
    #[arg(global = true, long = "config", value_name = "FILE")]
    config_file: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Evaluate(cmd::evaluate::EvaluateArgs),
    Optimal(cmd::optimal::OptimalArgs),
}

fn main() {
    // Raw matches tell user-typed flags apart from defaults
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let (cli_config, sub_name) = match &cli.command {
        Commands::Evaluate(args) => (&args.config, "evaluate"),
        Commands::Optimal(args) => (&args.config, "optimal"),
    };

    let config = match &cli.config_file {
        Some(path) => {
            let mut file_config = Config::load_from_file(path).unwrap_or_else(|e| {
                eprintln!("❌ {}", e);
                process::exit(1);
            });
            if let Some(sub_matches) = matches.subcommand_matches(sub_name) {
                file_config.merge_from_cli(cli_config, sub_matches);
            }
            file_config
        }
        None => cli_config.clone(),
    };

    info!(
        "grid size {}, history source {}",
        config.engine.grid_size, config.history.history
    );

    let scorer = Scorer::from_config(config).unwrap_or_else(|e| {
        eprintln!("\n❌ FATAL ERROR INITIALIZING SCORER:");
        eprintln!("   {}", e);
        process::exit(1);
    });

    let outcome = match &cli.command {
        Commands::Evaluate(args) => cmd::evaluate::run(args, &scorer),
        Commands::Optimal(args) => cmd::optimal::run(args, &scorer),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}
