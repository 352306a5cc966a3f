use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use demographic_analyzer::{logging, AnalyzerConfig, Dataset, DemographicAnalyzer, Report};

#[derive(Parser, Debug)]
#[command(name = "analyze")]
#[command(about = "Summary statistics for the adult census income dataset", long_about = None)]
struct Cli {
    /// Path to the census CSV (defaults to $ADULT_DATA_PATH, then adult.data.csv)
    #[arg(short, long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Do not print the human-readable report
    #[arg(short, long)]
    quiet: bool,

    /// Print the results as JSON instead of the report
    #[arg(long)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = AnalyzerConfig::from_env(!cli.quiet && !cli.json).with_data_path(cli.data.clone());
    let dataset = Dataset::load(&config.data_path)?;
    let results = DemographicAnalyzer::new(&dataset).analyze()?;

    if cli.json {
        let report = Report::new(config.data_path.display().to_string(), dataset.len(), &results);
        println!("{}", report.to_json()?);
    } else if config.print_data {
        println!("{results}");
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
