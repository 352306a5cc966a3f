use std::path::PathBuf;
use std::process;

use clap::Parser;
use demographic_analyzer::{logging, AnalyzerConfig, Verifier};

#[derive(Parser, Debug)]
#[command(name = "verify")]
#[command(about = "Check the analysis against the reference census values", long_about = None)]
struct Cli {
    /// Path to the census CSV (defaults to $ADULT_DATA_PATH, then adult.data.csv)
    #[arg(short, long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Print the computed report before the verdict
    #[arg(short, long)]
    print: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let config = AnalyzerConfig::from_env(cli.print).with_data_path(cli.data);
    match Verifier::default().run(&config) {
        Ok(report) if report.is_success() => println!("{report}"),
        Ok(report) => {
            println!("{report}");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(2);
        }
    }
}
