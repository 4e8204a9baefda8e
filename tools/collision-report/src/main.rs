use argh::FromArgs;
use hash_collision_report::constants::REPORTS_ROOT_DIR;
use hash_collision_report::prelude::*;
use hash_collision_report::processing::{data_collisions, generated_blocks};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Renders hash collision test results into charts and a docx report
#[derive(FromArgs, Debug)]
struct Args {
    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Command {
    Histograms(HistogramsArgs),
    GeneratedBlocks(GeneratedBlocksArgs),
}

/// draw one bar chart per file of a fixed bucket test
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "histograms")]
struct HistogramsArgs {
    /// name of the report set under the reports directory
    #[argh(option, short = 's')]
    reports_set: String,

    /// name of the test directory under `cpp`
    #[argh(option, short = 't')]
    test: String,

    /// directory holding the report sets (default: reports)
    #[argh(option, short = 'r')]
    reports_root: Option<PathBuf>,
}

/// plot the generated blocks tests and write their collision tables to report.docx
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "generated-blocks")]
struct GeneratedBlocksArgs {
    /// name of the report set under the reports directory
    #[argh(option, short = 's')]
    reports_set: String,

    /// directory holding the report sets (default: reports)
    #[argh(option, short = 'r')]
    reports_root: Option<PathBuf>,

    /// also print every collision table to stdout
    #[argh(switch, short = 'p')]
    print_tables: bool,
}

fn report_paths(reports_root: Option<PathBuf>, reports_set: String) -> ReportPaths {
    let reports_root = reports_root.unwrap_or_else(|| PathBuf::from(REPORTS_ROOT_DIR));
    ReportPaths::with_root(reports_root, reports_set)
}

fn run(args: Args) -> Result<BatchSummary, ProcessingError> {
    let mut chart = PlottersChart::default();

    match args.command {
        Command::Histograms(args) => {
            let paths = report_paths(args.reports_root, args.reports_set);
            info!(input = %paths.cpp_report_path().join(&args.test).display(), "Rendering histograms");
            data_collisions::process_collision_statistics(&paths, &args.test, &mut chart)
        }
        Command::GeneratedBlocks(args) => {
            let paths = report_paths(args.reports_root, args.reports_set);
            info!(input = %paths.cpp_report_path().display(), "Rendering generated blocks tests");
            let result = generated_blocks::process_collision_statistics(&paths, &mut chart)?;

            if args.print_tables {
                for table in result.report.tables() {
                    println!("{}\n", format_collision_table(&table.heading, &table.rows));
                }
            }

            Ok(result.summary)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Args = argh::from_env();

    match run(args) {
        Ok(summary) if summary.is_success() => {
            info!(processed = summary.processed, "Done");
            ExitCode::SUCCESS
        }
        Ok(summary) => {
            for failure in &summary.failures {
                error!(path = %failure.path.display(), "{}", failure.error);
            }
            error!(
                processed = summary.processed,
                failed = summary.failures.len(),
                "Some entries could not be processed"
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
