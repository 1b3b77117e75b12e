use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Env;
use indicatif::{ProgressBar, ProgressStyle};

use uctools_rs::genes::{GeneReport, GeneScope};
use uctools_rs::io::open_output;
use uctools_rs::{run_compsam, ReportOptions};

/// List, for every cluster of a .uc file, the genes its reads aligned to in a SAM file.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Clustering (.uc)
    #[arg(short, long)]
    uc: PathBuf,

    /// Alignments (.sam)
    #[arg(short, long)]
    sam: PathBuf,

    /// Output file [default: stdout]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List each gene once per cluster
    #[arg(long = "uniq-genes")]
    uniq_genes: bool,

    /// Only report the number of distinct genes per cluster
    #[arg(long = "num-uniq")]
    num_uniq: bool,

    /// Carry distinct genes over from earlier clusters instead of starting fresh per cluster
    #[arg(long = "cumulative-genes")]
    cumulative_genes: bool,

    /// Do not write the header row
    #[arg(long = "skip-header")]
    skip_header: bool,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let report = GeneReport::from_flags(args.uniq_genes, args.num_uniq);
    let scope = if args.cumulative_genes {
        GeneScope::Cumulative
    } else {
        GeneScope::PerCluster
    };
    let opts = ReportOptions {
        header: !args.skip_header,
        ..ReportOptions::default()
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Mapping cluster reads to genes...");

    let result = open_output(args.output.as_ref())
        .and_then(|out| run_compsam(&args.uc, &args.sam, report, scope, &opts, out));
    match result {
        Ok(()) => spinner.finish_with_message("Gene report written."),
        Err(e) => {
            spinner.abandon();
            log::error!("{e}");
            process::exit(1);
        }
    }
}
