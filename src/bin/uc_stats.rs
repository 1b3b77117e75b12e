use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Env;
use indicatif::{ProgressBar, ProgressStyle};

use uctools_rs::io::open_output;
use uctools_rs::{run_uc_stats, Mode, ReportOptions};

/// Reports over UCLUST .uc clusterings.
///
/// Pick exactly one mode: compare clusterings of the same reads, label FASTA
/// headers before clustering, or summarize how labelled samples mix within
/// clusters.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Compare centroids of --input with the clusterings given by --compare
    /// (without --compare, list the clusters of --input)
    #[arg(long = "comp-thresh", help_heading = "Modes")]
    comp_thresh: bool,

    /// Insert the label right after '>' in every FASTA header of --input
    #[arg(long = "add-to-fasta", help_heading = "Modes")]
    add_to_fasta: bool,

    /// Per-cluster percentage of reads carrying each label
    #[arg(long = "comp-perc", help_heading = "Modes")]
    comp_perc: bool,

    /// Number of clusters unique to each label, and the number shared
    #[arg(long = "comp-uniq", help_heading = "Modes")]
    comp_uniq: bool,

    /// Input .uc file (FASTA file for --add-to-fasta)
    #[arg(short, long)]
    input: PathBuf,

    /// Other .uc clusterings to compare against (repeatable)
    #[arg(short, long = "compare")]
    compare: Vec<PathBuf>,

    /// Sample labels (repeatable)
    #[arg(short, long = "label")]
    labels: Vec<String>,

    /// Output file [default: stdout]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output field delimiter
    #[arg(short, long, default_value = "\t")]
    delimiter: String,

    /// Report whether each centroid was found as a seed (S) or hit (H)
    #[arg(long = "show-type")]
    show_type: bool,

    /// Do not write the header row
    #[arg(long = "skip-header")]
    skip_header: bool,

    /// Fail on a cluster without any labelled read instead of skipping it
    #[arg(long)]
    strict: bool,
}

fn spinner(msg: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(msg.to_string());
    spinner
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mode = match Mode::select(
        args.comp_thresh,
        args.add_to_fasta,
        args.comp_perc,
        args.comp_uniq,
        args.compare,
        args.labels,
        args.show_type,
        args.strict,
    ) {
        Ok(mode) => mode,
        Err(e) => {
            log::error!("{e}");
            process::exit(1);
        }
    };

    let opts = ReportOptions {
        delimiter: args.delimiter,
        header: !args.skip_header,
    };

    let progress = spinner("Building report...");
    let result = open_output(args.output.as_ref())
        .and_then(|out| run_uc_stats(&mode, &args.input, &opts, out));
    match result {
        Ok(()) => progress.finish_with_message("Report written."),
        Err(e) => {
            progress.abandon();
            log::error!("{e}");
            process::exit(1);
        }
    }
}
