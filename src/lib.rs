// src/lib.rs
pub mod error;
pub mod types;
pub mod io;
pub mod uc;
pub mod compare;
pub mod fasta;
pub mod label;
pub mod composition;
pub mod sam;
pub mod genes;
pub mod report;

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::compare::{compare, load_indices, summarize};
use crate::composition::{percentage_rows, uniqueness};
use crate::error::{Result, UcError};
use crate::fasta::label_fasta;
use crate::genes::{gene_rows, map_genes, GeneReport, GeneScope};
use crate::io::open_input;
use crate::label::LabelMatcher;
use crate::report::ReportWriter;
use crate::sam::read_sam;
use crate::uc::{read_members, read_uc};

/// Delimiter and header settings shared by every report.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub delimiter: String,
    pub header: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            delimiter: "\t".to_string(),
            header: true,
        }
    }
}

/// The four `uc-stats` reports. Exactly one runs per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Place each primary centroid in the other clusterings
    /// (or summarize the primary alone when there are none)
    Compare { others: Vec<PathBuf>, show_type: bool },
    /// Prefix FASTA headers with a label
    LabelFasta { label: String },
    /// Per-cluster label percentages
    Percentages { labels: Vec<String>, strict: bool },
    /// Clusters unique to each label, plus shared ones
    Uniqueness { labels: Vec<String> },
}

impl Mode {
    /// Turn the four mode switches into a single mode, checking what each one needs.
    pub fn select(
        comp_thresh: bool,
        add_to_fasta: bool,
        comp_perc: bool,
        comp_uniq: bool,
        others: Vec<PathBuf>,
        labels: Vec<String>,
        show_type: bool,
        strict: bool,
    ) -> Result<Self> {
        let chosen = [comp_thresh, add_to_fasta, comp_perc, comp_uniq]
            .iter()
            .filter(|&&on| on)
            .count();
        match chosen {
            0 => return Err(UcError::config(
                "no mode selected; use one of --comp-thresh, --add-to-fasta, --comp-perc, --comp-uniq",
            )),
            1 => {}
            _ => return Err(UcError::config("only one mode may be selected at a time")),
        }

        if comp_thresh {
            Ok(Mode::Compare { others, show_type })
        } else if add_to_fasta {
            let label = fasta::single_label(&labels)?.to_string();
            Ok(Mode::LabelFasta { label })
        } else {
            // validates the labels up front
            LabelMatcher::new(&labels)?;
            if comp_perc {
                Ok(Mode::Percentages { labels, strict })
            } else {
                Ok(Mode::Uniqueness { labels })
            }
        }
    }
}

/// Run one `uc-stats` report over `input`, writing to `out`.
pub fn run_uc_stats<W: Write>(mode: &Mode, input: &Path, opts: &ReportOptions, out: W) -> Result<()> {
    match mode {
        Mode::Compare { others, show_type } => {
            // 1. Primary clustering
            let primary = read_uc(input)?;
            let mut writer = ReportWriter::new(out, &opts.delimiter, opts.header);
            if others.is_empty() {
                return writer.write_summary(&summarize(&primary));
            }
            // 2. Secondary clusterings, indexed once each
            let indices = load_indices(others)?;
            // 3. One block per secondary
            let rows = compare(&primary, &indices);
            writer.write_comparison(&rows, indices.len(), *show_type)
        }
        Mode::LabelFasta { label } => {
            let lines = label_fasta(open_input(input)?, out, label)?;
            log::info!("Relabelled {} lines of {}", lines, input.display());
            Ok(())
        }
        Mode::Percentages { labels, strict } => {
            let matcher = LabelMatcher::new(labels)?;
            let members = read_members(input)?;
            let rows = percentage_rows(&members, &matcher, *strict)?;
            ReportWriter::new(out, &opts.delimiter, opts.header).write_percentages(&rows)
        }
        Mode::Uniqueness { labels } => {
            let matcher = LabelMatcher::new(labels)?;
            let members = read_members(input)?;
            let counts = uniqueness(&members, &matcher);
            log::info!(
                "{} clusters: {} shared, {} without a label",
                counts.clusters(),
                counts.shared,
                counts.unassigned
            );
            ReportWriter::new(out, &opts.delimiter, opts.header).write_uniqueness(&counts)
        }
    }
}

/// Report, per cluster of `uc_path`, the genes its reads aligned to in `sam_path`.
pub fn run_compsam<W: Write>(
    uc_path: &Path,
    sam_path: &Path,
    report: GeneReport,
    scope: GeneScope,
    opts: &ReportOptions,
    out: W,
) -> Result<()> {
    let members = read_members(uc_path)?;
    let sam = read_sam(sam_path)?;

    let mapped = map_genes(&members, &sam, scope);
    let rows = gene_rows(&mapped, report);

    let column = match report {
        GeneReport::All => "genes",
        GeneReport::Unique => "unique_genes",
        GeneReport::Count => "num_unique_genes",
    };
    ReportWriter::new(out, &opts.delimiter, opts.header).write_genes(&rows, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(flags: [bool; 4], labels: &[&str]) -> Result<Mode> {
        Mode::select(
            flags[0],
            flags[1],
            flags[2],
            flags[3],
            Vec::new(),
            labels.iter().map(|s| s.to_string()).collect(),
            false,
            false,
        )
    }

    #[test]
    fn test_mode_requires_exactly_one() {
        assert!(matches!(select([false; 4], &[]), Err(UcError::Configuration(_))));
        assert!(matches!(
            select([true, false, true, false], &["a"]),
            Err(UcError::Configuration(_))
        ));
    }

    #[test]
    fn test_mode_label_checks() {
        assert!(select([false, true, false, false], &[]).is_err());
        assert_eq!(
            select([false, true, false, false], &["s1|"]).unwrap(),
            Mode::LabelFasta { label: "s1|".to_string() }
        );
        assert!(select([false, false, true, false], &[]).is_err());
        assert!(select([false, false, false, true], &["--"]).is_err());
        assert!(matches!(
            select([false, false, false, true], &["a", "b"]).unwrap(),
            Mode::Uniqueness { .. }
        ));
    }

    #[test]
    fn test_compare_mode_needs_no_labels() {
        assert_eq!(
            select([true, false, false, false], &[]).unwrap(),
            Mode::Compare { others: Vec::new(), show_type: false }
        );
    }
}
