//src/report.rs

use std::io::Write;

use crate::composition::UniquenessCounts;
use crate::error::Result;
use crate::types::{cluster_field, ClusterSummaryRow, ComparisonRow, GeneRow, PercentageRow};

/// Placeholder written for every column of a missing comparison block.
pub const NOT_AVAILABLE: &str = "NA";

/// Writes report rows as delimited text, optionally preceded by a header row.
pub struct ReportWriter<W: Write> {
    out: W,
    delimiter: String,
    header: bool,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W, delimiter: &str, header: bool) -> Self {
        ReportWriter {
            out,
            delimiter: delimiter.to_string(),
            header,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn row<S: AsRef<str>>(&mut self, fields: &[S]) -> Result<()> {
        let line = fields
            .iter()
            .map(|f| f.as_ref())
            .collect::<Vec<_>>()
            .join(self.delimiter.as_str());
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    fn header_row(&mut self, fields: &[String]) -> Result<()> {
        if self.header {
            self.row(fields)?;
        }
        Ok(())
    }

    /// `centroid cluster size`, one row per cluster record.
    pub fn write_summary(&mut self, rows: &[ClusterSummaryRow]) -> Result<()> {
        self.header_row(&summary_header())?;
        for r in rows {
            self.row(&summary_fields(r))?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Summary columns followed by one block per secondary clustering.
    pub fn write_comparison(&mut self, rows: &[ComparisonRow], n_secondary: usize, show_type: bool) -> Result<()> {
        let mut header = summary_header();
        for i in 1..=n_secondary {
            if show_type {
                header.push(format!("type_{i}"));
            }
            header.push(format!("id_{i}"));
            header.push(format!("cluster_{i}"));
            header.push(format!("size_{i}"));
        }
        self.header_row(&header)?;

        for r in rows {
            let mut fields = summary_fields(&r.primary);
            for m in &r.matches {
                match m {
                    Some(m) => {
                        if show_type {
                            fields.push(m.kind.tag().to_string());
                        }
                        fields.push(m.id.clone());
                        fields.push(cluster_field(m.cluster));
                        fields.push(m.size.clone());
                    }
                    None => {
                        let width = if show_type { 4 } else { 3 };
                        fields.extend(std::iter::repeat(NOT_AVAILABLE.to_string()).take(width));
                    }
                }
            }
            self.row(&fields)?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn write_percentages(&mut self, rows: &[PercentageRow]) -> Result<()> {
        self.header_row(&["cluster".to_string(), "label".to_string(), "percent".to_string()])?;
        for r in rows {
            self.row(&[r.cluster.to_string(), r.label.clone(), format!("{:.4}", r.percent)])?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn write_uniqueness(&mut self, counts: &UniquenessCounts) -> Result<()> {
        self.header_row(&["label".to_string(), "clusters".to_string()])?;
        for (label, n) in counts.labels.iter().zip(&counts.unique) {
            self.row(&[label.clone(), n.to_string()])?;
        }
        self.row(&["shared".to_string(), counts.shared.to_string()])?;
        self.out.flush()?;
        Ok(())
    }

    /// Cluster number followed by its genes (or the distinct-gene count).
    pub fn write_genes(&mut self, rows: &[GeneRow], column: &str) -> Result<()> {
        self.header_row(&["cluster".to_string(), column.to_string()])?;
        for r in rows {
            let mut fields = Vec::with_capacity(r.genes.len() + 1);
            fields.push(r.cluster.to_string());
            fields.extend(r.genes.iter().cloned());
            self.row(&fields)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

fn summary_header() -> Vec<String> {
    vec!["centroid".into(), "cluster".into(), "size".into()]
}

fn summary_fields(r: &ClusterSummaryRow) -> Vec<String> {
    vec![
        r.centroid.clone(),
        cluster_field(r.cluster),
        r.size.clone(),
    ]
}
