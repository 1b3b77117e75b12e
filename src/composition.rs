//src/composition.rs

use crate::error::{Result, UcError};
use crate::label::LabelMatcher;
use crate::types::{PercentageRow, UcRecord};
use crate::uc::MemberTable;

/// Records per label within one cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterComposition {
    pub cluster: u32,
    /// Indexed like `LabelMatcher::labels()`
    pub counts: Vec<u64>,
}

impl ClusterComposition {
    pub fn count(cluster: u32, records: &[UcRecord], matcher: &LabelMatcher) -> Self {
        let mut counts = vec![0u64; matcher.len()];
        for idx in records.iter().filter_map(|r| matcher.label_of(r)) {
            counts[idx] += 1;
        }
        ClusterComposition { cluster, counts }
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Percentage of each label among the label-matching records.
    pub fn percentages(&self, labels: &[String]) -> Result<Vec<PercentageRow>> {
        let total = self.total();
        if total == 0 {
            return Err(UcError::EmptyCluster {
                cluster: self.cluster,
            });
        }
        Ok(labels
            .iter()
            .zip(&self.counts)
            .map(|(label, &n)| PercentageRow {
                cluster: self.cluster,
                label: label.clone(),
                percent: 100.0 * n as f64 / total as f64,
            })
            .collect())
    }
}

/// Per-label composition of every cluster in the table, ascending by cluster.
pub fn compositions(table: &MemberTable, matcher: &LabelMatcher) -> Vec<ClusterComposition> {
    table
        .iter()
        .map(|(cluster, records)| ClusterComposition::count(cluster, records, matcher))
        .collect()
}

/// Percentage rows for every cluster.
///
/// A cluster without any label match is an error when `strict` is set;
/// otherwise it is logged and left out of the report.
pub fn percentage_rows(
    table: &MemberTable,
    matcher: &LabelMatcher,
    strict: bool,
) -> Result<Vec<PercentageRow>> {
    let mut rows = Vec::new();
    for comp in compositions(table, matcher) {
        match comp.percentages(matcher.labels()) {
            Ok(r) => rows.extend(r),
            Err(e @ UcError::EmptyCluster { .. }) if !strict => {
                log::warn!("{e}; skipping");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(rows)
}

/// How many clusters each label has to itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniquenessCounts {
    pub labels: Vec<String>,
    /// Clusters whose reads carry only this label
    pub unique: Vec<u64>,
    /// Clusters with reads from more than one label
    pub shared: u64,
    /// Clusters with no label match at all
    pub unassigned: u64,
}

impl UniquenessCounts {
    pub fn clusters(&self) -> u64 {
        self.unique.iter().sum::<u64>() + self.shared + self.unassigned
    }
}

pub fn uniqueness(table: &MemberTable, matcher: &LabelMatcher) -> UniquenessCounts {
    let mut counts = UniquenessCounts {
        labels: matcher.labels().to_vec(),
        unique: vec![0; matcher.len()],
        shared: 0,
        unassigned: 0,
    };

    for (_, records) in table.iter() {
        let mut present = vec![false; matcher.len()];
        for idx in records.iter().filter_map(|r| matcher.label_of(r)) {
            present[idx] = true;
        }
        let mut hits = present.iter().enumerate().filter(|(_, p)| **p).map(|(i, _)| i);
        match (hits.next(), hits.next()) {
            (None, _) => counts.unassigned += 1,
            (Some(only), None) => counts.unique[only] += 1,
            _ => counts.shared += 1,
        }
    }
    counts
}
