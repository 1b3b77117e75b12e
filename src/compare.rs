//src/compare.rs

use std::path::{Path, PathBuf};

use ahash::AHashMap;
use rayon::prelude::*;

use crate::error::Result;
use crate::types::{ClusterMatch, ClusterSummaryRow, ComparisonRow, RecordType, UcRecord};
use crate::uc::{read_uc, UcFile};

/// A secondary clustering, indexed once for centroid lookups.
///
/// Seeds and hits stay in scan order so that "last match wins" is a plain
/// reverse search; cluster sizes come from the `C` rows.
#[derive(Debug, Clone)]
pub struct ClusterIndex {
    seeds: Vec<(String, Option<u32>)>,
    hits: Vec<(String, Option<u32>)>,
    sizes: AHashMap<u32, String>,
}

impl ClusterIndex {
    pub fn from_uc(uc: &UcFile) -> Self {
        let entry = |r: &UcRecord| (r.id.clone(), r.cluster);
        let mut sizes = AHashMap::new();
        for rec in &uc.summaries {
            if let Some(c) = rec.cluster {
                sizes.insert(c, rec.size.clone());
            }
        }
        ClusterIndex {
            seeds: uc.seeds().map(entry).collect(),
            hits: uc.hits().map(entry).collect(),
            sizes,
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_uc(&read_uc(path)?))
    }

    /// Find where `centroid` ended up in this clustering.
    ///
    /// Seeds are searched first, then hits. An identifier matches when it
    /// contains `centroid` anywhere (so `read1` also matches `read10`); among
    /// several matches the one scanned last wins.
    pub fn locate(&self, centroid: &str) -> Option<ClusterMatch> {
        let found = last_containing(&self.seeds, centroid)
            .map(|e| (RecordType::Seed, e))
            .or_else(|| last_containing(&self.hits, centroid).map(|e| (RecordType::Hit, e)))?;

        let (kind, (id, cluster)) = found;
        let cluster = *cluster;
        let size = cluster
            .and_then(|c| self.sizes.get(&c))
            .cloned()
            .unwrap_or_default();
        Some(ClusterMatch {
            kind,
            id: id.clone(),
            cluster,
            size,
        })
    }
}

fn last_containing<'a>(
    entries: &'a [(String, Option<u32>)],
    needle: &str,
) -> Option<&'a (String, Option<u32>)> {
    entries.iter().rev().find(|(id, _)| id.contains(needle))
}

/// One row per `C` record of `primary`, in file order.
pub fn summarize(primary: &UcFile) -> Vec<ClusterSummaryRow> {
    primary
        .summaries
        .iter()
        .map(|rec| ClusterSummaryRow {
            centroid: rec.id.clone(),
            cluster: rec.cluster,
            size: rec.size.clone(),
        })
        .collect()
}

/// Place every primary centroid in each of the secondary clusterings.
pub fn compare(primary: &UcFile, secondaries: &[ClusterIndex]) -> Vec<ComparisonRow> {
    summarize(primary)
        .into_iter()
        .map(|row| {
            let matches = secondaries.iter().map(|idx| idx.locate(&row.centroid)).collect();
            ComparisonRow {
                primary: row,
                matches,
            }
        })
        .collect()
}

/// Load the secondary clusterings in parallel, keeping the given order.
pub fn load_indices(paths: &[PathBuf]) -> Result<Vec<ClusterIndex>> {
    paths.par_iter().map(ClusterIndex::from_path).collect()
}
