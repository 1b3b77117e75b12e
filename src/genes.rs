//src/genes.rs

use ahash::AHashSet;

use crate::sam::SamTable;
use crate::types::GeneRow;
use crate::uc::MemberTable;

/// Which genes a cluster's "distinct genes" list covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeneScope {
    /// Distinct genes of this cluster only
    #[default]
    PerCluster,
    /// Distinct genes of this cluster and every cluster reported before it
    Cumulative,
}

/// What each report row lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeneReport {
    /// Every gene hit by every read, duplicates included
    #[default]
    All,
    /// Each distinct gene once
    Unique,
    /// Number of distinct genes
    Count,
}

impl GeneReport {
    /// `num_uniq` refines `uniq_genes`, so it wins when both are set.
    pub fn from_flags(uniq_genes: bool, num_uniq: bool) -> Self {
        match (uniq_genes, num_uniq) {
            (_, true) => GeneReport::Count,
            (true, false) => GeneReport::Unique,
            (false, false) => GeneReport::All,
        }
    }
}

/// Genes found for one cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterGenes {
    pub cluster: u32,
    /// One entry per distinct SAM record matched, in read order
    pub genes: Vec<String>,
    /// Distinct genes in first-seen order, per the chosen [`GeneScope`]
    pub distinct: Vec<String>,
}

/// Map every read of every cluster to the gene of its first SAM record.
///
/// Clusters come out in ascending order, reads in file order. A SAM record hit
/// by two reads of the same cluster is stored once.
pub fn map_genes(members: &MemberTable, sam: &SamTable, scope: GeneScope) -> Vec<ClusterGenes> {
    let mut out = Vec::with_capacity(members.len());
    let mut seen_genes: AHashSet<String> = AHashSet::new();
    let mut distinct: Vec<String> = Vec::new();

    for (cluster, reads) in members.iter() {
        if scope == GeneScope::PerCluster {
            seen_genes.clear();
            distinct.clear();
        }

        let mut seen_records: AHashSet<usize> = AHashSet::new();
        let mut genes = Vec::new();
        for read in reads {
            let Some(idx) = sam.find_prefix(&read.id) else {
                continue;
            };
            if !seen_records.insert(idx) {
                continue;
            }
            let gene = sam.gene(idx);
            genes.push(gene.to_string());
            if seen_genes.insert(gene.to_string()) {
                distinct.push(gene.to_string());
            }
        }

        out.push(ClusterGenes {
            cluster,
            genes,
            distinct: distinct.clone(),
        });
    }
    out
}

/// Shape the mapped genes into report rows.
pub fn gene_rows(mapped: &[ClusterGenes], report: GeneReport) -> Vec<GeneRow> {
    mapped
        .iter()
        .map(|cg| GeneRow {
            cluster: cg.cluster,
            genes: match report {
                GeneReport::All => cg.genes.clone(),
                GeneReport::Unique => cg.distinct.clone(),
                GeneReport::Count => vec![cg.distinct.len().to_string()],
            },
        })
        .collect()
}
