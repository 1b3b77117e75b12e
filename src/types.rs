//src/types.rs

/// Row type of a `.uc` line, taken from its first column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    /// `C`: cluster summary
    Cluster,
    /// `S`: seed / centroid
    Seed,
    /// `H`: hit / cluster member
    Hit,
    /// Anything else (e.g. `N` no-hit rows); ignored by every report
    Other(char),
}

impl RecordType {
    pub fn from_tag(tag: char) -> Self {
        match tag {
            'C' => RecordType::Cluster,
            'S' => RecordType::Seed,
            'H' => RecordType::Hit,
            other => RecordType::Other(other),
        }
    }

    pub fn tag(&self) -> char {
        match self {
            RecordType::Cluster => 'C',
            RecordType::Seed => 'S',
            RecordType::Hit => 'H',
            RecordType::Other(c) => *c,
        }
    }

    /// `S` and `H` rows carry a read; `C` rows only summarize.
    pub fn is_member(&self) -> bool {
        matches!(self, RecordType::Seed | RecordType::Hit)
    }
}

/// One tab-separated `.uc` line. Missing columns are kept as empty strings.
///
/// Layout used here:
/// ```text
/// 0 type  1 cluster  2 size  3 %id  4 strand  5 qlo  6 status  7 alignment  8 id  9 target
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UcRecord {
    pub kind: RecordType,
    /// `None` when the column is missing or not a number
    pub cluster: Option<u32>,
    /// Raw size column, only meaningful on `C` rows
    pub size: String,
    pub status: String,
    pub alignment: String,
    pub id: String,
    /// 0-based line number in the source file
    pub line: usize,
}

pub const UC_CLUSTER_COL: usize = 1;
pub const UC_SIZE_COL: usize = 2;
pub const UC_STATUS_COL: usize = 6;
pub const UC_ALIGNMENT_COL: usize = 7;
pub const UC_ID_COL: usize = 8;

impl UcRecord {
    /// Split a line on tabs and pick the columns we use.
    /// Returns `None` for an empty line.
    pub fn parse(line: &str, line_no: usize) -> Option<Self> {
        let tag = line.chars().next()?;
        let fields: Vec<&str> = line.split('\t').collect();
        let field = |i: usize| fields.get(i).copied().unwrap_or("").to_string();

        let cluster_str = fields.get(UC_CLUSTER_COL).copied().unwrap_or("");
        let cluster = cluster_str.trim().parse::<u32>().ok();
        if cluster.is_none() && !cluster_str.is_empty() {
            log::warn!(
                "line {}: cluster number '{}' is not a number",
                line_no + 1,
                cluster_str
            );
        }

        Some(UcRecord {
            kind: RecordType::from_tag(tag),
            cluster,
            size: field(UC_SIZE_COL),
            status: field(UC_STATUS_COL),
            alignment: field(UC_ALIGNMENT_COL),
            id: field(UC_ID_COL),
            line: line_no,
        })
    }
}

/// Cluster number as printed in reports (blank when unknown).
pub fn cluster_field(cluster: Option<u32>) -> String {
    cluster.map(|c| c.to_string()).unwrap_or_default()
}

/// One row of the single-file summary: a `C` record as reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterSummaryRow {
    pub centroid: String,
    pub cluster: Option<u32>,
    pub size: String,
}

/// Where a primary centroid landed in one secondary clustering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterMatch {
    /// `Seed` or `Hit`
    pub kind: RecordType,
    pub id: String,
    pub cluster: Option<u32>,
    /// Size from the secondary's `C` row for that cluster, blank if absent
    pub size: String,
}

/// A primary centroid followed by one block per secondary file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub primary: ClusterSummaryRow,
    /// `None` is the "not available" sentinel
    pub matches: Vec<Option<ClusterMatch>>,
}

/// Share of one label within one cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct PercentageRow {
    pub cluster: u32,
    pub label: String,
    pub percent: f64,
}

/// Genes reported for one cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneRow {
    pub cluster: u32,
    pub genes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hit_line() {
        let line = "H\t3\t250\t98.4\t+\t0\t0\t=\treadB_s2\tcentroidA";
        let rec = UcRecord::parse(line, 4).unwrap();
        assert_eq!(rec.kind, RecordType::Hit);
        assert_eq!(rec.cluster, Some(3));
        assert_eq!(rec.status, "0");
        assert_eq!(rec.alignment, "=");
        assert_eq!(rec.id, "readB_s2");
        assert_eq!(rec.line, 4);
    }

    #[test]
    fn test_parse_short_line_leaves_blanks() {
        let rec = UcRecord::parse("C\t0\t2", 0).unwrap();
        assert_eq!(rec.kind, RecordType::Cluster);
        assert_eq!(rec.size, "2");
        assert_eq!(rec.id, "");
        assert_eq!(rec.alignment, "");
    }

    #[test]
    fn test_parse_non_numeric_cluster() {
        let rec = UcRecord::parse("S\tx\t*", 0).unwrap();
        assert_eq!(rec.cluster, None);
        assert_eq!(cluster_field(rec.cluster), "");
        assert_eq!(cluster_field(Some(12)), "12");
    }

    #[test]
    fn test_empty_line_is_skipped() {
        assert!(UcRecord::parse("", 0).is_none());
    }

    #[test]
    fn test_record_type_tags() {
        assert_eq!(RecordType::from_tag('N'), RecordType::Other('N'));
        assert_eq!(RecordType::Seed.tag(), 'S');
        assert!(RecordType::Hit.is_member());
        assert!(!RecordType::Cluster.is_member());
    }
}
