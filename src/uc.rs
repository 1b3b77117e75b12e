//src/uc.rs

use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;

use crate::error::Result;
use crate::io::open_input;
use crate::types::{RecordType, UcRecord};

/// All records of a `.uc` file, split by role and kept in discovery order.
#[derive(Debug, Default, Clone)]
pub struct UcFile {
    /// `C` rows
    pub summaries: Vec<UcRecord>,
    /// `S` and `H` rows
    pub members: Vec<UcRecord>,
}

impl UcFile {
    pub fn seeds(&self) -> impl Iterator<Item = &UcRecord> {
        self.members.iter().filter(|r| r.kind == RecordType::Seed)
    }

    pub fn hits(&self) -> impl Iterator<Item = &UcRecord> {
        self.members.iter().filter(|r| r.kind == RecordType::Hit)
    }
}

/// Read every record of a `.uc` file in a single forward pass.
pub fn read_uc<P: AsRef<Path>>(path: P) -> Result<UcFile> {
    let path = path.as_ref();
    let uc = parse_uc(open_input(path)?)?;
    log::info!(
        "Loaded {}: {} cluster records, {} seed/hit records",
        path.display(),
        uc.summaries.len(),
        uc.members.len()
    );
    Ok(uc)
}

pub fn parse_uc<R: BufRead>(reader: R) -> Result<UcFile> {
    let mut uc = UcFile::default();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(rec) = UcRecord::parse(&line, line_no) else {
            continue;
        };
        match rec.kind {
            RecordType::Cluster => uc.summaries.push(rec),
            RecordType::Seed | RecordType::Hit => uc.members.push(rec),
            RecordType::Other(_) => {}
        }
    }
    Ok(uc)
}

/// `S`/`H` records grouped by cluster number, ascending.
///
/// Built by [`read_members`], which expects every seed/hit row to precede the
/// first `C` row (the layout UCLUST writes). Reading stops at that first `C`
/// row; anything after it is not looked at.
#[derive(Debug, Default, Clone)]
pub struct MemberTable {
    pub clusters: BTreeMap<u32, Vec<UcRecord>>,
}

impl MemberTable {
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &[UcRecord])> {
        self.clusters.iter().map(|(&c, recs)| (c, recs.as_slice()))
    }
}

pub fn read_members<P: AsRef<Path>>(path: P) -> Result<MemberTable> {
    let path = path.as_ref();
    let table = parse_members(open_input(path)?)?;
    log::info!(
        "Loaded {}: {} clusters, {} seed/hit records",
        path.display(),
        table.len(),
        table.clusters.values().map(Vec::len).sum::<usize>()
    );
    Ok(table)
}

pub fn parse_members<R: BufRead>(reader: R) -> Result<MemberTable> {
    let mut table = MemberTable::default();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(rec) = UcRecord::parse(&line, line_no) else {
            continue;
        };
        match rec.kind {
            RecordType::Cluster => {
                log::debug!("first cluster record at line {}, stopping scan", line_no + 1);
                break;
            }
            RecordType::Seed | RecordType::Hit => match rec.cluster {
                Some(c) => table.clusters.entry(c).or_default().push(rec),
                None => log::warn!("line {}: record without cluster number skipped", line_no + 1),
            },
            RecordType::Other(_) => {}
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const UC: &str = "\
S\t0\t250\t*\t*\t*\t*\t*\tcentroidA\t*
H\t0\t250\t99.0\t+\t0\t0\t=\treadB\tcentroidA
S\t1\t240\t*\t*\t*\t*\t*\tcentroidC\t*
N\t*\t240\t*\t*\t*\t*\t*\tlonely\t*
C\t0\t2\t*\t*\t*\t*\t*\tcentroidA\t*
C\t1\t1\t*\t*\t*\t*\t*\tcentroidC\t*
H\t1\t240\t99.0\t+\t0\t0\t=\tlate\tcentroidC
";

    #[test]
    fn test_parse_uc_splits_roles() {
        let uc = parse_uc(Cursor::new(UC)).unwrap();
        assert_eq!(uc.summaries.len(), 2);
        assert_eq!(uc.members.len(), 4);
        assert_eq!(uc.seeds().count(), 2);
        assert_eq!(uc.hits().count(), 2);
        assert_eq!(uc.summaries[1].id, "centroidC");
        assert_eq!(uc.summaries[1].line, 5);
    }

    #[test]
    fn test_members_stop_at_first_cluster_row() {
        let table = parse_members(Cursor::new(UC)).unwrap();
        assert_eq!(table.len(), 2);
        let ids: Vec<&str> = table.clusters[&1].iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["centroidC"]);
        assert_eq!(table.clusters[&0].len(), 2);
    }

    #[test]
    fn test_members_skip_records_without_cluster() {
        let table = parse_members(Cursor::new("S\t\t1\nS\t2\t1\n")).unwrap();
        assert_eq!(table.clusters.keys().copied().collect::<Vec<_>>(), vec![2]);
    }
}
