//src/sam.rs

use std::collections::BTreeMap;
use std::io::BufRead;
use std::ops::Bound;
use std::path::Path;

use crate::error::Result;
use crate::io::open_input;

/// Column holding the reference (gene) name.
pub const SAM_REF_COL: usize = 2;

/// Alignment lines of a SAM file, header lines (`@`) excluded.
///
/// Records are numbered from 0 in file order, not counting headers. Alongside
/// the raw text we keep a sorted index from read name to the first record
/// carrying it, which turns "first record whose text starts with this read id"
/// into a range scan over names.
#[derive(Debug, Default, Clone)]
pub struct SamTable {
    records: Vec<String>,
    names: BTreeMap<String, usize>,
}

impl SamTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record(&self, idx: usize) -> Option<&str> {
        self.records.get(idx).map(String::as_str)
    }

    fn push(&mut self, line: String) {
        let idx = self.records.len();
        let name = line.split('\t').next().unwrap_or("").to_string();
        self.names.entry(name).or_insert(idx);
        self.records.push(line);
    }

    /// Index of the first record whose text begins with `read_id`.
    ///
    /// Read ids never contain a tab, so a record starts with `read_id` exactly
    /// when its name does; `read1` therefore also finds `read10`.
    pub fn find_prefix(&self, read_id: &str) -> Option<usize> {
        self.names
            .range::<str, _>((Bound::Included(read_id), Bound::Unbounded))
            .take_while(|(name, _)| name.starts_with(read_id))
            .map(|(_, &idx)| idx)
            .min()
    }

    /// Reference name of record `idx`, blank when the column is missing.
    pub fn gene(&self, idx: usize) -> &str {
        self.records[idx].split('\t').nth(SAM_REF_COL).unwrap_or("")
    }
}

pub fn read_sam<P: AsRef<Path>>(path: P) -> Result<SamTable> {
    let path = path.as_ref();
    let table = parse_sam(open_input(path)?)?;
    log::info!("Loaded {}: {} alignment records", path.display(), table.len());
    Ok(table)
}

pub fn parse_sam<R: BufRead>(reader: R) -> Result<SamTable> {
    let mut table = SamTable::default();
    for line in reader.lines() {
        let line = line?;
        if line.starts_with('@') {
            continue;
        }
        table.push(line);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAM: &str = "\
@HD\tVN:1.6
@SQ\tSN:geneA\tLN:900
read10\t0\tgeneB\t5\t60\t4M\t*\t0\t0\tACGT\tIIII
read1\t0\tgeneA\t1\t60\t4M\t*\t0\t0\tACGT\tIIII
read1\t256\tgeneC\t1\t60\t4M\t*\t0\t0\tACGT\tIIII
read2\t4\t*\t0\t0\t*\t*\t0\t0\tACGT\tIIII
";

    #[test]
    fn test_headers_excluded_from_numbering() {
        let sam = parse_sam(Cursor::new(SAM)).unwrap();
        assert_eq!(sam.len(), 4);
        assert!(sam.record(0).unwrap().starts_with("read10"));
    }

    #[test]
    fn test_prefix_takes_earliest_record() {
        let sam = parse_sam(Cursor::new(SAM)).unwrap();
        // "read10" precedes "read1" in the file and also starts with "read1"
        assert_eq!(sam.find_prefix("read1"), Some(0));
        assert_eq!(sam.gene(0), "geneB");
        assert_eq!(sam.find_prefix("read2"), Some(3));
        assert_eq!(sam.gene(3), "*");
        assert_eq!(sam.find_prefix("read3"), None);
    }

    #[test]
    fn test_exact_name_when_unambiguous() {
        let sam = parse_sam(Cursor::new("x\t0\tg1\ny\t0\tg2\nx\t0\tg3\n")).unwrap();
        assert_eq!(sam.find_prefix("x"), Some(0));
        assert_eq!(sam.find_prefix("y"), Some(1));
    }

    #[test]
    fn test_short_record_gene_is_blank() {
        let sam = parse_sam(Cursor::new("r1\t0\n")).unwrap();
        assert_eq!(sam.gene(0), "");
    }
}
