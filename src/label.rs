//src/label.rs

use ahash::AHashSet;

use crate::error::{Result, UcError};
use crate::types::UcRecord;

fn is_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_separator(c: char) -> bool {
    !c.is_ascii_alphanumeric()
}

/// Status column of a labelled record: `0` on hits, `*` on seeds.
fn valid_status(status: &str) -> bool {
    status == "0" || status == "*"
}

/// Alignment column: `=`, a bare word (e.g. a CIGAR such as `5I240M`), `=word`, or `*`.
fn valid_alignment(alignment: &str) -> bool {
    match alignment {
        "=" | "*" => true,
        a => is_word(a.strip_prefix('=').unwrap_or(a)),
    }
}

/// `label` sits at the front of `id`, ending on a separator.
fn leads(id: &str, label: &str) -> bool {
    match id.strip_prefix(label) {
        Some(rest) => {
            label.ends_with(is_separator) || rest.is_empty() || rest.starts_with(is_separator)
        }
        None => false,
    }
}

/// `label` sits at the end of `id`, after a separator.
fn trails(id: &str, label: &str) -> bool {
    match id.strip_suffix(label) {
        Some(rest) => {
            label.starts_with(is_separator) || rest.is_empty() || rest.ends_with(is_separator)
        }
        None => false,
    }
}

/// Works out which sample label a `.uc` record carries.
///
/// Labels are compared as exact strings against the start of the identifier,
/// where the FASTA labeler puts them, and only when none fits there against
/// its end (`readA_labelX`). The label must meet a separator (any non
/// alphanumeric character) at its inner edge, so `s1` never fits `s10|r`.
/// When several labels fit at the same end the longest wins, so a record
/// resolves to at most one label. Records whose status or alignment column
/// does not have the shape above carry none.
#[derive(Debug, Clone)]
pub struct LabelMatcher {
    labels: Vec<String>,
}

impl LabelMatcher {
    pub fn new(labels: &[String]) -> Result<Self> {
        if labels.is_empty() {
            return Err(UcError::config("at least one label (-l) is required"));
        }
        let mut seen = AHashSet::new();
        for label in labels {
            if !label.chars().any(|c| c.is_ascii_alphanumeric()) {
                return Err(UcError::config(format!(
                    "label '{label}' has no alphanumeric characters"
                )));
            }
            if !seen.insert(label.as_str()) {
                return Err(UcError::config(format!("label '{label}' given twice")));
            }
        }
        Ok(LabelMatcher {
            labels: labels.to_vec(),
        })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    fn longest_where<F: Fn(&str) -> bool>(&self, fits: F) -> Option<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, l)| fits(l.as_str()))
            .max_by_key(|(_, l)| l.len())
            .map(|(i, _)| i)
    }

    /// Index of the label `record` carries, if any.
    pub fn label_of(&self, record: &UcRecord) -> Option<usize> {
        if !valid_status(&record.status) || !valid_alignment(&record.alignment) {
            return None;
        }
        let id = record.id.as_str();
        self.longest_where(|l| leads(id, l))
            .or_else(|| self.longest_where(|l| trails(id, l)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(status: &str, alignment: &str, id: &str) -> UcRecord {
        let line = format!("H\t0\t100\t99\t+\t0\t{status}\t{alignment}\t{id}\t*");
        UcRecord::parse(&line, 0).unwrap()
    }

    fn matcher(labels: &[&str]) -> LabelMatcher {
        let labels: Vec<String> = labels.iter().map(|s| s.to_string()).collect();
        LabelMatcher::new(&labels).unwrap()
    }

    #[test]
    fn test_label_prefix_does_not_match() {
        let m = matcher(&["s1", "s10"]);
        assert_eq!(m.label_of(&rec("0", "=", "s10|read4")), Some(1));
        assert_eq!(m.label_of(&rec("0", "=", "s1|read4")), Some(0));
    }

    #[test]
    fn test_leading_then_trailing_position() {
        let m = matcher(&["labelX", "labelY"]);
        assert_eq!(m.label_of(&rec("*", "*", "labelX_readA")), Some(0));
        assert_eq!(m.label_of(&rec("*", "*", "readA_labelY")), Some(1));
        assert_eq!(m.label_of(&rec("*", "*", "readA_labelXY")), None);
    }

    #[test]
    fn test_label_in_the_middle_is_ignored() {
        let m = matcher(&["B"]);
        assert_eq!(m.label_of(&rec("0", "=", "x|B|7")), None);
    }

    #[test]
    fn test_record_carries_at_most_one_label() {
        let m = matcher(&["A", "B"]);
        assert_eq!(m.label_of(&rec("0", "=", "A|B_7")), Some(0));
        // front wins over end
        assert_eq!(m.label_of(&rec("0", "=", "A|B")), Some(0));
    }

    #[test]
    fn test_labels_compared_as_exact_strings() {
        let m = matcher(&["lake-2", "lake_2"]);
        assert_eq!(m.label_of(&rec("0", "=", "lake_2|r1")), Some(1));
        assert_eq!(m.label_of(&rec("0", "=", "lake-2|r1")), Some(0));
        assert_eq!(m.label_of(&rec("0", "=", "lake_3|r2")), None);
    }

    #[test]
    fn test_label_with_own_separator() {
        let m = matcher(&["s1", "s1|"]);
        assert_eq!(m.label_of(&rec("0", "=", "s1|read")), Some(1));
        let m = matcher(&["L_"]);
        assert_eq!(m.label_of(&rec("0", "=", "L_read")), Some(0));
    }

    #[test]
    fn test_alignment_shapes() {
        let m = matcher(&["s1"]);
        for ok in ["=", "*", "240M", "5I235M", "=240M"] {
            assert_eq!(m.label_of(&rec("0", ok, "s1|r")), Some(0), "{ok}");
        }
        assert_eq!(m.label_of(&rec("0", "", "s1|r")), None);
        assert_eq!(m.label_of(&rec("0", "3D/4M", "s1|r")), None);
    }

    #[test]
    fn test_status_must_be_zero_or_star() {
        let m = matcher(&["s1"]);
        assert_eq!(m.label_of(&rec("12", "=", "s1|r")), None);
    }

    #[test]
    fn test_bad_labels_rejected() {
        assert!(LabelMatcher::new(&[]).is_err());
        assert!(LabelMatcher::new(&["||".to_string()]).is_err());
        assert!(LabelMatcher::new(&["a".to_string(), "a".to_string()]).is_err());
    }
}
