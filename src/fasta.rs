//src/fasta.rs

use std::io::{BufRead, Write};

use crate::error::{Result, UcError};

/// Prefix every FASTA header with `label`, right after the `>`.
///
/// Lines are copied as raw bytes, terminators included, so sequence lines and
/// the rest of each header (tabs and all) come out unchanged.
/// Returns the number of lines written.
pub fn label_fasta<R: BufRead, W: Write>(mut reader: R, mut writer: W, label: &str) -> Result<usize> {
    if label.is_empty() {
        return Err(UcError::config("a label is required to relabel FASTA headers"));
    }

    let mut line = Vec::new();
    let mut count = 0usize;
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if line.first() == Some(&b'>') {
            writer.write_all(b">")?;
            writer.write_all(label.as_bytes())?;
            writer.write_all(&line[1..])?;
        } else {
            writer.write_all(&line)?;
        }
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// The labeler takes exactly one label.
pub fn single_label(labels: &[String]) -> Result<&str> {
    match labels {
        [] => Err(UcError::config("--add-to-fasta needs a label (-l)")),
        [one] => Ok(one.as_str()),
        _ => Err(UcError::config(format!(
            "--add-to-fasta takes a single label, got {}",
            labels.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn relabel(input: &str, label: &str) -> String {
        let mut out = Vec::new();
        label_fasta(Cursor::new(input), &mut out, label).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_headers_get_label() {
        let input = ">read1 some description\nACGT\nACGT\n>read2\tx=1\tl=4\nTTTT\n";
        let out = relabel(input, "s1|");
        assert_eq!(
            out,
            ">s1|read1 some description\nACGT\nACGT\n>s1|read2\tx=1\tl=4\nTTTT\n"
        );
    }

    #[test]
    fn test_line_count_and_body_preserved() {
        let input = ">a\r\nAC>GT\r\n\n>b\nGG";
        let out = relabel(input, "L_");
        assert_eq!(out.lines().count(), input.lines().count());
        assert_eq!(out, ">L_a\r\nAC>GT\r\n\n>L_b\nGG");
    }

    #[test]
    fn test_returns_line_count() {
        let mut out = Vec::new();
        let n = label_fasta(Cursor::new(">a\nA\n>b\nC\n"), &mut out, "x").unwrap();
        assert_eq!(n, 4);
    }

    #[test]
    fn test_empty_label_rejected() {
        let err = label_fasta(Cursor::new(">a\n"), Vec::new(), "").unwrap_err();
        assert!(matches!(err, UcError::Configuration(_)));
    }

    #[test]
    fn test_single_label() {
        assert!(single_label(&[]).is_err());
        assert_eq!(single_label(&["s1".to_string()]).unwrap(), "s1");
        assert!(single_label(&["a".to_string(), "b".to_string()]).is_err());
    }
}
