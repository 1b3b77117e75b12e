use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::{Result, UcError};

/// Open a text input for reading; `.gz` files are decompressed on the fly.
pub fn open_input<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let f = File::open(path).map_err(|e| UcError::file_access(path, e))?;

    let is_gz = path
        .extension()
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let reader: Box<dyn BufRead> = if is_gz {
        Box::new(BufReader::new(MultiGzDecoder::new(f)))
    } else {
        Box::new(BufReader::new(f))
    };
    Ok(reader)
}

/// Create an output writer: the named file, or stdout for `None` / `-`.
pub fn open_output<P: AsRef<Path>>(path: Option<P>) -> Result<Box<dyn Write>> {
    match path {
        Some(p) if p.as_ref() != Path::new("-") => {
            let p = p.as_ref();
            let file = File::create(p).map_err(|e| UcError::file_access(p, e))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        _ => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}
