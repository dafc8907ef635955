//! Loading key lists for building trees from files.

use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read keys: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse keys as a JSON array of strings: {0}")]
    Json(#[from] serde_json::Error),
}

/// How keys are laid out in an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFormat {
    /// One key per line. Trailing `\r` is dropped and blank lines are skipped.
    Lines,
    /// A single JSON array of strings.
    Json,
}

pub fn read_keys<R: BufRead>(reader: R, format: KeyFormat) -> Result<Vec<String>, LoadError> {
    match format {
        KeyFormat::Lines => {
            let mut keys = Vec::new();
            for line in reader.lines() {
                let line = line?;
                let key = line.trim_end_matches('\r');
                if !key.is_empty() {
                    keys.push(key.to_string());
                }
            }
            Ok(keys)
        }
        KeyFormat::Json => Ok(serde_json::from_reader(reader)?),
    }
}

pub fn read_keys_from_path<P: AsRef<Path>>(
    path: P,
    format: KeyFormat,
) -> Result<Vec<String>, LoadError> {
    let file = File::open(path)?;
    read_keys(BufReader::new(file), format)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn lines_skip_blanks() {
        let input = "book\r\nnook\n\nbooks\n";
        let keys = read_keys(input.as_bytes(), KeyFormat::Lines).unwrap();
        assert_eq!(vec!["book", "nook", "books"], keys);
    }

    #[test]
    fn lines_keep_inner_whitespace() {
        let keys = read_keys(" two words \n".as_bytes(), KeyFormat::Lines).unwrap();
        assert_eq!(vec![" two words "], keys);
    }

    #[test]
    fn json_array() {
        let keys = read_keys(r#"["b", "bo", "boo"]"#.as_bytes(), KeyFormat::Json).unwrap();
        assert_eq!(vec!["b", "bo", "boo"], keys);
    }

    #[test]
    fn json_rejects_non_strings() {
        match read_keys("[1, 2]".as_bytes(), KeyFormat::Json) {
            Err(LoadError::Json(_)) => {}
            other => panic!("expected a JSON error, got {:?}", other),
        }
    }

    #[test]
    fn reads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "book").unwrap();
        writeln!(file, "bookies").unwrap();
        file.flush().unwrap();
        let keys = read_keys_from_path(file.path(), KeyFormat::Lines).unwrap();
        assert_eq!(vec!["book", "bookies"], keys);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        match read_keys_from_path(dir.path().join("absent.txt"), KeyFormat::Lines) {
            Err(LoadError::Io(err)) => assert_eq!(io::ErrorKind::NotFound, err.kind()),
            other => panic!("expected an io error, got {:?}", other),
        }
    }
}
