//! File-to-file conversion.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::{Document, write_html};

/// Failure of a file-to-file conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input path does not exist.
    #[error("Missing {}", .0.display())]
    MissingInput(PathBuf),

    /// The input exists but could not be read as UTF-8 text.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// Input path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The output could not be created, written or flushed.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Counts reported after a successful conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertStats {
    /// Lines read from the input.
    pub lines: usize,
    /// Fragments written to the output.
    pub blocks: usize,
}

/// Convert the Markdown file at `input` into HTML at `output`.
///
/// The input must exist; it is read in full before the output file is
/// created. Fragments are streamed to `output` as blocks are recognized.
pub fn convert_file(input: &Path, output: &Path) -> Result<ConvertStats, ConvertError> {
    if !input.exists() {
        return Err(ConvertError::MissingInput(input.to_path_buf()));
    }

    let source = fs::read_to_string(input).map_err(|source| ConvertError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let document = Document::new(&source);
    log::debug!("Read {} lines from {}", document.len(), input.display());

    let write_err = |source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    };
    let file = File::create(output).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    let blocks = write_html(document.lines(), &mut writer).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    log::debug!("Wrote {} blocks to {}", blocks, output.display());

    Ok(ConvertStats {
        lines: document.len(),
        blocks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_convert_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("README.md");
        let output = dir.path().join("README.html");
        fs::write(&input, "# Title\n\n- a\n- b\n\ntext\n").unwrap();

        let stats = convert_file(&input, &output).unwrap();
        assert_eq!(stats, ConvertStats { lines: 6, blocks: 3 });
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "<h1>Title</h1>\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n<p>\ntext\n</p>\n"
        );
    }

    #[test]
    fn test_missing_input() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("absent.md");
        let output = dir.path().join("out.html");

        let err = convert_file(&input, &output).unwrap_err();
        assert!(matches!(err, ConvertError::MissingInput(ref p) if *p == input));
        assert_eq!(err.to_string(), format!("Missing {}", input.display()));
        assert!(!output.exists());
    }

    #[test]
    fn test_blank_input_writes_empty_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("blank.md");
        let output = dir.path().join("blank.html");
        fs::write(&input, "\n\n\n").unwrap();

        let stats = convert_file(&input, &output).unwrap();
        assert_eq!(stats.blocks, 0);
        assert_eq!(fs::read_to_string(&output).unwrap(), "");
    }

    #[test]
    fn test_error_messages() {
        let missing = ConvertError::MissingInput(PathBuf::from("in.md"));
        assert_eq!(missing.to_string(), "Missing in.md");

        let write = ConvertError::Write {
            path: PathBuf::from("out.html"),
            source: io::Error::other("disk full"),
        };
        assert_eq!(write.to_string(), "Failed to write out.html: disk full");
    }

    #[test]
    fn test_unwritable_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.md");
        fs::write(&input, "text\n").unwrap();
        let output = dir.path().join("no-such-dir").join("out.html");

        let err = convert_file(&input, &output).unwrap_err();
        assert!(matches!(err, ConvertError::Write { .. }));
    }

    #[test]
    fn test_overwrites_existing_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.md");
        let output = dir.path().join("out.html");
        fs::write(&input, "new\n").unwrap();
        fs::write(&output, "old content that is longer\n").unwrap();

        convert_file(&input, &output).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "<p>\nnew\n</p>\n");
    }
}
