//! Writing generated assets to local files.

use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Build an output filename from an asset identifier, an optional
/// disambiguating suffix (e.g. the seed returned by the API) and a format
/// extension. An empty suffix behaves as if absent.
pub fn artifact_filename(name: &str, suffix: Option<&str>, format: &str) -> String {
    match suffix {
        Some(suffix) if !suffix.is_empty() => format!("{}_{}.{}", name, suffix, format),
        _ => format!("{}.{}", name, format),
    }
}

/// Writes artifacts into a fixed directory, overwriting files of the same
/// name from earlier runs.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `bytes` to `{name}[_{suffix}].{format}` under the output
    /// directory, returning the full path of the written file.
    pub fn write(
        &self,
        name: &str,
        suffix: Option<&str>,
        format: &str,
        bytes: &[u8],
    ) -> Result<PathBuf> {
        let path = self.dir.join(artifact_filename(name, suffix, format));
        fs::write(&path, bytes)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_filename_without_suffix() {
        assert_eq!(artifact_filename("pixel_coin", None, "png"), "pixel_coin.png");
    }

    #[test]
    fn test_filename_with_suffix() {
        assert_eq!(
            artifact_filename("pixel_coin", Some("42"), "png"),
            "pixel_coin_42.png"
        );
    }

    #[test]
    fn test_empty_suffix_is_treated_as_absent() {
        assert_eq!(artifact_filename("pixel_coin", Some(""), "png"), "pixel_coin.png");
    }

    #[test]
    fn test_write_creates_file_with_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ArtifactWriter::new(dir.path());

        let path = writer.write("pixel_knight", None, "png", &[1, 2, 3]).unwrap();

        assert_eq!(path, dir.path().join("pixel_knight.png"));
        assert_eq!(fs::read(&path).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ArtifactWriter::new(dir.path());

        writer.write("sprite", None, "png", b"old contents").unwrap();
        let path = writer.write("sprite", None, "png", b"new").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ArtifactWriter::new(dir.path().join("does_not_exist"));

        let err = writer.write("sprite", None, "png", &[0]).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
